//! Sidebar navigation model and visibility helpers.
//!
//! This crate is UI-agnostic apart from borrowing [`iced::Rectangle`] for
//! anchor bounds. It is split into three layers:
//! - model ([`NavItem`], [`NavItemKind`], [`NavChild`]) and the validated
//!   [`NavRegistry`] catalog;
//! - pure projections ([`visible_items`], [`hidden_items`]) that decide which
//!   entries render in the sidebar body and which go into the "more"
//!   dropdown;
//! - [`HoverPopup`], the debounced show/hide machine for flyouts shown while
//!   the sidebar is collapsed.
//!
//! # Quick Example
//!
//! ```
//! use std::collections::HashSet;
//!
//! use sitenav_ui_nav::{NavItem, NavRegistry, hidden_items, visible_items};
//!
//! let registry = NavRegistry::new(vec![
//!     NavItem::leaf("leads", "Leads", "/leads").pinned(true),
//!     NavItem::leaf("reports", "Reports", "/reports"),
//!     NavItem::dropdown("more", "More"),
//! ])
//! .expect("catalog is valid");
//!
//! let mut pinned = HashSet::new();
//! let hidden = hidden_items(registry.items(), &pinned);
//! assert_eq!(hidden[0].id(), "reports");
//!
//! pinned.insert(String::from("reports"));
//! let visible = visible_items(registry.items(), &pinned);
//! assert_eq!(visible.len(), 3);
//! ```

mod model;
mod popup;
mod projection;
mod registry;

pub use model::{NavChild, NavItem, NavItemKind};
pub use popup::{
    HoverPopup, POPUP_ANCHOR_GAP, PopupPhase, PopupPosition, PopupTimings,
    TimerKind, TimerRequest, TimerToken,
};
pub use projection::{hidden_items, visible_items};
pub use registry::{NavRegistry, RegistryError};
