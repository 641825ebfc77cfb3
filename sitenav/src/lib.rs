//! Sidebar navigation state for the sitenav construction CRM frontend.
//!
//! [`Sidebar`] owns the navigation catalog, the layout flags and the
//! collapsed-rail flyouts. The render layer reads through its accessors and
//! mutates it only by sending [`Event`]s to [`Sidebar::update`]; follow-up
//! work such as flyout timers comes back as [`iced::Task`]s.
//!
//! ```
//! use sitenav::{Event, LayoutEvent, Sidebar};
//!
//! let mut sidebar = Sidebar::default();
//! let _task = sidebar.update(Event::Layout(LayoutEvent::TogglePin {
//!     item_id: String::from("reports"),
//! }));
//!
//! assert!(sidebar.visible_items().iter().any(|item| item.id() == "reports"));
//! ```

mod app;
pub(crate) mod features;
pub(crate) mod navigation;

pub use app::{Event, Sidebar};
pub use features::flyout::FlyoutEvent;
pub use features::layout::{LayoutError, LayoutEvent, LayoutState, PinChange};
pub use features::settings::{
    NavChildSettings, NavItemSettings, SETTINGS_PATH_ENV, SettingsData,
    SettingsError, SettingsEvent, SettingsLoad, SettingsLoadStatus,
};
pub use navigation::{default_registry, sidebar_nav_items};
pub use sitenav_ui_nav as nav;
