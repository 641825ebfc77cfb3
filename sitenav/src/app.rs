#[path = "update.rs"]
mod update;

use iced::Task;
use sitenav_ui_nav::{HoverPopup, NavItem, NavRegistry, PopupTimings};

use crate::features::Features;
use crate::features::flyout::FlyoutEvent;
use crate::features::layout::{LayoutEvent, LayoutState};
use crate::features::settings::{self, SettingsData, SettingsEvent};

/// Sidebar-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub enum Event {
    Layout(LayoutEvent),
    Flyout(FlyoutEvent),
    Settings(SettingsEvent),
    SettingsApplied(SettingsData),
}

/// Root of the sidebar navigation state.
///
/// Owns the catalog and every feature; the render layer reads through the
/// accessors and writes only by sending [`Event`]s to [`Sidebar::update`].
#[derive(Debug)]
pub struct Sidebar {
    features: Features,
}

impl Sidebar {
    /// Build the sidebar from the settings file, falling back to defaults.
    pub fn new() -> Self {
        Self::with_settings(settings::load_initial_settings())
    }

    /// Build the sidebar from an explicit settings payload.
    pub fn with_settings(settings: SettingsData) -> Self {
        let registry = registry_or_default(&settings);
        Self {
            features: Features::new(settings, registry),
        }
    }

    /// Build the sidebar over an explicit catalog with default settings.
    pub fn with_registry(registry: NavRegistry) -> Self {
        Self {
            features: Features::new(SettingsData::default(), registry),
        }
    }

    pub fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub fn registry(&self) -> &NavRegistry {
        self.features.registry()
    }

    pub fn layout(&self) -> &LayoutState {
        self.features.layout().state()
    }

    pub fn settings(&self) -> &SettingsData {
        self.features.settings().settings()
    }

    pub fn popup_timings(&self) -> PopupTimings {
        self.features.flyout().timings()
    }

    /// Entries to render in the sidebar body.
    pub fn visible_items(&self) -> Vec<&NavItem> {
        sitenav_ui_nav::visible_items(
            self.registry().items(),
            self.layout().pinned_item_ids(),
        )
    }

    /// Entries listed in the "more" dropdown.
    pub fn hidden_items(&self) -> Vec<&NavItem> {
        sitenav_ui_nav::hidden_items(
            self.registry().items(),
            self.layout().pinned_item_ids(),
        )
    }

    /// Flyout anchored to `item_id`, if it was ever hovered.
    pub fn popup(&self, item_id: &str) -> Option<&HoverPopup> {
        self.features.flyout().popup(item_id)
    }

    /// Flyouts currently mounted.
    pub fn rendered_popups(&self) -> impl Iterator<Item = (&str, &HoverPopup)> {
        self.features.flyout().rendered()
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::with_settings(SettingsData::default())
    }
}

fn registry_or_default(settings: &SettingsData) -> NavRegistry {
    match settings.registry() {
        Ok(registry) => registry,
        Err(err) => {
            log::warn!("navigation settings rejected, using built-in: {err}");
            crate::navigation::default_registry()
        },
    }
}
