use std::time::Duration;

use serde::{Deserialize, Serialize};
use sitenav_ui_nav::{NavChild, NavItem, NavRegistry, PopupTimings};

use super::errors::SettingsError;
use crate::navigation::default_registry;

/// Typed settings payload read from the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SettingsData {
    sidebar: SidebarSettingsData,
    flyout: FlyoutSettingsData,
    navigation: NavigationSettingsData,
}

/// Sidebar start-up settings.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SidebarSettingsData {
    collapsed: bool,
}

/// Flyout delays in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlyoutSettingsData {
    reveal_delay_ms: u64,
    hide_delay_ms: u64,
    unmount_delay_ms: u64,
}

impl Default for FlyoutSettingsData {
    fn default() -> Self {
        Self::from_timings(PopupTimings::default())
    }
}

impl FlyoutSettingsData {
    fn from_timings(timings: PopupTimings) -> Self {
        Self {
            reveal_delay_ms: duration_ms(timings.reveal),
            hide_delay_ms: duration_ms(timings.hide),
            unmount_delay_ms: duration_ms(timings.unmount),
        }
    }

    fn to_timings(&self) -> PopupTimings {
        PopupTimings {
            reveal: Duration::from_millis(self.reveal_delay_ms),
            hide: Duration::from_millis(self.hide_delay_ms),
            unmount: Duration::from_millis(self.unmount_delay_ms),
        }
    }
}

/// Optional replacement for the built-in navigation catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct NavigationSettingsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Vec<NavItemSettings>>,
}

/// One catalog entry as written in the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItemSettings {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default = "default_pinnable")]
    pub pinnable: bool,
    #[serde(default)]
    pub dropdown: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavChildSettings>,
}

/// Child entry as written in the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavChildSettings {
    pub id: String,
    pub title: String,
    pub path: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

fn default_pinnable() -> bool {
    true
}

impl NavItemSettings {
    /// Convert to a registry item.
    ///
    /// The kind comes from exactly one of `dropdown`, non-empty `children`
    /// or `path`; an entry setting more than one is rejected. An empty
    /// `children` list reads the same as an absent one, so a childless
    /// entry needs a `path`.
    fn to_nav_item(&self) -> Result<NavItem, SettingsError> {
        let kinds = usize::from(self.dropdown)
            + usize::from(!self.children.is_empty())
            + usize::from(self.path.is_some());
        if kinds > 1 {
            return Err(SettingsError::AmbiguousKind(self.id.clone()));
        }

        let item = if self.dropdown {
            NavItem::dropdown(&self.id, &self.title)
        } else if !self.children.is_empty() {
            let children =
                self.children.iter().map(NavChildSettings::to_nav_child);
            NavItem::group(&self.id, &self.title, children.collect())
        } else {
            let path = self
                .path
                .as_deref()
                .ok_or_else(|| SettingsError::MissingPath(self.id.clone()))?;
            NavItem::leaf(&self.id, &self.title, path)
        };

        let item = item
            .with_icon(&self.icon)
            .pinned(self.pinned)
            .pinnable(self.pinnable);
        Ok(match &self.badge {
            Some(badge) => item.with_badge(badge),
            None => item,
        })
    }
}

impl NavChildSettings {
    fn to_nav_child(&self) -> NavChild {
        let child =
            NavChild::new(&self.id, &self.title, &self.path).with_icon(&self.icon);
        match &self.badge {
            Some(badge) => child.with_badge(badge),
            None => child,
        }
    }
}

impl SettingsData {
    /// Return whether the sidebar starts collapsed.
    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar.collapsed
    }

    pub fn set_sidebar_collapsed(&mut self, value: bool) {
        self.sidebar.collapsed = value;
    }

    /// Return flyout delays.
    pub fn popup_timings(&self) -> PopupTimings {
        self.flyout.to_timings()
    }

    pub fn set_popup_timings(&mut self, timings: PopupTimings) {
        self.flyout = FlyoutSettingsData::from_timings(timings);
    }

    /// Return the configured catalog entries, if the file overrides them.
    pub fn navigation_items(&self) -> Option<&[NavItemSettings]> {
        self.navigation.items.as_deref()
    }

    pub fn set_navigation_items(&mut self, items: Option<Vec<NavItemSettings>>) {
        self.navigation.items = items;
    }

    /// Build the registry these settings describe.
    ///
    /// Without an override this is the built-in catalog.
    pub fn registry(&self) -> Result<NavRegistry, SettingsError> {
        let Some(items) = &self.navigation.items else {
            return Ok(default_registry());
        };

        let items = items
            .iter()
            .map(NavItemSettings::to_nav_item)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NavRegistry::new(items)?)
    }

    /// Read settings leniently: unknown, missing or mistyped fields keep
    /// their defaults.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(sidebar) = value.get("sidebar") {
            if let Some(collapsed) =
                sidebar.get("collapsed").and_then(serde_json::Value::as_bool)
            {
                settings.sidebar.collapsed = collapsed;
            }
        }

        if let Some(flyout) = value.get("flyout") {
            let fields = [
                ("reveal_delay_ms", &mut settings.flyout.reveal_delay_ms),
                ("hide_delay_ms", &mut settings.flyout.hide_delay_ms),
                ("unmount_delay_ms", &mut settings.flyout.unmount_delay_ms),
            ];
            for (key, slot) in fields {
                if let Some(ms) = read_delay_field(flyout, key) {
                    *slot = ms;
                }
            }
        }

        if let Some(items) =
            value.get("navigation").and_then(|nav| nav.get("items"))
        {
            match read_navigation_items(items) {
                Ok(items) => settings.navigation.items = Some(items),
                Err(err) => {
                    log::warn!("ignoring navigation items in settings: {err}");
                },
            }
        }

        settings
    }
}

fn read_delay_field(value: &serde_json::Value, key: &str) -> Option<u64> {
    value.get(key).and_then(serde_json::Value::as_u64)
}

fn read_navigation_items(
    value: &serde_json::Value,
) -> Result<Vec<NavItemSettings>, SettingsError> {
    Ok(Vec::<NavItemSettings>::deserialize(value)?)
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
