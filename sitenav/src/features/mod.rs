use iced::Task;
use sitenav_ui_nav::NavRegistry;

use crate::app::Event as AppEvent;

pub(crate) mod flyout;
pub(crate) mod layout;
pub(crate) mod settings;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>
    where
        Self: 'a;

    /// Reduce a typed feature event into state mutations and routed app tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for the sidebar features and the catalog they share.
#[derive(Debug)]
pub(crate) struct Features {
    registry: NavRegistry,
    layout: layout::LayoutFeature,
    flyout: flyout::FlyoutFeature,
    settings: settings::SettingsFeature,
}

impl Features {
    /// Create features from loaded settings and the registry they describe.
    pub(crate) fn new(
        settings: settings::SettingsData,
        registry: NavRegistry,
    ) -> Self {
        Self {
            registry,
            layout: layout::LayoutFeature::new(settings.sidebar_collapsed()),
            flyout: flyout::FlyoutFeature::new(settings.popup_timings()),
            settings: settings::SettingsFeature::new(settings),
        }
    }

    /// Return the navigation catalog.
    pub(crate) fn registry(&self) -> &NavRegistry {
        &self.registry
    }

    /// Replace the catalog and drop layout and flyout state it no longer
    /// backs.
    pub(crate) fn replace_registry(&mut self, registry: NavRegistry) {
        self.layout.prune(&registry);
        self.flyout.prune(&registry);
        self.registry = registry;
    }

    /// Return read-only access to layout feature state and queries.
    pub(crate) fn layout(&self) -> &layout::LayoutFeature {
        &self.layout
    }

    /// Return read-only access to flyout feature state and queries.
    pub(crate) fn flyout(&self) -> &flyout::FlyoutFeature {
        &self.flyout
    }

    /// Return mutable access for routing flyout events.
    pub(crate) fn flyout_mut(&mut self) -> &mut flyout::FlyoutFeature {
        &mut self.flyout
    }

    /// Return read-only access to settings feature state and queries.
    pub(crate) fn settings(&self) -> &settings::SettingsFeature {
        &self.settings
    }

    /// Return mutable access for routing settings events.
    pub(crate) fn settings_mut(&mut self) -> &mut settings::SettingsFeature {
        &mut self.settings
    }

    /// Reduce a layout event against the current catalog.
    pub(crate) fn reduce_layout(
        &mut self,
        event: layout::LayoutEvent,
    ) -> Task<AppEvent> {
        let ctx = layout::LayoutCtx {
            registry: &self.registry,
        };
        self.layout.reduce(event, &ctx)
    }

    /// Reduce a flyout event against the current catalog and collapse flag.
    pub(crate) fn reduce_flyout(
        &mut self,
        event: flyout::FlyoutEvent,
    ) -> Task<AppEvent> {
        let ctx = flyout::FlyoutCtx {
            sidebar_collapsed: self.layout.state().is_sidebar_collapsed(),
            registry: &self.registry,
        };
        self.flyout.reduce(event, &ctx)
    }
}
