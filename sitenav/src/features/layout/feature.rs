use iced::Task;
use sitenav_ui_nav::NavRegistry;

use super::errors::LayoutError;
use super::event::LayoutEvent;
use super::state::{LayoutState, PinChange};
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::flyout::FlyoutEvent;

/// Read-only inputs the layout reducer consults.
pub(crate) struct LayoutCtx<'a> {
    pub(crate) registry: &'a NavRegistry,
}

/// Layout feature root; the only writer of [`LayoutState`].
#[derive(Debug, Default)]
pub(crate) struct LayoutFeature {
    state: LayoutState,
}

impl LayoutFeature {
    pub(crate) fn new(sidebar_collapsed: bool) -> Self {
        Self {
            state: LayoutState::new(sidebar_collapsed),
        }
    }

    /// Return read-only access to layout state.
    pub(crate) fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Forget pins and expansions that `registry` no longer allows.
    pub(crate) fn prune(&mut self, registry: &NavRegistry) {
        let dropped = self.state.retain_items(
            |id| registry.is_user_pinnable(id),
            |id| registry.get(id).is_some_and(|item| item.is_group()),
        );
        if dropped > 0 {
            log::debug!("dropped {dropped} stale sidebar pins or expansions");
        }
    }
}

impl Feature for LayoutFeature {
    type Event = LayoutEvent;
    type Ctx<'a>
        = LayoutCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: LayoutEvent,
        ctx: &LayoutCtx<'a>,
    ) -> Task<AppEvent> {
        match event {
            LayoutEvent::SetSidebarCollapsed(value) => {
                follow_up(self.set_collapsed(value))
            },
            LayoutEvent::ToggleSidebarCollapsed => {
                let value = !self.state.is_sidebar_collapsed();
                follow_up(self.set_collapsed(value))
            },
            LayoutEvent::TogglePin { item_id } => {
                match toggle_pin(&mut self.state, ctx.registry, &item_id) {
                    Ok(change) => {
                        log::debug!("sidebar item {item_id}: {change:?}");
                    },
                    Err(err) => log::warn!("pin toggle rejected: {err}"),
                }
                Task::none()
            },
            LayoutEvent::ToggleGroup { item_id } => {
                if let Err(err) =
                    toggle_group(&mut self.state, ctx.registry, &item_id)
                {
                    log::warn!("group toggle rejected: {err}");
                }
                Task::none()
            },
            LayoutEvent::SetWorkspaceMode(value) => {
                self.state.set_workspace_mode(value);
                Task::none()
            },
        }
    }
}

impl LayoutFeature {
    /// Apply the collapse flag and return the event the change implies.
    fn set_collapsed(&mut self, value: bool) -> Option<AppEvent> {
        let was_collapsed = self.state.is_sidebar_collapsed();
        self.state.set_sidebar_collapsed(value);

        // Flyouts only exist for the collapsed rail.
        (was_collapsed && !value)
            .then_some(AppEvent::Flyout(FlyoutEvent::DismissAll))
    }
}

fn follow_up(event: Option<AppEvent>) -> Task<AppEvent> {
    event.map_or_else(Task::none, Task::done)
}

fn toggle_pin(
    state: &mut LayoutState,
    registry: &NavRegistry,
    item_id: &str,
) -> Result<PinChange, LayoutError> {
    let item = registry
        .get(item_id)
        .ok_or_else(|| LayoutError::UnknownItem(item_id.to_string()))?;
    if !item.is_user_pinnable() {
        return Err(LayoutError::NotPinnable(item_id.to_string()));
    }

    Ok(state.toggle_pin(item_id))
}

fn toggle_group(
    state: &mut LayoutState,
    registry: &NavRegistry,
    item_id: &str,
) -> Result<bool, LayoutError> {
    let item = registry
        .get(item_id)
        .ok_or_else(|| LayoutError::UnknownItem(item_id.to_string()))?;
    if !item.is_group() {
        return Err(LayoutError::NotAGroup(item_id.to_string()));
    }

    Ok(state.toggle_group(item_id))
}
