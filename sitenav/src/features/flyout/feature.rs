use iced::Task;
use sitenav_ui_nav::{HoverPopup, NavRegistry, PopupTimings, TimerRequest};

use super::event::FlyoutEvent;
use super::state::FlyoutState;
use crate::app::Event as AppEvent;
use crate::features::Feature;

/// Read-only inputs the flyout reducer consults.
pub(crate) struct FlyoutCtx<'a> {
    pub(crate) sidebar_collapsed: bool,
    pub(crate) registry: &'a NavRegistry,
}

/// Flyout feature root that owns per-item hover popups.
#[derive(Debug, Default)]
pub(crate) struct FlyoutFeature {
    state: FlyoutState,
}

impl FlyoutFeature {
    pub(crate) fn new(timings: PopupTimings) -> Self {
        Self {
            state: FlyoutState::new(timings),
        }
    }

    /// Return the popup anchored to `item_id`, if it was ever hovered.
    pub(crate) fn popup(&self, item_id: &str) -> Option<&HoverPopup> {
        self.state.popup(item_id)
    }

    /// Return mounted popups for the view layer.
    pub(crate) fn rendered(
        &self,
    ) -> impl Iterator<Item = (&str, &HoverPopup)> + '_ {
        self.state.rendered()
    }

    pub(crate) fn timings(&self) -> PopupTimings {
        self.state.timings()
    }

    pub(crate) fn set_timings(&mut self, timings: PopupTimings) {
        self.state.set_timings(timings);
    }

    /// Dismiss popups anchored to items `registry` no longer contains.
    pub(crate) fn prune(&mut self, registry: &NavRegistry) {
        let dismissed =
            self.state.dismiss_unless(|id| registry.get(id).is_some());
        if dismissed > 0 {
            log::debug!("dismissed {dismissed} flyouts for removed items");
        }
    }
}

impl Feature for FlyoutFeature {
    type Event = FlyoutEvent;
    type Ctx<'a>
        = FlyoutCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: FlyoutEvent,
        ctx: &FlyoutCtx<'a>,
    ) -> Task<AppEvent> {
        match event {
            FlyoutEvent::AnchorEntered { item_id, bounds } => {
                if !ctx.sidebar_collapsed {
                    return Task::none();
                }
                if ctx.registry.get(&item_id).is_none() {
                    log::warn!("flyout requested for unknown item {item_id}");
                    return Task::none();
                }
                let request = self.state.anchor_entered(&item_id, bounds);
                schedule(item_id, request)
            },
            FlyoutEvent::AnchorExited { item_id } => {
                let request = self.state.anchor_exited(&item_id);
                schedule(item_id, request)
            },
            FlyoutEvent::PopupEntered { item_id } => {
                let request = self.state.popup_entered(&item_id);
                schedule(item_id, request)
            },
            FlyoutEvent::PopupExited { item_id } => {
                let request = self.state.popup_exited(&item_id);
                schedule(item_id, request)
            },
            FlyoutEvent::TimerElapsed { item_id, token } => {
                let request = self.state.timer_elapsed(&item_id, token);
                schedule(item_id, request)
            },
            FlyoutEvent::DismissAll => {
                self.state.dismiss_all();
                Task::none()
            },
        }
    }
}

fn schedule(item_id: String, request: Option<TimerRequest>) -> Task<AppEvent> {
    let Some(TimerRequest { token, delay }) = request else {
        return Task::none();
    };

    log::trace!("flyout {item_id}: {:?} in {delay:?}", token.kind());
    // The sleep is created on first poll, inside the executor's runtime.
    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
        AppEvent::Flyout(FlyoutEvent::TimerElapsed { item_id, token })
    })
}
