use std::collections::HashMap;

use iced::Rectangle;
use sitenav_ui_nav::{HoverPopup, PopupTimings, TimerRequest, TimerToken};

/// Hover popups keyed by the nav item they are anchored to.
///
/// Entries are created on first hover and kept afterwards, so a popup's
/// timer generation keeps counting up across show/hide cycles and a timer
/// from an earlier cycle can never match a later one.
#[derive(Debug, Default)]
pub(crate) struct FlyoutState {
    popups: HashMap<String, HoverPopup>,
    timings: PopupTimings,
}

impl FlyoutState {
    pub(crate) fn new(timings: PopupTimings) -> Self {
        Self {
            popups: HashMap::new(),
            timings,
        }
    }

    pub(crate) fn popup(&self, item_id: &str) -> Option<&HoverPopup> {
        self.popups.get(item_id)
    }

    /// Popups currently mounted, in no particular order.
    pub(crate) fn rendered(
        &self,
    ) -> impl Iterator<Item = (&str, &HoverPopup)> + '_ {
        self.popups
            .iter()
            .filter(|(_, popup)| popup.is_rendered())
            .map(|(id, popup)| (id.as_str(), popup))
    }

    pub(crate) fn timings(&self) -> PopupTimings {
        self.timings
    }

    pub(crate) fn set_timings(&mut self, timings: PopupTimings) {
        self.timings = timings;
        for popup in self.popups.values_mut() {
            popup.set_timings(timings);
        }
    }

    pub(crate) fn anchor_entered(
        &mut self,
        item_id: &str,
        anchor: Rectangle,
    ) -> Option<TimerRequest> {
        let timings = self.timings;
        self.popups
            .entry(item_id.to_string())
            .or_insert_with(|| HoverPopup::new(timings))
            .anchor_entered(anchor)
    }

    pub(crate) fn anchor_exited(
        &mut self,
        item_id: &str,
    ) -> Option<TimerRequest> {
        self.popups.get_mut(item_id)?.anchor_exited()
    }

    pub(crate) fn popup_entered(
        &mut self,
        item_id: &str,
    ) -> Option<TimerRequest> {
        self.popups.get_mut(item_id)?.popup_entered()
    }

    pub(crate) fn popup_exited(
        &mut self,
        item_id: &str,
    ) -> Option<TimerRequest> {
        self.popups.get_mut(item_id)?.popup_exited()
    }

    pub(crate) fn timer_elapsed(
        &mut self,
        item_id: &str,
        token: TimerToken,
    ) -> Option<TimerRequest> {
        self.popups.get_mut(item_id)?.timer_elapsed(token)
    }

    pub(crate) fn dismiss_all(&mut self) {
        for popup in self.popups.values_mut() {
            popup.dismiss();
        }
    }

    /// Dismiss rendered popups whose id fails `keep`; returns how many.
    ///
    /// Entries stay in the map so their generations keep counting.
    pub(crate) fn dismiss_unless<F>(&mut self, keep: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let mut dismissed = 0;
        for (id, popup) in &mut self.popups {
            if !keep(id) && popup.is_rendered() {
                popup.dismiss();
                dismissed += 1;
            }
        }
        dismissed
    }
}

#[cfg(test)]
mod tests {
    use iced::Rectangle;
    use sitenav_ui_nav::{PopupPhase, PopupTimings};

    use super::FlyoutState;

    fn anchor() -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 48.0,
            width: 56.0,
            height: 40.0,
        }
    }

    #[test]
    fn given_no_popup_when_exit_events_arrive_then_nothing_is_created() {
        let mut state = FlyoutState::default();

        assert!(state.anchor_exited("leads").is_none());
        assert!(state.popup_exited("leads").is_none());
        assert!(state.popup("leads").is_none());
    }

    #[test]
    fn given_two_anchors_when_hovered_then_popups_are_independent() {
        let mut state = FlyoutState::default();

        let _ = state.anchor_entered("leads", anchor());
        let _ = state.anchor_entered("customers", anchor());
        let _ = state.anchor_exited("leads");

        assert_eq!(
            state.popup("leads").map(|popup| popup.phase()),
            Some(PopupPhase::HidingScheduled)
        );
        assert_eq!(
            state.popup("customers").map(|popup| popup.phase()),
            Some(PopupPhase::Showing)
        );
        assert_eq!(state.rendered().count(), 2);
    }

    #[test]
    fn given_dismissed_popup_when_old_timer_fires_after_rehover_then_it_is_ignored()
     {
        let mut state = FlyoutState::default();
        let stale = state
            .anchor_entered("leads", anchor())
            .expect("reveal requested");

        state.dismiss_all();
        let fresh = state
            .anchor_entered("leads", anchor())
            .expect("reveal requested");

        assert_ne!(stale.token, fresh.token);
        assert!(state.timer_elapsed("leads", stale.token).is_none());
        assert_eq!(
            state.popup("leads").map(|popup| popup.phase()),
            Some(PopupPhase::Showing)
        );
    }

    #[test]
    fn given_rendered_popups_when_dismissing_unknown_ids_then_known_stay() {
        let mut state = FlyoutState::default();
        let _ = state.anchor_entered("leads", anchor());
        let _ = state.anchor_entered("removed", anchor());

        let dismissed = state.dismiss_unless(|id| id == "leads");

        assert_eq!(dismissed, 1);
        assert_eq!(
            state.popup("removed").map(|popup| popup.phase()),
            Some(PopupPhase::Hidden)
        );
        assert_eq!(state.rendered().count(), 1);
    }

    #[test]
    fn given_new_timings_when_applied_then_existing_popups_use_them() {
        let mut state = FlyoutState::default();
        let _ = state.anchor_entered("leads", anchor());
        let timings = PopupTimings {
            hide: std::time::Duration::from_millis(400),
            ..PopupTimings::default()
        };

        state.set_timings(timings);
        let hide = state.anchor_exited("leads").expect("hide requested");

        assert_eq!(hide.delay, timings.hide);
        assert_eq!(state.timings(), timings);
    }
}
