use std::time::Duration;

use iced::Rectangle;

/// Horizontal gap between the anchor's right edge and the popup.
pub const POPUP_ANCHOR_GAP: f32 = 8.0;

const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(10);
const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(150);
const DEFAULT_UNMOUNT_DELAY: Duration = Duration::from_millis(200);

/// Delays driving the popup lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupTimings {
    /// Pause between mounting and starting the enter transition.
    pub reveal: Duration,
    /// Grace period after the pointer leaves the anchor.
    pub hide: Duration,
    /// Time the exit transition needs before unmounting.
    pub unmount: Duration,
}

impl Default for PopupTimings {
    fn default() -> Self {
        Self {
            reveal: DEFAULT_REVEAL_DELAY,
            hide: DEFAULT_HIDE_DELAY,
            unmount: DEFAULT_UNMOUNT_DELAY,
        }
    }
}

/// Lifecycle phase of a hover popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPhase {
    Hidden,
    /// Mounted with the pre-transition style.
    Showing,
    /// Mounted with the post-transition style.
    Shown,
    /// Pointer left the anchor; waiting out the hide grace period.
    HidingScheduled,
    /// Exit transition running; unmounts when it ends.
    Unmounting,
}

impl PopupPhase {
    /// Logical "should be shown" flag.
    pub fn is_visible(self) -> bool {
        matches!(self, PopupPhase::Showing | PopupPhase::Shown)
    }

    /// Whether the popup is mounted at all.
    pub fn is_rendered(self) -> bool {
        !matches!(self, PopupPhase::Hidden)
    }
}

/// Screen coordinates of the popup's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPosition {
    pub top: f32,
    pub left: f32,
}

impl PopupPosition {
    /// Place the popup beside the anchor, aligned with its top edge.
    pub fn beside(anchor: Rectangle) -> Self {
        Self {
            top: anchor.y,
            left: anchor.x + anchor.width + POPUP_ANCHOR_GAP,
        }
    }
}

/// Which delay a timer stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Reveal,
    Hide,
    Unmount,
}

/// Identity of one scheduled timer.
///
/// Only the most recently issued token of a popup is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    generation: u64,
    kind: TimerKind,
}

impl TimerToken {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Request for the host to fire `token` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay: Duration,
}

/// Show/hide state machine for a flyout anchored to a sidebar entry.
///
/// The machine never measures time itself. Transitions that need a delay
/// return a [`TimerRequest`]; the host reports back through
/// [`HoverPopup::timer_elapsed`]. Issuing a request or cancelling replaces
/// the pending token, so at most one timer is live and superseded callbacks
/// are dropped even if the phase happens to match again.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPopup {
    phase: PopupPhase,
    position: Option<PopupPosition>,
    timings: PopupTimings,
    generation: u64,
    pending: Option<TimerToken>,
}

impl Default for HoverPopup {
    fn default() -> Self {
        Self::new(PopupTimings::default())
    }
}

impl HoverPopup {
    pub fn new(timings: PopupTimings) -> Self {
        Self {
            phase: PopupPhase::Hidden,
            position: None,
            timings,
            generation: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    pub fn is_rendered(&self) -> bool {
        self.phase.is_rendered()
    }

    /// Position captured at the last anchor enter, while mounted.
    pub fn position(&self) -> Option<PopupPosition> {
        self.position
    }

    pub fn timings(&self) -> PopupTimings {
        self.timings
    }

    pub fn set_timings(&mut self, timings: PopupTimings) {
        self.timings = timings;
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Pointer entered the anchor entry.
    pub fn anchor_entered(&mut self, anchor: Rectangle) -> Option<TimerRequest> {
        match self.phase {
            PopupPhase::Hidden | PopupPhase::Unmounting => {
                self.position = Some(PopupPosition::beside(anchor));
                self.phase = PopupPhase::Showing;
                Some(self.schedule(TimerKind::Reveal))
            },
            PopupPhase::HidingScheduled => {
                self.cancel();
                self.phase = PopupPhase::Shown;
                None
            },
            PopupPhase::Showing | PopupPhase::Shown => None,
        }
    }

    /// Pointer left the anchor entry; hiding is debounced.
    pub fn anchor_exited(&mut self) -> Option<TimerRequest> {
        match self.phase {
            PopupPhase::Showing | PopupPhase::Shown => {
                self.phase = PopupPhase::HidingScheduled;
                Some(self.schedule(TimerKind::Hide))
            },
            PopupPhase::Hidden
            | PopupPhase::HidingScheduled
            | PopupPhase::Unmounting => None,
        }
    }

    /// Pointer reached the popup itself.
    pub fn popup_entered(&mut self) -> Option<TimerRequest> {
        if self.phase == PopupPhase::HidingScheduled {
            self.cancel();
            self.phase = PopupPhase::Shown;
        }
        None
    }

    /// Pointer left the popup; starts the exit right away.
    pub fn popup_exited(&mut self) -> Option<TimerRequest> {
        match self.phase {
            PopupPhase::Showing
            | PopupPhase::Shown
            | PopupPhase::HidingScheduled => Some(self.begin_unmount()),
            PopupPhase::Hidden | PopupPhase::Unmounting => None,
        }
    }

    /// A scheduled timer fired. Stale tokens are ignored.
    pub fn timer_elapsed(&mut self, token: TimerToken) -> Option<TimerRequest> {
        if self.pending != Some(token) {
            log::trace!(
                "ignoring stale popup timer {:?} (generation {})",
                token.kind,
                token.generation
            );
            return None;
        }
        self.pending = None;

        match (token.kind, self.phase) {
            (TimerKind::Reveal, PopupPhase::Showing) => {
                self.phase = PopupPhase::Shown;
                None
            },
            (TimerKind::Hide, PopupPhase::HidingScheduled) => {
                Some(self.begin_unmount())
            },
            (TimerKind::Unmount, PopupPhase::Unmounting) => {
                self.phase = PopupPhase::Hidden;
                self.position = None;
                None
            },
            (kind, phase) => {
                log::debug!("popup timer {kind:?} fired in phase {phase:?}");
                None
            },
        }
    }

    /// Unmount immediately, dropping any pending timer.
    pub fn dismiss(&mut self) {
        self.cancel();
        self.phase = PopupPhase::Hidden;
        self.position = None;
    }

    fn begin_unmount(&mut self) -> TimerRequest {
        self.phase = PopupPhase::Unmounting;
        self.schedule(TimerKind::Unmount)
    }

    fn schedule(&mut self, kind: TimerKind) -> TimerRequest {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken {
            generation: self.generation,
            kind,
        };
        self.pending = Some(token);

        let delay = match kind {
            TimerKind::Reveal => self.timings.reveal,
            TimerKind::Hide => self.timings.hide,
            TimerKind::Unmount => self.timings.unmount,
        };
        TimerRequest { token, delay }
    }

    fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }
}
