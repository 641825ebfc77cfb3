use iced::Rectangle;
use sitenav_ui_nav::TimerToken;

/// Pointer and timer events for collapsed-sidebar flyouts.
#[derive(Debug, Clone, PartialEq)]
pub enum FlyoutEvent {
    AnchorEntered { item_id: String, bounds: Rectangle },
    AnchorExited { item_id: String },
    PopupEntered { item_id: String },
    PopupExited { item_id: String },
    TimerElapsed { item_id: String, token: TimerToken },
    DismissAll,
}
