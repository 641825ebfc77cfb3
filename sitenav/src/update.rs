use iced::Task;

use super::{Event, Sidebar};
use crate::features::Feature;
use crate::features::settings::SettingsData;

pub(super) fn update(sidebar: &mut Sidebar, event: Event) -> Task<Event> {
    use Event::*;

    match event {
        Layout(event) => sidebar.features.reduce_layout(event),
        Flyout(event) => sidebar.features.reduce_flyout(event),
        Settings(event) => sidebar.features.settings_mut().reduce(event, &()),
        SettingsApplied(settings) => apply_settings(sidebar, &settings),
    }
}

fn apply_settings(sidebar: &mut Sidebar, settings: &SettingsData) -> Task<Event> {
    sidebar
        .features
        .flyout_mut()
        .set_timings(settings.popup_timings());

    match settings.registry() {
        Ok(registry) => sidebar.features.replace_registry(registry),
        Err(err) => {
            log::warn!("navigation settings rejected, keeping current: {err}");
        },
    }

    Task::none()
}
