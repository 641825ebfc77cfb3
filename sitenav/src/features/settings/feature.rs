use iced::Task;

use super::event::SettingsEvent;
use super::model::SettingsData;
use super::storage::{SettingsLoad, SettingsLoadStatus, load_settings};
use crate::app::Event as AppEvent;
use crate::features::Feature;

/// Settings feature root that owns the loaded settings payload.
#[derive(Debug, Default)]
pub(crate) struct SettingsFeature {
    settings: SettingsData,
}

impl SettingsFeature {
    /// Construct the settings feature with already loaded settings.
    pub(crate) fn new(settings: SettingsData) -> Self {
        Self { settings }
    }

    /// Return read-only access to the current settings.
    pub(crate) fn settings(&self) -> &SettingsData {
        &self.settings
    }
}

impl Feature for SettingsFeature {
    type Event = SettingsEvent;
    type Ctx<'a>
        = ()
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: SettingsEvent,
        _ctx: &(),
    ) -> Task<AppEvent> {
        match event {
            SettingsEvent::Reload => request_reload_settings(),
            SettingsEvent::ReloadLoaded(load) => {
                self.settings = settings_from_load(load);
                Task::done(AppEvent::SettingsApplied(self.settings.clone()))
            },
            SettingsEvent::ReloadFailed(message) => {
                log::warn!("settings read failed: {message}");
                Task::none()
            },
        }
    }
}

/// Read settings synchronously for start-up, falling back to defaults.
pub(crate) fn load_initial_settings() -> SettingsData {
    match load_settings() {
        Ok(load) => settings_from_load(load),
        Err(err) => {
            log::warn!("settings read failed: {err}");
            SettingsData::default()
        },
    }
}

fn request_reload_settings() -> Task<AppEvent> {
    Task::perform(async { load_settings() }, |result| match result {
        Ok(load) => AppEvent::Settings(SettingsEvent::ReloadLoaded(load)),
        Err(err) => {
            AppEvent::Settings(SettingsEvent::ReloadFailed(format!("{err}")))
        },
    })
}

fn settings_from_load(load: SettingsLoad) -> SettingsData {
    let (settings, status) = load.into_parts();
    match &status {
        SettingsLoadStatus::Loaded => log::debug!("settings loaded"),
        SettingsLoadStatus::Missing => {
            log::debug!("no settings file, using defaults");
        },
        SettingsLoadStatus::Invalid(message) => {
            log::warn!("settings file invalid: {message}");
        },
    }

    settings
}
