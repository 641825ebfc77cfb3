use super::storage::SettingsLoad;

/// Events handled by the settings feature reducer.
#[derive(Debug, Clone)]
pub enum SettingsEvent {
    Reload,
    ReloadLoaded(SettingsLoad),
    ReloadFailed(String),
}
