mod errors;
mod event;
mod feature;
mod model;
mod storage;

pub use errors::SettingsError;
pub use event::SettingsEvent;
pub(crate) use feature::{SettingsFeature, load_initial_settings};
pub use model::{NavChildSettings, NavItemSettings, SettingsData};
pub use storage::{SETTINGS_PATH_ENV, SettingsLoad, SettingsLoadStatus};
