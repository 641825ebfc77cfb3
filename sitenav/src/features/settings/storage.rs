use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

/// Environment variable pointing at an explicit settings file.
pub const SETTINGS_PATH_ENV: &str = "SITENAV_SETTINGS";

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    /// Build a settings load result from explicit parts.
    pub fn new(settings: SettingsData, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

pub(crate) fn load_settings_from_path(
    path: &Path,
) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(SettingsLoad::new(
        SettingsData::from_json(&parsed),
        SettingsLoadStatus::Loaded,
    ))
}

/// Resolve the settings file location from the process environment.
pub(crate) fn settings_path() -> PathBuf {
    resolve_settings_path(
        std::env::var_os(SETTINGS_PATH_ENV),
        std::env::var_os("HOME"),
    )
}

/// Explicit override first, then the user config dir, then temp.
fn resolve_settings_path(
    explicit: Option<OsString>,
    home: Option<OsString>,
) -> PathBuf {
    if let Some(path) = explicit.filter(|path| !path.is_empty()) {
        return PathBuf::from(path);
    }

    if let Some(home) = home.filter(|home| !home.is_empty()) {
        return Path::new(&home)
            .join(".config")
            .join("sitenav")
            .join("settings.json");
    }

    std::env::temp_dir().join("sitenav").join("settings.json")
}
