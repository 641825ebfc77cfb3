use sitenav_ui_nav::RegistryError;
use thiserror::Error;

/// Errors emitted while reading settings or building a catalog from them.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
    #[error("settings JSON failed")]
    Json(#[from] serde_json::Error),
    #[error("navigation item `{0}` is a link without a path")]
    MissingPath(String),
    #[error("navigation item `{0}` mixes a path, children or dropdown")]
    AmbiguousKind(String),
    #[error("navigation catalog is invalid")]
    Registry(#[from] RegistryError),
}
