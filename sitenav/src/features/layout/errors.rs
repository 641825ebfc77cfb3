use thiserror::Error;

/// Reasons a layout event was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("navigation item `{0}` does not exist")]
    UnknownItem(String),
    #[error("navigation item `{0}` cannot be pinned")]
    NotPinnable(String),
    #[error("navigation item `{0}` has no children")]
    NotAGroup(String),
}
