//! Errors raised while mounting or driving the dropdown.
//!
//! A missing trigger or panel element is deliberately absent from this enum:
//! the mount guard reports it as an inert outcome, not a failure.

#[derive(Debug, thiserror::Error)]
pub enum DropdownError {
    #[error("no window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{id} has no inline style")]
    Unstyled { id: String },
    #[error("style access failed: {0}")]
    Style(String),
    #[error("listener registration failed: {0}")]
    Listener(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config json error: {0}")]
    ConfigJson(#[from] serde_json::Error),
}
