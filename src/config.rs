//! Element ids and display values for the login dropdown.
//!
//! Defaults match the page markup (`#loginBtn`, `#dropdownMenu`) and the
//! `block`/`none` display pair. Rust callers that drive a different page can
//! build a partial JSON override; unspecified fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::DropdownError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TRIGGER_ID: &str = "loginBtn";
pub const DEFAULT_PANEL_ID: &str = "dropdownMenu";
pub const DEFAULT_SHOWN_DISPLAY: &str = "block";
pub const DEFAULT_HIDDEN_DISPLAY: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Id of the element whose activation toggles the panel.
    pub trigger_id: String,
    /// Id of the element whose `display` property is controlled.
    pub panel_id: String,
    /// `display` value written when the panel is shown.
    pub shown_display: String,
    /// `display` value written when the panel is hidden.
    pub hidden_display: String,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            trigger_id: DEFAULT_TRIGGER_ID.to_owned(),
            panel_id: DEFAULT_PANEL_ID.to_owned(),
            shown_display: DEFAULT_SHOWN_DISPLAY.to_owned(),
            hidden_display: DEFAULT_HIDDEN_DISPLAY.to_owned(),
        }
    }
}

impl DropdownConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`DropdownError::ConfigJson`] for malformed JSON and
    /// [`DropdownError::InvalidConfig`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, DropdownError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config can drive a two-valued toggle.
    ///
    /// # Errors
    ///
    /// Returns [`DropdownError::InvalidConfig`] when an id is blank, both ids
    /// name the same element, a display value is not a keyword the browser
    /// reads back verbatim, or both display values are equal.
    pub fn validate(&self) -> Result<(), DropdownError> {
        if self.trigger_id.trim().is_empty() {
            return Err(DropdownError::InvalidConfig("trigger_id is empty".to_owned()));
        }
        if self.panel_id.trim().is_empty() {
            return Err(DropdownError::InvalidConfig("panel_id is empty".to_owned()));
        }
        if self.trigger_id == self.panel_id {
            return Err(DropdownError::InvalidConfig(format!(
                "trigger and panel share id {:?}",
                self.trigger_id
            )));
        }
        if !is_display_keyword(&self.shown_display) {
            return Err(DropdownError::InvalidConfig(format!(
                "shown_display {:?} is not a CSS display keyword",
                self.shown_display
            )));
        }
        if !self.hidden_display.is_empty() && !is_display_keyword(&self.hidden_display) {
            return Err(DropdownError::InvalidConfig(format!(
                "hidden_display {:?} is not a CSS display keyword",
                self.hidden_display
            )));
        }
        if self.shown_display == self.hidden_display {
            return Err(DropdownError::InvalidConfig(format!(
                "shown and hidden display are both {:?}",
                self.shown_display
            )));
        }
        Ok(())
    }
}

/// `display` keywords in the exact form `style.display` reads back.
///
/// Anything else is either normalized by the browser on write (padding,
/// uppercase) or ignored outright (typos). Either way the readback would
/// never match the configured value and the panel could not close.
const DISPLAY_KEYWORDS: &[&str] = &[
    "block",
    "inline",
    "inline-block",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "flow-root",
    "list-item",
    "table",
    "inline-table",
    "contents",
    "none",
];

fn is_display_keyword(value: &str) -> bool {
    DISPLAY_KEYWORDS.contains(&value)
}
