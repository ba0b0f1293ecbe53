//! Two-valued panel visibility and the activation transitions.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::config::DropdownConfig;

/// Whether the dropdown panel is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Panel is not displayed. A freshly loaded page starts here.
    #[default]
    Hidden,
    /// Panel is displayed below the trigger.
    Shown,
}

impl Visibility {
    /// Decode a `display` style value.
    ///
    /// Only the configured shown value counts as shown; anything else,
    /// including the empty string an unstyled element reports, is hidden.
    #[must_use]
    pub fn from_display(value: &str, config: &DropdownConfig) -> Self {
        if value == config.shown_display {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    /// The `display` style value that encodes this state.
    #[must_use]
    pub fn display_value(self, config: &DropdownConfig) -> &str {
        match self {
            Self::Shown => &config.shown_display,
            Self::Hidden => &config.hidden_display,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}

/// Where a user activation landed, relative to the trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// On the trigger or one of its descendants.
    Trigger,
    /// Anywhere else in the document.
    Outside,
}

/// Next visibility after `activation`.
///
/// Trigger activations invert; outside activations force the panel hidden
/// and are a no-op when it already is.
#[must_use]
pub fn transition(current: Visibility, activation: Activation) -> Visibility {
    match activation {
        Activation::Trigger => current.toggled(),
        Activation::Outside => Visibility::Hidden,
    }
}
