//! Dropdown toggle controller.
//!
//! Reads the panel's current `display` on every activation and writes the
//! next one back, so the style property stays the only copy of the state.
//! Whether an activation is "outside" is decided by asking the trigger if it
//! contains the event target; listener order never matters.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::config::DropdownConfig;
use crate::dom::{PanelHandle, TriggerHandle};
use crate::error::DropdownError;
use crate::state::panel::{Activation, Visibility, transition};

pub struct DropdownToggle<T, P> {
    trigger: T,
    panel: P,
    config: DropdownConfig,
}

impl<T: TriggerHandle, P: PanelHandle> DropdownToggle<T, P> {
    /// Bind a trigger and panel. Returns `None` unless both are present.
    #[must_use]
    pub fn attach(trigger: Option<T>, panel: Option<P>, config: DropdownConfig) -> Option<Self> {
        let (Some(trigger), Some(panel)) = (trigger, panel) else {
            return None;
        };
        Some(Self { trigger, panel, config })
    }

    #[must_use]
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    #[must_use]
    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// Current panel visibility, decoded from its `display` property.
    ///
    /// # Errors
    ///
    /// Propagates style read failures from the panel.
    pub fn visibility(&self) -> Result<Visibility, DropdownError> {
        let display = self.panel.display()?;
        Ok(Visibility::from_display(&display, &self.config))
    }

    /// Classify an activation target relative to the trigger.
    ///
    /// Targets that are missing or not nodes count as outside.
    #[must_use]
    pub fn classify(&self, target: Option<&T::Target>) -> Activation {
        if target.is_some_and(|t| self.trigger.contains(t)) {
            Activation::Trigger
        } else {
            Activation::Outside
        }
    }

    /// Handle an activation on the trigger: flip the panel.
    ///
    /// # Errors
    ///
    /// Propagates style read/write failures from the panel.
    pub fn on_trigger_activation(&self) -> Result<Visibility, DropdownError> {
        self.apply(Activation::Trigger)
    }

    /// Handle an activation anywhere in the document.
    ///
    /// Closes the panel unless `target` lies within the trigger, in which
    /// case the trigger's own handler owns the event and this is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates style read/write failures from the panel.
    pub fn on_outside_activation(&self, target: Option<&T::Target>) -> Result<Visibility, DropdownError> {
        match self.classify(target) {
            Activation::Trigger => self.visibility(),
            Activation::Outside => self.apply(Activation::Outside),
        }
    }

    fn apply(&self, activation: Activation) -> Result<Visibility, DropdownError> {
        let current = self.visibility()?;
        let next = transition(current, activation);
        self.panel.set_display(next.display_value(&self.config))?;
        if next != current {
            let verb = if next.is_shown() { "opened" } else { "closed" };
            log::debug!("dropdown #{} {verb} ({activation:?})", self.config.panel_id);
        }
        Ok(next)
    }
}
