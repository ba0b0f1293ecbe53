//! Seams between the dropdown logic and the document it runs in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller in [`toggle`] only sees the traits below. The browser
//! implements them with `web-sys` in `browser` (hydrate builds); tests use an
//! in-memory node tree. Element handles are injected through [`Host`] lookups
//! rather than read from ambient globals.

pub mod toggle;

#[cfg(feature = "hydrate")]
pub mod browser;


pub use toggle::DropdownToggle;

use crate::error::DropdownError;

/// Callback for document-wide activations; receives the target node, if any.
pub type DocumentHandler<T> = Box<dyn FnMut(Option<&T>)>;

/// The control whose activation toggles the panel.
pub trait TriggerHandle {
    /// Event target type delivered by the host.
    type Target;

    /// Whether `target` is the trigger itself or one of its descendants.
    fn contains(&self, target: &Self::Target) -> bool;
}

/// The element whose `display` property encodes panel visibility.
pub trait PanelHandle {
    /// Current inline `display` value; empty when never set.
    ///
    /// # Errors
    ///
    /// Returns [`DropdownError::Style`] if the runtime rejects the read.
    fn display(&self) -> Result<String, DropdownError>;

    /// Overwrite the inline `display` value.
    ///
    /// # Errors
    ///
    /// Returns [`DropdownError::Style`] if the runtime rejects the write.
    fn set_display(&self, value: &str) -> Result<(), DropdownError>;
}

/// A document that can look up elements and deliver activation events.
pub trait Host {
    type Target;
    type Trigger: TriggerHandle<Target = Self::Target>;
    type Panel: PanelHandle;
    /// Keeps a registered listener attached; dropping it detaches.
    type Listener;

    /// Look up the trigger by id. `Ok(None)` when the page has no such element.
    ///
    /// # Errors
    ///
    /// Returns an error when the document itself is unavailable.
    fn trigger(&self, id: &str) -> Result<Option<Self::Trigger>, DropdownError>;

    /// Look up the panel by id. `Ok(None)` when the page has no such element.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is unavailable or the element
    /// cannot carry a style.
    fn panel(&self, id: &str) -> Result<Option<Self::Panel>, DropdownError>;

    /// Register `handler` for activations on the trigger.
    ///
    /// # Errors
    ///
    /// Returns [`DropdownError::Listener`] if registration is rejected.
    fn listen_trigger(
        &self,
        trigger: &Self::Trigger,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self::Listener, DropdownError>;

    /// Register `handler` for every activation in the document, receiving the
    /// originating target when it is a node.
    ///
    /// # Errors
    ///
    /// Returns [`DropdownError::Listener`] if registration is rejected.
    fn listen_document(
        &self,
        handler: DocumentHandler<Self::Target>,
    ) -> Result<Self::Listener, DropdownError>;
}
