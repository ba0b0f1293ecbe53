//! Initialization guard and listener installation.
//!
//! ARCHITECTURE
//! ============
//! [`install`] looks both elements up through a [`Host`], binds them into a
//! [`DropdownToggle`], and registers the trigger and document listeners. The
//! returned [`Mounted`] owns the listeners; dropping it detaches them.
//!
//! [`replace_mount`] swaps a new installation into a slot only once it has
//! succeeded, so a failed mount never tears down a working one. In hydrate
//! builds the module start entry point mounts the default config into a
//! thread-local slot.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::rc::Rc;

use crate::config::DropdownConfig;
use crate::dom::{DocumentHandler, DropdownToggle, Host};
use crate::error::DropdownError;
use crate::state::panel::Visibility;

/// Console logger threshold for hydrate builds. Mount, toggle and unmount
/// lines are emitted at `debug`.
pub const CONSOLE_LOG_LEVEL: log::Level = log::Level::Debug;

type Toggle<H> = DropdownToggle<<H as Host>::Trigger, <H as Host>::Panel>;

/// A live dropdown: the controller plus its two registered listeners.
pub struct Mounted<H: Host> {
    toggle: Rc<Toggle<H>>,
    listeners: Vec<H::Listener>,
}

impl<H: Host> Mounted<H> {
    /// Current panel visibility.
    ///
    /// # Errors
    ///
    /// Propagates style read failures from the panel.
    pub fn visibility(&self) -> Result<Visibility, DropdownError> {
        self.toggle.visibility()
    }

    #[must_use]
    pub fn config(&self) -> &DropdownConfig {
        self.toggle.config()
    }

    /// Detach both listeners. The panel keeps whatever state it had.
    pub fn unmount(self) {
        log::debug!(
            "dropdown #{}: unmounting {} listeners",
            self.toggle.config().panel_id,
            self.listeners.len()
        );
        drop(self);
    }
}

/// Wire the dropdown into `host`.
///
/// Returns `Ok(None)` when the trigger or the panel is absent: the page simply
/// does not carry the feature, so nothing is registered and nothing is
/// reported beyond a debug line.
///
/// # Errors
///
/// Returns an error if `config` is invalid, the host cannot perform lookups,
/// or a listener cannot be registered. Any listener registered before the
/// failure is detached again.
pub fn install<H>(host: &H, config: DropdownConfig) -> Result<Option<Mounted<H>>, DropdownError>
where
    H: Host,
    H::Trigger: 'static,
    H::Panel: 'static,
{
    config.validate()?;
    let trigger = host.trigger(&config.trigger_id)?;
    let panel = host.panel(&config.panel_id)?;
    let Some(toggle) = DropdownToggle::attach(trigger, panel, config.clone()) else {
        log::debug!(
            "dropdown inert: #{} or #{} not present",
            config.trigger_id,
            config.panel_id
        );
        return Ok(None);
    };
    let toggle = Rc::new(toggle);

    let on_trigger: Box<dyn FnMut()> = {
        let toggle = Rc::clone(&toggle);
        Box::new(move || {
            if let Err(err) = toggle.on_trigger_activation() {
                log::warn!("dropdown toggle failed: {err}");
            }
        })
    };
    let on_document: DocumentHandler<H::Target> = {
        let toggle = Rc::clone(&toggle);
        Box::new(move |target| {
            if let Err(err) = toggle.on_outside_activation(target) {
                log::warn!("dropdown close failed: {err}");
            }
        })
    };

    // A failed second registration drops the first listener, detaching it.
    let trigger_listener = host.listen_trigger(toggle.trigger(), on_trigger)?;
    let document_listener = host.listen_document(on_document)?;

    log::debug!(
        "dropdown mounted: #{} toggles #{}",
        config.trigger_id,
        config.panel_id
    );
    Ok(Some(Mounted {
        toggle,
        listeners: vec![trigger_listener, document_listener],
    }))
}

/// Install into `slot`, replacing the previous mount only on success.
///
/// Returns whether listeners are now attached. An inert outcome (`Ok(None)`
/// from [`install`]) also replaces the slot, since the configured elements
/// are no longer all present.
///
/// # Errors
///
/// Returns the [`install`] error and leaves `slot` untouched.
pub fn replace_mount<H>(
    slot: &mut Option<Mounted<H>>,
    host: &H,
    config: DropdownConfig,
) -> Result<bool, DropdownError>
where
    H: Host,
    H::Trigger: 'static,
    H::Panel: 'static,
{
    let mounted = install(host, config)?;
    let active = mounted.is_some();
    if let Some(previous) = std::mem::replace(slot, mounted) {
        previous.unmount();
    }
    Ok(active)
}

#[cfg(feature = "hydrate")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use super::{Mounted, replace_mount};
    use crate::config::DropdownConfig;
    use crate::dom::browser::BrowserHost;
    use crate::error::DropdownError;

    thread_local! {
        static CURRENT: RefCell<Option<Mounted<BrowserHost>>> = const { RefCell::new(None) };
    }

    fn init_logging() {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(super::CONSOLE_LOG_LEVEL) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger unavailable: {err}")));
        }
    }

    fn mount_default() -> Result<bool, DropdownError> {
        let host = BrowserHost::from_window()?;
        CURRENT.with(|current| replace_mount(&mut current.borrow_mut(), &host, DropdownConfig::default()))
    }

    /// Module start: mount with the default element ids.
    #[wasm_bindgen(start)]
    pub fn start() {
        init_logging();
        if let Err(err) = mount_default() {
            log::warn!("dropdown mount failed: {err}");
        }
    }
}
