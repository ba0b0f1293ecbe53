//! Browser host backed by `web-sys`.
//!
//! The trigger listener sits on the trigger element; the document listener
//! sits on `window` so it sees every click that bubbles. Both are `click`
//! listeners in the bubbling phase. Listener closures are owned by
//! [`BrowserListener`] and removed from their target on drop.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement, Node, SvgElement, Window};

use crate::dom::{DocumentHandler, Host, PanelHandle, TriggerHandle};
use crate::error::DropdownError;

const ACTIVATION_EVENT: &str = "click";
const DISPLAY_PROPERTY: &str = "display";

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    /// Bind to the global window and its document.
    ///
    /// # Errors
    ///
    /// Returns [`DropdownError::NoWindow`] or [`DropdownError::NoDocument`]
    /// outside a page context (e.g. inside a worker).
    pub fn from_window() -> Result<Self, DropdownError> {
        let window = web_sys::window().ok_or(DropdownError::NoWindow)?;
        let document = window.document().ok_or(DropdownError::NoDocument)?;
        Ok(Self { window, document })
    }
}

pub struct BrowserTrigger(Element);

impl TriggerHandle for BrowserTrigger {
    type Target = Node;

    fn contains(&self, target: &Node) -> bool {
        self.0.contains(Some(target))
    }
}

/// Inline style of the panel element. HTML and SVG elements both carry one.
pub struct BrowserPanel(CssStyleDeclaration);

impl PanelHandle for BrowserPanel {
    fn display(&self) -> Result<String, DropdownError> {
        self.0
            .get_property_value(DISPLAY_PROPERTY)
            .map_err(|err| DropdownError::Style(describe(&err)))
    }

    fn set_display(&self, value: &str) -> Result<(), DropdownError> {
        self.0
            .set_property(DISPLAY_PROPERTY, value)
            .map_err(|err| DropdownError::Style(describe(&err)))
    }
}

/// A registered `click` listener; removed from its target on drop.
pub struct BrowserListener {
    target: EventTarget,
    closure: Closure<dyn FnMut(Event)>,
}

impl BrowserListener {
    fn register(target: EventTarget, closure: Closure<dyn FnMut(Event)>) -> Result<Self, DropdownError> {
        target
            .add_event_listener_with_callback(ACTIVATION_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|err| DropdownError::Listener(describe(&err)))?;
        Ok(Self { target, closure })
    }
}

impl Drop for BrowserListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(ACTIVATION_EVENT, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("click listener removal failed: {}", describe(&err));
        }
    }
}

impl Host for BrowserHost {
    type Target = Node;
    type Trigger = BrowserTrigger;
    type Panel = BrowserPanel;
    type Listener = BrowserListener;

    fn trigger(&self, id: &str) -> Result<Option<BrowserTrigger>, DropdownError> {
        Ok(self.document.get_element_by_id(id).map(BrowserTrigger))
    }

    fn panel(&self, id: &str) -> Result<Option<BrowserPanel>, DropdownError> {
        let Some(element) = self.document.get_element_by_id(id) else {
            return Ok(None);
        };
        let style = if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style()
        } else if let Some(svg) = element.dyn_ref::<SvgElement>() {
            svg.style()
        } else {
            return Err(DropdownError::Unstyled { id: id.to_owned() });
        };
        Ok(Some(BrowserPanel(style)))
    }

    fn listen_trigger(
        &self,
        trigger: &BrowserTrigger,
        mut handler: Box<dyn FnMut()>,
    ) -> Result<BrowserListener, DropdownError> {
        let target: &EventTarget = trigger.0.as_ref();
        let closure = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
        BrowserListener::register(target.clone(), closure)
    }

    fn listen_document(
        &self,
        mut handler: DocumentHandler<Node>,
    ) -> Result<BrowserListener, DropdownError> {
        let target: &EventTarget = self.window.as_ref();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let origin = event.target();
            handler(origin.as_ref().and_then(|t| t.dyn_ref::<Node>()));
        }) as Box<dyn FnMut(Event)>);
        BrowserListener::register(target.clone(), closure)
    }
}
