// crates/folio-app/src/dom.rs
// Document queries, style helpers and listener bookkeeping

use folio_core::tilt::Bounds;
use folio_core::{FolioError, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// Class used for every "on" marker (active link, open menu, current dot)
pub const ACTIVE_CLASS: &str = "active";

/// Convert a thrown JS value into our error type
pub fn js_err(e: JsValue) -> FolioError {
    FolioError::Dom(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// First element matching `selector`. Invalid selectors count as absent.
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

pub fn query_html(doc: &Document, selector: &str) -> Option<HtmlElement> {
    query(doc, selector)?.dyn_into::<HtmlElement>().ok()
}

/// Like `query_html`, but absence is reported as `MissingElement`
pub fn require_html(doc: &Document, selector: &str) -> Result<HtmlElement> {
    query_html(doc, selector).ok_or_else(|| FolioError::missing(selector))
}

/// All elements matching `selector`, in document order
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all_html(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    query_all(doc, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Set an inline style property. Failures only happen for read-only
/// declarations, so they are logged and dropped.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("Failed to set {}: {:?}", property, e);
    }
}

/// Add or remove a class
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::debug!("Failed to toggle class {}: {:?}", class, e);
    }
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Client-space bounding box
pub fn bounds_of(el: &Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// One attached callback, kept so it can be detached again
struct Registration {
    target: EventTarget,
    event: String,
    closure: Closure<dyn FnMut(Event)>,
}

/// Event listeners owned by one binding. Bindings keep this for the page
/// lifetime; dropping it detaches every callback first.
#[derive(Default)]
pub struct Listeners {
    registrations: Vec<Registration>,
}

impl Listeners {
    /// Attach `handler` to `event` on `target`
    pub fn on<F>(&mut self, target: &EventTarget, event: &str, handler: F) -> Result<()>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        self.registrations.push(Registration {
            target: target.clone(),
            event: event.to_string(),
            closure,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for reg in &self.registrations {
            let _ = reg
                .target
                .remove_event_listener_with_callback(&reg.event, reg.closure.as_ref().unchecked_ref());
        }
    }
}

/// Turn a component init result into an optional binding, logging why a
/// component was skipped. Missing elements are expected and stay quiet.
pub fn settle<T>(component: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(binding) => {
            log::info!("{} attached", component);
            Some(binding)
        }
        Err(e) if e.is_missing() => {
            log::debug!("{} disabled: {}", component, e);
            None
        }
        Err(e) => {
            log::warn!("{} failed to attach: {}", component, e);
            None
        }
    }
}
