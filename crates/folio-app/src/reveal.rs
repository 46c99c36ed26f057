// crates/folio-app/src/reveal.rs
// Reveal-on-scroll observer and hero intro

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::reveal::{
    HERO_HIDDEN_OPACITY, HERO_HIDDEN_TRANSFORM, HERO_SHOWN_OPACITY, HERO_SHOWN_TRANSFORM,
    HERO_TRANSITION, READY_CLASS, REVEALED_CLASS,
};
use folio_core::{FolioConfig, FolioError, Result, RevealTracker};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct CandidateObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for CandidateObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reveal animations for the page
#[derive(Default)]
pub struct RevealBinding {
    tracker: Option<Rc<RefCell<RevealTracker>>>,
    observer: Option<CandidateObserver>,
    hero_count: usize,
}

impl RevealBinding {
    pub fn attach(doc: &Document, config: &FolioConfig) -> Self {
        let mut binding = Self::default();

        let observer = binding.attach_observer(doc, config);
        dom::settle("reveal observer", observer);

        binding.hero_count = hero_intro(doc, config);
        if binding.hero_count > 0 {
            log::info!("hero intro scheduled for {} element(s)", binding.hero_count);
        }

        binding
    }

    /// Stagger each candidate, then reveal it on first intersection and stop
    /// watching it
    fn attach_observer(&mut self, doc: &Document, config: &FolioConfig) -> Result<()> {
        let candidates = dom::query_all(doc, &config.selectors.reveal);
        if candidates.is_empty() {
            return Err(FolioError::missing(&config.selectors.reveal));
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new(
            candidates.len(),
            config.reveal.stagger_ms,
        )));

        for (index, el) in candidates.iter().enumerate() {
            dom::set_class(el, READY_CLASS, true);
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                dom::set_style(html, "transition-delay", &tracker.borrow().transition_delay(index));
            }
        }

        let callback: ObserverCallback = {
            let tracker = tracker.clone();
            let candidates = candidates.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target: Element = entry.target();
                    let Some(index) = candidates.iter().position(|c| *c == target) else {
                        continue;
                    };
                    if tracker.borrow_mut().reveal(index) {
                        dom::set_class(&target, REVEALED_CLASS, true);
                        observer.unobserve(&target);
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config.reveal.root_margin);
        options.set_threshold(&JsValue::from_f64(config.reveal.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(dom::js_err)?;
        for el in &candidates {
            observer.observe(el);
        }

        self.tracker = Some(tracker);
        self.observer = Some(CandidateObserver {
            observer,
            _callback: callback,
        });
        Ok(())
    }

    pub fn candidate_count(&self) -> usize {
        self.tracker.as_ref().map(|t| t.borrow().len()).unwrap_or(0)
    }

    /// Candidates not yet revealed
    pub fn pending(&self) -> usize {
        self.tracker.as_ref().map(|t| t.borrow().pending()).unwrap_or(0)
    }

    pub fn hero_count(&self) -> usize {
        self.hero_count
    }
}

/// Hide the hero blocks, then fade them in after their delays.
/// Returns how many blocks were found.
fn hero_intro(doc: &Document, config: &FolioConfig) -> usize {
    let steps = [
        (&config.selectors.hero_content, config.reveal.hero_content_delay_ms),
        (&config.selectors.hero_visual, config.reveal.hero_visual_delay_ms),
    ];

    let mut count = 0;
    for (selector, delay_ms) in steps {
        let Some(el) = dom::query_html(doc, selector) else {
            continue;
        };
        count += 1;

        dom::set_style(&el, "opacity", HERO_HIDDEN_OPACITY);
        dom::set_style(&el, "transform", HERO_HIDDEN_TRANSFORM);

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            dom::set_style(&el, "transition", HERO_TRANSITION);
            dom::set_style(&el, "opacity", HERO_SHOWN_OPACITY);
            dom::set_style(&el, "transform", HERO_SHOWN_TRANSFORM);
        });
    }
    count
}
