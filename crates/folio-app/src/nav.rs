// crates/folio-app/src/nav.rs
// Navigation binding: mobile menu, scrolled navbar, active section, anchor scrolling

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::nav::{anchor_scroll_top, anchor_target};
use folio_core::{FolioConfig, FolioError, MenuState, NavTracker, NavbarState, Result, SectionHit};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::dom::{self, ACTIVE_CLASS, Listeners};
use crate::timing::throttled;

const SCROLLED_CLASS: &str = "scrolled";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Section observer and the callback it calls into
struct SectionObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Navigation behaviors. Each part attaches independently; a missing
/// toggle, navbar or section list only disables that part.
#[derive(Default)]
pub struct NavBinding {
    menu: Option<Rc<RefCell<MenuState>>>,
    tracker: Option<Rc<RefCell<NavTracker>>>,
    sections: Option<SectionObserver>,
    listeners: Listeners,
}

impl NavBinding {
    pub fn attach(window: &Window, doc: &Document, config: &FolioConfig) -> Self {
        let mut binding = Self::default();

        let menu = binding.attach_menu(doc, config);
        binding.menu = dom::settle("nav menu", menu);

        let navbar = binding.attach_navbar(window, doc, config);
        dom::settle("navbar scroll mode", navbar);

        let sections = binding.attach_sections(doc, config);
        dom::settle("active section tracking", sections);

        let anchors = binding.attach_anchors(window, doc, config);
        dom::settle("anchor scrolling", anchors);

        binding
    }

    /// Menu toggle flips the open flag; any nav link click closes it
    fn attach_menu(&mut self, doc: &Document, config: &FolioConfig) -> Result<Rc<RefCell<MenuState>>> {
        let selectors = &config.selectors;
        let toggle = dom::query(doc, &selectors.nav_toggle);
        let menu = dom::query(doc, &selectors.nav_menu);
        let links = dom::query_all(doc, &selectors.nav_links);

        if toggle.is_none() && links.is_empty() {
            return Err(FolioError::missing(&selectors.nav_toggle));
        }

        let open = toggle
            .as_ref()
            .map(|t| dom::has_class(t, ACTIVE_CLASS))
            .unwrap_or(false);
        let state = Rc::new(RefCell::new(MenuState::new(open)));
        let targets: Rc<Vec<Element>> = Rc::new(toggle.iter().chain(menu.iter()).cloned().collect());

        if let Some(toggle) = &toggle {
            let state = state.clone();
            let targets = targets.clone();
            self.listeners.on(toggle, "click", move |_| {
                let open = state.borrow_mut().toggle();
                for el in targets.iter() {
                    dom::set_class(el, ACTIVE_CLASS, open);
                }
            })?;
        }

        for link in &links {
            let state = state.clone();
            let targets = targets.clone();
            self.listeners.on(link, "click", move |_| {
                state.borrow_mut().close();
                for el in targets.iter() {
                    dom::set_class(el, ACTIVE_CLASS, false);
                }
            })?;
        }

        Ok(state)
    }

    /// "scrolled" class while the page is scrolled past the threshold
    fn attach_navbar(&mut self, window: &Window, doc: &Document, config: &FolioConfig) -> Result<()> {
        let navbar = dom::query(doc, &config.selectors.navbar)
            .ok_or_else(|| FolioError::missing(&config.selectors.navbar))?;
        let state = RefCell::new(NavbarState::new(config.nav.scroll_threshold));

        let sync = {
            let window = window.clone();
            move || {
                let offset = window.scroll_y().unwrap_or(0.0);
                let mut state = state.borrow_mut();
                if state.on_scroll(offset) {
                    dom::set_class(&navbar, SCROLLED_CLASS, state.is_scrolled());
                }
            }
        };
        let mut on_scroll = throttled(config.nav.scroll_throttle_ms, sync);

        // A reload can land mid-page, so sync once up front
        on_scroll();
        self.listeners.on(window, "scroll", move |_| on_scroll())?;
        Ok(())
    }

    /// Highlight the link for whichever section crosses the central band
    fn attach_sections(&mut self, doc: &Document, config: &FolioConfig) -> Result<()> {
        let selectors = &config.selectors;
        let sections = dom::query_all(doc, &selectors.sections);
        if sections.is_empty() {
            return Err(FolioError::missing(&selectors.sections));
        }
        let links = dom::query_all(doc, &selectors.nav_links);

        let tracker = Rc::new(RefCell::new(NavTracker::new(
            links
                .iter()
                .map(|link| link.get_attribute("href").unwrap_or_default())
                .collect(),
            sections.iter().map(|s| s.id()).collect(),
            config.nav.active_policy,
        )));

        let callback: ObserverCallback = {
            let tracker = tracker.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<SectionHit> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| SectionHit::new(entry.target().id(), entry.is_intersecting()))
                    .collect();

                let mut tracker = tracker.borrow_mut();
                if tracker.apply_batch(&batch) {
                    let active = tracker.active();
                    for (index, link) in links.iter().enumerate() {
                        dom::set_class(link, ACTIVE_CLASS, active == Some(index));
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config.nav.root_margin);
        options.set_threshold(&JsValue::from_f64(0.0));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(dom::js_err)?;
        for section in &sections {
            observer.observe(section);
        }

        self.tracker = Some(tracker);
        self.sections = Some(SectionObserver {
            observer,
            _callback: callback,
        });
        Ok(())
    }

    /// Smooth-scroll in-page anchors to just below the navbar
    fn attach_anchors(&mut self, window: &Window, doc: &Document, config: &FolioConfig) -> Result<()> {
        let anchors = dom::query_all(doc, &config.selectors.anchors);
        if anchors.is_empty() {
            return Err(FolioError::missing(&config.selectors.anchors));
        }

        for anchor in anchors {
            let window = window.clone();
            let doc = doc.clone();
            let navbar_selector = config.selectors.navbar.clone();
            let fallback = config.nav.fallback_nav_height;
            let href = anchor.get_attribute("href").unwrap_or_default();

            self.listeners.on(&anchor, "click", move |event| {
                event.prevent_default();
                let Some(selector) = anchor_target(&href) else {
                    return;
                };
                let Some(target) = dom::query_html(&doc, selector) else {
                    return;
                };

                let nav_height = dom::query_html(&doc, &navbar_selector)
                    .map(|navbar| f64::from(navbar.offset_height()));
                let top = anchor_scroll_top(f64::from(target.offset_top()), nav_height, fallback);

                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            })?;
        }
        Ok(())
    }

    pub fn menu_open(&self) -> Option<bool> {
        self.menu.as_ref().map(|menu| menu.borrow().is_open())
    }

    /// Index of the active nav link, once a section has been observed
    pub fn active_link(&self) -> Option<usize> {
        self.tracker.as_ref().and_then(|t| t.borrow().active())
    }

    pub fn observes_sections(&self) -> bool {
        self.sections.is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
