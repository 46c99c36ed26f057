// crates/folio-app/src/lib.rs
// Portfolio page behavior layer - WASM entry point

use std::cell::RefCell;

use folio_core::FolioConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod carousel;
mod dom;
mod effects;
mod nav;
mod reveal;
mod timing;

pub use carousel::CarouselBinding;
pub use effects::EffectsBinding;
pub use nav::NavBinding;
pub use reveal::RevealBinding;

// Re-export the state machines
pub use folio_core;

/// Id of the optional inline JSON config block
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

// ============================================================================
// Page
// ============================================================================

/// Every component attached to the page. Components never talk to each
/// other. Nav, reveal and effects settle their parts individually and are
/// always present; the carousel exists only if its track and cards do.
#[derive(Default)]
pub struct Page {
    pub nav: NavBinding,
    pub reveal: RevealBinding,
    pub effects: EffectsBinding,
    pub carousel: Option<CarouselBinding>,
}

impl Page {
    /// Attach all components. One component failing never stops the others.
    pub fn attach(window: &Window, doc: &Document, config: &FolioConfig) -> Self {
        Self {
            nav: NavBinding::attach(window, doc, config),
            reveal: RevealBinding::attach(doc, config),
            effects: EffectsBinding::attach(doc, config),
            carousel: dom::settle("carousel", CarouselBinding::attach(window, doc, config)),
        }
    }
}

thread_local! {
    // Keeps listeners and observers alive until the page unloads
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Read the inline config block, if the page has one
pub fn load_config(doc: &Document) -> FolioConfig {
    let json = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    FolioConfig::load(json.as_deref())
}

fn boot(window: Window, doc: Document) {
    let config = load_config(&doc);
    log::set_max_level(config.log_level().to_level_filter());

    log::info!("folio starting...");
    let page = Page::attach(&window, &doc, &config);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Warnings only until the page config says otherwise
    _ = console_log::init_with_level(log::Level::Warn);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(doc) = window.document() else {
        return;
    };

    if doc.ready_state() != "loading" {
        boot(window, doc);
        return;
    }

    let target = doc.clone();
    let on_ready = Closure::once_into_js(move || boot(window, doc));
    if let Err(e) = target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}
