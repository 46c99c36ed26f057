// crates/folio-app/src/carousel.rs
// Carousel DOM binding: buttons, dots, touch swipe and debounced resize

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{CarouselEvent, CarouselState, CarouselView, FolioConfig, FolioError, Result};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, TouchEvent, Window};

use crate::dom::{self, ACTIVE_CLASS, Listeners};
use crate::timing::debounced;

/// Elements the carousel paints into
struct CarouselDom {
    track: HtmlElement,
    dots: Vec<Element>,
    prev: Option<HtmlElement>,
    next: Option<HtmlElement>,
}

impl CarouselDom {
    fn render(&self, view: &CarouselView) {
        dom::set_style(&self.track, "transform", &view.transform());

        for (index, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE_CLASS, index == view.active_dot);
        }

        if let Some(prev) = &self.prev {
            dom::set_style(prev, "opacity", &view.prev_opacity.to_string());
        }
        if let Some(next) = &self.next {
            dom::set_style(next, "opacity", &view.next_opacity.to_string());
        }
    }

    /// Width of the viewport the track scrolls inside
    fn container_width(&self) -> f64 {
        container_width(&self.track)
    }
}

fn container_width(track: &HtmlElement) -> f64 {
    track
        .parent_element()
        .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
        .map(|parent| f64::from(parent.offset_width()))
        .unwrap_or(0.0)
}

fn first_touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().item(0)?;
    Some(f64::from(touch.client_x()))
}

/// Live carousel: state plus the listeners driving it
pub struct CarouselBinding {
    state: Rc<RefCell<CarouselState>>,
    dispatch: Rc<dyn Fn(CarouselEvent)>,
    listeners: Listeners,
}

impl CarouselBinding {
    /// Attach to the page. Without a track or without cards nothing is
    /// touched and `MissingElement` is returned.
    pub fn attach(window: &Window, doc: &Document, config: &FolioConfig) -> Result<Self> {
        let selectors = &config.selectors;

        let track = dom::require_html(doc, &selectors.carousel_track)?;
        let cards = dom::query_all_html(doc, &selectors.carousel_cards);
        let first = cards
            .first()
            .ok_or_else(|| FolioError::missing(&selectors.carousel_cards))?;

        let state = CarouselState::new(
            cards.len(),
            f64::from(first.offset_width()),
            container_width(&track),
            config.carousel,
        )
        .ok_or_else(|| FolioError::missing(&selectors.carousel_cards))?;

        log::debug!(
            "Carousel: {} cards, {} visible, max index {}",
            state.item_count(),
            state.visible(),
            state.max_index()
        );

        let dom = Rc::new(CarouselDom {
            track,
            dots: dom::query_all(doc, &selectors.carousel_dots),
            prev: dom::query_html(doc, &selectors.carousel_prev),
            next: dom::query_html(doc, &selectors.carousel_next),
        });
        let state = Rc::new(RefCell::new(state));

        let dispatch: Rc<dyn Fn(CarouselEvent)> = {
            let state = state.clone();
            let dom = dom.clone();
            Rc::new(move |event: CarouselEvent| {
                let mut state = state.borrow_mut();
                if state.update(event) {
                    dom.render(&state.view());
                }
            })
        };

        let mut listeners = Listeners::default();

        // Prev/next stay clickable at the ends; the state machine ignores them
        if let Some(prev) = &dom.prev {
            let dispatch = dispatch.clone();
            listeners.on(prev, "click", move |_| dispatch(CarouselEvent::Prev))?;
        }
        if let Some(next) = &dom.next {
            let dispatch = dispatch.clone();
            listeners.on(next, "click", move |_| dispatch(CarouselEvent::Next))?;
        }

        for (index, dot) in dom.dots.iter().enumerate() {
            let dispatch = dispatch.clone();
            let index = i64::try_from(index).unwrap_or(i64::MAX);
            listeners.on(dot, "click", move |_| dispatch(CarouselEvent::Jump(index)))?;
        }

        // Touch swipe
        {
            let on_start = dispatch.clone();
            listeners.on(&dom.track, "touchstart", move |event| {
                if let Some(x) = first_touch_x(&event) {
                    on_start(CarouselEvent::TouchStart { x });
                }
            })?;

            let on_move = dispatch.clone();
            listeners.on(&dom.track, "touchmove", move |event| {
                if let Some(x) = first_touch_x(&event) {
                    on_move(CarouselEvent::TouchMove { x });
                }
            })?;

            let on_end = dispatch.clone();
            listeners.on(&dom.track, "touchend", move |_| on_end(CarouselEvent::TouchEnd))?;
        }

        // Resize: only the visible count is recomputed, card width is fixed
        {
            let dispatch = dispatch.clone();
            let dom = dom.clone();
            let mut on_resize = debounced(config.carousel.resize_debounce_ms, move || {
                dispatch(CarouselEvent::Resize {
                    container_width: dom.container_width(),
                });
            });
            listeners.on(window, "resize", move |_| on_resize())?;
        }

        dom.render(&state.borrow().view());

        Ok(Self {
            state,
            dispatch,
            listeners,
        })
    }

    /// Feed an event as if it came from the page
    pub fn send(&self, event: CarouselEvent) {
        (self.dispatch)(event);
    }

    pub fn current_index(&self) -> usize {
        self.state.borrow().current_index()
    }

    pub fn max_index(&self) -> usize {
        self.state.borrow().max_index()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.borrow().is_dragging()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
