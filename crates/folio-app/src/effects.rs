// crates/folio-app/src/effects.rs
// Decorative effects: card tilt, portrait tilt, floating preview cards

use folio_core::tilt::{
    CARD_ENTER_TRANSITION, CARD_REST_TRANSFORM, PORTRAIT_FAST_TRANSITION,
    PORTRAIT_REST_TRANSFORM, PORTRAIT_SETTLE_TRANSITION, card_tilt, float_animation,
    portrait_tilt,
};
use folio_core::{FolioConfig, FolioError, Result};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, MouseEvent};

use crate::dom::{self, Listeners};

fn pointer(event: &Event) -> Option<(f64, f64)> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some((f64::from(event.client_x()), f64::from(event.client_y())))
}

/// Hover effects. Stateless apart from the inline styles they write.
#[derive(Default)]
pub struct EffectsBinding {
    listeners: Listeners,
    floating: usize,
}

impl EffectsBinding {
    pub fn attach(doc: &Document, config: &FolioConfig) -> Self {
        let mut binding = Self::default();

        let cards = binding.attach_card_tilt(doc, config);
        dom::settle("card tilt", cards);

        let portrait = binding.attach_portrait(doc, config);
        dom::settle("portrait tilt", portrait);

        binding.floating = float_previews(doc, config);

        binding
    }

    fn attach_card_tilt(&mut self, doc: &Document, config: &FolioConfig) -> Result<()> {
        let cards = dom::query_all_html(doc, &config.selectors.tilt_cards);
        if cards.is_empty() {
            return Err(FolioError::missing(&config.selectors.tilt_cards));
        }
        let divisor = config.tilt.card_divisor;

        for card in cards {
            let el = card.clone();
            self.listeners.on(&card, "mouseenter", move |_| {
                dom::set_style(&el, "transition", CARD_ENTER_TRANSITION);
            })?;

            let el = card.clone();
            self.listeners.on(&card, "mousemove", move |event| {
                let Some((x, y)) = pointer(&event) else {
                    return;
                };
                let tilt = card_tilt(dom::bounds_of(&el), x, y, divisor);
                dom::set_style(&el, "transform", &tilt.card_transform());
            })?;

            let el = card.clone();
            self.listeners.on(&card, "mouseleave", move |_| {
                dom::set_style(&el, "transform", CARD_REST_TRANSFORM);
            })?;
        }
        Ok(())
    }

    fn attach_portrait(&mut self, doc: &Document, config: &FolioConfig) -> Result<()> {
        let portrait = dom::require_html(doc, &config.selectors.portrait)?;
        let max_deg = config.tilt.portrait_max_deg;
        let settle_ms = config.tilt.portrait_settle_ms;

        let el = portrait.clone();
        self.listeners.on(&portrait, "mousemove", move |event| {
            let Some((x, y)) = pointer(&event) else {
                return;
            };
            let tilt = portrait_tilt(dom::bounds_of(&el), x, y, max_deg);
            dom::set_style(&el, "--rotateX", &format!("{}deg", tilt.rotate_x));
            dom::set_style(&el, "--rotateY", &format!("{}deg", tilt.rotate_y));
            dom::set_style(&el, "transform", &tilt.portrait_transform());
        })?;

        let el = portrait.clone();
        self.listeners.on(&portrait, "mouseleave", move |_| {
            dom::set_style(&el, "transition", PORTRAIT_SETTLE_TRANSITION);
            dom::set_style(&el, "transform", PORTRAIT_REST_TRANSFORM);

            let el = el.clone();
            spawn_local(async move {
                TimeoutFuture::new(settle_ms).await;
                dom::set_style(&el, "transition", PORTRAIT_FAST_TRANSITION);
            });
        })?;

        let el = portrait.clone();
        self.listeners.on(&portrait, "mouseenter", move |_| {
            dom::set_style(&el, "transition", PORTRAIT_FAST_TRANSITION);
        })?;

        Ok(())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of preview cards given a float animation
    pub fn floating_count(&self) -> usize {
        self.floating
    }
}

fn float_previews(doc: &Document, config: &FolioConfig) -> usize {
    let cards = dom::query_all_html(doc, &config.selectors.preview_cards);
    for (index, card) in cards.iter().enumerate() {
        let (animation, delay) = float_animation(index);
        dom::set_style(card, "animation", &animation);
        dom::set_style(card, "animation-delay", &delay);
    }
    cards.len()
}
