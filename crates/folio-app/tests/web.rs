//! Browser tests for the DOM bindings
//!
//! Run with `wasm-pack test --headless --firefox crates/folio-app`.

#![cfg(target_arch = "wasm32")]

use folio_app::folio_core::tilt::PORTRAIT_REST_TRANSFORM;
use folio_app::folio_core::{CarouselEvent, FolioConfig};
use folio_app::{CarouselBinding, EffectsBinding, NavBinding, Page, RevealBinding};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, MouseEventInit, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

/// Markup mounted at the top of the body, removed on drop
struct Fixture(Element);

impl Fixture {
    fn mount(html: &str) -> Self {
        let doc = document();
        let body = doc.body().unwrap();
        let root = doc.create_element("div").unwrap();
        root.set_inner_html(html);
        body.insert_before(&root, body.first_child().as_ref()).unwrap();
        Fixture(root)
    }

    fn find(&self, selector: &str) -> HtmlElement {
        self.find_all(selector).remove(0)
    }

    fn find_all(&self, selector: &str) -> Vec<HtmlElement> {
        let list = self.0.query_selector_all(selector).unwrap();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|node| node.dyn_into::<HtmlElement>().unwrap())
            .collect()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.0.remove();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn style(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap()
}

fn has_class(el: &HtmlElement, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Dispatch a mouse event at the element's top-left corner
fn mouse_at_corner(el: &HtmlElement, event: &str) {
    let rect = el.get_bounding_client_rect();
    let init = MouseEventInit::new();
    init.set_client_x(rect.left().round() as i32);
    init.set_client_y(rect.top().round() as i32);
    let event = MouseEvent::new_with_mouse_event_init_dict(event, &init).unwrap();
    el.dispatch_event(&event).unwrap();
}

fn scroll_window_to(y: f64) {
    window().scroll_to_with_x_and_y(0.0, y);
    window().dispatch_event(&Event::new("scroll").unwrap()).unwrap();
}

const CAROUSEL_HTML: &str = r#"
<div class="carousel" style="width: 900px">
  <div class="carousel-track" style="display: flex; gap: 24px">
    <div class="project-card" style="flex: 0 0 276px; width: 276px; height: 10px"></div>
    <div class="project-card" style="flex: 0 0 276px; width: 276px; height: 10px"></div>
    <div class="project-card" style="flex: 0 0 276px; width: 276px; height: 10px"></div>
    <div class="project-card" style="flex: 0 0 276px; width: 276px; height: 10px"></div>
    <div class="project-card" style="flex: 0 0 276px; width: 276px; height: 10px"></div>
    <div class="project-card" style="flex: 0 0 276px; width: 276px; height: 10px"></div>
  </div>
</div>
<button class="carousel-btn prev">prev</button>
<button class="carousel-btn next">next</button>
<span class="dot"></span><span class="dot"></span><span class="dot"></span><span class="dot"></span>
"#;

// ============================================================================
// Carousel
// ============================================================================

#[wasm_bindgen_test]
fn test_carousel_without_track_is_inert() {
    let body = document().body().unwrap();
    let before = body.inner_html();

    let result = CarouselBinding::attach(&window(), &document(), &FolioConfig::default());
    let Err(err) = result else {
        panic!("carousel attached without a track");
    };
    assert!(err.is_missing());
    assert_eq!(body.inner_html(), before);
}

#[wasm_bindgen_test]
fn test_carousel_without_cards_is_inert() {
    let fixture = Fixture::mount(r#"<div><div class="carousel-track"></div></div>"#);
    let track = fixture.find(".carousel-track");

    let result = CarouselBinding::attach(&window(), &document(), &FolioConfig::default());
    assert!(result.is_err());
    assert_eq!(style(&track, "transform"), "");
}

#[wasm_bindgen_test]
fn test_carousel_buttons_and_dots() {
    let fixture = Fixture::mount(CAROUSEL_HTML);
    let carousel = CarouselBinding::attach(&window(), &document(), &FolioConfig::default())
        .ok()
        .expect("carousel should attach");

    // 2 buttons + 4 dots + 3 touch + resize
    assert_eq!(carousel.listener_count(), 10);
    assert_eq!(carousel.max_index(), 3);

    let track = fixture.find(".carousel-track");
    let prev = fixture.find(".carousel-btn.prev");
    let next = fixture.find(".carousel-btn.next");
    let dots = fixture.find_all(".dot");

    assert_eq!(style(&prev, "opacity"), "0.5");
    assert_eq!(style(&next, "opacity"), "1");
    assert!(has_class(&dots[0], "active"));

    next.click();
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(style(&track, "transform"), "translateX(-300px)");
    assert_eq!(style(&prev, "opacity"), "1");
    assert!(has_class(&dots[1], "active"));
    assert!(!has_class(&dots[0], "active"));

    dots[3].click();
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(style(&next, "opacity"), "0.5");

    // dimmed but still clickable: no-op
    next.click();
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(style(&track, "transform"), "translateX(-900px)");

    prev.click();
    assert_eq!(carousel.current_index(), 2);
}

#[wasm_bindgen_test]
fn test_carousel_swipe_commits_one_step() {
    let _fixture = Fixture::mount(CAROUSEL_HTML);
    let carousel = CarouselBinding::attach(&window(), &document(), &FolioConfig::default())
        .ok()
        .expect("carousel should attach");

    carousel.send(CarouselEvent::TouchStart { x: 400.0 });
    carousel.send(CarouselEvent::TouchMove { x: 349.0 });
    assert_eq!(carousel.current_index(), 1);
    assert!(!carousel.is_dragging());

    carousel.send(CarouselEvent::TouchMove { x: 0.0 });
    assert_eq!(carousel.current_index(), 1);

    carousel.send(CarouselEvent::TouchStart { x: 400.0 });
    carousel.send(CarouselEvent::TouchMove { x: 351.0 });
    carousel.send(CarouselEvent::TouchEnd);
    assert_eq!(carousel.current_index(), 1);
    assert!(!carousel.is_dragging());
}

#[wasm_bindgen_test]
async fn test_carousel_resize_burst_repaginates_once_settled() {
    let fixture = Fixture::mount(CAROUSEL_HTML);
    let carousel = CarouselBinding::attach(&window(), &document(), &FolioConfig::default())
        .ok()
        .expect("carousel should attach");

    let prev = fixture.find(".carousel-btn.prev");
    let next = fixture.find(".carousel-btn.next");
    carousel.send(CarouselEvent::Jump(3));
    assert_eq!(style(&prev, "opacity"), "1");

    // wide enough for all six cards
    fixture
        .find(".carousel")
        .style()
        .set_property("width", "1800px")
        .unwrap();
    for _ in 0..3 {
        window().dispatch_event(&Event::new("resize").unwrap()).unwrap();
    }

    // still inside the debounce window
    assert_eq!(carousel.current_index(), 3);

    TimeoutFuture::new(250).await;
    assert_eq!(carousel.max_index(), 0);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(style(&prev, "opacity"), "0.5");
    assert_eq!(style(&next, "opacity"), "0.5");

    let transform = style(&fixture.find(".carousel-track"), "transform");
    assert!(
        transform == "translateX(-0px)" || transform == "translateX(0px)",
        "unexpected transform {}",
        transform
    );
}

// ============================================================================
// Navigation
// ============================================================================

#[wasm_bindgen_test]
fn test_nav_menu_toggle_and_link_close() {
    let fixture = Fixture::mount(
        r##"
<nav id="navbar">
  <button id="nav-toggle">menu</button>
  <ul id="nav-menu"><li><a class="nav-link" href="#about">About</a></li></ul>
</nav>
<section id="about" style="height: 50px"></section>
"##,
    );
    let nav = NavBinding::attach(&window(), &document(), &FolioConfig::default());
    assert!(nav.observes_sections());

    let toggle = fixture.find("#nav-toggle");
    let menu = fixture.find("#nav-menu");
    let link = fixture.find(".nav-link");

    toggle.click();
    assert_eq!(nav.menu_open(), Some(true));
    assert!(has_class(&toggle, "active"));
    assert!(has_class(&menu, "active"));

    link.click();
    assert_eq!(nav.menu_open(), Some(false));
    assert!(!has_class(&menu, "active"));

    // closing an already-closed menu is harmless
    link.click();
    assert_eq!(nav.menu_open(), Some(false));
    assert!(!has_class(&toggle, "active"));
}

#[wasm_bindgen_test]
async fn test_navbar_scrolled_class_follows_scroll() {
    let fixture = Fixture::mount(
        r#"<nav id="navbar" style="height: 40px"></nav><div style="height: 4000px"></div>"#,
    );
    let _nav = NavBinding::attach(&window(), &document(), &FolioConfig::default());
    let navbar = fixture.find("#navbar");
    assert!(!has_class(&navbar, "scrolled"));

    scroll_window_to(200.0);
    TimeoutFuture::new(250).await;
    assert!(has_class(&navbar, "scrolled"));

    scroll_window_to(0.0);
    TimeoutFuture::new(250).await;
    assert!(!has_class(&navbar, "scrolled"));
}

#[wasm_bindgen_test]
async fn test_nav_active_link_follows_section_in_band() {
    let fixture = Fixture::mount(
        r##"
<nav id="navbar">
  <a class="nav-link" href="#about">About</a>
  <a class="nav-link" href="#work">Work</a>
</nav>
<section id="about" style="height: 100vh"></section>
<section id="work" style="height: 100vh"></section>
<div style="height: 100vh"></div>
"##,
    );
    let nav = NavBinding::attach(&window(), &document(), &FolioConfig::default());
    let links = fixture.find_all(".nav-link");

    TimeoutFuture::new(200).await;
    assert_eq!(nav.active_link(), Some(0));
    assert!(has_class(&links[0], "active"));
    assert!(!has_class(&links[1], "active"));

    let work = fixture.find("#work");
    window().scroll_to_with_x_and_y(0.0, f64::from(work.offset_top()));
    TimeoutFuture::new(300).await;
    assert_eq!(nav.active_link(), Some(1));
    assert!(!has_class(&links[0], "active"));
    assert!(has_class(&links[1], "active"));
}

// ============================================================================
// Reveal
// ============================================================================

#[wasm_bindgen_test]
async fn test_reveal_stagger_and_first_intersection() {
    let fixture = Fixture::mount(
        r#"
<div class="about-card" style="height: 100px">one</div>
<div class="about-card" style="height: 100px">two</div>
"#,
    );
    let reveal = RevealBinding::attach(&document(), &FolioConfig::default());
    assert_eq!(reveal.candidate_count(), 2);

    let cards = fixture.find_all(".about-card");
    assert!(has_class(&cards[0], "animate-ready"));
    assert_eq!(style(&cards[1], "transition-delay"), "50ms");

    TimeoutFuture::new(300).await;
    assert!(has_class(&cards[0], "animate-in"));
    assert!(reveal.pending() < 2);
}

// ============================================================================
// Effects
// ============================================================================

#[wasm_bindgen_test]
fn test_effects_card_hover_and_float() {
    let fixture = Fixture::mount(
        r#"
<div class="expertise-card" style="width: 200px; height: 100px"></div>
<div class="preview-card"></div>
<div class="preview-card"></div>
"#,
    );
    let effects = EffectsBinding::attach(&document(), &FolioConfig::default());
    assert_eq!(effects.listener_count(), 3);
    assert_eq!(effects.floating_count(), 2);

    let card = fixture.find(".expertise-card");
    card.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert_eq!(style(&card, "transition-property"), "transform, box-shadow");
    assert_eq!(style(&card, "transition-duration"), "0.3s, 0.3s");

    // 200x100 card, pointer at the top-left corner
    mouse_at_corner(&card, "mousemove");
    assert_eq!(
        style(&card, "transform"),
        "perspective(1000px) rotateX(-2.5deg) rotateY(5deg) translateY(-4px)"
    );

    // browsers may add units to the zero angles on the way back out
    card.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    let rest = style(&card, "transform");
    assert!(!rest.contains("-2.5deg"));
    assert!(rest.contains("translateY(0"));

    let previews = fixture.find_all(".preview-card");
    assert_eq!(style(&previews[1], "animation-delay"), "300ms");
}

#[wasm_bindgen_test]
async fn test_effects_portrait_tilt_and_settle() {
    let fixture = Fixture::mount(
        r#"<div id="portrait-tilt" style="width: 200px; height: 200px"></div>"#,
    );
    let effects = EffectsBinding::attach(&document(), &FolioConfig::default());
    assert_eq!(effects.listener_count(), 3);

    let portrait = fixture.find("#portrait-tilt");
    portrait.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert_eq!(style(&portrait, "transition-duration"), "0.1s");

    mouse_at_corner(&portrait, "mousemove");
    assert_eq!(style(&portrait, "--rotateX"), "15deg");
    assert_eq!(style(&portrait, "--rotateY"), "-15deg");
    assert_eq!(
        style(&portrait, "transform"),
        "perspective(1000px) rotateX(15deg) rotateY(-15deg)"
    );

    portrait.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert_eq!(style(&portrait, "transition-duration"), "0.5s");
    assert_eq!(style(&portrait, "transform"), PORTRAIT_REST_TRANSFORM);

    TimeoutFuture::new(600).await;
    assert_eq!(style(&portrait, "transition-duration"), "0.1s");
}

// ============================================================================
// Page
// ============================================================================

#[wasm_bindgen_test]
fn test_page_components_attach_independently() {
    let fixture = Fixture::mount(
        r#"<button id="nav-toggle">menu</button><div id="nav-menu"></div>"#,
    );
    let page = Page::attach(&window(), &document(), &FolioConfig::default());
    assert!(page.carousel.is_none());

    fixture.find("#nav-toggle").click();
    assert_eq!(page.nav.menu_open(), Some(true));
    assert_eq!(page.reveal.candidate_count(), 0);
    assert_eq!(page.effects.listener_count(), 0);
}
