// crates/folio-core/src/config.rs
// Page configuration, read from an inline JSON block (id="folio-config")

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Top-level config structure. Every field has a default, so `{}` is valid.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FolioConfig {
    /// Console log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
    pub carousel: CarouselConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub tilt: TiltConfig,
    pub selectors: Selectors,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            carousel: CarouselConfig::default(),
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
            tilt: TiltConfig::default(),
            selectors: Selectors::default(),
        }
    }
}

/// Carousel section
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    /// Gap between cards, added to the measured card width
    pub card_gap: f64,
    /// Horizontal travel a touch must exceed before a page turn
    pub swipe_threshold: f64,
    /// Opacity of prev/next controls at either end of the strip
    pub dim_opacity: f64,
    pub resize_debounce_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_gap: 24.0,
            swipe_threshold: 50.0,
            dim_opacity: 0.5,
            resize_debounce_ms: 200,
        }
    }
}

/// Which section wins when several intersect in one observer batch
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivePolicy {
    /// Last intersecting entry in the batch
    #[default]
    LastInBatch,
    /// Intersecting section that comes first in the document
    DocumentOrder,
}

/// Navigation section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset past which the navbar switches to "scrolled" mode
    pub scroll_threshold: f64,
    pub scroll_throttle_ms: u32,
    /// Observer margin restricting the active band to the middle of the viewport
    pub root_margin: String,
    pub active_policy: ActivePolicy,
    /// Used for anchor scrolling when the navbar is absent or has no height
    pub fallback_nav_height: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            scroll_throttle_ms: 100,
            root_margin: "-20% 0px -30% 0px".to_string(),
            active_policy: ActivePolicy::LastInBatch,
            fallback_nav_height: 80.0,
        }
    }
}

/// Reveal-on-scroll section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    pub root_margin: String,
    /// Transition delay added per candidate index
    pub stagger_ms: u32,
    pub hero_content_delay_ms: u32,
    pub hero_visual_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -10% 0px".to_string(),
            stagger_ms: 50,
            hero_content_delay_ms: 100,
            hero_visual_delay_ms: 300,
        }
    }
}

/// Tilt effect section
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct TiltConfig {
    /// Pointer offset (px) per degree of card rotation
    pub card_divisor: f64,
    /// Portrait rotation at the element edge, in degrees
    pub portrait_max_deg: f64,
    pub portrait_settle_ms: u32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            card_divisor: 20.0,
            portrait_max_deg: 15.0,
            portrait_settle_ms: 500,
        }
    }
}

/// Document conventions the bindings look for
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Selectors {
    pub navbar: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub sections: String,
    pub anchors: String,
    pub carousel_track: String,
    pub carousel_cards: String,
    pub carousel_prev: String,
    pub carousel_next: String,
    pub carousel_dots: String,
    pub reveal: String,
    pub hero_content: String,
    pub hero_visual: String,
    pub tilt_cards: String,
    pub portrait: String,
    pub preview_cards: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: "#navbar".to_string(),
            nav_toggle: "#nav-toggle".to_string(),
            nav_menu: "#nav-menu".to_string(),
            nav_links: ".nav-link".to_string(),
            sections: "section[id]".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            carousel_track: ".carousel-track".to_string(),
            carousel_cards: ".project-card".to_string(),
            carousel_prev: ".carousel-btn.prev".to_string(),
            carousel_next: ".carousel-btn.next".to_string(),
            carousel_dots: ".dot".to_string(),
            reveal: [
                ".about-card",
                ".expertise-card",
                ".experience-card",
                ".impact-card",
                ".credential-item",
                ".preview-card",
                ".contact-method",
                ".social-link",
                ".section-header",
                ".about-header",
                ".writing-content",
                ".contact-content",
            ]
            .join(", "),
            hero_content: ".hero-content".to_string(),
            hero_visual: ".hero-visual".to_string(),
            tilt_cards: ".expertise-card, .impact-card:not(.featured)".to_string(),
            portrait: "#portrait-tilt".to_string(),
            preview_cards: ".preview-card".to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a JSON config block
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional config block, falling back to defaults on any problem
    pub fn load(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|s| !s.is_empty()) else {
            debug!("No folio config block, using defaults");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => {
                debug!("Loaded folio config from page");
                config
            }
            Err(e) => {
                warn!("Ignoring folio config: {}", e);
                Self::default()
            }
        }
    }

    /// Reject values that would break the state machines
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("carousel.swipe_threshold", self.carousel.swipe_threshold),
            ("nav.scroll_threshold", self.nav.scroll_threshold),
            ("tilt.card_divisor", self.tilt.card_divisor),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(FolioError::Invalid(format!("{} must be positive", name)));
            }
        }
        if !(self.carousel.card_gap >= 0.0) {
            return Err(FolioError::Invalid("carousel.card_gap must not be negative".to_string()));
        }
        if !(0.0..=1.0).contains(&self.carousel.dim_opacity) {
            return Err(FolioError::Invalid("carousel.dim_opacity must be within 0..=1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(FolioError::Invalid("reveal.threshold must be within 0..=1".to_string()));
        }
        Ok(())
    }

    /// Console log level, defaulting to Info for unknown names
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
