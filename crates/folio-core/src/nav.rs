// crates/folio-core/src/nav.rs
// Navigation state: active-section tracking, navbar scroll mode, mobile menu

use crate::config::ActivePolicy;

/// One intersection observer entry, reduced to what the tracker needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHit {
    pub section_id: String,
    pub intersecting: bool,
}

impl SectionHit {
    pub fn new(section_id: impl Into<String>, intersecting: bool) -> Self {
        Self {
            section_id: section_id.into(),
            intersecting,
        }
    }
}

/// Keeps at most one navigation link active
#[derive(Debug, Clone)]
pub struct NavTracker {
    /// Raw `href` attribute of each link, in document order
    links: Vec<String>,
    /// Section ids in document order
    sections: Vec<String>,
    active: Option<usize>,
    policy: ActivePolicy,
}

impl NavTracker {
    pub fn new(links: Vec<String>, sections: Vec<String>, policy: ActivePolicy) -> Self {
        Self {
            links,
            sections,
            active: None,
            policy,
        }
    }

    /// Index of the link currently marked active
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Link pointing at `#section_id`, if any
    pub fn link_for(&self, section_id: &str) -> Option<usize> {
        self.links
            .iter()
            .position(|href| href.strip_prefix('#') == Some(section_id))
    }

    /// Apply one observer batch. Returns true when the links must be repainted,
    /// i.e. at least one entry was intersecting.
    ///
    /// An intersecting section with no matching link clears every link.
    pub fn apply_batch(&mut self, batch: &[SectionHit]) -> bool {
        let winner = match self.policy {
            ActivePolicy::LastInBatch => batch.iter().filter(|hit| hit.intersecting).last(),
            ActivePolicy::DocumentOrder => batch
                .iter()
                .filter(|hit| hit.intersecting)
                .min_by_key(|hit| self.document_position(&hit.section_id)),
        };

        match winner {
            Some(hit) => {
                self.active = self.link_for(&hit.section_id);
                true
            }
            None => false,
        }
    }

    fn document_position(&self, section_id: &str) -> usize {
        self.sections
            .iter()
            .position(|id| id == section_id)
            .unwrap_or(usize::MAX)
    }
}

/// Navbar "scrolled" mode
#[derive(Debug, Clone)]
pub struct NavbarState {
    threshold: f64,
    scrolled: bool,
}

impl NavbarState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns true when the mode flipped
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

/// Mobile menu open/closed flag
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close unconditionally (nav link clicked)
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Fragment target of an in-page anchor. A bare `#` targets nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}

/// Scroll position that puts a section just below the fixed navbar
pub fn anchor_scroll_top(target_offset_top: f64, nav_height: Option<f64>, fallback: f64) -> f64 {
    let nav_height = nav_height.filter(|h| *h > 0.0).unwrap_or(fallback);
    target_offset_top - nav_height
}
