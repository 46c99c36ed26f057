// crates/folio-core/src/carousel.rs
// Paginated carousel state machine
//
// Positions run 0..=max_index. Every mutator clamps, so out-of-range input
// is a silent no-op rather than an error.

use crate::config::CarouselConfig;

/// Input the carousel reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    Next,
    Prev,
    /// Dot selection; any integer is accepted and clamped
    Jump(i64),
    Resize { container_width: f64 },
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
}

/// In-progress touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub active: bool,
    pub start_x: f64,
}

/// Everything the DOM needs to paint the current position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselView {
    pub offset_px: f64,
    pub active_dot: usize,
    pub prev_opacity: f64,
    pub next_opacity: f64,
}

impl CarouselView {
    /// CSS transform for the track
    pub fn transform(&self) -> String {
        format!("translateX(-{}px)", self.offset_px)
    }
}

/// How many cards fit in the container; never less than one
pub fn visible_count(container_width: f64, card_width: f64) -> usize {
    if !(card_width > 0.0) || !(container_width > 0.0) {
        return 1;
    }
    ((container_width / card_width).floor() as usize).max(1)
}

/// Carousel position and gesture state
#[derive(Debug, Clone)]
pub struct CarouselState {
    item_count: usize,
    card_width: f64,
    visible: usize,
    current_index: usize,
    max_index: usize,
    drag: DragState,
    config: CarouselConfig,
}

impl CarouselState {
    /// Build the state for `item_count` cards. Returns `None` for an empty
    /// carousel, which has no behavior at all.
    ///
    /// `card_width` is the measured width of the first card; the configured
    /// gap is added here and the result is never re-measured.
    pub fn new(
        item_count: usize,
        card_width: f64,
        container_width: f64,
        config: CarouselConfig,
    ) -> Option<Self> {
        if item_count == 0 {
            return None;
        }
        let card_width = card_width.max(0.0) + config.card_gap;
        let visible = visible_count(container_width, card_width);
        Some(Self {
            item_count,
            card_width,
            visible,
            current_index: 0,
            max_index: item_count.saturating_sub(visible),
            drag: DragState::default(),
            config,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn card_width(&self) -> f64 {
        self.card_width
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Feed one event. Returns true when the view changed and must be redrawn.
    pub fn update(&mut self, event: CarouselEvent) -> bool {
        match event {
            CarouselEvent::Next => self.advance(),
            CarouselEvent::Prev => self.retreat(),
            CarouselEvent::Jump(i) => self.jump_to(i),
            CarouselEvent::Resize { container_width } => self.resize(container_width),
            CarouselEvent::TouchStart { x } => {
                self.touch_start(x);
                false
            }
            CarouselEvent::TouchMove { x } => self.touch_move(x),
            CarouselEvent::TouchEnd => {
                self.touch_end();
                false
            }
        }
    }

    /// Move one page forward; no-op at the last position
    pub fn advance(&mut self) -> bool {
        if self.current_index < self.max_index {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Move one page back; no-op at the first position
    pub fn retreat(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`, clamped into `0..=max_index`
    pub fn jump_to(&mut self, index: i64) -> bool {
        let target = usize::try_from(index.max(0))
            .unwrap_or(usize::MAX)
            .min(self.max_index);
        let changed = target != self.current_index;
        self.current_index = target;
        changed
    }

    /// Recompute visible count and max_index for a new container width.
    /// Returns true when the position was clamped or the end cue moved.
    pub fn resize(&mut self, container_width: f64) -> bool {
        let visible = visible_count(container_width, self.card_width);
        let max_index = self.item_count.saturating_sub(visible);
        let old = (self.current_index, self.max_index);

        self.visible = visible;
        self.max_index = max_index;
        if self.current_index > max_index {
            self.current_index = max_index;
        }

        old != (self.current_index, self.max_index)
    }

    pub fn touch_start(&mut self, x: f64) {
        self.drag = DragState {
            active: true,
            start_x: x,
        };
    }

    /// Commit at most one page per gesture once travel exceeds the
    /// threshold. Leftward travel (start - current > 0) advances.
    pub fn touch_move(&mut self, x: f64) -> bool {
        if !self.drag.active {
            return false;
        }
        let delta = self.drag.start_x - x;
        if delta.abs() <= self.config.swipe_threshold {
            return false;
        }

        self.drag.active = false;
        if delta > 0.0 {
            self.advance()
        } else {
            self.retreat()
        }
    }

    pub fn touch_end(&mut self) {
        self.drag.active = false;
    }

    /// Paint data for the current position
    pub fn view(&self) -> CarouselView {
        let dim = self.config.dim_opacity;
        CarouselView {
            offset_px: self.current_index as f64 * self.card_width,
            active_dot: self.current_index,
            prev_opacity: if self.current_index == 0 { dim } else { 1.0 },
            next_opacity: if self.current_index >= self.max_index { dim } else { 1.0 },
        }
    }
}
