// crates/folio-core/src/limit.rs
// Rate limiting for high-frequency events (resize, scroll)
//
// Throttle bookkeeping only; the WASM bindings own the timers. Debounce
// needs no state beyond the pending timer, so it lives entirely there.

/// What the caller should do with a throttled call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Run immediately
    Now,
    /// Schedule one trailing run after this many milliseconds
    Later(u32),
    /// A trailing run is already scheduled
    Skip,
}

/// Leading + trailing throttle: at most one run per window, and the last
/// call inside a window is never lost.
#[derive(Debug)]
pub struct Throttle {
    limit_ms: f64,
    last_run: Option<f64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            last_run: None,
            trailing: false,
        }
    }

    /// Decide how to treat a call arriving at `now_ms`
    pub fn call(&mut self, now_ms: f64) -> Gate {
        match self.last_run {
            Some(last) if now_ms - last < self.limit_ms => {
                if self.trailing {
                    Gate::Skip
                } else {
                    self.trailing = true;
                    let wait = (self.limit_ms - (now_ms - last)).ceil().max(0.0);
                    Gate::Later(wait as u32)
                }
            }
            _ => {
                self.ran(now_ms);
                Gate::Now
            }
        }
    }

    /// Record that the callback ran (used by the trailing timer)
    pub fn ran(&mut self, now_ms: f64) {
        self.last_run = Some(now_ms);
        self.trailing = false;
    }
}
