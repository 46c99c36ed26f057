// crates/folio-core/src/reveal.rs
// One-shot reveal-on-scroll bookkeeping and hero intro styles

/// Class applied before an element has been seen
pub const READY_CLASS: &str = "animate-ready";
/// Class applied on first intersection
pub const REVEALED_CLASS: &str = "animate-in";

/// Hero intro: hidden starting state
pub const HERO_HIDDEN_OPACITY: &str = "0";
pub const HERO_HIDDEN_TRANSFORM: &str = "translateY(30px)";
/// Hero intro: settled state
pub const HERO_SHOWN_OPACITY: &str = "1";
pub const HERO_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const HERO_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";

/// Tracks which candidates have been revealed. Flags only go false -> true.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    stagger_ms: u32,
}

impl RevealTracker {
    pub fn new(count: usize, stagger_ms: u32) -> Self {
        Self {
            revealed: vec![false; count],
            stagger_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// `transition-delay` for the candidate at `index`
    pub fn transition_delay(&self, index: usize) -> String {
        let ms = (index as u64).saturating_mul(u64::from(self.stagger_ms));
        format!("{}ms", ms)
    }

    /// Record an intersection. True only the first time, which is when the
    /// caller applies the reveal and stops observing the element.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Candidates still waiting to be seen
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_grows_with_index() {
        let tracker = RevealTracker::new(4, 50);
        assert_eq!(tracker.transition_delay(0), "0ms");
        assert_eq!(tracker.transition_delay(3), "150ms");
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(3, 50);
        assert!(tracker.reveal(1));
        assert!(!tracker.reveal(1));
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_revealed(0));
        assert_eq!(tracker.pending(), 2);
    }

    #[test]
    fn test_reveal_out_of_range() {
        let mut tracker = RevealTracker::new(1, 50);
        assert!(!tracker.reveal(5));
        assert!(!tracker.is_revealed(5));
    }

    #[test]
    fn test_all_revealed() {
        let mut tracker = RevealTracker::new(2, 50);
        tracker.reveal(0);
        tracker.reveal(1);
        assert_eq!(tracker.pending(), 0);
        assert_eq!(tracker.len(), 2);
        assert!(!tracker.is_empty());
    }
}
