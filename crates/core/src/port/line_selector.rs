//! Line selection port
//!
//! Picks which line a newly accepted entry joins. The production policy is a
//! uniform draw that ignores current line lengths; it is *not* load
//! balancing, and an empty line can lose to a long one.

use crate::domain::LineIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Line selector interface (strategy object, injected into QueueState)
///
/// Called exactly once per accepted enqueue and never for dequeue.
#[cfg_attr(test, mockall::automock)]
pub trait LineSelector: Send + Sync {
    /// Choose a line in `0..line_count`
    fn select(&self, line_count: usize) -> LineIndex;
}

/// Uniform random selector backed by the thread-local RNG
pub struct RandomLineSelector;

impl LineSelector for RandomLineSelector {
    fn select(&self, line_count: usize) -> LineIndex {
        rand::thread_rng().gen_range(0..line_count)
    }
}

/// Uniform random selector with a fixed seed (reproducible sessions)
pub struct SeededLineSelector {
    rng: Mutex<StdRng>,
}

impl SeededLineSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl LineSelector for SeededLineSelector {
    fn select(&self, line_count: usize) -> LineIndex {
        // A poisoned lock still holds a usable RNG state
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..line_count)
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays a fixed sequence of line choices, then keeps returning the
    /// last one. Returns whatever it was given, even out-of-range values.
    pub struct ScriptedLineSelector {
        script: Mutex<VecDeque<LineIndex>>,
        last: Mutex<LineIndex>,
        calls: AtomicUsize,
    }

    impl ScriptedLineSelector {
        pub fn new(script: impl IntoIterator<Item = LineIndex>) -> Self {
            Self {
                script: Mutex::new(script.into_iter().collect()),
                last: Mutex::new(0),
                calls: AtomicUsize::new(0),
            }
        }

        /// Always pick the same line
        pub fn always(line: LineIndex) -> Self {
            Self::new([line])
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl LineSelector for ScriptedLineSelector {
        fn select(&self, _line_count: usize) -> LineIndex {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut last = self.last.lock().unwrap();
            if let Some(next) = self.script.lock().unwrap().pop_front() {
                *last = next;
            }
            *last
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::ScriptedLineSelector;
    use super::*;

    #[test]
    fn test_random_selector_stays_in_range() {
        let selector = RandomLineSelector;
        for _ in 0..500 {
            assert!(selector.select(3) < 3);
        }
    }

    #[test]
    fn test_random_selector_reaches_every_line() {
        let selector = RandomLineSelector;
        let mut seen = [false; 3];
        for _ in 0..1000 {
            seen[selector.select(3)] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_seeded_selector_is_reproducible() {
        let a = SeededLineSelector::new(42);
        let b = SeededLineSelector::new(42);

        let first: Vec<LineIndex> = (0..20).map(|_| a.select(3)).collect();
        let second: Vec<LineIndex> = (0..20).map(|_| b.select(3)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&line| line < 3));
    }

    #[test]
    fn test_scripted_selector_replays_then_repeats() {
        let selector = ScriptedLineSelector::new([0, 2, 1]);
        let picks: Vec<LineIndex> = (0..5).map(|_| selector.select(3)).collect();

        assert_eq!(picks, vec![0, 2, 1, 1, 1]);
        assert_eq!(selector.calls(), 5);
    }

    #[test]
    fn test_scripted_selector_always() {
        let selector = ScriptedLineSelector::always(2);
        assert!((0..4).all(|_| selector.select(3) == 2));
        assert_eq!(selector.calls(), 4);
    }
}
