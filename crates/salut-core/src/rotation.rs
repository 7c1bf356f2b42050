//! Rotation state driving the greeting cycler and the live clock.

use std::time::Duration;

use serde::Serialize;

/// Interval between clock updates.
pub const CLOCK_TICK: Duration = Duration::from_millis(1000);

/// Interval between automatic greeting rotations.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(3000);

/// The mutable pair behind the display: greeting index and clock text.
///
/// The time slot starts out empty. Until the first clock tick lands the
/// screen shows a skeleton placeholder instead of live values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationState {
    index: usize,
    len: usize,
    time: Option<String>,
}

impl RotationState {
    /// Creates a fresh state for a catalog of `len` greetings.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            time: None,
        }
    }

    /// Current greeting index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advances the greeting index by one, wrapping at the catalog length.
    ///
    /// Used by both the periodic cycler and the manual trigger.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        tracing::trace!("greeting index advanced to {}", self.index);
        self.index
    }

    /// Formatted clock text, if the first tick has landed.
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// Publishes a new formatted clock value.
    pub fn set_time(&mut self, time: String) {
        self.time = Some(time);
    }

    /// Whether live values are available yet.
    pub fn is_live(&self) -> bool {
        self.time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_without_time() {
        let state = RotationState::new(10);
        assert_eq!(state.index(), 0);
        assert_eq!(state.time(), None);
        assert!(!state.is_live());
    }

    #[test]
    fn test_advance_wraps_at_len() {
        let mut state = RotationState::new(3);
        assert_eq!(state.advance(), 1);
        assert_eq!(state.advance(), 2);
        assert_eq!(state.advance(), 0);
    }

    #[test]
    fn test_n_rotations_is_n_mod_len() {
        for n in [1usize, 3, 10, 13, 25] {
            let mut state = RotationState::new(10);
            for _ in 0..n {
                state.advance();
            }
            assert_eq!(state.index(), n % 10, "after {n} rotations");
        }
    }

    #[test]
    fn test_set_time_goes_live() {
        let mut state = RotationState::new(10);
        state.set_time("12:34:56".to_string());
        assert!(state.is_live());
        assert_eq!(state.time(), Some("12:34:56"));
    }

    #[test]
    fn test_empty_catalog_does_not_panic() {
        let mut state = RotationState::new(0);
        assert_eq!(state.advance(), 0);
    }
}
