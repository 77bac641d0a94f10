// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe state helper: track a horizontal gesture and classify it against a threshold.
//!
//! ## Usage
//!
//! 1) Start a gesture by calling [`SwipeState::start`] with the pointer's X position.
//! 2) On each move event, call [`SwipeState::update`] to record the latest position.
//! 3) End the gesture with [`SwipeState::end`], which returns the recorded
//!    [`SwipeSample`] and resets state.
//! 4) Call [`SwipeSample::classify`] (or the free [`classify`]) to get a direction.
//!
//! Directions name where the pointer travelled: a pointer that ends to the left
//! of where it started is a [`SwipeDirection::Left`] swipe.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::swipe::{SwipeDirection, SwipeState};
//!
//! let mut swipe = SwipeState::default();
//!
//! // Start at x = 10, drag to x = 150.
//! swipe.start(10.0);
//! assert!(swipe.is_tracking());
//! assert_eq!(swipe.update(150.0), Some(140.0));
//!
//! let sample = swipe.end().unwrap();
//! assert_eq!(sample.delta(), -140.0);
//! assert_eq!(sample.classify(100.0), Some(SwipeDirection::Right));
//! assert_eq!(sample.classify(200.0), None);
//! ```

use log::trace;

/// Direction of travel of a classified swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// The pointer ended left of where it started.
    Left,
    /// The pointer ended right of where it started.
    Right,
}

/// Classify a horizontal gesture from its start and end X positions.
///
/// With `delta = start_x - end_x`:
/// - `delta > threshold` is a [`SwipeDirection::Left`] swipe.
/// - `delta < -threshold` is a [`SwipeDirection::Right`] swipe.
/// - Anything else, including a displacement of exactly `threshold`, is not a swipe.
///
/// Non-finite inputs never classify.
///
/// ```
/// use understory_event_state::swipe::{classify, SwipeDirection};
///
/// assert_eq!(classify(0.0, 100.0, 100.0), None);
/// assert_eq!(classify(0.0, 101.0, 100.0), Some(SwipeDirection::Right));
/// assert_eq!(classify(0.0, -101.0, 100.0), Some(SwipeDirection::Left));
/// ```
#[must_use]
pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    let delta = start_x - end_x;
    // NaN fails both comparisons and falls through to `None`.
    if delta > threshold {
        Some(SwipeDirection::Left)
    } else if delta < -threshold {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

/// The start and last recorded positions of a finished gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeSample {
    /// X position where the gesture started.
    pub start_x: f64,
    /// Last X position recorded before the gesture ended.
    pub last_x: f64,
}

impl SwipeSample {
    /// Displacement from start to last position, positive when moving left.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.start_x - self.last_x
    }

    /// Classify this sample against `threshold`. See [`classify`].
    #[must_use]
    pub fn classify(&self, threshold: f64) -> Option<SwipeDirection> {
        let direction = classify(self.start_x, self.last_x, threshold);
        trace!(
            "swipe {} -> {} (threshold {threshold}): {direction:?}",
            self.start_x, self.last_x
        );
        direction
    }
}

/// Tracks a single horizontal gesture between start and end events.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SwipeState {
    /// X position where the current gesture started.
    pub start_x: Option<f64>,
    /// Last recorded X position during the gesture.
    pub last_x: Option<f64>,
}

impl SwipeState {
    /// Start tracking a new gesture at `x`, discarding any gesture in progress.
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
        self.last_x = Some(x);
    }

    /// Record a new position, returning the movement since the previous one.
    ///
    /// Returns `None` when no gesture is being tracked.
    pub fn update(&mut self, x: f64) -> Option<f64> {
        self.start_x?;
        let delta = self.last_x.map(|last| x - last);
        self.last_x = Some(x);
        delta
    }

    /// Offset of the last recorded position from the start position.
    #[must_use]
    pub fn total_offset(&self) -> Option<f64> {
        let start = self.start_x?;
        Some(self.last_x.unwrap_or(start) - start)
    }

    /// The gesture recorded so far, if one is being tracked.
    #[must_use]
    pub fn sample(&self) -> Option<SwipeSample> {
        let start_x = self.start_x?;
        Some(SwipeSample {
            start_x,
            last_x: self.last_x.unwrap_or(start_x),
        })
    }

    /// End the current gesture, returning what was recorded and resetting state.
    pub fn end(&mut self) -> Option<SwipeSample> {
        let sample = self.sample();
        self.start_x = None;
        self.last_x = None;
        sample
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary_is_exclusive() {
        assert_eq!(classify(0.0, 100.0, 100.0), None);
        assert_eq!(classify(0.0, -100.0, 100.0), None);
        assert_eq!(classify(0.0, 101.0, 100.0), Some(SwipeDirection::Right));
        assert_eq!(classify(0.0, -101.0, 100.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn small_movement_is_not_a_swipe() {
        assert_eq!(classify(500.0, 480.0, 100.0), None);
        assert_eq!(classify(500.0, 500.0, 100.0), None);
    }

    #[test]
    fn zero_threshold_classifies_any_movement() {
        assert_eq!(classify(10.0, 9.5, 0.0), Some(SwipeDirection::Left));
        assert_eq!(classify(10.0, 10.5, 0.0), Some(SwipeDirection::Right));
        assert_eq!(classify(10.0, 10.0, 0.0), None);
    }

    #[test]
    fn non_finite_input_never_classifies() {
        assert_eq!(classify(f64::NAN, 500.0, 100.0), None);
        assert_eq!(classify(0.0, f64::NAN, 100.0), None);
        assert_eq!(classify(0.0, 500.0, f64::NAN), None);
    }

    #[test]
    fn new_swipe_state_is_not_tracking() {
        let swipe = SwipeState::default();
        assert!(!swipe.is_tracking());
        assert_eq!(swipe.sample(), None);
        assert_eq!(swipe.total_offset(), None);
    }

    #[test]
    fn start_sets_both_positions() {
        let mut swipe = SwipeState::default();
        swipe.start(42.0);

        assert_eq!(swipe.start_x, Some(42.0));
        assert_eq!(swipe.start_x, swipe.last_x);
        assert_eq!(swipe.total_offset(), Some(0.0));
    }

    #[test]
    fn update_tracks_incremental_deltas() {
        let mut swipe = SwipeState::default();
        swipe.start(0.0);

        assert_eq!(swipe.update(5.0), Some(5.0));
        assert_eq!(swipe.update(3.0), Some(-2.0));
        assert_eq!(swipe.update(-20.0), Some(-23.0));
        assert_eq!(swipe.total_offset(), Some(-20.0));
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut swipe = SwipeState::default();

        assert_eq!(swipe.update(15.0), None);
        assert!(swipe.last_x.is_none());
    }

    #[test]
    fn update_with_missing_last_position_records_it() {
        let mut swipe = SwipeState {
            start_x: Some(10.0),
            last_x: None,
        };

        assert_eq!(swipe.update(15.0), None);
        assert_eq!(swipe.last_x, Some(15.0));
    }

    #[test]
    fn end_returns_sample_and_resets() {
        let mut swipe = SwipeState::default();
        swipe.start(200.0);
        swipe.update(50.0);

        let sample = swipe.end();
        assert_eq!(
            sample,
            Some(SwipeSample {
                start_x: 200.0,
                last_x: 50.0
            })
        );
        assert!(!swipe.is_tracking());
        assert!(swipe.last_x.is_none());
    }

    #[test]
    fn end_without_moves_uses_start_position() {
        let mut swipe = SwipeState::default();
        swipe.start(75.0);

        let sample = swipe.end().unwrap();
        assert_eq!(sample.delta(), 0.0);
        assert_eq!(sample.classify(100.0), None);
    }

    #[test]
    fn end_on_fresh_state_is_safe() {
        let mut swipe = SwipeState::default();
        assert_eq!(swipe.end(), None);
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn start_overwrites_previous_gesture() {
        let mut swipe = SwipeState::default();
        swipe.start(0.0);
        swipe.update(300.0);

        swipe.start(1_000.0);
        assert_eq!(swipe.start_x, Some(1_000.0));
        assert_eq!(swipe.total_offset(), Some(0.0));
    }
}
