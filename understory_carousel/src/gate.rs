// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-flight transition gate and the slider state it guards.
//!
//! At most one transition is in flight at a time. A request made while one is
//! animating is dropped, not queued: rapid input (a double key press, a timer
//! tick racing a swipe) collapses into the transition already running.
//!
//! ```
//! use understory_carousel::{Direction, TransitionGate};
//!
//! let mut gate = TransitionGate::new();
//! assert!(gate.request_transition(1, Direction::Right));
//! assert!(!gate.request_transition(2, Direction::Right));
//! assert_eq!(gate.state().current_index, 1);
//!
//! gate.complete_transition();
//! assert!(gate.request_transition(2, Direction::Right));
//! ```

use log::trace;

/// The direction of the most recent accepted transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No transition has happened yet.
    #[default]
    None,
    /// Moved towards a lower index (or wrapped backwards).
    Left,
    /// Moved towards a higher index (or wrapped forwards).
    Right,
}

/// A snapshot of slider state for rendering.
///
/// Snapshots are plain values; changing one has no effect on the controller
/// it came from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SliderState {
    /// Index of the current slide. Meaningless when there are no slides.
    pub current_index: usize,
    /// Direction of the last accepted transition.
    pub direction: Direction,
    /// `true` from an accepted transition until it is reported finished.
    pub is_animating: bool,
    /// `true` while a pointer gesture is in progress.
    pub is_dragging: bool,
}

/// Owns [`SliderState`] and admits one transition at a time.
#[derive(Clone, Debug, Default)]
pub struct TransitionGate {
    state: SliderState,
}

impl TransitionGate {
    /// Creates a gate at index 0 with no transition in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition to `index` if none is in flight.
    ///
    /// On acceptance the index, direction and animating flag change together.
    /// A rejected request leaves the state untouched.
    pub fn request_transition(&mut self, index: usize, direction: Direction) -> bool {
        if self.state.is_animating {
            trace!(
                "transition to {index} rejected: {} still animating",
                self.state.current_index
            );
            return false;
        }
        trace!(
            "transition {} -> {index} ({direction:?})",
            self.state.current_index
        );
        self.state.current_index = index;
        self.state.direction = direction;
        self.state.is_animating = true;
        true
    }

    /// Mark the in-flight transition as finished.
    ///
    /// Returns `false` (and does nothing) if no transition was in flight.
    pub fn complete_transition(&mut self) -> bool {
        let was_animating = self.state.is_animating;
        self.state.is_animating = false;
        was_animating
    }

    /// Record whether a pointer gesture is in progress.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.state.is_dragging = dragging;
    }

    /// Returns `true` if a new transition would be accepted.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.state.is_animating
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SliderState {
        self.state
    }
}
