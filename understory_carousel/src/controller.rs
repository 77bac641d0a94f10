// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: one owner for every input source.
//!
//! [`SliderController`] reconciles four independent inputs into a single
//! current slide:
//!
//! - the auto-advance timer, polled with [`SliderController::poll_timer`],
//! - arrow keys, delivered with [`SliderController::on_key`],
//! - touch and mouse drags, delivered with the `on_gesture_*` methods,
//! - direct jumps with [`SliderController::go_to_slide`].
//!
//! Every navigation goes through a [`TransitionGate`], so only one transition
//! animates at a time and the presentation layer must report its end with
//! [`SliderController::on_transition_finished`].
//!
//! ## State machine
//!
//! The state is the product of `{Idle, Animating} × {NotDragging, Dragging}`:
//!
//! - An accepted navigation moves `Idle → Animating`.
//! - [`on_transition_finished`](SliderController::on_transition_finished)
//!   moves `Animating → Idle`.
//! - [`on_gesture_start`](SliderController::on_gesture_start) moves to
//!   `Dragging` and pauses the timer.
//! - [`on_gesture_end`](SliderController::on_gesture_end) moves to
//!   `NotDragging` and resumes the timer, whether or not the gesture navigated.
//!
//! [`dispose`](SliderController::dispose) stops the timer and releases the
//! key listener; afterwards every operation is inert.

use log::{debug, trace};
use understory_event_state::keyboard::{Key, KeyListeners};
use understory_event_state::swipe::{SwipeDirection, SwipeState};
use understory_timing::RepeatingTimer;

use crate::{
    CarouselConfig, ConfigError, Direction, IndexCycle, KeyboardBinding, SliderState, Step,
    TransitionGate,
};

/// Navigation controller over a borrowed, fixed sequence of slides.
///
/// Slides are opaque to the controller; it only reads their count and hands
/// them back through [`slides`](Self::slides) and
/// [`current_slide`](Self::current_slide).
///
/// Operations never fail. A request that cannot be honored (a transition is
/// still animating, the index is out of range, there is nowhere to move to,
/// or the controller is disposed) is a silent no-op, and the navigation
/// methods return `false`.
#[derive(Debug)]
pub struct SliderController<'a, S> {
    slides: &'a [S],
    cycle: IndexCycle,
    config: CarouselConfig,
    gate: TransitionGate,
    swipe: SwipeState,
    timer: RepeatingTimer,
    keyboard: KeyboardBinding,
    disposed: bool,
}

impl<'a, S> SliderController<'a, S> {
    /// Create a controller at slide 0.
    ///
    /// Starts the auto-advance timer from `now_ms` if `config.autoplay` is set
    /// and binds the arrow keys through `listeners` if `config.keyboard` is set.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`CarouselConfig::validate`].
    pub fn new(
        slides: &'a [S],
        config: CarouselConfig,
        listeners: &KeyListeners,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut timer = RepeatingTimer::new();
        if config.autoplay {
            timer.start(config.auto_advance_interval_ms, now_ms);
        }
        let mut keyboard = KeyboardBinding::new();
        if config.keyboard {
            keyboard.acquire(listeners);
        }
        debug!("carousel created with {} slides", slides.len());

        Ok(Self {
            slides,
            cycle: IndexCycle::new(slides.len()),
            config,
            gate: TransitionGate::new(),
            swipe: SwipeState::default(),
            timer,
            keyboard,
            disposed: false,
        })
    }

    /// Move to the following slide, wrapping from last to first.
    pub fn next_slide(&mut self) -> bool {
        self.step(Step::Next)
    }

    /// Move to the preceding slide, wrapping from first to last.
    pub fn prev_slide(&mut self) -> bool {
        self.step(Step::Previous)
    }

    /// Jump to `index`.
    ///
    /// The direction is [`Direction::Right`] when `index` is after the current
    /// slide and [`Direction::Left`] otherwise. Jumping to the current slide,
    /// or out of range, does nothing.
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        if self.disposed {
            return false;
        }
        let Some(target) = self.cycle.go_to(index) else {
            trace!("go to {index} ignored: only {} slides", self.len());
            return false;
        };
        let current = self.gate.state().current_index;
        if target == current {
            return false;
        }
        let direction = if target > current {
            Direction::Right
        } else {
            Direction::Left
        };
        self.gate.request_transition(target, direction)
    }

    /// Report that the presentation layer finished animating the last transition.
    pub fn on_transition_finished(&mut self) {
        if self.disposed {
            return;
        }
        self.gate.complete_transition();
    }

    /// A touch or mouse drag started at horizontal position `x`.
    ///
    /// Pauses auto-advance until [`on_gesture_end`](Self::on_gesture_end).
    pub fn on_gesture_start(&mut self, x: f64) {
        if self.disposed {
            return;
        }
        self.swipe.start(x);
        self.timer.pause();
        self.gate.set_dragging(true);
    }

    /// The pointer of the current drag moved to `x`.
    pub fn on_gesture_move(&mut self, x: f64) {
        if self.disposed {
            return;
        }
        self.swipe.update(x);
    }

    /// The current drag ended.
    ///
    /// A swipe to the left beyond the drag threshold moves to the next slide,
    /// one to the right moves to the previous slide. Auto-advance resumes from
    /// `now_ms` in every case. Returns `true` if the gesture navigated.
    pub fn on_gesture_end(&mut self, now_ms: u64) -> bool {
        if self.disposed {
            return false;
        }
        let swiped = self
            .swipe
            .end()
            .and_then(|sample| sample.classify(self.config.drag_threshold_px));
        let navigated = match swiped {
            Some(SwipeDirection::Left) => self.step(Step::Next),
            Some(SwipeDirection::Right) => self.step(Step::Previous),
            None => false,
        };
        self.timer.resume(now_ms);
        self.gate.set_dragging(false);
        navigated
    }

    /// Deliver a key press from the host.
    ///
    /// Only acts while the keyboard binding is held.
    pub fn on_key(&mut self, key: Key) -> bool {
        if self.disposed {
            return false;
        }
        match self.keyboard.step_for(key) {
            Some(step) => self.step(step),
            None => false,
        }
    }

    /// Let the auto-advance timer fire if its deadline has passed.
    ///
    /// A tick that arrives while a transition is animating is dropped.
    pub fn poll_timer(&mut self, now_ms: u64) -> bool {
        if self.disposed || !self.timer.poll(now_ms) {
            return false;
        }
        trace!("auto-advance tick at {now_ms}");
        self.step(Step::Next)
    }

    /// Stop the timer and release the key listener. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.timer.stop();
        self.keyboard.release();
        self.swipe.end();
        self.gate.set_dragging(false);
        self.disposed = true;
        debug!("carousel disposed");
    }

    /// A snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SliderState {
        self.gate.state()
    }

    /// The slides being navigated.
    #[must_use]
    pub fn slides(&self) -> &'a [S] {
        self.slides
    }

    /// The current slide, or `None` if there are no slides.
    #[must_use]
    pub fn current_slide(&self) -> Option<&'a S> {
        self.slides.get(self.gate.state().current_index)
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The configuration this controller was created with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns `true` while arrow keys are bound.
    #[must_use]
    pub fn is_keyboard_bound(&self) -> bool {
        self.keyboard.is_bound()
    }

    /// Returns `true` while the auto-advance timer has a pending deadline.
    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_running()
    }

    /// When the host should next call [`poll_timer`](Self::poll_timer), if ever.
    #[must_use]
    pub fn next_timer_deadline(&self) -> Option<u64> {
        self.timer.next_deadline()
    }

    fn step(&mut self, step: Step) -> bool {
        if self.disposed {
            return false;
        }
        let current = self.gate.state().current_index;
        let Some(target) = self.cycle.step(current, step) else {
            return false;
        };
        // A single slide has nowhere to go.
        if target == current {
            return false;
        }
        let direction = match step {
            Step::Next => Direction::Right,
            Step::Previous => Direction::Left,
        };
        self.gate.request_transition(target, direction)
    }
}
