// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless navigation for slide carousels.
//!
//! A carousel has more input sources than it has state: an auto-advance timer,
//! arrow keys, touch swipes, and mouse drags all want to change the one
//! current slide, often at nearly the same moment. This crate reconciles them
//! in a single owner, [`SliderController`], built from small parts:
//!
//! - [`IndexCycle`]: wrap-around index arithmetic.
//! - [`TransitionGate`]: admits one transition at a time and owns the
//!   [`SliderState`] snapshot.
//! - [`KeyboardBinding`]: a scoped key listener mapping arrows to [`Step`]s.
//! - Swipe tracking and classification from `understory_event_state`.
//! - A [`RepeatingTimer`](understory_timing::RepeatingTimer) from
//!   `understory_timing` for auto-advance, paused while a drag is in progress.
//!
//! It does **not** render anything or read a clock. Callers are expected to:
//! - Render [`SliderState::current_index`] and [`SliderState::direction`].
//! - Call [`SliderController::on_transition_finished`] exactly once when the
//!   animation for an accepted transition completes. Until then, every other
//!   navigation request is dropped.
//! - Forward pointer and key events, and poll the timer with a monotonic
//!   timestamp in milliseconds.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{CarouselConfig, Direction, SliderController};
//! use understory_event_state::keyboard::{Key, KeyListeners};
//!
//! let slides = ["welcome", "lesson", "quiz"];
//! let listeners = KeyListeners::new();
//! let mut carousel =
//!     SliderController::new(&slides, CarouselConfig::default(), &listeners, 0).unwrap();
//!
//! // A key press starts a transition...
//! assert!(carousel.on_key(Key::ArrowRight));
//! assert_eq!(carousel.state().current_index, 1);
//! assert_eq!(carousel.state().direction, Direction::Right);
//!
//! // ...and the timer firing mid-animation is dropped.
//! assert!(!carousel.poll_timer(7_000));
//! carousel.on_transition_finished();
//!
//! // A swipe to the left beyond the threshold moves forward.
//! carousel.on_gesture_start(400.0);
//! carousel.on_gesture_move(150.0);
//! assert!(carousel.on_gesture_end(7_500));
//! assert_eq!(carousel.current_slide(), Some(&"quiz"));
//!
//! // Disposal releases the key listener and stops the timer.
//! carousel.dispose();
//! assert!(listeners.is_empty());
//! assert!(!carousel.on_key(Key::ArrowLeft));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`CarouselConfig`].
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod cycle;
mod gate;
mod keyboard;

pub use config::{CarouselConfig, ConfigError, DEFAULT_DRAG_THRESHOLD_PX, DEFAULT_INTERVAL_MS};
pub use controller::SliderController;
pub use cycle::{IndexCycle, Step};
pub use gate::{Direction, SliderState, TransitionGate};
pub use keyboard::{KeyboardBinding, step_for_key};
