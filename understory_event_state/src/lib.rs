// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for UI interactions that
//! require stateful tracking across multiple events:
//!
//! - [`swipe`]: Track a horizontal pointer gesture and classify it as a swipe
//!   once it crosses a distance threshold
//! - [`keyboard`]: A host-owned registry of key listeners with scoped,
//!   drop-released subscriptions
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event loop or windowing system
//!
//! The crate does not assume any particular UI framework or event system.
//! Hosts translate their native events (touch, mouse, DOM key names) into the
//! plain values these managers accept.
//!
//! ## Usage Patterns
//!
//! ### Swipe Classification
//!
//! Use [`swipe::SwipeState`] to record a gesture and [`swipe::classify`] to
//! turn it into a direction. Touch and mouse drags go through the same path:
//!
//! ```rust
//! use understory_event_state::swipe::{SwipeDirection, SwipeState};
//!
//! let mut swipe = SwipeState::default();
//! swipe.start(300.0);
//! swipe.update(250.0);
//! swipe.update(120.0);
//!
//! let sample = swipe.end().unwrap();
//! assert_eq!(sample.classify(100.0), Some(SwipeDirection::Left));
//! assert!(!swipe.is_tracking());
//! ```
//!
//! ### Scoped Key Listening
//!
//! Use [`keyboard::KeyListeners`] to hand out subscriptions that are released
//! when dropped:
//!
//! ```rust
//! use understory_event_state::keyboard::KeyListeners;
//!
//! let listeners = KeyListeners::new();
//! {
//!     let sub = listeners.subscribe();
//!     assert!(sub.is_active());
//!     assert_eq!(listeners.len(), 1);
//! }
//! assert!(listeners.is_empty());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod keyboard;
pub mod swipe;
