// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! UI state machines often need "do this again every N milliseconds" without
//! owning a thread, an async runtime, or a platform timer. This crate models
//! such timers as plain data driven by the host:
//!
//! - The host passes a monotonic timestamp (`now_ms`) to every operation that
//!   needs one. The crate never reads a clock.
//! - The host polls the timer from its event loop, or arms a single native
//!   timer for [`RepeatingTimer::next_deadline`] and polls when it fires.
//! - Cancellation is synchronous: once [`RepeatingTimer::pause`] or
//!   [`RepeatingTimer::stop`] returns, no later poll reports a firing until the
//!   timer is explicitly re-armed.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::RepeatingTimer;
//!
//! let mut timer = RepeatingTimer::new();
//! timer.start(1_000, 0);
//! assert_eq!(timer.next_deadline(), Some(1_000));
//!
//! assert!(!timer.poll(999));
//! assert!(timer.poll(1_000));
//! assert_eq!(timer.next_deadline(), Some(2_000));
//!
//! // Suspend while the user interacts, then re-arm from the resume time.
//! timer.pause();
//! assert!(!timer.poll(5_000));
//! timer.resume(5_000);
//! assert_eq!(timer.next_deadline(), Some(6_000));
//!
//! // Stopping is terminal.
//! timer.stop();
//! timer.resume(6_000);
//! assert!(!timer.poll(10_000));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod repeating;

pub use repeating::{RepeatingTimer, TimerState};
