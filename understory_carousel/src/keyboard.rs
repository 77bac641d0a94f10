// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::{debug, trace};
use understory_event_state::keyboard::{Key, KeyListeners, KeySubscription};

use crate::Step;

/// Maps horizontal arrow keys to navigation steps.
///
/// `ArrowLeft` is [`Step::Previous`], `ArrowRight` is [`Step::Next`]; every
/// other key is ignored.
#[must_use]
pub fn step_for_key(key: Key) -> Option<Step> {
    match key {
        Key::ArrowLeft => Some(Step::Previous),
        Key::ArrowRight => Some(Step::Next),
        _ => None,
    }
}

/// A scoped hold on one key listener for the lifetime of a carousel.
///
/// Keys translate to steps only while the binding holds an active
/// subscription. The subscription is released by [`release`](Self::release)
/// or when the binding is dropped.
#[derive(Debug, Default)]
pub struct KeyboardBinding {
    subscription: Option<KeySubscription>,
}

impl KeyboardBinding {
    /// Creates an unbound binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `listeners`. Returns `false` if already bound.
    pub fn acquire(&mut self, listeners: &KeyListeners) -> bool {
        if self.subscription.is_some() {
            return false;
        }
        let subscription = listeners.subscribe();
        debug!("keyboard bound as listener {}", subscription.id().get());
        self.subscription = Some(subscription);
        true
    }

    /// Drop the subscription, if any.
    pub fn release(&mut self) {
        if self.subscription.take().is_some() {
            debug!("keyboard unbound");
        }
    }

    /// Returns `true` while holding an active subscription.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(KeySubscription::is_active)
    }

    /// The step `key` requests, or `None` if unbound or the key is not bound to navigation.
    #[must_use]
    pub fn step_for(&self, key: Key) -> Option<Step> {
        if !self.is_bound() {
            trace!("key {key:?} ignored: keyboard not bound");
            return None;
        }
        step_for_key(key)
    }
}
