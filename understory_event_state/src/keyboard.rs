// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard listener registry: scoped subscriptions to host key events.
//!
//! A host usually has one process-wide source of key presses (a window, a
//! document, a terminal). Components that want to react to keys while they are
//! alive register with that source and must unregister when they go away.
//! [`KeyListeners`] models that source as a small, single-threaded registry and
//! hands out [`KeySubscription`] guards. Dropping a guard removes its listener,
//! so an early return or a dropped component can never leave a stale listener
//! behind.
//!
//! The registry does not deliver events itself. The host decides which
//! components receive a [`Key`], and a component checks
//! [`KeySubscription::is_active`] before acting.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::keyboard::{Key, KeyListeners};
//!
//! let listeners = KeyListeners::new();
//! let sub = listeners.subscribe();
//! assert!(listeners.contains(sub.id()));
//!
//! // Hosts can translate DOM-style key names.
//! assert_eq!(Key::from("ArrowRight"), Key::ArrowRight);
//! assert_eq!(Key::from("x"), Key::Character('x'));
//!
//! drop(sub);
//! assert!(listeners.is_empty());
//! ```

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use log::debug;
use smallvec::SmallVec;

/// A key press, reduced to what UI components commonly care about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// A key producing a single character.
    Character(char),
    /// Any other key.
    Other,
}

impl From<&str> for Key {
    /// Map a DOM `KeyboardEvent.key` value.
    fn from(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Identifies one listener in a [`KeyListeners`] registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u32);

impl ListenerId {
    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Default)]
struct ListenerTable {
    next_id: u32,
    live: SmallVec<[ListenerId; 4]>,
}

/// A host-owned registry of live key listeners.
///
/// Cloning yields another handle to the same registry. The registry is
/// single-threaded; share it between components on the thread that delivers
/// key events.
#[derive(Clone, Debug, Default)]
pub struct KeyListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl KeyListeners {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener. It stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe(&self) -> KeySubscription {
        let mut table = self.table.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id = table.next_id.wrapping_add(1);
        table.live.push(id);
        debug!("key listener {} registered", id.0);
        KeySubscription {
            id,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Returns `true` if `id` is currently registered.
    #[must_use]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.table.borrow().live.contains(&id)
    }

    /// Returns the registered listeners in registration order.
    #[must_use]
    pub fn listeners(&self) -> Vec<ListenerId> {
        self.table.borrow().live.to_vec()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.borrow().live.len()
    }

    /// Returns `true` if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.borrow().live.is_empty()
    }
}

/// A registered key listener. Dropping it unregisters the listener.
///
/// A subscription outliving its registry is simply inactive.
#[derive(Debug)]
pub struct KeySubscription {
    id: ListenerId,
    table: Weak<RefCell<ListenerTable>>,
}

impl KeySubscription {
    /// The identifier of this listener in its registry.
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Returns `true` while the registry exists and still lists this listener.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.table.upgrade().is_some_and(|table| {
            let table = table.borrow();
            table.live.contains(&self.id)
        })
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().live.retain(|id| *id != self.id);
            debug!("key listener {} released", self.id.0);
        }
    }
}
