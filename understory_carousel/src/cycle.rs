// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One step of relative navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Towards the following slide, wrapping from last to first.
    Next,
    /// Towards the preceding slide, wrapping from first to last.
    Previous,
}

/// Circular index arithmetic over a sequence of fixed length.
///
/// Every operation returns `None` for an empty sequence. Inputs outside
/// `0..len` are reduced modulo `len` before stepping.
///
/// ```
/// use understory_carousel::IndexCycle;
///
/// let cycle = IndexCycle::new(3);
/// assert_eq!(cycle.next(2), Some(0));
/// assert_eq!(cycle.prev(0), Some(2));
/// assert_eq!(cycle.go_to(3), None);
/// assert_eq!(IndexCycle::new(0).next(0), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexCycle {
    len: usize,
}

impl IndexCycle {
    /// Creates a cycle over `len` positions.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Number of positions.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Returns `true` if there are no positions.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// `(current + 1) mod len`.
    #[must_use]
    pub const fn next(self, current: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let current = current % self.len;
        Some(if current + 1 == self.len { 0 } else { current + 1 })
    }

    /// `(current - 1 + len) mod len`.
    #[must_use]
    pub const fn prev(self, current: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let current = current % self.len;
        Some(if current == 0 { self.len - 1 } else { current - 1 })
    }

    /// Apply a relative [`Step`].
    #[must_use]
    pub const fn step(self, current: usize, step: Step) -> Option<usize> {
        match step {
            Step::Next => self.next(current),
            Step::Previous => self.prev(current),
        }
    }

    /// `target` if it lies in `0..len`, otherwise `None`.
    #[must_use]
    pub const fn go_to(self, target: usize) -> Option<usize> {
        if target < self.len {
            Some(target)
        } else {
            None
        }
    }
}
