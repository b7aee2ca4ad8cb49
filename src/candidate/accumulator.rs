//! Fixed-capacity sorted accumulator for the best values seen so far.

use crate::util::{LaserError, LaserResult};

/// A single accumulator entry.
///
/// Sentinel slots created at construction have value `0` and no label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot<L> {
    /// Value the slot is ordered by.
    pub value: i64,
    /// Payload attached to the value, `None` for sentinels.
    pub label: Option<L>,
}

impl<L> Slot<L> {
    fn sentinel() -> Self {
        Self {
            value: 0,
            label: None,
        }
    }

    /// Returns true if this slot was never filled by an offer.
    pub fn is_sentinel(&self) -> bool {
        self.label.is_none()
    }
}

/// Ascending list of exactly `capacity` slots with O(capacity) insertion.
///
/// The list starts filled with zero-valued sentinels. Each accepted offer is
/// inserted in order and the slot at index 0 is evicted, so the length never
/// changes.
#[derive(Clone, Debug)]
pub struct SortedAccumulator<L> {
    slots: Vec<Slot<L>>,
}

impl<L> SortedAccumulator<L> {
    /// Creates an accumulator holding `capacity` sentinel slots.
    pub fn new(capacity: usize) -> LaserResult<Self> {
        if capacity == 0 {
            return Err(LaserError::InvalidInput(
                "accumulator capacity must be at least 1",
            ));
        }
        Ok(Self::with_sentinels(capacity))
    }

    /// Builds the sentinel list; callers guarantee `capacity > 0`.
    pub(crate) fn with_sentinels(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        let slots = (0..capacity).map(|_| Slot::sentinel()).collect();
        Self { slots }
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the smallest retained value.
    pub fn min_value(&self) -> i64 {
        self.slots[0].value
    }

    /// Returns the slots in ascending order.
    pub fn slots(&self) -> &[Slot<L>] {
        &self.slots
    }

    /// Finds where `value` would be inserted to keep ascending order.
    ///
    /// Returns `None` when `value` is below every probed entry, meaning it
    /// cannot replace the current minimum. An exact match returns the index
    /// of the matched entry, so ties insert in front of it.
    pub fn locate_insertion_point(&self, value: i64) -> Option<usize> {
        let mut left = 0usize;
        // Exclusive upper bound; `mid` matches `(left + right) / 2` over the
        // inclusive range `left..=right - 1`.
        let mut right = self.slots.len();
        let mut insert_at = None;
        while left < right {
            let mid = (left + right - 1) / 2;
            let probe = self.slots[mid].value;
            if probe == value {
                return Some(mid);
            }
            if value > probe {
                left = mid + 1;
                insert_at = Some(mid + 1);
            } else {
                right = mid;
            }
        }
        insert_at
    }

    /// Offers a labelled value.
    ///
    /// On acceptance the value is inserted and the new minimum is evicted and
    /// returned. Returns `None` if the value was rejected, in which case the
    /// contents are untouched.
    pub fn offer(&mut self, value: i64, label: L) -> Option<Slot<L>> {
        let idx = self.locate_insertion_point(value)?;
        self.slots.insert(
            idx,
            Slot {
                value,
                label: Some(label),
            },
        );
        Some(self.slots.remove(0))
    }

    /// Consumes the accumulator, returning slots in descending order.
    pub fn into_descending(self) -> Vec<Slot<L>> {
        let mut slots = self.slots;
        slots.reverse();
        slots
    }
}
