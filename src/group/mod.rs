//! Slot Group - The family of output units rendered for one component.
//!
//! Layout produces up to five units per component (content, background,
//! foreground, border, or a lone host). Mount and transitions need to treat them
//! as one family keyed by the component that produced them, so they travel
//! together in a [`SlotGroup`].
//!
//! # Invariants
//!
//! - The stored count always equals the number of occupied slots.
//! - A `Host` unit is always the only member of its group.
//! - Occupied slots enumerate in [`ENUMERATION_ORDER`], never insertion order.
//!
//! # Example
//!
//! ```
//! use spark_tui_affinity::{SlotGroup, SlotKind};
//!
//! let mut group = SlotGroup::new();
//! group.add(SlotKind::Border, "border").unwrap();
//! group.add(SlotKind::Content, "text").unwrap();
//!
//! assert_eq!(group.slot_at(0).unwrap(), SlotKind::Content);
//! assert_eq!(group.most_significant_unit(), Some(&"text"));
//! ```

mod iter;

use std::fmt;

use crate::error::{Result, SlotGroupError};
use crate::types::{ENUMERATION_ORDER, SIGNIFICANCE_ORDER, SlotKind, SlotMask};

pub use iter::{IntoIter, Iter};

// =============================================================================
// SlotGroup
// =============================================================================

/// Fixed-capacity container holding at most one unit per [`SlotKind`].
///
/// Equality compares occupancy and the units themselves, slot by slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotGroup<T> {
    /// One cell per kind, indexed by `SlotKind::index()`.
    slots: [Option<T>; SlotKind::COUNT],
    /// Number of occupied cells.
    len: u8,
}

impl<T> Default for SlotGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotGroup<T> {
    /// Create an empty group.
    pub const fn new() -> Self {
        Self {
            slots: [None, None, None, None, None],
            len: 0,
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Put a unit into an empty slot.
    ///
    /// # Errors
    ///
    /// - [`SlotGroupError::DuplicateSlot`] if `kind` is already occupied.
    /// - [`SlotGroupError::HostExclusivity`] if the group holds a host unit, or
    ///   `kind` is `Host` and the group is not empty.
    ///
    /// The group is unchanged on error.
    pub fn add(&mut self, kind: SlotKind, value: T) -> Result<()> {
        if self.contains(kind) {
            return Err(SlotGroupError::DuplicateSlot(kind));
        }
        if self.contains(SlotKind::Host) || (kind == SlotKind::Host && !self.is_empty()) {
            return Err(SlotGroupError::HostExclusivity);
        }

        self.slots[kind.index()] = Some(value);
        self.len += 1;

        if kind == SlotKind::Host {
            log::debug!("slot group now holds a lone HOST unit");
        }
        Ok(())
    }

    /// Like [`add`](Self::add), for producers that hold an optional unit.
    ///
    /// # Errors
    ///
    /// [`SlotGroupError::InvalidArgument`] if `value` is `None`, otherwise the
    /// same errors as [`add`](Self::add).
    pub fn add_optional(&mut self, kind: SlotKind, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => self.add(kind, value),
            None => Err(SlotGroupError::InvalidArgument(kind)),
        }
    }

    /// Set or clear a slot.
    ///
    /// - `Some` on an occupied slot overwrites the unit in place.
    /// - `Some` on an empty slot behaves exactly like [`add`](Self::add).
    /// - `None` clears the slot (no-op if already empty).
    ///
    /// # Errors
    ///
    /// Only when delegating to [`add`](Self::add).
    pub fn replace(&mut self, kind: SlotKind, value: Option<T>) -> Result<()> {
        let Some(value) = value else {
            self.take(kind);
            return Ok(());
        };

        if let Some(slot) = self.slots[kind.index()].as_mut() {
            *slot = value;
            return Ok(());
        }
        self.add(kind, value)
    }

    /// Remove and return the unit at `kind`.
    pub fn take(&mut self, kind: SlotKind) -> Option<T> {
        let unit = self.slots[kind.index()].take();
        if unit.is_some() {
            self.len -= 1;
            log::trace!("cleared {kind} slot, {} left", self.len);
        }
        unit
    }

    /// Empty every slot. The group stays usable.
    pub fn clean(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.len = 0;
        log::trace!("slot group cleaned");
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Unit at `kind`, if any.
    #[inline]
    pub fn get(&self, kind: SlotKind) -> Option<&T> {
        self.slots[kind.index()].as_ref()
    }

    /// Mutable unit at `kind`, if any.
    #[inline]
    pub fn get_mut(&mut self, kind: SlotKind) -> Option<&mut T> {
        self.slots[kind.index()].as_mut()
    }

    /// Whether `kind` is occupied.
    #[inline]
    pub fn contains(&self, kind: SlotKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Same as [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set of occupied slots.
    pub fn occupancy(&self) -> SlotMask {
        ENUMERATION_ORDER
            .into_iter()
            .filter(|&kind| self.contains(kind))
            .fold(SlotMask::empty(), |mask, kind| mask | kind.mask())
    }

    // =========================================================================
    // Positional Access
    // =========================================================================

    /// Kind of the `index`-th occupied slot, counted in [`ENUMERATION_ORDER`].
    ///
    /// # Errors
    ///
    /// [`SlotGroupError::OutOfRange`] if `index >= len()`.
    pub fn slot_at(&self, index: usize) -> Result<SlotKind> {
        let out_of_range = SlotGroupError::OutOfRange {
            index,
            size: self.len(),
        };
        if index >= self.len() {
            return Err(out_of_range);
        }

        ENUMERATION_ORDER
            .into_iter()
            .filter(|&kind| self.contains(kind))
            .nth(index)
            .ok_or(out_of_range)
    }

    /// Unit of the `index`-th occupied slot.
    ///
    /// # Errors
    ///
    /// Same as [`slot_at`](Self::slot_at).
    pub fn value_at(&self, index: usize) -> Result<&T> {
        let kind = self.slot_at(index)?;
        self.get(kind).ok_or(SlotGroupError::OutOfRange {
            index,
            size: self.len(),
        })
    }

    // =========================================================================
    // Significance
    // =========================================================================

    /// Kind of the unit that represents the whole group.
    ///
    /// First occupied slot in [`SIGNIFICANCE_ORDER`]: Host, Content,
    /// Background, Foreground, Border. `None` for an empty group.
    pub fn most_significant_kind(&self) -> Option<SlotKind> {
        SIGNIFICANCE_ORDER
            .into_iter()
            .find(|&kind| self.contains(kind))
    }

    /// The unit that represents the whole group, e.g. as a transition target.
    pub fn most_significant_unit(&self) -> Option<&T> {
        self.most_significant_kind().and_then(|kind| self.get(kind))
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Occupied slots and their units in [`ENUMERATION_ORDER`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.len())
    }
}

impl<T: fmt::Display> SlotGroup<T> {
    /// Multi-line diagnostic listing every occupied slot.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for SlotGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotGroup(size={})", self.len())?;
        for (kind, unit) in self {
            write!(f, "\n\t{kind}: {unit}")?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a SlotGroup<T> {
    type Item = (SlotKind, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SlotGroup<T> {
    type Item = (SlotKind, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.slots, len)
    }
}

// =============================================================================
// Tests
// =============================================================================
