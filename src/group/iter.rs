//! Iterators over the occupied slots of a group.
//!
//! Both walk the slot array front to back, so they yield in
//! [`ENUMERATION_ORDER`](crate::types::ENUMERATION_ORDER) and report an exact
//! length taken from the group's count.

use std::array;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::types::SlotKind;

// =============================================================================
// Borrowing iterator
// =============================================================================

/// Yields `(SlotKind, &T)` for every occupied slot.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Enumerate<slice::Iter<'a, Option<T>>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(slots: &'a [Option<T>; SlotKind::COUNT], len: usize) -> Self {
        Self {
            inner: slots.iter().enumerate(),
            remaining: len,
        }
    }

    fn occupied(&mut self, index: usize, slot: &'a Option<T>) -> Option<(SlotKind, &'a T)> {
        let unit = slot.as_ref()?;
        let kind = SlotKind::from_index(index)?;
        self.remaining -= 1;
        Some((kind, unit))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotKind, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, slot)) = self.inner.next() {
            if let Some(item) = self.occupied(index, slot) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((index, slot)) = self.inner.next_back() {
            if let Some(item) = self.occupied(index, slot) {
                return Some(item);
            }
        }
        None
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

// =============================================================================
// Owning iterator
// =============================================================================

/// Yields `(SlotKind, T)` for every occupied slot, consuming the group.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: Enumerate<array::IntoIter<Option<T>, { SlotKind::COUNT }>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(super) fn new(slots: [Option<T>; SlotKind::COUNT], len: usize) -> Self {
        Self {
            inner: slots.into_iter().enumerate(),
            remaining: len,
        }
    }

    fn occupied(&mut self, index: usize, slot: Option<T>) -> Option<(SlotKind, T)> {
        let unit = slot?;
        let kind = SlotKind::from_index(index)?;
        self.remaining -= 1;
        Some((kind, unit))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (SlotKind, T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, slot)) = self.inner.next() {
            if let Some(item) = self.occupied(index, slot) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((index, slot)) = self.inner.next_back() {
            if let Some(item) = self.occupied(index, slot) {
                return Some(item);
            }
        }
        None
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::group::SlotGroup;
    use crate::types::SlotKind;

    fn sample() -> SlotGroup<&'static str> {
        let mut group = SlotGroup::new();
        group.add(SlotKind::Border, "border").unwrap();
        group.add(SlotKind::Background, "bg").unwrap();
        group.add(SlotKind::Content, "text").unwrap();
        group
    }

    #[test]
    fn test_iter_in_enumeration_order() {
        let group = sample();
        let items: Vec<_> = group.iter().collect();
        assert_eq!(
            items,
            vec![
                (SlotKind::Content, &"text"),
                (SlotKind::Background, &"bg"),
                (SlotKind::Border, &"border"),
            ]
        );
    }

    #[test]
    fn test_iter_matches_positional_access() {
        let group = sample();
        for (index, (kind, unit)) in group.iter().enumerate() {
            assert_eq!(group.slot_at(index), Ok(kind));
            assert_eq!(group.value_at(index), Ok(unit));
        }
    }

    #[test]
    fn test_iter_exact_size() {
        let group = sample();
        let mut iter = group.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next_back();
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some((SlotKind::Background, &"bg")));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_reversed() {
        let group = sample();
        let kinds: Vec<_> = group.iter().rev().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![SlotKind::Border, SlotKind::Background, SlotKind::Content]
        );
    }

    #[test]
    fn test_into_iter_moves_units() {
        let group = sample();
        let items: Vec<_> = group.into_iter().collect();
        assert_eq!(
            items,
            vec![
                (SlotKind::Content, "text"),
                (SlotKind::Background, "bg"),
                (SlotKind::Border, "border"),
            ]
        );
    }

    #[test]
    fn test_empty_group_yields_nothing() {
        let group: SlotGroup<u8> = SlotGroup::new();
        assert_eq!(group.iter().len(), 0);
        assert_eq!(group.iter().next(), None);
        assert_eq!(group.into_iter().next(), None);
    }
}
