//! Core types for slot groups.
//!
//! A component renders up to five output units, each tagged with a [`SlotKind`].
//! Two fixed orderings exist over the kinds and they are deliberately kept apart:
//! [`ENUMERATION_ORDER`] drives iteration, [`SIGNIFICANCE_ORDER`] drives the
//! choice of a single representative unit.

use std::fmt;

// =============================================================================
// Slot Kind
// =============================================================================

/// The category of an output unit inside a slot group.
///
/// Discriminants are the slot positions inside the group and define the
/// enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SlotKind {
    /// The component's own drawn content.
    Content = 0,
    /// Background fill behind the content.
    Background = 1,
    /// Foreground overlay drawn above the content.
    Foreground = 2,
    /// Wrapping host. Must be the only unit of its group.
    Host = 3,
    /// Border around the content.
    Border = 4,
}

impl SlotKind {
    /// Number of slot kinds (and slots in every group).
    pub const COUNT: usize = 5;

    /// Position of this kind inside a group's slot array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Slot kind at an array position.
    ///
    /// ```
    /// use spark_tui_affinity::SlotKind;
    ///
    /// assert_eq!(SlotKind::from_index(3), Some(SlotKind::Host));
    /// assert_eq!(SlotKind::from_index(5), None);
    /// ```
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Content),
            1 => Some(Self::Background),
            2 => Some(Self::Foreground),
            3 => Some(Self::Host),
            4 => Some(Self::Border),
            _ => None,
        }
    }

    /// Symbolic name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Content => "CONTENT",
            Self::Background => "BACKGROUND",
            Self::Foreground => "FOREGROUND",
            Self::Host => "HOST",
            Self::Border => "BORDER",
        }
    }

    /// The occupancy bit for this kind.
    #[inline]
    pub const fn mask(self) -> SlotMask {
        SlotMask::from_bits_truncate(1 << self as u8)
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Orderings
// =============================================================================

/// Order in which occupied slots are enumerated (declaration order).
pub const ENUMERATION_ORDER: [SlotKind; SlotKind::COUNT] = [
    SlotKind::Content,
    SlotKind::Background,
    SlotKind::Foreground,
    SlotKind::Host,
    SlotKind::Border,
];

/// Priority used to pick the most significant unit of a group.
///
/// Independent of [`ENUMERATION_ORDER`]; do not derive one from the other.
pub const SIGNIFICANCE_ORDER: [SlotKind; SlotKind::COUNT] = [
    SlotKind::Host,
    SlotKind::Content,
    SlotKind::Background,
    SlotKind::Foreground,
    SlotKind::Border,
];

// =============================================================================
// Slot Mask (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Set of occupied slots, one bit per [`SlotKind`].
    ///
    /// Cheap to compare when diffing two generations of the same component.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SlotMask: u8 {
        const CONTENT = 1 << 0;
        const BACKGROUND = 1 << 1;
        const FOREGROUND = 1 << 2;
        const HOST = 1 << 3;
        const BORDER = 1 << 4;
    }
}

impl SlotMask {
    /// Whether the mask contains the given kind.
    #[inline]
    pub const fn has(self, kind: SlotKind) -> bool {
        self.contains(kind.mask())
    }
}

impl From<SlotKind> for SlotMask {
    fn from(kind: SlotKind) -> Self {
        kind.mask()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_every_kind() {
        for kind in ENUMERATION_ORDER {
            assert_eq!(SlotKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(SlotKind::from_index(SlotKind::COUNT), None);
        assert_eq!(SlotKind::from_index(usize::MAX), None);
    }

    #[test]
    fn test_enumeration_order_is_declaration_order() {
        for (position, kind) in ENUMERATION_ORDER.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn test_significance_order_differs_from_enumeration() {
        assert_eq!(SIGNIFICANCE_ORDER[0], SlotKind::Host);
        assert_eq!(SIGNIFICANCE_ORDER[4], SlotKind::Border);
        assert_ne!(SIGNIFICANCE_ORDER, ENUMERATION_ORDER);

        let mut sorted = SIGNIFICANCE_ORDER;
        sorted.sort();
        assert_eq!(sorted, ENUMERATION_ORDER);
    }

    #[test]
    fn test_names() {
        assert_eq!(SlotKind::Content.name(), "CONTENT");
        assert_eq!(SlotKind::Background.to_string(), "BACKGROUND");
        assert_eq!(SlotKind::Foreground.to_string(), "FOREGROUND");
        assert_eq!(SlotKind::Host.to_string(), "HOST");
        assert_eq!(SlotKind::Border.to_string(), "BORDER");
    }

    #[test]
    fn test_mask_bits() {
        assert_eq!(SlotKind::Content.mask(), SlotMask::CONTENT);
        assert_eq!(SlotKind::Host.mask(), SlotMask::HOST);
        assert_eq!(SlotMask::from(SlotKind::Border), SlotMask::BORDER);

        let mask = SlotMask::BACKGROUND | SlotMask::BORDER;
        assert!(mask.has(SlotKind::Background));
        assert!(mask.has(SlotKind::Border));
        assert!(!mask.has(SlotKind::Content));
        assert_eq!(mask.bits().count_ones(), 2);
    }
}
