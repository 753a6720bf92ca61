//! Errors returned by slot group operations.
//!
//! Every variant is a caller error: a precondition was violated. Nothing here is
//! retried and a failed operation leaves the group untouched.

use thiserror::Error;

use crate::types::SlotKind;

/// Result alias used across the crate.
pub type Result<T, E = SlotGroupError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotGroupError {
    /// An empty value was offered for insertion.
    #[error("value for {0} slot should not be empty")]
    InvalidArgument(SlotKind),

    /// The slot already holds a unit.
    #[error("already contains unit for {0} slot")]
    DuplicateSlot(SlotKind),

    /// A host unit would share the group with another unit.
    #[error("HOST unit should be the only member of a slot group")]
    HostExclusivity,

    /// Positional access past the number of occupied slots.
    #[error("index={index}, size={size}")]
    OutOfRange { index: usize, size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SlotGroupError::InvalidArgument(SlotKind::Border).to_string(),
            "value for BORDER slot should not be empty"
        );
        assert_eq!(
            SlotGroupError::DuplicateSlot(SlotKind::Content).to_string(),
            "already contains unit for CONTENT slot"
        );
        assert_eq!(
            SlotGroupError::HostExclusivity.to_string(),
            "HOST unit should be the only member of a slot group"
        );
        assert_eq!(
            SlotGroupError::OutOfRange { index: 3, size: 2 }.to_string(),
            "index=3, size=2"
        );
    }
}
