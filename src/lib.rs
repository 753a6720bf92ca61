//! # spark-tui-affinity
//!
//! Slot groups for the output units a single spark-tui component renders.
//!
//! ## Architecture
//!
//! Layout turns one component into several output units: its content, a
//! background fill, a foreground overlay, a border, or a single wrapping host.
//! A [`SlotGroup`] keeps those units together so later stages can address the
//! whole family by the component that produced it:
//!
//! ```text
//! layout (add / replace) → SlotGroup → mount (get / slot_at / value_at)
//!                                    → transitions (most_significant_unit / iter)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `SlotKind`, `SlotMask` and the two fixed orderings
//! - [`group`] - `SlotGroup` and its iterators
//! - [`error`] - `SlotGroupError`

pub mod error;
pub mod group;
pub mod types;

pub use error::{Result, SlotGroupError};
pub use group::{IntoIter, Iter, SlotGroup};
pub use types::{ENUMERATION_ORDER, SIGNIFICANCE_ORDER, SlotKind, SlotMask};
