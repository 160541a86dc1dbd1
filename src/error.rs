//! Error types for game setup.
//!
//! Play-time intents never fail: spurious draws and selections are ignored
//! without an error (see [`Game`](crate::Game)). The only fallible surface
//! is constructing a grid from externally supplied target bindings.

use thiserror::Error;

/// Errors that can occur while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The number of slots does not equal the pair count.
    #[error("grid must have exactly one slot per pair")]
    WrongSlotCount,
    /// A target identifier is outside 1..=PAIR_COUNT.
    #[error("target identifier out of range")]
    TargetOutOfRange,
    /// The same target identifier is bound to more than one slot.
    #[error("duplicate target identifier")]
    DuplicateTarget,
}
