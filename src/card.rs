//! Card types and deck constants.

/// A memory card, identified by the face it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The face identifier (1..=[`PAIR_COUNT`] in a standard game).
    pub id: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the identifier. Values outside
    /// 1..=[`PAIR_COUNT`] are accepted but will never match a validated grid.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self { id }
    }
}

/// Number of card/slot pairs in a game.
pub const PAIR_COUNT: u8 = 8;
