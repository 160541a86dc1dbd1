//! Game state types.

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting draw and slot-selection intents.
    Idle,
    /// A match resolution is settling; new intents are ignored.
    Resolving,
    /// All pairs are matched.
    Won,
}

impl GameState {
    /// Returns whether a resolution is currently settling.
    #[must_use]
    pub const fn is_resolving(self) -> bool {
        matches!(self, Self::Resolving)
    }

    /// Returns whether the game has been won.
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// The delayed action scheduled by a match resolution.
///
/// At most one action is pending at a time; it is fired by
/// [`Game::finish_settle`](crate::Game::finish_settle) and discarded by
/// [`Game::reset`](crate::Game::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleAction {
    /// End the mismatch feedback window.
    ClearShake,
    /// Return to idle and draw the next card if any remain.
    AdvanceDraw,
    /// Reveal the victory screen.
    RevealVictory,
}
