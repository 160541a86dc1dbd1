//! Outbound notifications for the presentation collaborator.

use crate::card::Card;

/// A state-change notification emitted by the engine.
///
/// Events queue in the order they occur and are drained with
/// [`Game::poll_event`](crate::Game::poll_event). The engine never requires a
/// response; each variant maps to one piece of presentation feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The game was (re)initialized: fresh deck, cleared grid, empty hand.
    Reset,
    /// A card was drawn and should be shown face up in the drawn slot.
    CardDrawn(Card),
    /// The deck is now empty; the draw source should be shown disabled.
    DeckExhausted,
    /// The drawn card matched the slot at this index.
    CorrectMatch(usize),
    /// The drawn card did not match; mismatch feedback (shake, audio) starts.
    WrongMatch,
    /// The mismatch feedback window ended.
    ShakeEnd,
    /// All pairs are matched.
    Victory,
}
