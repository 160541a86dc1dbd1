//! Game engine and state management.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::time::Duration;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, PAIR_COUNT};
use crate::event::GameEvent;
use crate::grid::Grid;
use crate::options::GameOptions;

mod actions;
pub mod state;

pub use state::{GameState, SettleAction};

/// A memory matching game engine that owns the deck and the grid statuses.
///
/// The engine is driven by discrete intents — [`draw`](Game::draw),
/// [`select_slot`](Game::select_slot), [`finish_settle`](Game::finish_settle)
/// — and queues [`GameEvent`] notifications for the presentation layer.
/// Use [`GameOptions`] to configure the settle delay and the auto-draw and
/// won-state policies.
pub struct Game {
    /// Cards remaining to draw; the last element is the next to draw.
    deck: Vec<Card>,
    /// Fixed grid of target slots.
    grid: Grid,
    /// Card currently in hand, if any.
    current: Option<Card>,
    /// Pairs matched so far.
    matches_found: u8,
    /// Current phase.
    state: GameState,
    /// Delayed action scheduled by the last resolution, if any.
    pending: Option<SettleAction>,
    /// Game options.
    options: GameOptions,
    /// Notifications awaiting the collaborator.
    events: VecDeque<GameEvent>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given grid bindings and seed.
    ///
    /// The deck is built and shuffled immediately and a
    /// [`GameEvent::Reset`] is queued so the collaborator renders the
    /// initial state.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{Game, GameOptions, Grid};
    ///
    /// let game = Game::new(Grid::sequential(), GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 8);
    /// ```
    #[must_use]
    pub fn new(grid: Grid, options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::create_deck(&mut rng);

        let mut game = Self {
            deck,
            grid,
            current: None,
            matches_found: 0,
            state: GameState::Idle,
            pending: None,
            options,
            events: VecDeque::new(),
            rng,
        };
        game.push_event(GameEvent::Reset);
        game
    }

    /// Creates and shuffles a deck with one card per pair.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards: Vec<Card> = (1..=PAIR_COUNT).map(Card::new).collect();

        cards.shuffle(rng);
        log::debug!("deck shuffled: {cards:?}");
        cards
    }

    /// Resets to a fresh game.
    ///
    /// Clears the matched statuses, the hand, the match counter, any queued
    /// events, and any pending settle action, then rebuilds the deck as a new
    /// uniform permutation. Queues a [`GameEvent::Reset`].
    pub fn reset(&mut self) {
        self.matches_found = 0;
        self.current = None;
        self.pending = None;
        self.state = GameState::Idle;
        self.grid.clear_matches();
        self.deck = Self::create_deck(&mut self.rng);
        self.events.clear();
        self.push_event(GameEvent::Reset);
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the card currently in hand.
    #[must_use]
    pub const fn current_card(&self) -> Option<Card> {
        self.current
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of pairs matched so far.
    #[must_use]
    pub const fn matches_found(&self) -> u8 {
        self.matches_found
    }

    /// Returns whether all pairs are matched.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Returns the grid of target slots.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns how long the collaborator should wait before calling
    /// [`finish_settle`](Game::finish_settle), or `None` when no settle
    /// action is pending.
    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        self.pending.map(|_| self.options.settle_delay)
    }

    /// Pops the oldest queued notification, if any.
    pub fn poll_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    fn push_event(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}
