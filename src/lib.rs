//! A memory card-matching game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck lifecycle and the
//! match-resolution state machine of a memory/matching card game: a shuffled
//! deck of card identifiers is drawn one at a time, and the player matches
//! each drawn card against a fixed grid of target slots.
//!
//! The engine is presentation-agnostic. It receives intents ([`Game::draw`],
//! [`Game::select_slot`], [`Game::finish_settle`]) and queues [`GameEvent`]
//! notifications for a rendering collaborator to drain with
//! [`Game::poll_event`]. Illegal intents are ignored rather than rejected
//! with an error, so a UI can forward raw input without filtering.
//!
//! # Example
//!
//! ```
//! use memrs::{Game, GameEvent, GameOptions, Grid};
//!
//! let mut game = Game::new(Grid::sequential(), GameOptions::default(), 42);
//! game.draw();
//!
//! while let Some(event) = game.poll_event() {
//!     if let GameEvent::CardDrawn(card) = event {
//!         println!("drew card {}", card.id);
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod grid;
pub mod options;

// Re-export main types
pub use card::{Card, PAIR_COUNT};
pub use error::LayoutError;
pub use event::GameEvent;
pub use game::{Game, GameState, SettleAction};
pub use grid::{Grid, GridSlot};
pub use options::{GameOptions, SETTLE_DELAY};
