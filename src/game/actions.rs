use crate::card::PAIR_COUNT;
use crate::event::GameEvent;

use super::{Game, GameState, SettleAction};

impl Game {
    /// Returns whether the current phase rejects player intents.
    const fn input_locked(&self) -> bool {
        match self.state {
            GameState::Idle => false,
            GameState::Resolving => true,
            GameState::Won => self.options.lock_when_won,
        }
    }

    /// Draws the top card of the deck into the hand.
    ///
    /// Spurious requests are ignored without any state change or
    /// notification: while a resolution is settling, with a card already in
    /// hand, or from an empty deck. On success a [`GameEvent::CardDrawn`] is
    /// queued, followed by [`GameEvent::DeckExhausted`] if this was the last
    /// card.
    pub fn draw(&mut self) {
        if self.input_locked() || self.current.is_some() {
            return;
        }

        let Some(card) = self.deck.pop() else {
            return;
        };

        self.current = Some(card);
        self.push_event(GameEvent::CardDrawn(card));

        if self.deck.is_empty() {
            self.push_event(GameEvent::DeckExhausted);
        }
    }

    /// Attempts to match the drawn card against the slot at `index`.
    ///
    /// Ignored without any state change or notification when no card is in
    /// hand, while a resolution is settling, when `index` is out of range,
    /// or when the slot is already matched. Otherwise queues either a
    /// [`GameEvent::CorrectMatch`] or a [`GameEvent::WrongMatch`] and enters
    /// the settling phase; input stays rejected until the collaborator calls
    /// [`finish_settle`](Game::finish_settle) after the settle delay.
    pub fn select_slot(&mut self, index: usize) {
        if self.input_locked() {
            return;
        }

        let Some(card) = self.current else {
            return;
        };
        let Some(slot) = self.grid.slot(index) else {
            return;
        };
        if slot.is_matched() {
            return;
        }

        if slot.target() == card {
            self.resolve_correct(index);
        } else {
            self.resolve_wrong();
        }
    }

    fn resolve_correct(&mut self, index: usize) {
        self.state = GameState::Resolving;
        self.push_event(GameEvent::CorrectMatch(index));

        // Matched statuses are one-way; reset() is the only way back.
        self.grid.mark_matched(index);
        self.current = None;
        self.matches_found += 1;

        self.pending = Some(if self.matches_found == PAIR_COUNT {
            SettleAction::RevealVictory
        } else {
            SettleAction::AdvanceDraw
        });
    }

    fn resolve_wrong(&mut self) {
        self.state = GameState::Resolving;
        self.push_event(GameEvent::WrongMatch);

        // Hand and deck stay untouched; the player retries with the same card.
        self.pending = Some(SettleAction::ClearShake);
    }

    /// Fires the pending settle action.
    ///
    /// The collaborator calls this once [`pending_delay`](Game::pending_delay)
    /// has elapsed. Ignored when nothing is pending.
    pub fn finish_settle(&mut self) {
        let Some(action) = self.pending.take() else {
            return;
        };

        match action {
            SettleAction::ClearShake => {
                self.state = GameState::Idle;
                self.push_event(GameEvent::ShakeEnd);
            }
            SettleAction::AdvanceDraw => {
                self.state = GameState::Idle;
                if self.options.auto_draw {
                    self.draw();
                }
            }
            SettleAction::RevealVictory => {
                self.state = GameState::Won;
                log::debug!("all {PAIR_COUNT} pairs matched");
                self.push_event(GameEvent::Victory);
            }
        }
    }
}
