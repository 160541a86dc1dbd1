use memrs::{Game, GameEvent, GameOptions, GameState, Grid};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(Grid::sequential(), GameOptions::default(), seed as u64),
        }
    }

    /// Builds a game whose grid bindings mirror the page's slot order.
    pub fn with_targets(targets: Vec<u8>, seed: u32) -> Result<WasmGame, JsValue> {
        let grid = Grid::from_targets(&targets).map_err(js_err)?;
        Ok(Self {
            game: Game::new(grid, GameOptions::default(), seed as u64),
        })
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn draw(&mut self) {
        self.game.draw();
    }

    pub fn select_slot(&mut self, index: u32) {
        self.game.select_slot(index as usize);
    }

    pub fn finish_settle(&mut self) {
        self.game.finish_settle();
    }

    /// Milliseconds the page should wait (e.g. via `setTimeout`) before
    /// calling `finish_settle`, or `undefined` when nothing is pending.
    pub fn pending_delay_ms(&self) -> Option<u32> {
        self.game
            .pending_delay()
            .map(|delay| delay.as_millis() as u32)
    }

    /// Pops the oldest queued notification, or `null` when the queue is
    /// empty.
    pub fn poll_event(&mut self) -> Result<JsValue, JsValue> {
        match self.game.poll_event() {
            Some(event) => to_js_value(&JsEvent::from(event)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let slots = self
            .game
            .grid()
            .slots()
            .iter()
            .map(|slot| JsSlot {
                target: slot.target().id,
                matched: slot.is_matched(),
            })
            .collect();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            current_card: self.game.current_card().map(|card| card.id),
            cards_remaining: self.game.cards_remaining() as u32,
            matches_found: u32::from(self.game.matches_found()),
            slots,
            pending_delay_ms: self.pending_delay_ms(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    current_card: Option<u8>,
    cards_remaining: u32,
    matches_found: u32,
    slots: Vec<JsSlot>,
    pending_delay_ms: Option<u32>,
}

#[derive(Serialize)]
struct JsSlot {
    target: u8,
    matched: bool,
}

#[derive(Serialize)]
struct JsEvent {
    kind: &'static str,
    card: Option<u8>,
    slot: Option<u32>,
}

impl JsEvent {
    const fn bare(kind: &'static str) -> Self {
        Self {
            kind,
            card: None,
            slot: None,
        }
    }
}

impl From<GameEvent> for JsEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Reset => Self::bare("Reset"),
            GameEvent::CardDrawn(card) => Self {
                kind: "CardDrawn",
                card: Some(card.id),
                slot: None,
            },
            GameEvent::DeckExhausted => Self::bare("DeckExhausted"),
            GameEvent::CorrectMatch(index) => Self {
                kind: "CorrectMatch",
                card: None,
                slot: Some(index as u32),
            },
            GameEvent::WrongMatch => Self::bare("WrongMatch"),
            GameEvent::ShakeEnd => Self::bare("ShakeEnd"),
            GameEvent::Victory => Self::bare("Victory"),
        }
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Idle => "Idle",
        GameState::Resolving => "Resolving",
        GameState::Won => "Won",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
