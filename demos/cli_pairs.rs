//! CLI memory pairs example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use memrs::{Game, GameEvent, GameOptions, GameState, Grid};

fn main() {
    println!("Memory pairs CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(Grid::sequential(), GameOptions::default(), seed);
    pump_events(&mut game);

    loop {
        print_table(&game);

        if game.state() == GameState::Won {
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.reset();
                    pump_events(&mut game);
                    continue;
                }
                _ => {
                    println!("Goodbye.");
                    return;
                }
            }
        }

        let input = prompt_line("Command ([d]raw, 1-8 = slot, [r]estart, [q]uit): ");
        match input.as_str() {
            "d" | "draw" => game.draw(),
            "r" | "restart" => game.reset(),
            "q" | "quit" => return,
            "" => continue,
            _ => match input.parse::<usize>() {
                Ok(number) if (1..=game.grid().slots().len()).contains(&number) => {
                    game.select_slot(number - 1);
                }
                _ => {
                    println!("Unknown command.");
                    continue;
                }
            },
        }

        pump_events(&mut game);

        // The settle wait belongs to the collaborator, not the engine.
        if let Some(delay) = game.pending_delay() {
            thread::sleep(delay);
            game.finish_settle();
            pump_events(&mut game);
        }
    }
}

fn pump_events(game: &mut Game) {
    while let Some(event) = game.poll_event() {
        match event {
            GameEvent::Reset => println!("New game. Draw a card to start."),
            GameEvent::CardDrawn(card) => println!("Drew card {}.", card.id),
            GameEvent::DeckExhausted => println!("The deck is empty."),
            GameEvent::CorrectMatch(index) => println!("Match! Slot {} cleared.", index + 1),
            GameEvent::WrongMatch => {
                println!("{}", colorize("No match, try another slot.", "31"));
            }
            GameEvent::ShakeEnd => {}
            GameEvent::Victory => println!("{}", colorize("All pairs found. You win!", "32")),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());

    let drawn = game
        .current_card()
        .map_or_else(|| "(empty)".to_string(), |card| format!("card {}", card.id));
    println!("Hand: {drawn}");

    let slots: Vec<String> = game
        .grid()
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            if slot.is_matched() {
                colorize(&format!("[{}*]", slot.target().id), "32")
            } else {
                format!("[{} ]", index + 1)
            }
        })
        .collect();
    println!("Grid: {}", slots.join(" "));
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
