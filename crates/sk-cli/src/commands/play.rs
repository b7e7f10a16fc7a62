//! Interactive word-chain game over stdin/stdout.
//!
//! The REPL is the chat adapter of the game: slash commands control the
//! session, any other line is a turn, and structured outcomes are
//! rendered through the message table.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use sk_core::{GameConfig, GameEngine};

use crate::settings::Messages;

/// Session key for the single local player.
const LOCAL: &str = "local";

pub fn run(config: &GameConfig, messages: &Messages) -> Result<(), String> {
    let engine = GameEngine::new(config.clone());

    println!("  {} Stadtkette", "Starting".bold());
    println!(
        "  Words: {} | Letters: {}..{}",
        config.word_list().display(),
        config.first_letter,
        config.last_letter
    );
    println!("  /start to begin, /help for commands, /quit to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "/start" => match engine.start(LOCAL) {
                Ok(()) => println!("{}\n", messages.started),
                Err(e) => println!("{}\n", e.to_string().yellow()),
            },
            "/stop" => {
                engine.stop(LOCAL);
                println!("{}\n", messages.stopped);
            }
            "/help" => println!("{}\n", help()),
            "/quit" | "/q" => break,
            _ => match engine.apply_turn(LOCAL, input) {
                Ok(outcome) => println!("{}\n", messages.render(&outcome)),
                Err(e) => println!("{}\n", e.to_string().yellow()),
            },
        }
    }

    Ok(())
}

fn help() -> String {
    "\
Commands:
  /start        Start a new game (reloads the word list)
  /stop         Give up and end the game
  /quit         Leave the table
  <city>        Play a turn

Rules: answer with a city starting with my last letter. If no city
starts with it, the letter before it counts instead. Each city can be
played only once per game."
        .to_string()
}
