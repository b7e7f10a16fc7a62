//! Structured results of a single turn.
//!
//! The engine never produces user-facing text; it returns a
//! [`TurnOutcome`] and leaves rendering to the adapter (the CLI, a chat
//! bot, a test harness).

use serde::{Deserialize, Serialize};

/// The result of submitting one raw text turn to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// No game is in progress; the turn was ignored.
    NotPlaying,

    /// The item does not start with the expected letter. Retryable.
    WrongLetter {
        /// The letter the item must start with.
        expected: char,
    },

    /// The item is unknown to the catalog or has already been played.
    /// Retryable.
    InvalidOrRepeated,

    /// The engine had no item left for the required letter and concedes.
    /// The session is over.
    EngineLoses {
        /// The letter whose pool ran dry.
        letter: char,
    },

    /// The turn was accepted and the engine answered.
    Continue {
        /// The effective last letter of the player's item, i.e. the
        /// letter the engine had to answer with.
        letter: char,
        /// The item the engine played.
        reply: String,
        /// The letter the player must answer with next.
        next: char,
    },
}

impl TurnOutcome {
    /// Whether this outcome ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnOutcome::EngineLoses { .. })
    }

    /// Whether the player may retry the same turn without losing
    /// progress.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TurnOutcome::WrongLetter { .. } | TurnOutcome::InvalidOrRepeated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_and_retryable_split() {
        assert!(TurnOutcome::EngineLoses { letter: 'W' }.is_terminal());
        assert!(!TurnOutcome::NotPlaying.is_terminal());
        assert!(TurnOutcome::WrongLetter { expected: 'A' }.is_retryable());
        assert!(TurnOutcome::InvalidOrRepeated.is_retryable());
        assert!(!TurnOutcome::EngineLoses { letter: 'W' }.is_retryable());
    }

    #[test]
    fn round_trip_serde() {
        let o = TurnOutcome::Continue {
            letter: 'W',
            reply: "WELLINGTON".to_string(),
            next: 'W',
        };
        let json = serde_json::to_string(&o).unwrap();
        let back: TurnOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(o, back);
    }
}
