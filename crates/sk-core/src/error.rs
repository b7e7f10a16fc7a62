//! Error types for the word-chain engine.

use thiserror::Error;

/// Alias for `Result<T, ChainError>`.
pub type ChainResult<T> = Result<T, ChainError>;

/// Errors that can occur while loading a catalog or playing a game.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The word list could not be read.
    #[error("failed to read word list: {0}")]
    WordList(#[from] std::io::Error),

    /// The configured alphabet range is reversed.
    #[error("invalid alphabet range: '{first}' comes after '{last}'")]
    InvalidAlphabet {
        /// The configured first letter.
        first: char,
        /// The configured last letter.
        last: char,
    },

    /// Every character of an item, scanned backward, is a dead letter.
    /// The chain cannot continue from this item.
    #[error("no playable letter in \"{item}\": every character is dead")]
    MalformedChain {
        /// The item whose backward scan was exhausted.
        item: String,
    },
}
