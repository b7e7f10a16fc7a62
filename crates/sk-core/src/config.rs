//! Configuration for the game engine.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::alphabet::Alphabet;
use crate::error::ChainResult;

/// Configuration consumed at game start: the alphabet range and the
/// word-list location.
///
/// Defaults to the reference domain of the game — Russian city names
/// over the contiguous `А..Я` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// First letter of the alphabet range (inclusive).
    pub first_letter: char,
    /// Last letter of the alphabet range (inclusive).
    pub last_letter: char,
    /// Path to the line-oriented word list.
    pub word_list: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_letter: 'А',
            last_letter: 'Я',
            word_list: PathBuf::from("cities.txt"),
        }
    }
}

impl GameConfig {
    /// Set the alphabet range.
    pub fn with_alphabet(mut self, first: char, last: char) -> Self {
        self.first_letter = first;
        self.last_letter = last;
        self
    }

    /// Set the word-list path.
    pub fn with_word_list(mut self, path: impl Into<PathBuf>) -> Self {
        self.word_list = path.into();
        self
    }

    /// The configured word-list path.
    pub fn word_list(&self) -> &Path {
        &self.word_list
    }

    /// Validate the configured range into an [`Alphabet`].
    pub fn alphabet(&self) -> ChainResult<Alphabet> {
        Alphabet::new(self.first_letter, self.last_letter)
    }
}
