//! Item catalog: per-letter pools built from a word list.
//!
//! The catalog is built fresh at every game start from a line-oriented
//! UTF-8 list, one item per line. Each trimmed, uppercased line is keyed
//! by its first character; every letter of the alphabet gets a pool even
//! if no line starts with it. Lines whose first character falls outside
//! the alphabet are skipped, counted, and reported — never silently
//! dropped.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::error::ChainResult;

/// Per-letter item pools plus load statistics.
///
/// Pools preserve source order; a session consumes replies from the end
/// of a pool (last in, first out).
#[derive(Debug, Clone)]
pub struct Catalog {
    alphabet: Alphabet,
    pools: BTreeMap<char, Vec<String>>,
    skipped: usize,
}

impl Catalog {
    /// Build a catalog from an iterator of lines.
    ///
    /// Lines are trimmed and uppercased; empty lines are ignored. A line
    /// whose first character is outside `alphabet` is counted as skipped.
    pub fn from_lines<I, S>(alphabet: Alphabet, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pools: BTreeMap<char, Vec<String>> =
            alphabet.letters().map(|l| (l, Vec::new())).collect();
        let mut skipped = 0;

        for line in lines {
            let item = line.as_ref().trim().to_uppercase();
            let Some(first) = item.chars().next() else {
                continue;
            };
            match pools.get_mut(&first) {
                Some(pool) => pool.push(item),
                None => {
                    tracing::debug!(item = %item, "first letter outside alphabet, skipping");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "word list contained lines outside the alphabet");
        }

        Self {
            alphabet,
            pools,
            skipped,
        }
    }

    /// Build a catalog from a word list file.
    ///
    /// Returns [`crate::ChainError::WordList`] if the file cannot be read.
    pub fn from_path(alphabet: Alphabet, path: impl AsRef<Path>) -> ChainResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_lines(alphabet, content.lines());
        tracing::info!(
            path = %path.as_ref().display(),
            items = catalog.len(),
            dead = catalog.dead_letters().len(),
            skipped = catalog.skipped,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Letters whose pool is empty, as of this catalog snapshot.
    pub fn dead_letters(&self) -> BTreeSet<char> {
        self.pools
            .iter()
            .filter(|(_, pool)| pool.is_empty())
            .map(|(letter, _)| *letter)
            .collect()
    }

    /// The items pooled under `letter`, in source order. Empty when the
    /// letter is dead or outside the alphabet.
    pub fn pool(&self, letter: char) -> &[String] {
        self.pools.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Total number of items across all pools.
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.pools.values().all(Vec::is_empty)
    }

    /// Number of source lines skipped because their first character fell
    /// outside the alphabet.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// The alphabet this catalog was built over.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub(crate) fn into_pools(self) -> BTreeMap<char, Vec<String>> {
        self.pools
    }
}
