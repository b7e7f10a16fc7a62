//! One game of word-chain: the turn protocol.
//!
//! A [`GameSession`] owns a fresh catalog snapshot for the lifetime of
//! one game. Each accepted item is consumed permanently — neither side
//! may replay it. The engine answers from the pool of the player's
//! *effective last letter*: scanning the item backward, the first
//! character that is not a dead letter. Dead letters are frozen at
//! session start; a pool emptied mid-game does not become dead.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Catalog;
use crate::error::{ChainError, ChainResult};
use crate::outcome::TurnOutcome;

/// A single in-progress game.
pub struct GameSession {
    pools: BTreeMap<char, Vec<String>>,
    dead: BTreeSet<char>,
    expected: Option<char>,
    playing: bool,
}

impl GameSession {
    /// Start a game over a fresh catalog snapshot.
    ///
    /// The player moves first with no letter constraint.
    pub fn new(catalog: Catalog) -> Self {
        let dead = catalog.dead_letters();
        tracing::debug!(
            items = catalog.len(),
            dead = dead.len(),
            "session started"
        );
        Self {
            pools: catalog.into_pools(),
            dead,
            expected: None,
            playing: true,
        }
    }

    /// Whether a game is in progress.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The letter the player's next item must start with, if any turn
    /// has completed yet.
    pub fn expected_letter(&self) -> Option<char> {
        self.expected
    }

    /// The unconsumed items left for `letter`.
    pub fn pool(&self, letter: char) -> &[String] {
        self.pools.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// The dead-letter set frozen at session start.
    pub fn dead_letters(&self) -> &BTreeSet<char> {
        &self.dead
    }

    /// End the game and discard the pools. Idempotent.
    pub fn stop(&mut self) {
        self.playing = false;
        self.expected = None;
        self.pools.clear();
    }

    /// Submit one raw text turn.
    ///
    /// Normalizes the input (trim, uppercase), validates it against the
    /// expected letter and the pools, consumes it, and answers from the
    /// pool of its effective last letter. Pools are only mutated once
    /// both effective-letter scans have succeeded, so a
    /// [`ChainError::MalformedChain`] leaves the session at its pre-turn
    /// state.
    pub fn apply_turn(&mut self, raw: &str) -> ChainResult<TurnOutcome> {
        if !self.playing {
            return Ok(TurnOutcome::NotPlaying);
        }

        let item = raw.trim().to_uppercase();
        let Some(first) = item.chars().next() else {
            return Ok(TurnOutcome::InvalidOrRepeated);
        };

        if let Some(expected) = self.expected
            && first != expected
        {
            return Ok(TurnOutcome::WrongLetter { expected });
        }

        let Some(pos) = self
            .pools
            .get(&first)
            .and_then(|pool| pool.iter().position(|known| *known == item))
        else {
            return Ok(TurnOutcome::InvalidOrRepeated);
        };

        let letter = self.effective_last_letter(&item)?;

        // The reply is the last item of the asked pool, chosen as if the
        // player's item were already consumed (both may share a pool).
        let candidate = self
            .pools
            .get(&letter)
            .and_then(|pool| {
                if letter == first {
                    match pool.len() {
                        0 | 1 => None,
                        n if pos == n - 1 => pool.get(n - 2),
                        _ => pool.last(),
                    }
                } else {
                    pool.last()
                }
            })
            .cloned();

        let Some(reply) = candidate else {
            // Nothing left to answer with: consume the turn and concede.
            self.consume(first, pos);
            self.playing = false;
            self.expected = None;
            tracing::info!(letter = %letter, "pool exhausted, engine loses");
            return Ok(TurnOutcome::EngineLoses { letter });
        };

        let next = self.effective_last_letter(&reply)?;

        // Both scans succeeded: commit. The player's item goes first so
        // the trailing pop matches the candidate chosen above.
        self.consume(first, pos);
        if let Some(pool) = self.pools.get_mut(&letter) {
            pool.pop();
        }
        self.expected = Some(next);

        Ok(TurnOutcome::Continue {
            letter,
            reply,
            next,
        })
    }

    /// The letter the chain continues on after `item`: the last
    /// character that is not a dead letter, scanning backward.
    ///
    /// The scan is bounded; if every character is dead the item cannot
    /// extend the chain and [`ChainError::MalformedChain`] is returned.
    pub fn effective_last_letter(&self, item: &str) -> ChainResult<char> {
        item.chars()
            .rev()
            .find(|ch| !self.dead.contains(ch))
            .ok_or_else(|| ChainError::MalformedChain {
                item: item.to_string(),
            })
    }

    fn consume(&mut self, letter: char, pos: usize) {
        if let Some(pool) = self.pools.get_mut(&letter) {
            pool.remove(pos);
        }
    }
}
