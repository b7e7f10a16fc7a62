//! Keyed session registry.
//!
//! A [`GameEngine`] runs any number of independent games, one per key
//! (a chat conversation, a terminal, a test). Turn processing is
//! serialized per session: the registry map sits behind one mutex for
//! lookup, and each session behind its own, so turns on different keys
//! never contend with each other.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::error::ChainResult;
use crate::outcome::TurnOutcome;
use crate::session::GameSession;

/// The game engine: configuration plus a registry of live sessions.
pub struct GameEngine {
    config: GameConfig,
    sessions: Mutex<HashMap<String, Arc<Mutex<GameSession>>>>,
}

impl GameEngine {
    /// Create an engine with the given configuration. No sessions exist
    /// until [`GameEngine::start`] is called.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game under `key`, replacing any game already
    /// running there.
    ///
    /// The word list is re-read every start so each game gets a full
    /// catalog. On a load failure no session is created and any previous
    /// session under `key` is untouched.
    pub fn start(&self, key: &str) -> ChainResult<()> {
        let alphabet = self.config.alphabet()?;
        let catalog = Catalog::from_path(alphabet, self.config.word_list())?;
        let session = GameSession::new(catalog);
        self.sessions
            .lock()
            .insert(key.to_string(), Arc::new(Mutex::new(session)));
        tracing::info!(key, "game started");
        Ok(())
    }

    /// Stop and discard the game under `key`. Idempotent.
    pub fn stop(&self, key: &str) {
        if let Some(session) = self.sessions.lock().remove(key) {
            session.lock().stop();
            tracing::info!(key, "game stopped");
        }
    }

    /// Whether a game is running under `key`.
    pub fn is_playing(&self, key: &str) -> bool {
        self.sessions
            .lock()
            .get(key)
            .is_some_and(|s| s.lock().is_playing())
    }

    /// Submit one turn to the game under `key`.
    ///
    /// Returns [`TurnOutcome::NotPlaying`] when no game runs there. A
    /// terminal outcome removes the session, so the next turn under the
    /// same key is `NotPlaying` until a new [`GameEngine::start`].
    pub fn apply_turn(&self, key: &str, raw: &str) -> ChainResult<TurnOutcome> {
        let Some(session) = self.sessions.lock().get(key).cloned() else {
            return Ok(TurnOutcome::NotPlaying);
        };

        let outcome = session.lock().apply_turn(raw)?;

        if outcome.is_terminal() {
            let mut sessions = self.sessions.lock();
            // guard against a racing start() having replaced the session
            if let Some(current) = sessions.get(key)
                && Arc::ptr_eq(current, &session)
            {
                sessions.remove(key);
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn engine_with_words(words: &str) -> (GameEngine, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{words}").unwrap();
        let config = GameConfig::default()
            .with_alphabet('A', 'Z')
            .with_word_list(file.path());
        (GameEngine::new(config), file)
    }

    #[test]
    fn turn_without_start_is_not_playing() {
        let (engine, _file) = engine_with_words("MOSCOW\nWARSAW\n");
        let outcome = engine.apply_turn("chat", "MOSCOW").unwrap();
        assert_eq!(outcome, TurnOutcome::NotPlaying);
    }

    #[test]
    fn full_game_over_one_key() {
        let (engine, _file) = engine_with_words("MOSCOW\nWARSAW\nWELLINGTON\n");
        engine.start("chat").unwrap();
        assert!(engine.is_playing("chat"));

        let outcome = engine.apply_turn("chat", "MOSCOW").unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Continue {
                letter: 'W',
                reply: "WELLINGTON".to_string(),
                next: 'W',
            }
        );

        // the last W item goes to the player; the engine has nothing left
        let outcome = engine.apply_turn("chat", "WARSAW").unwrap();
        assert_eq!(outcome, TurnOutcome::EngineLoses { letter: 'W' });

        // terminal outcome tears the session down
        assert!(!engine.is_playing("chat"));
        assert_eq!(
            engine.apply_turn("chat", "MOSCOW").unwrap(),
            TurnOutcome::NotPlaying
        );
    }

    #[test]
    fn stop_is_idempotent() {
        let (engine, _file) = engine_with_words("MOSCOW\n");
        engine.start("chat").unwrap();
        engine.stop("chat");
        engine.stop("chat");
        assert!(!engine.is_playing("chat"));
        assert_eq!(
            engine.apply_turn("chat", "MOSCOW").unwrap(),
            TurnOutcome::NotPlaying
        );
    }

    #[test]
    fn sessions_isolated_per_key() {
        let (engine, _file) = engine_with_words("MOSCOW\nWARSAW\nWELLINGTON\n");
        engine.start("a").unwrap();
        engine.start("b").unwrap();

        engine.apply_turn("a", "MOSCOW").unwrap();
        // "b" still has MOSCOW available and no letter constraint
        let outcome = engine.apply_turn("b", "MOSCOW").unwrap();
        assert!(matches!(outcome, TurnOutcome::Continue { .. }));
    }

    #[test]
    fn restart_replaces_session() {
        let (engine, _file) = engine_with_words("MOSCOW\nWARSAW\nWELLINGTON\n");
        engine.start("chat").unwrap();
        engine.apply_turn("chat", "MOSCOW").unwrap();
        // a new start reloads the full catalog
        engine.start("chat").unwrap();
        let outcome = engine.apply_turn("chat", "MOSCOW").unwrap();
        assert!(matches!(outcome, TurnOutcome::Continue { .. }));
    }

    #[test]
    fn start_surfaces_load_error_and_creates_no_session() {
        let config = GameConfig::default()
            .with_alphabet('A', 'Z')
            .with_word_list("/no/such/wordlist.txt");
        let engine = GameEngine::new(config);
        assert!(engine.start("chat").is_err());
        assert!(!engine.is_playing("chat"));
    }

    #[test]
    fn start_rejects_invalid_alphabet() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MOSCOW").unwrap();
        let config = GameConfig::default()
            .with_alphabet('Z', 'A')
            .with_word_list(file.path());
        let engine = GameEngine::new(config);
        assert!(engine.start("chat").is_err());
    }
}
