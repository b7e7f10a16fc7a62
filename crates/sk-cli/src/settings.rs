//! Adapter-side settings: the engine configuration plus the
//! user-facing message strings, loadable from one JSON file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use sk_core::{GameConfig, TurnOutcome};

/// Everything the adapter reads from a settings file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    /// Engine configuration (alphabet range, word-list path).
    #[serde(flatten)]
    pub game: GameConfig,
    /// User-facing message strings.
    pub messages: Messages,
}

impl FileSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| format!("invalid settings in {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }
}

/// User-facing message templates.
///
/// `{letter}`, `{reply}` and `{next}` placeholders are substituted when
/// an outcome is rendered. Any field may be overridden from the
/// settings file, e.g. to localize the game.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Printed when a game starts.
    pub started: String,
    /// Printed when a game is stopped by the player.
    pub stopped: String,
    /// Reply to a turn submitted while no game runs.
    pub not_playing: String,
    /// Reply to an unknown or already-played item.
    pub invalid: String,
    /// Reply to an item starting with the wrong letter.
    pub wrong_letter: String,
    /// Reply when the turn is accepted and the engine answers.
    pub answer: String,
    /// Reply when the engine has nothing left and concedes.
    pub engine_loses: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            started: "Game on! Name any city.".to_string(),
            stopped: "Game over. Send /start to play again.".to_string(),
            not_playing: "No game in progress. Send /start to begin.".to_string(),
            invalid: "Never heard of that one, or it has already been played. Try another."
                .to_string(),
            wrong_letter: "Your city must start with '{letter}'. Send /stop to give up."
                .to_string(),
            answer: "My letter is '{letter}'.\n\n{reply}\n\nYour letter is '{next}'."
                .to_string(),
            engine_loses: "No cities left starting with '{letter}'. I lose :(".to_string(),
        }
    }
}

impl Messages {
    /// Render a structured outcome as user-facing text.
    pub fn render(&self, outcome: &TurnOutcome) -> String {
        match outcome {
            TurnOutcome::NotPlaying => self.not_playing.clone(),
            TurnOutcome::InvalidOrRepeated => self.invalid.clone(),
            TurnOutcome::WrongLetter { expected } => {
                fill(&self.wrong_letter, &[("{letter}", &expected.to_string())])
            }
            TurnOutcome::EngineLoses { letter } => {
                fill(&self.engine_loses, &[("{letter}", &letter.to_string())])
            }
            TurnOutcome::Continue {
                letter,
                reply,
                next,
            } => fill(
                &self.answer,
                &[
                    ("{letter}", &letter.to_string()),
                    ("{reply}", reply),
                    ("{next}", &next.to_string()),
                ],
            ),
        }
    }
}

fn fill(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (placeholder, value) in substitutions {
        out = out.replace(placeholder, value);
    }
    out
}
