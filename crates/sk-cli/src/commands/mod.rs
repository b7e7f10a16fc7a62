pub mod check;
pub mod play;

use std::path::Path;

use sk_core::GameConfig;

use crate::settings::{FileSettings, Messages};

/// Resolve the effective configuration: the settings file (if any),
/// then command-line overrides on top.
pub fn resolve(
    config: Option<&Path>,
    words: Option<&Path>,
    alphabet: Option<&[char]>,
) -> Result<(GameConfig, Messages), String> {
    let settings = match config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };

    let mut game = settings.game;
    if let Some(words) = words {
        game = game.with_word_list(words);
    }
    if let Some([first, last]) = alphabet {
        game = game.with_alphabet(*first, *last);
    }

    Ok((game, settings.messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn overrides_beat_defaults() {
        let (game, _) = resolve(None, Some(Path::new("towns.txt")), Some(&['A', 'Z'])).unwrap();
        assert_eq!(game.word_list, PathBuf::from("towns.txt"));
        assert_eq!(game.first_letter, 'A');
        assert_eq!(game.last_letter, 'Z');
    }

    #[test]
    fn defaults_without_overrides() {
        let (game, messages) = resolve(None, None, None).unwrap();
        assert_eq!(game.first_letter, 'А');
        assert!(!messages.started.is_empty());
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        assert!(resolve(Some(Path::new("/no/such/settings.json")), None, None).is_err());
    }
}
