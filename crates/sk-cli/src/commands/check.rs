//! Validate a word list against the configured alphabet.

use sk_core::{Catalog, GameConfig};

pub fn run(config: &GameConfig) -> Result<(), String> {
    let alphabet = config.alphabet().map_err(|e| e.to_string())?;
    let catalog = Catalog::from_path(alphabet, config.word_list())
        .map_err(|e| e.to_string())?;

    println!(
        "  All checks passed for '{}'.",
        config.word_list().display()
    );
    println!(
        "  {} items across {} letters ({}..{})",
        catalog.len(),
        alphabet.len(),
        alphabet.first(),
        alphabet.last()
    );

    let dead = catalog.dead_letters();
    if dead.is_empty() {
        println!("  No dead letters.");
    } else {
        let letters: Vec<String> = dead.iter().map(|l| l.to_string()).collect();
        println!("  {} dead letters: {}", dead.len(), letters.join(", "));
    }

    if catalog.skipped_lines() > 0 {
        println!(
            "  {} lines skipped (first letter outside the alphabet)",
            catalog.skipped_lines()
        );
    }

    Ok(())
}
