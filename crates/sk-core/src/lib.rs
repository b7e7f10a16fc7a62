//! Word-chain ("Cities") game engine for Stadtkette.
//!
//! Each side names an item whose first letter matches the *effective*
//! last letter of the previous item — the last character that is not a
//! dead letter, where dead letters are those no remaining item starts
//! with. Items come from a line-oriented catalog, are consumed
//! permanently once played, and the first side unable to answer loses.
//!
//! The engine is transport-agnostic: it accepts raw text turns and
//! returns structured [`TurnOutcome`]s. Rendering, credentials, and
//! chat plumbing belong to the adapter on top.

pub mod alphabet;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod session;

pub use alphabet::Alphabet;
pub use catalog::Catalog;
pub use config::GameConfig;
pub use engine::GameEngine;
pub use error::{ChainError, ChainResult};
pub use outcome::TurnOutcome;
pub use session::GameSession;
