//! Error types raised by the engine.
//!
//! Only programmer errors surface here. Empty decks, missing legal plays
//! and games without a winner are ordinary game branches.

use thiserror::Error;

/// Errors surfaced by game construction and turn resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid player count {count}: must be between 1 and {max}")]
    InvalidPlayerCount { count: usize, max: usize },

    #[error("invalid hand size {size}: must be between 1 and {max}")]
    InvalidHandSize { size: usize, max: usize },

    #[error("game has not been initialized")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, GameError>;
