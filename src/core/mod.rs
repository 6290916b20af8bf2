//! Core engine types: players, state, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_HAND_SIZE, DEFAULT_SEED};
pub use error::{GameError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{Direction, GameState};
