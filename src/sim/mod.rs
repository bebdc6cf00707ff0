//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed grid, integer cells
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod rules;
pub mod state;
pub mod tick;

pub use rules::{has_collided, next_head};
pub use state::{
    Board, Direction, ElementId, Fruit, GameEvent, GamePhase, GameState, Snake,
};
pub use tick::{TickInput, place_fruit, tick};
