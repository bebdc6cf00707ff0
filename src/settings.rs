//! Initialization parameters
//!
//! The page can hand the game a partial configuration; anything absent
//! falls back to the classic board.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::Direction;

/// Parameters fixed at game start
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows (and columns) of the square board
    pub rows: i32,
    /// Tile edge length in CSS pixels
    pub tile_size: f32,
    /// Milliseconds between clock ticks
    pub tick_interval_ms: u32,
    /// Cell the snake head starts on
    pub snake_spawn: IVec2,
    /// Heading at spawn
    pub spawn_direction: Direction,
    /// Cell the first fruit occupies
    pub fruit_spawn: IVec2,
    /// Fixed RNG seed; absent means seed from the clock
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: consts::GRID_ROWS,
            tile_size: consts::TILE_SIZE_PX,
            tick_interval_ms: consts::TICK_INTERVAL_MS,
            snake_spawn: consts::SNAKE_SPAWN,
            spawn_direction: Direction::Left,
            fruit_spawn: consts::FRUIT_SPAWN,
            seed: None,
        }
    }
}

impl Config {
    /// Load the page-provided configuration (WASM only)
    ///
    /// Reads a JSON `data-config` attribute from `#board`; a missing or
    /// malformed attribute falls back to the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let attribute = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("board"))
            .and_then(|board| board.get_attribute("data-config"));

        match attribute {
            Some(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded page configuration");
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed data-config: {err}");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
