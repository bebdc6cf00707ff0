//! Snake - a classic grid snake game rendered in the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement rules, fruit placement, game state)
//! - `store`: Single authoritative snapshot with synchronous subscribers
//! - `input`: Arrow-key direction register sampled once per tick
//! - `renderer`: DOM-backed view of the board, snake and fruit
//! - `settings`: Initialization parameters with page-provided overrides

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod store;

pub use settings::Config;
pub use store::StateStore;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Rows (and columns) of the square board
    pub const GRID_ROWS: i32 = 19;
    /// Edge length of one board tile in CSS pixels
    pub const TILE_SIZE_PX: f32 = 20.0;
    /// Fixed tick period of the game clock in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 200;

    /// Cell the snake head occupies at spawn
    pub const SNAKE_SPAWN: IVec2 = IVec2::new(14, 14);
    /// Cell the first fruit occupies
    pub const FRUIT_SPAWN: IVec2 = IVec2::new(6, 16);
}

/// Snap one grid coordinate to its CSS pixel offset
#[inline]
pub fn cell_to_px(cell: i32, tile_size: f32) -> f32 {
    (cell as f32 * tile_size).round()
}

/// Pixel offsets of a grid cell, measured from the board's bottom-left corner
#[inline]
pub fn cell_offset_px(cell: IVec2, tile_size: f32) -> (f32, f32) {
    (cell_to_px(cell.x, tile_size), cell_to_px(cell.y, tile_size))
}
