//! Pure view model
//!
//! Projects a state snapshot onto the output boundary: pixel offsets,
//! the head rotation and the dead flag. The DOM layer applies it.

use glam::IVec2;

use crate::cell_offset_px;
use crate::sim::{Direction, ElementId, GameState};

/// Pixel placement of one rendered element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentView {
    pub element: ElementId,
    /// CSS `left` offset in pixels
    pub left: f32,
    /// CSS `bottom` offset in pixels
    pub bottom: f32,
}

/// Everything the DOM layer needs for one update
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Body segments in body order, head first
    ///
    /// Driven by the rendering handles: a grown tail cell shows up here
    /// once its handle exists, one update after the move.
    pub segments: Vec<SegmentView>,
    /// Head rotation in CSS degrees
    pub head_degrees: f32,
    pub dead: bool,
    pub fruit: SegmentView,
    pub rows: i32,
    pub tile_size: f32,
}

impl RenderFrame {
    /// Project a snapshot
    pub fn from_state(state: &GameState) -> Self {
        let tile = state.board.tile_size;
        let segments = state
            .snake
            .segments
            .iter()
            .zip(&state.snake.positions)
            .map(|(&element, &cell)| segment_view(element, cell, tile))
            .collect();

        Self {
            segments,
            head_degrees: heading_degrees(state.snake.direction),
            dead: state.snake.dead,
            fruit: segment_view(state.fruit.element, state.fruit.pos, tile),
            rows: state.board.rows,
            tile_size: tile,
        }
    }
}

fn segment_view(element: ElementId, cell: IVec2, tile_size: f32) -> SegmentView {
    let (left, bottom) = cell_offset_px(cell, tile_size);
    SegmentView {
        element,
        left,
        bottom,
    }
}

/// CSS rotation that points the head sprite along its heading
///
/// The sprite faces left unrotated.
pub fn heading_degrees(direction: Direction) -> f32 {
    match direction {
        Direction::Up => 90.0,
        Direction::Down => 270.0,
        Direction::Left => 0.0,
        Direction::Right => 180.0,
    }
}
