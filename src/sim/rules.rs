//! Movement and collision rules for the grid
//!
//! Pure functions over snapshots; the transition engine in `tick` is the
//! only caller that mutates anything.

use glam::IVec2;

use super::state::{Board, Snake};

/// Cell the head moves into on the next tick
#[inline]
pub fn next_head(snake: &Snake) -> IVec2 {
    snake.head() + snake.direction.delta()
}

/// Whether the post-move snake has left the board or run into itself
///
/// The head collides with its own body from the second cell on, so the
/// cell the tail vacated this tick is legal to enter.
pub fn has_collided(snake: &Snake, board: &Board) -> bool {
    let head = snake.head();
    let off_board = head.x < 0 || head.x >= board.rows || head.y < 0 || head.y >= board.rows;
    off_board || snake.positions[1..].contains(&head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Direction, ElementId};

    fn snake(direction: Direction, cells: &[(i32, i32)]) -> Snake {
        Snake {
            direction,
            positions: cells.iter().map(|&(x, y)| IVec2::new(x, y)).collect(),
            segments: (0..cells.len() as u32).map(ElementId).collect(),
            dead: false,
        }
    }

    fn board() -> Board {
        Board {
            rows: 19,
            tile_size: 20.0,
            element: ElementId(0),
        }
    }

    #[test]
    fn test_next_head_steps_one_cell() {
        let from = |dir| next_head(&snake(dir, &[(14, 14)]));
        assert_eq!(from(Direction::Left), IVec2::new(13, 14));
        assert_eq!(from(Direction::Right), IVec2::new(15, 14));
        assert_eq!(from(Direction::Up), IVec2::new(14, 15));
        assert_eq!(from(Direction::Down), IVec2::new(14, 13));
    }

    #[test]
    fn test_walls_kill() {
        // One step past each edge of a 19-row board
        assert!(has_collided(&snake(Direction::Left, &[(-1, 9)]), &board()));
        assert!(has_collided(&snake(Direction::Right, &[(19, 9)]), &board()));
        assert!(has_collided(&snake(Direction::Down, &[(9, -1)]), &board()));
        assert!(has_collided(&snake(Direction::Up, &[(9, 19)]), &board()));

        // Corner cells are still on the board
        assert!(!has_collided(&snake(Direction::Left, &[(0, 0)]), &board()));
        assert!(!has_collided(&snake(Direction::Right, &[(18, 18)]), &board()));
    }

    #[test]
    fn test_self_collision_skips_head() {
        // Head overlapping the second cell is a hit
        let overlapping = snake(Direction::Left, &[(5, 5), (5, 5), (6, 5)]);
        assert!(has_collided(&overlapping, &board()));

        // A lone head never collides with itself
        assert!(!has_collided(&snake(Direction::Left, &[(5, 5)]), &board()));
    }

    #[test]
    fn test_body_alongside_head_is_safe() {
        // U-shaped body next to the head, no overlap
        let s = snake(Direction::Up, &[(5, 6), (5, 5), (6, 5), (6, 6), (6, 7)]);
        assert!(!has_collided(&s, &board()));
    }
}
