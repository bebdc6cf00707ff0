//! Keyboard input
//!
//! A latest-wins register between the keyboard and the clock: the last
//! recognized arrow key before a tick decides the heading for that tick.

use crate::sim::{Direction, TickInput};

/// Map a `KeyboardEvent.key` value to a heading
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Single-slot direction register
#[derive(Debug, Clone, Copy)]
pub struct DirectionTracker {
    current: Direction,
}

impl DirectionTracker {
    /// Start the register at the spawn heading
    pub fn new(initial: Direction) -> Self {
        Self { current: initial }
    }

    /// Record a key press; unrecognized keys leave the register alone
    pub fn record_key(&mut self, key: &str) {
        if let Some(direction) = direction_from_key(key) {
            self.current = direction;
        }
    }

    /// Input for the next tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            direction: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_headings() {
        assert_eq!(direction_from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(direction_from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_from_key("ArrowRight"), Some(Direction::Right));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut tracker = DirectionTracker::new(Direction::Left);
        for key in ["w", "a", " ", "Enter", "arrowup", ""] {
            assert_eq!(direction_from_key(key), None);
            tracker.record_key(key);
        }
        assert_eq!(tracker.sample().direction, Direction::Left);
    }

    #[test]
    fn test_last_key_before_the_tick_wins() {
        let mut tracker = DirectionTracker::new(Direction::Left);
        tracker.record_key("ArrowUp");
        tracker.record_key("ArrowRight");
        tracker.record_key("ArrowDown");
        assert_eq!(tracker.sample().direction, Direction::Down);

        // Sampling does not clear the register
        assert_eq!(tracker.sample().direction, Direction::Down);
    }
}
