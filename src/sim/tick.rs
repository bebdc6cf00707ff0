//! Fixed timestep simulation tick
//!
//! The transition engine: one call per beat of the game clock, deterministic.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::rules;
use super::state::{Direction, GameEvent, GamePhase, GameState};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// Heading sampled from the direction register
    pub direction: Direction,
}

/// Advance the game state by one tick
///
/// Returns the tick's events in the order they happened: `Moved` always
/// precedes a `FruitEaten` or `Killed` from the same tick.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if state.phase == GamePhase::Dead {
        return Vec::new();
    }

    state.time_ticks += 1;
    state.snake.direction = input.direction;

    // Prepend the next head; the tail stays only when the head lands on fruit
    let head = rules::next_head(&state.snake);
    let ate = head == state.fruit.pos;
    state.snake.positions.insert(0, head);
    if !ate {
        state.snake.positions.pop();
    }

    let mut events = vec![GameEvent::Moved {
        snake: state.snake.clone(),
    }];

    if rules::has_collided(&state.snake, &state.board) {
        log::info!(
            "snake died at {:?} after {} ticks, length {}",
            head,
            state.time_ticks,
            state.snake.len()
        );
        state.snake.dead = true;
        state.phase = GamePhase::Dead;
        events.push(GameEvent::Killed {
            snake: state.snake.clone(),
        });
        return events;
    }

    if ate {
        let segment = state.next_entity_id();
        state.snake.segments.push(segment);

        match place_fruit(&mut state.rng, state.board.rows, &state.snake.positions) {
            Some(cell) => {
                log::debug!("fruit relocated to {:?}", cell);
                state.fruit.pos = cell;
                events.push(GameEvent::FruitEaten {
                    snake: state.snake.clone(),
                    fruit: cell,
                });
            }
            None => {
                // The snake covers the whole board; nowhere left to go
                log::info!("board saturated after {} ticks", state.time_ticks);
                state.snake.dead = true;
                state.phase = GamePhase::Dead;
                events.push(GameEvent::Killed {
                    snake: state.snake.clone(),
                });
            }
        }
    }

    events
}

/// Pick an unoccupied cell for the fruit, uniformly at random
///
/// Rejection sampling over the grid. Returns `None` only when every cell
/// is occupied.
pub fn place_fruit(rng: &mut Pcg32, rows: i32, occupied: &[IVec2]) -> Option<IVec2> {
    if occupied.len() >= (rows * rows) as usize {
        return None;
    }
    loop {
        let cell = IVec2::new(rng.random_range(0..rows), rng.random_range(0..rows));
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
}
