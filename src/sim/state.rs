//! Game state and core simulation types
//!
//! Everything the renderer observes and determinism depends on lives here.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Config;

/// Heading of the snake on the board's bottom-left grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Left,
    Right,
}

impl Direction {
    /// One-cell step for this heading (`y` grows toward the top of the board)
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, 1),
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }
}

/// Opaque rendering handle allocated by the simulation
///
/// The sim hands these out but never interprets them; the renderer owns
/// the mapping from handle to on-screen element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u32);

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Snake answers the clock and the direction register
    Running,
    /// Run ended; the board keeps its final layout
    Dead,
}

/// The snake, head first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Heading adopted on the most recent tick
    pub direction: Direction,
    /// Occupied cells, head at index 0
    pub positions: Vec<IVec2>,
    /// Rendering handles parallel to `positions`
    pub segments: Vec<ElementId>,
    /// Set on the tick the snake dies, never cleared
    pub dead: bool,
}

impl Snake {
    /// Cell the head occupies
    #[inline]
    pub fn head(&self) -> IVec2 {
        self.positions[0]
    }

    /// Body length in cells
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

/// The fruit the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    pub pos: IVec2,
    pub element: ElementId,
}

/// The playing field, a square grid of `rows` x `rows` cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub rows: i32,
    /// Edge length of one tile in CSS pixels
    pub tile_size: f32,
    pub element: ElementId,
}

/// What a single tick did, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The snake advanced one cell
    Moved { snake: Snake },
    /// The head landed on the fruit; the body grew and the fruit relocated
    FruitEaten { snake: Snake, fruit: IVec2 },
    /// The snake left the board or ran into itself
    Killed { snake: Snake },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG driving fruit placement
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub snake: Snake,
    pub fruit: Fruit,
    pub board: Board,
    /// Next rendering handle
    next_id: u32,
}

impl GameState {
    /// Create a new game state from initialization parameters and a seed
    pub fn new(config: &Config, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Running,
            snake: Snake {
                direction: config.spawn_direction,
                positions: Vec::new(),
                segments: Vec::new(),
                dead: false,
            },
            fruit: Fruit {
                pos: config.fruit_spawn,
                element: ElementId(0),
            },
            board: Board {
                rows: config.rows,
                tile_size: config.tile_size,
                element: ElementId(0),
            },
            next_id: 1,
        };

        state.board.element = state.next_entity_id();
        state.fruit.element = state.next_entity_id();
        state.spawn_snake(config.snake_spawn);

        state
    }

    /// Allocate a new rendering handle
    pub fn next_entity_id(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        ElementId(id)
    }

    /// Place the one-segment spawn snake on the board
    fn spawn_snake(&mut self, cell: IVec2) {
        let head = self.next_entity_id();
        self.snake.positions.push(cell);
        self.snake.segments.push(head);
    }
}
