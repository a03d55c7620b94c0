use tracing::debug;

use super::action::{Direction, Velocity};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn moved_with(&self, velocity: Velocity) -> Self {
        let (dx, dy) = velocity.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a one-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Create a snake from explicit segments, head first.
    ///
    /// Panics if `body` is empty.
    pub fn from_segments(body: Vec<Position>) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// True if any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head, dropping the tail unless the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Velocity used by the most recent tick
    pub velocity: Velocity,
    /// Velocity the next tick will commit
    pub pending_velocity: Velocity,
    pub food: Position,
    pub grid_dimension: usize,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state with a still snake
    pub fn new(snake: Snake, food: Position, grid_dimension: usize) -> Self {
        Self {
            snake,
            velocity: Velocity::Still,
            pending_velocity: Velocity::Still,
            food,
            grid_dimension,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    /// Builder-style helper setting both current and pending velocity
    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self.pending_velocity = velocity;
        self
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let dimension = self.grid_dimension as i32;
        pos.x >= 0 && pos.x < dimension && pos.y >= 0 && pos.y < dimension
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// Ask for a new heading on the next tick.
    ///
    /// Returns false, leaving the pending velocity alone, when `direction`
    /// reverses the velocity of the last tick.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.velocity.opposes(direction) {
            debug!(?direction, velocity = ?self.velocity, "rejected reversing direction");
            return false;
        }
        self.pending_velocity = Velocity::Moving(direction);
        true
    }
}
