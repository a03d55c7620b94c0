//! Food placement.
//!
//! The engine asks a [`FoodSource`] for a cell every time food is consumed and
//! once per reset. Placement is uniform over the whole grid and is not checked
//! against the snake, so food can appear under the body.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::state::Position;

/// Supplies the next food position for a square grid
pub trait FoodSource {
    fn next_food(&mut self, grid_dimension: usize) -> Position;
}

/// Draws each axis independently and uniformly from `0..grid_dimension`
#[derive(Debug, Clone)]
pub struct RandomFood<R> {
    rng: R,
}

impl<R: Rng> RandomFood<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomFood<ThreadRng> {
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomFood<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FoodSource for RandomFood<R> {
    fn next_food(&mut self, grid_dimension: usize) -> Position {
        let x = self.rng.gen_range(0..grid_dimension) as i32;
        let y = self.rng.gen_range(0..grid_dimension) as i32;
        Position::new(x, y)
    }
}

impl<F: FoodSource + ?Sized> FoodSource for Box<F> {
    fn next_food(&mut self, grid_dimension: usize) -> Position {
        (**self).next_food(grid_dimension)
    }
}

/// Replays a fixed list of positions, cycling when it runs out
#[derive(Debug, Clone)]
pub struct ScriptedFood {
    positions: Vec<Position>,
    next: usize,
}

impl ScriptedFood {
    /// Panics if `positions` is empty.
    pub fn new(positions: Vec<Position>) -> Self {
        assert!(!positions.is_empty(), "scripted food needs at least one cell");
        Self { positions, next: 0 }
    }
}

impl FoodSource for ScriptedFood {
    fn next_food(&mut self, _grid_dimension: usize) -> Position {
        let pos = self.positions[self.next % self.positions.len()];
        self.next += 1;
        pos
    }
}
