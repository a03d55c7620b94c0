use tracing::debug;

use super::{
    config::{ConfigError, GameConfig},
    food::FoodSource,
    state::{CollisionType, GameState, Position, Snake},
};

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The run goes on; `moved` is false while the snake is still waiting
    /// for its first direction
    Continue { moved: bool, ate_food: bool },
    /// Terminal outcome, the state is left as it was before the move
    Collided(CollisionType),
}

impl StepOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepOutcome::Collided(_))
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<F> {
    config: GameConfig,
    food: F,
}

impl<F: FoodSource> GameEngine<F> {
    /// Create a new game engine with the given configuration and food source.
    ///
    /// The configuration is trusted; use [`GameEngine::try_new`] for input
    /// that has not been validated yet.
    pub fn new(config: GameConfig, food: F) -> Self {
        Self { config, food }
    }

    /// Validate `config` before building the engine
    pub fn try_new(config: GameConfig, food: F) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, food))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh state: one segment at the centre, still, score zero
    pub fn reset(&mut self) -> GameState {
        let dimension = self.config.grid_dimension();
        let center = (dimension / 2) as i32;

        let snake = Snake::new(Position::new(center, center));
        let food = self.food.next_food(dimension);
        debug!(x = food.x, y = food.y, "placed initial food");

        GameState::new(snake, food, dimension)
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        if !state.is_alive {
            // Dead states are frozen; report the terminal outcome again.
            let head = state.snake.head().moved_with(state.velocity);
            let collision = Self::check_collision(state, head).unwrap_or(CollisionType::Wall);
            return StepOutcome::Collided(collision);
        }

        state.velocity = state.pending_velocity;
        if state.velocity.is_still() {
            return StepOutcome::Continue {
                moved: false,
                ate_food: false,
            };
        }

        // Calculate new head position
        let new_head = state.snake.head().moved_with(state.velocity);

        // Collisions are checked against the pre-move body
        if let Some(collision_type) = Self::check_collision(state, new_head) {
            state.is_alive = false;
            return StepOutcome::Collided(collision_type);
        }

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.score += 1;
            state.food = self.food.next_food(state.grid_dimension);
            debug!(
                score = state.score,
                x = state.food.x,
                y = state.food.y,
                "food eaten, respawned"
            );
        }

        state.steps += 1;

        StepOutcome::Continue {
            moved: true,
            ate_food,
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(state: &GameState, pos: Position) -> Option<CollisionType> {
        // Check wall collision
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // Check self-collision
        if state.is_occupied_by_snake(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}
