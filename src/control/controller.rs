use tracing::{debug, info};

use super::scheduler::{Scheduler, TickToken};
use crate::game::{Direction, FoodSource, GameConfig, GameEngine, GameState, StepOutcome};

/// Lifecycle phase of the tick loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh game, no tick armed
    Idle,
    /// A tick is armed and every firing advances the game
    Running,
    /// Tick cancelled, state kept
    Paused,
    /// The snake collided; only a restart leaves this phase
    GameOver,
}

/// Receives notifications from the [`Controller`]
pub trait GameObserver {
    /// The state changed and should be redrawn
    fn render(&mut self, state: &GameState);

    fn score_changed(&mut self, score: u32);

    /// Called once per collision
    fn game_over(&mut self, score: u32);
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn render(&mut self, _state: &GameState) {}
    fn score_changed(&mut self, _score: u32) {}
    fn game_over(&mut self, _score: u32) {}
}

/// Owns the game state and drives it from scheduled ticks and player input
pub struct Controller<F, S> {
    engine: GameEngine<F>,
    state: GameState,
    scheduler: S,
    phase: Phase,
    armed: Option<TickToken>,
}

impl<F: FoodSource, S: Scheduler> Controller<F, S> {
    pub fn new(mut engine: GameEngine<F>, scheduler: S) -> Self {
        let state = engine.reset();
        Self {
            engine,
            state,
            scheduler,
            phase: Phase::Idle,
            armed: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Push the current score and a frame to a freshly attached observer
    pub fn announce(&self, observer: &mut dyn GameObserver) {
        observer.score_changed(self.state.score);
        observer.render(&self.state);
    }

    /// Begin ticking. Resumes a paused game; does nothing once running or
    /// after a collision.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Paused => {
                debug!(from = ?self.phase, "starting tick loop");
                self.phase = Phase::Running;
                self.arm();
                true
            }
            Phase::Running | Phase::GameOver => false,
        }
    }

    /// Flip between running and paused. Idle and game-over games are left alone.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.disarm();
                self.phase = Phase::Paused;
                debug!("paused");
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                self.arm();
                debug!("resumed");
                true
            }
            Phase::Idle | Phase::GameOver => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        self.phase == Phase::Running && self.toggle_pause()
    }

    pub fn resume(&mut self) -> bool {
        self.phase == Phase::Paused && self.toggle_pause()
    }

    /// Throw the current game away and return to `Idle`
    pub fn reset(&mut self, observer: &mut dyn GameObserver) {
        self.disarm();
        self.state = self.engine.reset();
        self.phase = Phase::Idle;
        debug!("game reset");
        self.announce(observer);
    }

    /// Reset and immediately start a new game
    pub fn restart(&mut self, observer: &mut dyn GameObserver) {
        self.reset(observer);
        self.start();
    }

    /// Queue a heading for the next tick; false if it was rejected
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.state.request_direction(direction)
    }

    /// Handle a fired tick. Cancelled or superseded tokens are ignored.
    pub fn on_tick(&mut self, token: TickToken, observer: &mut dyn GameObserver) {
        if self.armed != Some(token) {
            debug!(token = token.id(), "ignoring stale tick");
            return;
        }
        self.armed = None;

        if self.phase != Phase::Running {
            return;
        }

        let outcome = self.engine.step(&mut self.state);
        if let StepOutcome::Continue { ate_food: true, .. } = outcome {
            observer.score_changed(self.state.score);
        }
        observer.render(&self.state);

        if outcome.is_terminal() {
            self.phase = Phase::GameOver;
            info!(score = self.state.score, ?outcome, "game over");
            observer.game_over(self.state.score);
        } else {
            self.arm();
        }
    }

    fn arm(&mut self) {
        self.disarm();
        let interval = self.engine.config().tick_interval();
        self.armed = Some(self.scheduler.schedule(interval));
    }

    fn disarm(&mut self) {
        if let Some(token) = self.armed.take() {
            self.scheduler.cancel(token);
        }
    }
}
