use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::control::{Controller, GameObserver, Phase, TokioScheduler};
use crate::game::{FoodSource, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Collects controller notifications until the next frame is drawn
#[derive(Debug, Default)]
struct ViewState {
    needs_redraw: bool,
    score: u32,
    game_over: Option<u32>,
}

impl GameObserver for ViewState {
    fn render(&mut self, _state: &GameState) {
        self.needs_redraw = true;
    }

    fn score_changed(&mut self, score: u32) {
        self.score = score;
    }

    fn game_over(&mut self, score: u32) {
        self.game_over = Some(score);
    }
}

pub struct HumanMode {
    controller: Controller<Box<dyn FoodSource>, TokioScheduler>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    view: ViewState,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, food: Box<dyn FoodSource>) -> Result<Self> {
        let engine = GameEngine::try_new(config, food).context("Invalid game configuration")?;
        let controller = Controller::new(engine, TokioScheduler::new());
        let mut view = ViewState::default();
        controller.announce(&mut view);

        Ok(Self {
            controller,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            view,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            games = self.metrics.games_played,
            high_score = self.metrics.high_score,
            "session finished"
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Keeps the clock in the header moving between ticks
        let mut clock_timer = interval(Duration::from_secs(1));

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                token = self.controller.scheduler_mut().fired() => {
                    self.controller.on_tick(token, &mut self.view);
                }

                _ = clock_timer.tick() => {
                    if self.controller.is_running() {
                        self.view.needs_redraw = true;
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            self.sync_metrics();

            if self.should_quit {
                break;
            }

            if self.view.needs_redraw {
                self.draw(terminal)?;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input_handler.handle_key_event(key);
                self.handle_action(action);
            }
            Event::Resize(..) => self.view.needs_redraw = true,
            _ => {}
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => {
                self.controller.request_direction(direction);
            }
            KeyAction::Start => {
                self.controller.start();
            }
            KeyAction::TogglePause => {
                self.controller.toggle_pause();
            }
            KeyAction::Restart => {
                self.controller.restart(&mut self.view);
                self.metrics.on_game_reset();
            }
            KeyAction::ToggleTheme => self.renderer.toggle_theme(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => return,
        }
        self.view.needs_redraw = true;
    }

    /// Keep session statistics in step with the controller phase
    fn sync_metrics(&mut self) {
        if let Some(score) = self.view.game_over.take() {
            self.metrics.on_game_over(score);
        }
        match self.controller.phase() {
            Phase::Running => self.metrics.resume_clock(),
            Phase::Idle | Phase::Paused | Phase::GameOver => self.metrics.pause_clock(),
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();
        let renderer = &self.renderer;
        let metrics = &self.metrics;
        let controller = &self.controller;
        terminal
            .draw(|frame| {
                renderer.render(frame, controller.state(), controller.phase(), metrics);
            })
            .context("Failed to draw frame")?;
        self.view.needs_redraw = false;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
