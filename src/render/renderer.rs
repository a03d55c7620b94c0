use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::control::Phase;
use crate::game::{GameState, Position};
use crate::metrics::GameMetrics;

/// Colour scheme; toggling it has no effect on the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                label: Color::Yellow,
                empty: Color::DarkGray,
                head: Color::LightGreen,
                body: Color::Green,
                food: Color::Red,
            },
            Theme::Light => Palette {
                background: Color::White,
                text: Color::Black,
                label: Color::Blue,
                empty: Color::Gray,
                head: Color::Green,
                body: Color::Green,
                food: Color::Red,
            },
        }
    }
}

struct Palette {
    background: Color,
    text: Color,
    label: Color,
    empty: Color,
    head: Color,
    body: Color,
    food: Color,
}

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, phase: Phase, metrics: &GameMetrics) {
        let palette = self.theme.palette();
        let base = Style::default().bg(palette.background).fg(palette.text);
        frame.render_widget(Block::default().style(base), frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, phase, metrics, &palette), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_grid(state, &palette), game_area);

        if phase == Phase::GameOver {
            let overlay = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(30),
                    Constraint::Length(8),
                    Constraint::Min(0),
                ])
                .split(game_area)[1];
            frame.render_widget(Clear, overlay);
            frame.render_widget(self.render_game_over(state, &palette), overlay);
        }

        frame.render_widget(self.render_controls(&palette), chunks[2]);
    }

    fn render_grid(&self, state: &GameState, palette: &Palette) -> Paragraph<'static> {
        let mut lines = Vec::with_capacity(state.grid_dimension);

        for y in 0..state.grid_dimension {
            let mut spans = Vec::with_capacity(state.grid_dimension);

            for x in 0..state.grid_dimension {
                let pos = Position::new(x as i32, y as i32);

                // Snake cells win over food when both share a cell
                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(palette.head)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(palette.body))
                } else if pos == state.food {
                    Span::styled(
                        "● ",
                        Style::default()
                            .fg(palette.food)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(palette.empty))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(palette.text))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        state: &GameState,
        phase: Phase,
        metrics: &GameMetrics,
        palette: &Palette,
    ) -> Paragraph<'static> {
        let label = Style::default().fg(palette.label);
        let value = Style::default().fg(palette.text);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Steps: ", label),
            Span::styled(state.steps.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled(phase_label(phase), value.add_modifier(Modifier::ITALIC)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, palette: &Palette) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(palette.label)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to restart or "),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to quit"),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.background).fg(palette.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
    }

    fn render_controls(&self, palette: &Palette) -> Paragraph<'static> {
        let key = Style::default().fg(palette.label);
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw("/"),
            Span::styled("WASD", key),
            Span::raw(" move | "),
            Span::styled("Enter", key),
            Span::raw(" start | "),
            Span::styled("P", key),
            Span::raw(" pause | "),
            Span::styled("R", key),
            Span::raw(" restart | "),
            Span::styled("T", key),
            Span::raw(" theme | "),
            Span::styled("Q", key),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "press Enter to start",
        Phase::Running => "running",
        Phase::Paused => "paused",
        Phase::GameOver => "game over",
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
