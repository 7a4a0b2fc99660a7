use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Position};
use crate::metrics::SessionMetrics;

const PLAYER_HEAD: Color = Color::Cyan;
const PLAYER_BODY: Color = Color::Blue;
const AI_HEAD: Color = Color::LightGreen;
const AI_BODY: Color = Color::Green;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame of the duel: score panel, grid (or the game-over
    /// banner once the round ended), and the control hints
    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Score panel
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let panel = self.render_score_panel(chunks[0], state, metrics);
        frame.render_widget(panel, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_running() {
            let grid = self.render_grid(game_area, state);
            frame.render_widget(grid, game_area);
        } else {
            let game_over = self.render_game_over(game_area, state, metrics);
            frame.render_widget(game_over, game_area);
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    /// The pre-round rules screen, shown until the player confirms
    pub fn render_rules(&self, frame: &mut Frame) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "SNAKE DUEL: Player vs AI",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        let sections: [(&str, &[&str]); 4] = [
            (
                "Goal:",
                &[
                    "Outlive the AI snake.",
                    "Grab the food (red) to grow and score.",
                ],
            ),
            (
                "Controls (you are blue):",
                &[
                    "Arrow keys or WASD to steer.",
                    "Don't hit the walls, yourself, or the AI!",
                ],
            ),
            (
                "The catch:",
                &[
                    "The AI snake (green) hunts the same food.",
                    "Every 5 combined points the labyrinth grows.",
                    "The game speeds up as the total score climbs.",
                ],
            ),
            (
                "Round ends when:",
                &[
                    "You crash into anything -> AI wins.",
                    "The AI crashes or gets walled off -> you win!",
                ],
            ),
        ];

        for (title, rows) in sections {
            lines.push(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for row in rows {
                lines.push(Line::from(Span::styled(
                    format!("  {row}"),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "SPACE",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to start!", Style::default().fg(Color::Gray)),
        ]));

        let screen = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White)),
        );
        frame.render_widget(screen, frame.area());
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let size = state.maze.size();
        let mut lines = Vec::with_capacity(size);

        for y in 0..size {
            let mut spans = Vec::with_capacity(size);

            for x in 0..size {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == state.player.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(PLAYER_HEAD)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.player.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(PLAYER_BODY))
                } else if pos == state.ai.head() {
                    Span::styled(
                        "■ ",
                        Style::default().fg(AI_HEAD).add_modifier(Modifier::BOLD),
                    )
                } else if state.ai.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(AI_BODY))
                } else if state.food == Some(pos) {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if state.maze.is_blocked(pos) {
                    Span::styled("▓ ", Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled(". ", Style::default().fg(Color::Black))
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
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake Duel "),
            )
            .alignment(Alignment::Center)
    }

    fn render_score_panel(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("You: ", Style::default().fg(PLAYER_HEAD)),
            Span::styled(
                state.player.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("AI: ", Style::default().fg(AI_HEAD)),
            Span::styled(
                state.ai.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Total: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.total_score().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(
                    "{} | {}",
                    metrics.best_player_score, metrics.best_ai_score
                ),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        let banner = state
            .outcome
            .map(|outcome| outcome.describe())
            .unwrap_or("GAME OVER");

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                banner,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final score -> ", Style::default().fg(Color::Yellow)),
                Span::styled("You: ", Style::default().fg(PLAYER_HEAD)),
                Span::styled(
                    state.player.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" | AI: ", Style::default().fg(AI_HEAD)),
                Span::styled(
                    state.ai.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("Rounds played: {}", metrics.rounds_played),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled("    Session best -> ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!(
                        "You: {} | AI: {}",
                        metrics.best_player_score, metrics.best_ai_score
                    ),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
