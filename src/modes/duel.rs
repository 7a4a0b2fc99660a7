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

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// Where the session currently sits. Restart goes back to `Playing`
/// through a fresh round; there is no re-entrant round setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Rules screen, waiting for confirmation
    Rules,
    Playing,
    /// Terminal outcome reached, waiting for restart or quit
    GameOver,
}

pub struct DuelMode {
    engine: GameEngine,
    state: GameState,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    phase: Phase,
    should_quit: bool,
    pending_direction: Option<Direction>,
    tick_len: Duration,
}

impl DuelMode {
    pub fn new(config: GameConfig) -> Self {
        let tick_len = config.tick_interval(0);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            phase: Phase::Rules,
            should_quit: false,
            pending_direction: None,
            tick_len,
        }
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

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The game tick starts at the base rate and is re-armed whenever
        // the combined score pushes the rate up
        let mut tick_timer = interval(self.tick_len);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.phase == Phase::Playing {
                        self.update_game();
                        let wanted = self.engine.config().tick_interval(self.state.total_score());
                        if wanted != self.tick_len {
                            self.tick_len = wanted;
                            tick_timer = interval(wanted);
                        }
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        match self.phase {
                            Phase::Rules => self.renderer.render_rules(frame),
                            Phase::Playing | Phase::GameOver => {
                                self.renderer.render(frame, &self.state, &self.metrics);
                            }
                        }
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply_key_action(action);
        }
    }

    fn apply_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::Start => {
                if self.phase == Phase::Rules {
                    self.phase = Phase::Playing;
                    self.metrics.on_round_start();
                }
            }
            KeyAction::Restart => {
                if self.phase != Phase::Rules {
                    self.reset_round();
                }
            }
            KeyAction::GameAction(Action::Move(direction)) => {
                if self.phase == Phase::Playing {
                    self.pending_direction = Some(direction);
                }
            }
            KeyAction::GameAction(Action::Continue) | KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        let action = self
            .pending_direction
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        self.pending_direction = None;

        let result = self.engine.step(&mut self.state, action);

        if result.terminated() {
            self.phase = Phase::GameOver;
            self.metrics
                .on_round_over(self.state.player.score, self.state.ai.score);
        }
    }

    fn reset_round(&mut self) {
        self.state = self.engine.reset();
        self.pending_direction = None;
        self.tick_len = self.engine.config().tick_interval(0);
        self.metrics.on_round_start();
        // A board too dense to seed food ends the round before it starts
        self.phase = if self.state.is_running() {
            Phase::Playing
        } else {
            Phase::GameOver
        };
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
