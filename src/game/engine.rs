use super::{
    action::{Action, Direction},
    config::{GameConfig, MIN_GRID_SIZE},
    maze::Maze,
    pathfind::find_path,
    state::{GameState, Outcome, Position, Snake},
};
use rand::Rng;
use std::collections::HashSet;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether either snake ate the food this tick
    pub ate_food: bool,
    /// Terminal outcome, if the round ended this tick
    pub outcome: Option<Outcome>,
}

impl StepResult {
    pub fn terminated(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Drives the duel: spawning, per-tick transitions, food placement, and
/// maze escalation. All randomness lives here; the state itself is inert.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Grid sizes below [`MIN_GRID_SIZE`] leave no interior to play on and
    /// are floored, so spawning never samples an empty range
    pub fn new(mut config: GameConfig) -> Self {
        config.grid_size = config.grid_size.max(MIN_GRID_SIZE);
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh round: boundary-only maze, both snakes on distinct
    /// free cells, one food placed
    pub fn reset(&mut self) -> GameState {
        let maze = Maze::new(self.config.grid_size);

        let player_start = self.spawn_cell(&maze, &[]);
        let ai_start = self.spawn_cell(&maze, &[player_start]);
        let player = Snake::new(player_start, Direction::Right);
        let ai = Snake::new(ai_start, Direction::Right);

        let mut state = GameState::new(player, ai, maze);
        let mut forbidden = state.maze.wall_set();
        forbidden.insert(player_start);
        forbidden.insert(ai_start);
        state.food = self.place_food(&forbidden);
        if state.food.is_none() {
            state.outcome = Some(Outcome::BoardFull);
        }
        state
    }

    /// Advance the duel by one tick. Collision and planning failures are
    /// ordinary outcomes recorded on the state, never errors.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_running() {
            return StepResult {
                ate_food: false,
                outcome: state.outcome,
            };
        }

        // Steer the player, ignoring an instant reversal
        if let Action::Move(direction) = action {
            if !state.player.direction.is_opposite(direction) {
                state.player.direction = direction;
            }
        }

        let food = match state.food {
            Some(food) => food,
            None => return self.finish(state, Outcome::BoardFull, false),
        };

        // Replan from scratch against everything currently on the board
        let mut obstacles = state.maze.wall_set();
        obstacles.extend(state.ai.body.iter().copied());
        obstacles.extend(state.player.body.iter().copied());
        let path = find_path(state.ai.head(), food, &obstacles, self.config.grid_size);
        if path.is_empty() {
            return self.finish(state, Outcome::UnreachableGoal, false);
        }

        let player_next = state.player.head().step(state.player.direction);
        let ai_next = path[0];

        // Collision checks, in priority order. First match ends the round
        // with neither snake moving.
        if state.maze.is_blocked(player_next)
            || state.player.occupies(player_next)
            || state.ai.occupies(player_next)
        {
            return self.finish(state, Outcome::AiWins, false);
        }
        if state.maze.is_blocked(ai_next) || state.ai.occupies(ai_next) {
            return self.finish(state, Outcome::PlayerWins, false);
        }
        if state.player.occupies(ai_next) || ai_next == player_next {
            return self.finish(state, Outcome::PlayerWins, false);
        }

        state.player.advance(player_next);
        state.ai.advance(ai_next);

        // Growth is "skip the shrink": the eater keeps its tail this tick
        let mut ate_food = false;
        if state.player.head() == food {
            state.player.grow();
            ate_food = true;
        } else {
            state.player.shrink();
        }
        if state.ai.head() == food {
            state.ai.grow();
            ate_food = true;
        } else {
            state.ai.shrink();
        }

        if ate_food {
            let mut forbidden = state.maze.wall_set();
            forbidden.extend(state.player.body.iter().copied());
            forbidden.extend(state.ai.body.iter().copied());
            state.food = self.place_food(&forbidden);
            if state.food.is_none() {
                return self.finish(state, Outcome::BoardFull, true);
            }
        }

        self.escalate_maze(state);

        state.ticks += 1;
        StepResult {
            ate_food,
            outcome: None,
        }
    }

    /// Add walls when the combined score crosses a new escalation
    /// threshold. The watermark keeps a threshold from firing twice while
    /// the score sits on a multiple.
    fn escalate_maze(&mut self, state: &mut GameState) {
        let total = state.total_score();
        if total == 0
            || total % self.config.escalation_interval != 0
            || total <= state.last_escalation_total
        {
            return;
        }

        let mut forbidden: HashSet<Position> = state.player.body.iter().copied().collect();
        forbidden.extend(state.ai.body.iter().copied());
        if let Some(food) = state.food {
            forbidden.insert(food);
        }
        state.maze.add_walls(
            self.config.walls_per_escalation,
            &forbidden,
            self.config.wall_attempt_factor,
            &mut self.rng,
        );
        state.last_escalation_total = total;
    }

    fn finish(&self, state: &mut GameState, outcome: Outcome, ate_food: bool) -> StepResult {
        state.outcome = Some(outcome);
        state.ticks += 1;
        StepResult {
            ate_food,
            outcome: Some(outcome),
        }
    }

    /// Uniform random interior cell outside `forbidden`, bounded at one
    /// attempt per grid cell. `None` means the board is effectively full.
    fn place_food(&mut self, forbidden: &HashSet<Position>) -> Option<Position> {
        let size = self.config.grid_size;
        let hi = (size - 1) as i32;
        for _ in 0..size * size {
            let candidate = Position::new(self.rng.gen_range(1..hi), self.rng.gen_range(1..hi));
            if !forbidden.contains(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Random free interior cell for an initial snake placement. Fresh
    /// boards are nearly empty, so rejection sampling terminates quickly.
    fn spawn_cell(&mut self, maze: &Maze, taken: &[Position]) -> Position {
        let hi = (maze.size() - 1) as i32;
        loop {
            let candidate = Position::new(self.rng.gen_range(1..hi), self.rng.gen_range(1..hi));
            if !maze.is_blocked(candidate) && !taken.contains(&candidate) {
                return candidate;
            }
        }
    }
}
