use super::action::Direction;
use super::maze::Maze;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in the given direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four orthogonal neighbors
    pub fn neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.x + 1, self.y),
            Position::new(self.x - 1, self.y),
            Position::new(self.x, self.y + 1),
            Position::new(self.x, self.y - 1),
        ]
    }
}

/// One competing snake, human- or AI-driven
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head at index 0
    pub body: Vec<Position>,
    /// Current heading
    pub direction: Direction,
    /// Food eaten this round
    pub score: u32,
}

impl Snake {
    /// A length-1 snake at the given cell
    pub fn new(start: Position, direction: Direction) -> Self {
        Self {
            body: vec![start],
            direction,
            score: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Push a new head cell. The tail is left in place; pair with
    /// `shrink` on ticks where the snake did not eat.
    pub fn advance(&mut self, next: Position) {
        self.body.insert(0, next);
    }

    /// Award a point. Growth is simply the absence of a `shrink` this tick.
    pub fn grow(&mut self) {
        self.score += 1;
    }

    /// Drop the tail cell
    pub fn shrink(&mut self) {
        self.body.pop();
    }

    /// True if the head cell appears again later in the body
    pub fn check_self_collision(&self) -> bool {
        self.body[1..].contains(&self.body[0])
    }

    /// True if any body cell (head included) sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The AI crashed into a wall, itself, or the player
    PlayerWins,
    /// The player crashed into a wall, themselves, or the AI
    AiWins,
    /// No free cell was left for food
    BoardFull,
    /// The AI found no route to the food and forfeits
    UnreachableGoal,
}

impl Outcome {
    /// Banner text for the game-over screen
    pub fn describe(&self) -> &'static str {
        match self {
            Outcome::PlayerWins => "You win! The AI crashed.",
            Outcome::AiWins => "AI wins! You crashed.",
            Outcome::BoardFull => "Board full! No room left for food.",
            Outcome::UnreachableGoal => "You win! The AI found no path.",
        }
    }
}

/// Complete state of one round
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: Snake,
    pub ai: Snake,
    pub maze: Maze,
    pub food: Option<Position>,
    /// Combined score at which the maze last grew
    pub last_escalation_total: u32,
    pub outcome: Option<Outcome>,
    pub ticks: u32,
}

impl GameState {
    pub fn new(player: Snake, ai: Snake, maze: Maze) -> Self {
        Self {
            player,
            ai,
            maze,
            food: None,
            last_escalation_total: 0,
            outcome: None,
            ticks: 0,
        }
    }

    /// True until a terminal outcome is reached
    pub fn is_running(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn total_score(&self) -> u32 {
        self.player.score + self.ai.score
    }
}
