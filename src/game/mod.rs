//! Core duel logic
//!
//! Everything in here is plain state and transitions with no I/O or
//! rendering dependencies, so the whole game can be driven and inspected
//! programmatically in tests.

pub mod action;
pub mod config;
pub mod engine;
pub mod maze;
pub mod pathfind;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use maze::Maze;
pub use pathfind::find_path;
pub use state::{GameState, Outcome, Position, Snake};
