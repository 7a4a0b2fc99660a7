//! Snake Duel - a human player races a pathfinding AI snake
//!
//! This library provides:
//! - Core duel logic: tick transitions, A* planning, maze escalation (game module)
//! - Keyboard handling (input module)
//! - TUI rendering (render module)
//! - The async terminal session (modes module)
//! - Session-level bookkeeping (metrics module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
