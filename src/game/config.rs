use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest usable board: boundary ring plus room for two snakes and food
pub const MIN_GRID_SIZE: usize = 4;

/// Configuration for a duel session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, boundary ring included
    pub grid_size: usize,
    /// Tick rate at combined score zero
    pub base_ticks_per_sec: u32,
    /// The tick rate gains 1 Hz for every this many combined points
    pub speedup_per_points: u32,
    /// Combined-score interval between maze escalations
    pub escalation_interval: u32,
    /// Walls added per escalation
    pub walls_per_escalation: usize,
    /// Random trials allowed per requested wall before giving up
    pub wall_attempt_factor: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 30,
            base_ticks_per_sec: 8,
            speedup_per_points: 2,
            escalation_interval: 5,
            walls_per_escalation: 2,
            wall_attempt_factor: 50,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Frame interval for the given combined score. The game speeds up as
    /// the snakes collect points. Zeroed-out rate fields fall back to
    /// 1 Hz instead of dividing by zero.
    pub fn tick_interval(&self, total_score: u32) -> Duration {
        let rate =
            self.base_ticks_per_sec.max(1) + total_score / self.speedup_per_points.max(1);
        Duration::from_millis(1000 / u64::from(rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 30);
        assert_eq!(config.base_ticks_per_sec, 8);
        assert_eq!(config.escalation_interval, 5);
        assert_eq!(config.walls_per_escalation, 2);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15);
        assert_eq!(config.grid_size, 15);
    }

    #[test]
    fn test_zeroed_rates_do_not_divide_by_zero() {
        let config = GameConfig {
            base_ticks_per_sec: 0,
            speedup_per_points: 0,
            ..Default::default()
        };

        assert_eq!(config.tick_interval(0), Duration::from_millis(1000));
        assert_eq!(config.tick_interval(3), Duration::from_millis(250));
    }

    #[test]
    fn test_tick_interval_shortens_with_score() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(0), Duration::from_millis(125));
        assert_eq!(config.tick_interval(1), Duration::from_millis(125));
        // 8 + 2/2 = 9 Hz
        assert_eq!(config.tick_interval(2), Duration::from_millis(111));
        // 8 + 10/2 = 13 Hz
        assert_eq!(config.tick_interval(10), Duration::from_millis(76));
        assert!(config.tick_interval(20) < config.tick_interval(4));
    }
}
