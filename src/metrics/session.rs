use std::time::{Duration, Instant};

/// Running totals for the terminal session. Nothing here is persisted;
/// scores reset when the process exits.
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub rounds_played: u32,
    pub best_player_score: u32,
    pub best_ai_score: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            rounds_played: 0,
            best_player_score: 0,
            best_ai_score: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_round_over(&mut self, player_score: u32, ai_score: u32) {
        self.rounds_played += 1;
        if player_score > self.best_player_score {
            self.best_player_score = player_score;
        }
        if ai_score > self.best_ai_score {
            self.best_ai_score = ai_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = SessionMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::ZERO;
        assert_eq!(metrics.format_time(), "00:00");
    }

    #[test]
    fn test_round_over_tracks_bests() {
        let mut metrics = SessionMetrics::new();
        metrics.on_round_over(4, 7);
        metrics.on_round_over(6, 2);

        assert_eq!(metrics.rounds_played, 2);
        assert_eq!(metrics.best_player_score, 6);
        assert_eq!(metrics.best_ai_score, 7);
    }
}
