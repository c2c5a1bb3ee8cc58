use std::time::{Duration, Instant};

/// Per-session play statistics shown next to the board
pub struct GameMetrics {
    started: Instant,
    /// Clock value frozen when the current game ended
    stopped_at: Option<Duration>,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            stopped_at: None,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the clock; it stands still once the game is over
    pub fn update(&mut self) {
        self.elapsed_time = self
            .stopped_at
            .unwrap_or_else(|| self.started.elapsed());
    }

    pub fn on_game_start(&mut self) {
        self.started = Instant::now();
        self.stopped_at = None;
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        if self.stopped_at.is_some() {
            return;
        }

        self.stopped_at = Some(self.started.elapsed());
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    /// Best of the session high score and a game still in progress
    pub fn best(&self, current_score: u32) -> u32 {
        self.high_score.max(current_score)
    }

    /// Elapsed time as MM:SS
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::ZERO;
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_start();
        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_start();
        metrics.on_game_over(15);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_game_over_counted_once() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(3);
        metrics.on_game_over(3);
        assert_eq!(metrics.games_played, 1);
    }

    #[test]
    fn test_best_includes_running_game() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(4);
        assert_eq!(metrics.best(2), 4);
        assert_eq!(metrics.best(9), 9);
    }

    #[test]
    fn test_clock_freezes_at_game_over() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(30));
        metrics.on_game_over(1);
        metrics.update();
        let frozen = metrics.elapsed_time;
        assert!(frozen.as_millis() >= 30);

        std::thread::sleep(Duration::from_millis(30));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time < frozen);
    }
}
