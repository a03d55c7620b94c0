use std::time::{Duration, Instant};

/// In-memory session statistics shown in the header; nothing is persisted
pub struct GameMetrics {
    /// Play time of the current game, excluding pauses
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    banked: Duration,
    running_since: Option<Instant>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            banked: Duration::ZERO,
            running_since: None,
        }
    }

    pub fn update(&mut self) {
        let live = self
            .running_since
            .map(|since| since.elapsed())
            .unwrap_or(Duration::ZERO);
        self.elapsed_time = self.banked + live;
    }

    /// Clock starts or resumes counting
    pub fn resume_clock(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Clock stops counting, keeping what has been played so far
    pub fn pause_clock(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
        }
        self.update();
    }

    /// A fresh game was set up; the clock is zeroed and stopped
    pub fn on_game_reset(&mut self) {
        self.banked = Duration::ZERO;
        self.running_since = None;
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.pause_clock();
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
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

        metrics.elapsed_time = Duration::from_secs(0);
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

        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_clock_only_runs_when_resumed() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);

        metrics.resume_clock();
        std::thread::sleep(Duration::from_millis(50));
        metrics.pause_clock();
        let paused_at = metrics.elapsed_time;
        assert!(paused_at.as_millis() >= 50);

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, paused_at);
    }

    #[test]
    fn test_reset_zeroes_clock() {
        let mut metrics = GameMetrics::new();
        metrics.resume_clock();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time > Duration::ZERO);

        metrics.on_game_reset();
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);
    }
}
