//! Frame timing for the renderer.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WINDOW: usize = 120;

/// Tracks frame durations over the last 120 frames.
pub struct RenderMetrics {
    frame_times: VecDeque<Duration>,
    last_frame_start: Instant,
    pub frames: u64,
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(WINDOW),
            last_frame_start: Instant::now(),
            frames: 0,
        }
    }

    /// Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.last_frame_start = Instant::now();
    }

    /// Call at the end of each frame.
    pub fn end_frame(&mut self) {
        self.record(self.last_frame_start.elapsed());
    }

    fn record(&mut self, elapsed: Duration) {
        self.frames += 1;
        self.frame_times.push_back(elapsed);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_front();
        }
    }

    /// Average frame time in milliseconds
    pub fn avg_frame_time_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let sum: Duration = self.frame_times.iter().sum();
        sum.as_secs_f32() * 1000.0 / self.frame_times.len() as f32
    }

    /// Last frame time in milliseconds
    pub fn last_frame_time_ms(&self) -> f32 {
        self.frame_times
            .back()
            .map(|d| d.as_secs_f32() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_over_recorded_frames() {
        let mut metrics = RenderMetrics::new();
        metrics.record(Duration::from_millis(2));
        metrics.record(Duration::from_millis(4));

        assert_eq!(metrics.frames, 2);
        assert!((metrics.avg_frame_time_ms() - 3.0).abs() < 0.01);
        assert!((metrics.last_frame_time_ms() - 4.0).abs() < 0.01);
    }

    #[test]
    fn test_window_is_bounded() {
        let mut metrics = RenderMetrics::new();
        for _ in 0..(WINDOW + 30) {
            metrics.record(Duration::from_millis(1));
        }
        assert_eq!(metrics.frame_times.len(), WINDOW);
        assert_eq!(metrics.frames, (WINDOW + 30) as u64);
    }

    #[test]
    fn test_empty_metrics_report_zero() {
        let metrics = RenderMetrics::new();
        assert_eq!(metrics.avg_frame_time_ms(), 0.0);
        assert_eq!(metrics.last_frame_time_ms(), 0.0);
    }
}
