use std::time::{Duration, Instant};

/// Longest frame delta handed to the camera, in seconds. Stops a stall
/// (window drag, breakpoint) from teleporting the camera.
const MAX_DELTA_SECONDS: f32 = 0.25;

/// Frame timing with delta time, FPS calculation and optional frame limiting
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Seconds between the last two frames
    delta_time: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    fn starting_at(target_fps: u32, now: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: now,
            delta_time: 0.0,
            smoothed_fps: 60.0,
            // 5% new value, 95% old value
            smoothing: 0.05,
        }
    }

    /// Call at the start of each frame. Returns true if enough time has passed
    /// to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a new frame and return its delta time in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        self.delta_time = frame_time.min(MAX_DELTA_SECONDS);
        self.delta_time
    }

    /// Seconds between the last two ticks.
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_elapsed_seconds() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start);
        let dt = timing.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        assert_eq!(timing.delta_time(), dt);
    }

    #[test]
    fn long_stalls_are_capped() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start);
        let dt = timing.tick_at(start + Duration::from_secs(3));
        assert_eq!(dt, MAX_DELTA_SECONDS);
    }

    #[test]
    fn fps_converges_towards_frame_rate() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start);
        let frame = Duration::from_millis(10);
        for i in 1..=400 {
            let _ = timing.tick_at(start + frame * i);
        }
        assert!((timing.fps() - 100.0).abs() < 1.0, "{}", timing.fps());
    }

    #[test]
    fn unlimited_always_renders() {
        assert!(FrameTiming::new(0).should_render());
    }

    #[test]
    fn capped_waits_for_frame_budget() {
        let timing = FrameTiming::new(1);
        assert!(!timing.should_render());
    }
}
