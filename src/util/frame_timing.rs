use web_time::{Duration, Instant};

use crate::options::FrameOptions;

/// Per-frame timestep source for driving the movers.
///
/// Each [`tick`](Self::tick) returns the seconds since the previous one,
/// clamped to `max_step` so a stalled frame (window drag, breakpoint)
/// cannot launch the movers across the scene.
pub struct FrameClock {
    /// Longest timestep handed out
    max_step: f32,
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::from_options(&FrameOptions::default())
    }
}

impl FrameClock {
    /// Create a clock handing out steps of at most `max_step` seconds.
    #[must_use]
    pub fn new(max_step: f32) -> Self {
        Self::from_options(&FrameOptions {
            max_step,
            ..FrameOptions::default()
        })
    }

    /// Create a clock from frame options.
    #[must_use]
    pub fn from_options(options: &FrameOptions) -> Self {
        debug_assert!(options.max_step > 0.0, "max_step must be positive");
        Self {
            max_step: options.max_step,
            last_tick: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: options.fps_smoothing.clamp(0.0, 1.0),
        }
    }

    /// Call once per frame. Returns the timestep in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.step(elapsed)
    }

    /// Restart timing from now, e.g. after the window regains focus.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    fn step(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        if frame_time > self.max_step {
            log::debug!(
                "Frame stalled for {frame_time:.3}s, clamping to {}s",
                self.max_step
            );
            self.max_step
        } else {
            frame_time
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_frames_pass_through() {
        let mut clock = FrameClock::new(0.1);
        let dt = clock.step(Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn stalls_are_clamped() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.step(Duration::from_secs(3)), 0.1);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let mut clock = FrameClock::from_options(&FrameOptions {
            max_step: 0.1,
            fps_smoothing: 0.5,
        });
        for _ in 0..40 {
            let _ = clock.step(Duration::from_millis(25));
        }
        assert!((clock.fps() - 40.0).abs() < 0.1);
    }

    #[test]
    fn zero_elapsed_keeps_fps() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.step(Duration::ZERO), 0.0);
        assert_eq!(clock.fps(), 60.0);
    }

    #[test]
    fn tick_is_bounded() {
        let mut clock = FrameClock::new(0.05);
        let dt = clock.tick();
        assert!((0.0..=0.05).contains(&dt));
    }
}
