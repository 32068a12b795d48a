//! Frame delta time and smoothed FPS.

/// Per-frame delta time plus a smoothed FPS estimate.
///
/// Timestamps are seconds on any monotonic timeline (see
/// [`Clock`](crate::engine::Clock)). A timestamp earlier than the previous
/// one yields a zero delta instead of moving the camera backwards.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Timestamp of the previous frame.
    last_frame: f64,
    /// Delta of the most recent frame.
    delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames advanced so far.
    frame_count: u64,
}

impl FrameTiming {
    /// Create a timer whose first frame is measured from `start`.
    #[must_use]
    pub const fn new(start: f64) -> Self {
        Self {
            last_frame: start,
            delta: 0.0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frame_count: 0,
        }
    }

    /// Advance to `now` and return the elapsed seconds since the previous
    /// frame, never negative.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, now: f64) -> f32 {
        let elapsed = (now - self.last_frame).max(0.0);
        if now > self.last_frame {
            self.last_frame = now;
        }
        self.delta = elapsed as f32;
        self.frame_count += 1;

        if self.delta > 0.0 {
            let instant_fps = 1.0 / self.delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.delta
    }

    /// Seconds elapsed in the most recent frame.
    #[must_use]
    pub const fn delta(&self) -> f32 {
        self.delta
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames advanced.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Timestamp of the latest frame.
    #[must_use]
    pub const fn last_frame(&self) -> f64 {
        self.last_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_time_since_previous_frame() {
        let mut timing = FrameTiming::new(10.0);
        assert!((timing.advance(10.25) - 0.25).abs() < 1e-6);
        assert!((timing.advance(10.75) - 0.5).abs() < 1e-6);
        assert_eq!(timing.frame_count(), 2);
    }

    #[test]
    fn backwards_time_yields_zero_delta() {
        let mut timing = FrameTiming::new(5.0);
        assert_eq!(timing.advance(4.0), 0.0);
        assert_eq!(timing.last_frame(), 5.0);
        assert!((timing.advance(5.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fps_converges_towards_frame_rate() {
        let mut timing = FrameTiming::new(0.0);
        let mut now = 0.0;
        for _ in 0..500 {
            now += 1.0 / 120.0;
            let _ = timing.advance(now);
        }
        assert!((timing.fps() - 120.0).abs() < 1.0);
    }
}
