//! Frame clock for the host loop.

use web_time::{Duration, Instant};

/// Measures the time between frames for the camera's `delta_time` and
/// optionally holds frames back to a target rate.
pub struct FrameTiming {
    /// Frames per second to cap at; `0` leaves frames uncapped.
    target_fps: u32,
    /// Shortest gap allowed between two ticks. Zero when uncapped.
    min_frame_duration: Duration,
    /// Start of the current frame; the next `tick` measures from here.
    last_frame: Instant,
    /// Running FPS estimate shown in the window title.
    smoothed_fps: f32,
    /// Weight each new frame gets in `smoothed_fps`.
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Returns true if enough time has passed since the last tick to run
    /// another frame.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Earliest instant at which the next frame is due.
    #[must_use]
    pub fn next_frame_at(&self) -> Instant {
        self.last_frame + self.min_frame_duration
    }

    /// Start a frame: returns seconds since the previous tick and folds
    /// the frame into the FPS average.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
