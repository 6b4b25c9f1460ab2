use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate by sleeping and reports the duration of the
/// previous frame, which drives the playback accumulator.
pub struct FrameClock {
    frame_timer: Instant,
    frame_dt: Duration,
    frametime_smoothed: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frame_dt: Duration::ZERO,
            frametime_smoothed: 0.,
        }
    }
}

impl FrameClock {
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Duration of the previous frame, sleep included.
    pub fn frame_dt(&self) -> Duration {
        self.frame_dt
    }

    /// Closes the frame: sleeps to keep under `max_fps`, then restarts
    /// the measurement. Call once at the end of every frame.
    pub fn sleep(&mut self, max_fps: f64) {
        let before_wait = self.frame_timer.elapsed();

        let target_frametime = Duration::from_secs_f64(1. / max_fps);
        if target_frametime > before_wait {
            sleep(target_frametime - before_wait);
        }

        self.frame_dt = self.frame_timer.elapsed();
        let frametime = self.frame_dt.as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
