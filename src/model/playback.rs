use std::time::Duration;
use tracing::info;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayState {
    Play,
    Pause,
}

/// Cancellable repeating-step primitive: accumulates frame time and fires
/// one generation every `1000 / speed` milliseconds while playing.
///
/// `stop` discards any accumulated time, so after it returns no tick can
/// fire until the next `start`.
pub struct Playback {
    state: PlayState,
    speed: u32,
    accumulated: Duration,
}

impl Playback {
    pub const TOP_SPEED: u32 = 10;
    pub const DEFAULT_SPEED: u32 = 5;

    pub fn new() -> Self {
        Self {
            state: PlayState::Pause,
            speed: Self::DEFAULT_SPEED,
            accumulated: Duration::ZERO,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Play
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Values outside `[0, TOP_SPEED]` are ignored.
    pub fn set_speed(&mut self, speed: u32) {
        if speed > Self::TOP_SPEED {
            return;
        }
        self.speed = speed;
    }

    pub fn speed_up(&mut self) {
        self.set_speed(self.speed + 1);
    }

    /// Decrement stops at 1.
    pub fn speed_down(&mut self) {
        if self.speed <= 1 {
            return;
        }
        self.set_speed(self.speed - 1);
    }

    /// Returns `false` (and changes nothing) when already playing.
    pub fn start(&mut self) -> bool {
        if self.state == PlayState::Play {
            return false;
        }
        self.state = PlayState::Play;
        self.accumulated = Duration::ZERO;
        info!("starting playback");
        true
    }

    /// Returns `false` (and changes nothing) when already paused.
    pub fn stop(&mut self) -> bool {
        if self.state == PlayState::Pause {
            return false;
        }
        self.state = PlayState::Pause;
        self.accumulated = Duration::ZERO;
        info!("stopping playback");
        true
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Feeds one frame's duration; `true` means "fire one generation now".
    /// Never fires while paused or at speed 0.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.state != PlayState::Play || self.speed == 0 {
            return false;
        }
        self.accumulated += dt;
        if self.accumulated < Duration::from_secs_f64(1. / self.speed as f64) {
            return false;
        }
        self.accumulated = Duration::ZERO;
        true
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}
