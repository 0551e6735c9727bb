// clock.rs
// Time sources for collision highlight decay, plus frame pacing and FPS measurement

use std::time::{Duration, Instant};

/// Millisecond time source read once per step for highlight stamps and decay.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock milliseconds since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// A clock that only moves when told to. Deterministic highlight decay for tests and the
/// headless runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    ms: u64,
}

impl ManualClock {
    pub fn new(ms: u64) -> Self {
        Self { ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.ms = self.ms.saturating_add(ms);
    }

    pub fn set(&mut self, ms: u64) {
        self.ms = ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.ms
    }
}

/// Nominal duration of one frame at `fps`. `None` when uncapped.
pub fn frame_budget(fps: u32) -> Option<Duration> {
    (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64))
}

/// Paces frames to a target rate. Never changes how far one tick advances the physics.
#[derive(Debug)]
pub struct FramePacer {
    last: Instant,
    /// Fractional ticks carried between host-driven frames
    owed: f64,
}

impl FramePacer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            owed: 0.0,
        }
    }

    /// Sleep out the rest of the current frame's budget. `target_fps == 0` returns at once.
    /// Returns how long this frame took, sleep included.
    pub fn tick(&mut self, target_fps: u32) -> Duration {
        if let Some(budget) = frame_budget(target_fps) {
            let spent = self.last.elapsed();
            if spent < budget {
                std::thread::sleep(budget - spent);
            }
        }
        let now = Instant::now();
        let frame = now - self.last;
        self.last = now;
        frame
    }

    /// For hosts that drive frames themselves (a vsync-paced window): how many ticks are owed
    /// since the previous call at `target_fps`. Uncapped runs the per-frame maximum.
    pub fn ticks_due(&mut self, target_fps: u32, max_per_frame: u32) -> u32 {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.ticks_for(elapsed, target_fps, max_per_frame)
    }

    /// Accumulate `elapsed` and drain whole ticks, capped so a stall cannot snowball.
    pub fn ticks_for(&mut self, elapsed: Duration, target_fps: u32, max_per_frame: u32) -> u32 {
        if target_fps == 0 {
            self.owed = 0.0;
            return max_per_frame;
        }
        self.owed += elapsed.as_secs_f64() * target_fps as f64;
        let due = (self.owed.floor() as u32).min(max_per_frame);
        if due == max_per_frame {
            self.owed = 0.0;
        } else {
            self.owed -= due as f64;
        }
        due
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}

/// Measured frames per second, smoothed for the stats overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCounter {
    fps: f32,
}

impl FrameCounter {
    const SMOOTHING: f32 = 0.9;

    pub fn record(&mut self, frame: Duration) {
        let secs = frame.as_secs_f32();
        if secs <= 0.0 {
            return;
        }
        let instant = 1.0 / secs;
        self.fps = if self.fps == 0.0 {
            instant
        } else {
            self.fps * Self::SMOOTHING + instant * (1.0 - Self::SMOOTHING)
        };
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
