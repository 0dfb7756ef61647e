use std::{
    thread,
    time::{Duration, Instant},
};

/// Monotonic millisecond clock with a blocking sleep.
pub trait Clock {
    fn now_ms(&self) -> u64;
    fn sleep_ms(&self, ms: u64);
}

pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Caps the update rate at one simulation step per frame budget.
///
/// A slow frame is never made up with extra steps: each call to
/// [`Pacer::wait_for_next_frame`] stands for exactly one frame interval.
pub struct Pacer<C: Clock = SystemClock> {
    clock: C,
    frame_time_ms: u64,
    frame_start: u64,
    frames: u64,
}

impl<C: Clock> Pacer<C> {
    pub fn new(clock: C, frame_time_ms: u64) -> Self {
        let frame_start = clock.now_ms();

        Self {
            clock,
            frame_time_ms,
            frame_start,
            frames: 0,
        }
    }

    /// Blocks for whatever is left of the current frame budget, then marks
    /// the start of the next frame.
    pub fn wait_for_next_frame(&mut self) {
        let elapsed = self.clock.now_ms().saturating_sub(self.frame_start);

        if elapsed < self.frame_time_ms {
            self.clock.sleep_ms(self.frame_time_ms - elapsed);
        }

        self.frame_start = self.clock.now_ms();
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_time_ms(&self) -> u64 {
        self.frame_time_ms
    }
}

/// Measures the rate at which frames are actually presented.
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            fps: 0.0,
        }
    }
}

impl FpsCounter {
    pub fn tick(&mut self) -> f32 {
        self.frames += 1;

        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= 0.5 {
            self.fps = self.frames as f32 / elapsed;
            self.frames = 0;
            self.window_start = Instant::now();
        }

        self.fps
    }
}
