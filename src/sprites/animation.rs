//! Sprites domain: frame animation driven by polled time accumulation.

/// Fixed-interval frame cycler.
///
/// Accumulates delta time against a per-frame interval and wraps the frame
/// index when the interval elapses, carrying any remainder so long deltas do
/// not drop intervals. Gameplay code that counts elapsed intervals (bomb
/// fuses) uses the return value of [`FrameAnimator::tick`]; rendering reads
/// `frame` directly.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnimator {
    /// Current frame index, always `< frames`.
    pub frame: u32,
    /// Number of frames in the cycle.
    pub frames: u32,
    /// Seconds each frame stays on screen.
    pub interval: f32,
    timer: f32,
}

impl FrameAnimator {
    pub fn new(frames: u32, interval: f32) -> Self {
        Self {
            frame: 0,
            frames: frames.max(1),
            interval,
            timer: 0.0,
        }
    }

    /// Advance by `dt` seconds. Returns how many frame intervals completed.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.interval <= 0.0 {
            return 0;
        }
        self.timer += dt;
        let mut completed = 0;
        while self.timer >= self.interval {
            self.timer -= self.interval;
            self.frame = (self.frame + 1) % self.frames;
            completed += 1;
        }
        completed
    }

    /// Rewind to frame zero and drop any accumulated time.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }
}
