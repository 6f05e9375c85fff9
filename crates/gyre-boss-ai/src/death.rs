//! Shared death-sequence timing for boss variants.
//!
//! Every variant runs the same shape of terminal phase: a one-way clock
//! started when the last sub-target dies, staged explosion marks along the
//! way, and a final burst that must fire exactly once. The clock and the
//! edge detection live here so the variants only declare their marks.

/// One-way death-animation clock with exactly-once stage marks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeathSequence {
    active: bool,
    timer: f64,
    prev: f64,
}

impl DeathSequence {
    /// Arm the clock. Only the first call takes effect; the transition
    /// into the death sequence is one-way.
    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.timer = 0.0;
            self.prev = 0.0;
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Seconds since the clock was armed.
    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Advance the clock while armed.
    pub fn advance(&mut self, dt: f64) {
        if self.active {
            self.prev = self.timer;
            self.timer += dt;
        }
    }

    /// True on the single tick the clock first reaches `mark`.
    /// A mark of 0.0 fires on the first advance after `start`.
    pub fn crossed(&self, mark: f64) -> bool {
        self.active && self.prev <= mark && self.timer > mark
    }
}
