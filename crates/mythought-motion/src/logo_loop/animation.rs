//! Linear, infinitely repeating translation between two offsets.

use std::time::{Duration, Instant};

/// One running loop: travels from `from` to `to` every `period`, then jumps back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopAnimation {
    from: f64,
    to: f64,
    period: Duration,
    started_at: Instant,
    /// Progress (0..1) at `started_at`, so a restart can continue where the previous loop was
    start_progress: f64,
}

impl LoopAnimation {
    /// Start a loop at `from`.
    pub fn new(from: f64, to: f64, period: Duration, started_at: Instant) -> Self {
        Self {
            from,
            to,
            period,
            started_at,
            start_progress: 0.0,
        }
    }

    /// Start a loop positioned at `offset` (wrapped into the travel range).
    pub fn resume_from(from: f64, to: f64, period: Duration, now: Instant, offset: f64) -> Self {
        let mut animation = Self::new(from, to, period, now);
        animation.start_progress = animation.progress_of(offset);
        animation
    }

    /// Loop progress in `0.0..1.0` at `now`
    pub fn progress_at(&self, now: Instant) -> f64 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return self.start_progress;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        (self.start_progress + elapsed / period).rem_euclid(1.0)
    }

    /// Offset at `now`
    pub fn offset_at(&self, now: Instant) -> f64 {
        self.from + (self.to - self.from) * self.progress_at(now)
    }

    fn progress_of(&self, offset: f64) -> f64 {
        let span = self.to - self.from;
        if span == 0.0 {
            return 0.0;
        }
        ((offset - self.from) / span).rem_euclid(1.0)
    }
}
