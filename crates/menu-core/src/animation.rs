use instant::Instant;
use std::time::Duration;

/// Per-sphere generation counter. Starting an animation bumps the sphere's
/// token; an animation whose token no longer matches is stale and is dropped
/// without touching the sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationToken(u64);

impl AnimationToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Open,
    Close,
}

/// Time-bounded linear scale interpolation from `start_scale` to `target_scale`.
#[derive(Clone, Debug)]
pub struct ScaleAnimation {
    pub token: AnimationToken,
    pub direction: Direction,
    pub start: Instant,
    pub start_scale: f32,
    pub target_scale: f32,
    pub duration: Duration,
    pub tick_interval: Duration,
    last_tick: Option<Instant>,
}

impl ScaleAnimation {
    pub fn new(
        token: AnimationToken,
        direction: Direction,
        start: Instant,
        start_scale: f32,
        target_scale: f32,
        duration: Duration,
        tick_interval: Duration,
    ) -> Self {
        Self {
            token,
            direction,
            start,
            start_scale,
            target_scale,
            duration,
            tick_interval,
            last_tick: None,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        if now > self.start {
            now - self.start
        } else {
            Duration::ZERO
        }
    }

    /// `min(elapsed / duration, 1)`; a zero duration completes immediately.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn scale_at(&self, progress: f32) -> f32 {
        if progress >= 1.0 {
            return self.target_scale;
        }
        self.start_scale + (self.target_scale - self.start_scale) * progress.max(0.0)
    }

    /// Rate limiter: true when at least `tick_interval` has passed since the
    /// last accepted tick (the first tick is always accepted).
    pub fn accept_tick(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_tick {
            let since = if now > last { now - last } else { Duration::ZERO };
            if since < self.tick_interval {
                return false;
            }
        }
        self.last_tick = Some(now);
        true
    }
}

