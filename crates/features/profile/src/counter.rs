use folio_kernel::prelude::{FRAME, StateCell, sleep_until};
use std::time::Duration;

pub const COUNT_DURATION: Duration = Duration::from_secs(2);

/// `1 - (1 - p)^4`, with `p` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_quart(p: f64) -> f64 {
    1.0 - (1.0 - p.clamp(0.0, 1.0)).powi(4)
}

/// Number that counts up from zero the first time it scrolls into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    target: u32,
    duration: Duration,
    elapsed: Option<Duration>,
}

impl Counter {
    #[must_use]
    pub const fn new(target: u32) -> Self {
        Self { target, duration: COUNT_DURATION, elapsed: None }
    }

    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Starts the count. Returns `false` if it already started.
    pub fn start(&mut self) -> bool {
        if self.elapsed.is_some() {
            return false;
        }
        self.elapsed = Some(Duration::ZERO);
        true
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if self.elapsed.is_some() {
            self.elapsed = Some(elapsed.min(self.duration));
        }
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        let Some(elapsed) = self.elapsed else {
            return 0;
        };
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = (ease_out_quart(progress) * f64::from(self.target)).floor() as u32;
        value.min(self.target)
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.elapsed.is_some_and(|e| e >= self.duration)
    }

    #[must_use]
    pub const fn started(&self) -> bool {
        self.elapsed.is_some()
    }
}

/// Animates a started counter frame by frame until it reaches its target.
pub async fn run_counter<S: StateCell<Counter>>(state: &mut S) {
    let mut now = Duration::ZERO;
    while state.read_with(|c| c.started() && !c.finished()) {
        now = sleep_until(now, now + FRAME).await;
        state.update(|c| c.tick(now));
    }
}
