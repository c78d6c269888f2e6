use folio_domain::config::ResumeConfig;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadPhase {
    #[default]
    Idle,
    Preparing,
    Saved,
}

impl DownloadPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Preparing => "preparing",
            Self::Saved => "saved",
        }
    }
}

/// Outcome of pressing the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Started,
    /// A cycle is already running.
    Ignored,
}

/// Side effect owed by the caller after [`DownloadModel::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Hand the asset to the sink. Emitted once per cycle.
    Deliver,
    /// The button is back to idle.
    Reset,
}

/// Static file offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAsset {
    pub href: String,
    pub file_name: String,
}

impl ResumeAsset {
    /// Uses the configured URL when one is set, otherwise `bundled`.
    #[must_use]
    pub fn resolve(config: &ResumeConfig, bundled: impl Into<String>) -> Self {
        let href = config.href.clone().unwrap_or_else(|| bundled.into());
        Self { href, file_name: config.file_name.clone() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadModel {
    phase: DownloadPhase,
    prepare: Duration,
    linger: Duration,
    deadline: Option<Duration>,
}

impl DownloadModel {
    #[must_use]
    pub const fn new(config: &ResumeConfig) -> Self {
        Self {
            phase: DownloadPhase::Idle,
            prepare: config.prepare(),
            linger: config.linger(),
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Duration) -> Trigger {
        if self.phase != DownloadPhase::Idle {
            return Trigger::Ignored;
        }
        self.phase = DownloadPhase::Preparing;
        self.deadline = Some(now + self.prepare);
        Trigger::Started
    }

    #[must_use]
    pub const fn next_deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Moves past the pending deadline if `now` has reached it.
    pub fn advance(&mut self, now: Duration) -> Option<Step> {
        let deadline = self.deadline.filter(|d| now >= *d)?;
        match self.phase {
            DownloadPhase::Preparing => {
                self.phase = DownloadPhase::Saved;
                self.deadline = Some(deadline + self.linger);
                Some(Step::Deliver)
            }
            DownloadPhase::Saved => {
                self.phase = DownloadPhase::Idle;
                self.deadline = None;
                Some(Step::Reset)
            }
            DownloadPhase::Idle => None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> DownloadPhase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase != DownloadPhase::Idle
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.phase {
            DownloadPhase::Idle => "Download Resume",
            DownloadPhase::Preparing => "Preparing...",
            DownloadPhase::Saved => "Saved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn full_cycle_follows_configured_timings() {
        let mut model = DownloadModel::new(&ResumeConfig::default());
        model.trigger(ms(0));

        assert_eq!(model.advance(ms(1_499)), None);
        assert_eq!(model.advance(ms(1_500)), Some(Step::Deliver));
        assert_eq!(model.next_deadline(), Some(ms(4_500)));
        assert_eq!(model.label(), "Saved");
        assert_eq!(model.advance(ms(4_500)), Some(Step::Reset));
        assert_eq!(model.phase(), DownloadPhase::Idle);
        assert_eq!(model.next_deadline(), None);
    }

    #[test]
    fn late_advance_keeps_schedule_anchored_to_deadline() {
        let mut model = DownloadModel::new(&ResumeConfig::default());
        model.trigger(ms(100));
        model.advance(ms(2_000));
        assert_eq!(model.next_deadline(), Some(ms(4_600)));
    }

    #[test]
    fn idle_model_never_steps() {
        let mut model = DownloadModel::new(&ResumeConfig::default());
        assert_eq!(model.advance(ms(10_000)), None);
        assert!(!model.is_busy());
    }
}
