use crate::form::{ContactForm, ContactPayload, Field};
use crate::log::LogBuffer;
use folio_domain::config::{SiteConfig, TransmissionConfig};
use folio_kernel::entropy::Entropy;
use std::time::Duration;

const PACKET_CHANCE: f64 = 0.3;
const MAX_PROGRESS_STEP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Encrypting,
    Transmitting,
    /// The POST is in flight; no deadline until it settles.
    Awaiting,
    Delivered,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    Accepted,
    /// A sequence is already running.
    Ignored,
    /// A required field is empty.
    Invalid,
}

/// Work the driver must perform for the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Post(ContactPayload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transmission {
    phase: Phase,
    form: ContactForm,
    pending: Option<ContactPayload>,
    progress: f64,
    logs: LogBuffer,
    deadline: Option<Duration>,
    timings: TransmissionConfig,
    subject_prefix: String,
}

impl Transmission {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            phase: Phase::Idle,
            form: ContactForm::default(),
            pending: None,
            progress: 0.0,
            logs: LogBuffer::new(config.transmission.max_log_lines),
            deadline: None,
            timings: config.transmission.clone(),
            subject_prefix: config.relay.subject_prefix.clone(),
        }
    }

    /// Updates a form field. Inputs are locked while a sequence runs.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.form.set(field, value);
        true
    }

    /// Starts the sequence. The payload is frozen from the current form values.
    pub fn submit(&mut self, now: Duration) -> Submit {
        if self.phase != Phase::Idle {
            return Submit::Ignored;
        }
        if !self.form.is_complete() {
            return Submit::Invalid;
        }

        self.pending = Some(self.form.to_payload(&self.subject_prefix));
        self.progress = 0.0;
        self.logs.clear();
        self.logs.push("INITIATING SECURE HANDSHAKE...");
        self.logs.push("GENERATING RSA-4096 KEYS...");
        self.enter(Phase::Encrypting, Some(now + self.encrypt()));
        Submit::Accepted
    }

    #[must_use]
    pub const fn next_deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Moves past the pending deadline if `now` has reached it.
    pub fn advance<E>(&mut self, now: Duration, entropy: &mut E) -> Option<Effect>
    where
        E: Entropy + ?Sized,
    {
        let deadline = self.deadline.filter(|d| now >= *d)?;
        match self.phase {
            Phase::Encrypting => {
                self.logs.push("ENCRYPTION COMPLETE.");
                self.logs.push("ESTABLISHING UPLINK...");
                self.enter(Phase::Transmitting, Some(deadline + self.tick()));
                None
            }
            Phase::Transmitting => self.tick_upload(deadline, entropy),
            Phase::Delivered => {
                self.form = ContactForm::default();
                self.enter(Phase::Success, Some(deadline + self.success()));
                None
            }
            Phase::Success => {
                self.progress = 0.0;
                self.logs.clear();
                self.enter(Phase::Idle, None);
                None
            }
            Phase::Idle | Phase::Awaiting => None,
        }
    }

    /// Records the relay outcome once the POST settles.
    pub fn settle(&mut self, now: Duration, delivered: bool) {
        if self.phase != Phase::Awaiting {
            return;
        }
        if delivered {
            self.logs.push("PAYLOAD DELIVERED.");
            self.enter(Phase::Delivered, Some(now + self.deliver()));
        } else {
            self.logs.push("ERROR: CONNECTION REFUSED.");
            self.progress = 0.0;
            self.enter(Phase::Idle, None);
        }
    }

    fn tick_upload<E>(&mut self, deadline: Duration, entropy: &mut E) -> Option<Effect>
    where
        E: Entropy + ?Sized,
    {
        self.progress += entropy.between(0.0, MAX_PROGRESS_STEP);
        if self.progress > 100.0 {
            self.progress = 100.0;
            self.logs.push("UPLINK ESTABLISHED.");
            self.logs.push("TRANSMITTING PAYLOAD...");
            self.enter(Phase::Awaiting, None);
            return self.pending.take().map(Effect::Post);
        }

        if entropy.chance(PACKET_CHANCE) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let packet = (entropy.unit() * 9_999.0).round() as u32;
            self.logs.push(format!("UPLOADING PACKET {packet}..."));
        }
        self.deadline = Some(deadline + self.tick());
        None
    }

    fn enter(&mut self, phase: Phase, deadline: Option<Duration>) {
        tracing::debug!(from = %self.phase, to = %phase, "Transmission phase change");
        self.phase = phase;
        self.deadline = deadline;
    }

    const fn encrypt(&self) -> Duration {
        Duration::from_millis(self.timings.encrypt_ms)
    }

    const fn tick(&self) -> Duration {
        Duration::from_millis(self.timings.tick_ms)
    }

    const fn deliver(&self) -> Duration {
        Duration::from_millis(self.timings.deliver_ms)
    }

    const fn success(&self) -> Duration {
        Duration::from_millis(self.timings.success_ms)
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub const fn logs(&self) -> &LogBuffer {
        &self.logs
    }

    /// The overlay covers the form whenever a sequence runs.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.phase != Phase::Idle
    }

    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match self.phase {
            Phase::Encrypting => "ENCRYPTING DATA...",
            Phase::Success => "TRANSMISSION SUCCESSFUL",
            _ => "TRANSMITTING TO SERVER...",
        }
    }
}
