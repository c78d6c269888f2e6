use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Placeholder relay address shipped in the defaults; deployments must override it.
pub const PLACEHOLDER_RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/your-address@example.com";

/// Top-level site configuration shared across feature slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub navigation: NavigationConfig,
    pub resume: ResumeConfig,
    pub relay: RelayConfig,
    pub transmission: TransmissionConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Navigation bar behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Vertical scroll offset (px) past which the bar turns solid.
    pub scroll_threshold: f64,
}

/// Static resume asset and the simulated download timings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    /// External URL for the resume. `None` serves the file bundled with the site.
    pub href: Option<String>,
    pub file_name: String,
    pub prepare_ms: u64,
    pub linger_ms: u64,
}

/// Third-party form relay.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    /// Prepended to the sender's name to build the `_subject` field.
    pub subject_prefix: String,
}

/// Timings for the scripted transmission sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransmissionConfig {
    pub encrypt_ms: u64,
    pub tick_ms: u64,
    pub deliver_ms: u64,
    pub success_ms: u64,
    pub max_log_lines: usize,
}

/// Native logging knobs (ignored by the browser build).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub filter: Option<String>,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub rotation: LogRotation,
    pub json: bool,
    pub max_files: usize,
}

/// How often the native log file rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl ResumeConfig {
    #[must_use]
    pub const fn prepare(&self) -> Duration {
        Duration::from_millis(self.prepare_ms)
    }

    #[must_use]
    pub const fn linger(&self) -> Duration {
        Duration::from_millis(self.linger_ms)
    }
}

impl RelayConfig {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.endpoint == PLACEHOLDER_RELAY_ENDPOINT
    }
}

// --- Default ---

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { scroll_threshold: 50.0 }
    }
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            href: None,
            file_name: "Diksha_Sharma_Resume.pdf".to_owned(),
            prepare_ms: 1_500,
            linger_ms: 3_000,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: PLACEHOLDER_RELAY_ENDPOINT.to_owned(),
            subject_prefix: "New Mission Request from".to_owned(),
        }
    }
}

impl Default for TransmissionConfig {
    fn default() -> Self {
        Self { encrypt_ms: 1_500, tick_ms: 100, deliver_ms: 800, success_ms: 4_000, max_log_lines: 64 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            directory: None,
            rotation: LogRotation::Daily,
            json: false,
            max_files: 10,
        }
    }
}
