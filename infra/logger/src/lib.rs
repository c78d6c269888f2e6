//! # Logger
//!
//! Native logging for the desktop shell: a compact console layer, an optional
//! non-blocking rolling file, and an [`EnvFilter`](tracing_subscriber::EnvFilter)
//! built from the configured level. The browser build logs through Dioxus, so this
//! crate compiles to nothing on `wasm32`.
//!
//! The shell builds everything from the `[log]` section:
//!
//! ```rust
//! use folio_domain::config::LogConfig;
//! use folio_logger::Logger;
//!
//! let logger = Logger::from_config("folio", &LogConfig::default()).unwrap();
//! assert!(!logger.writes_files());
//! ```
#![cfg(not(target_arch = "wasm32"))]

mod error;
mod layers;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use folio_domain::config::{LogConfig, LogRotation};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builder state before a file prefix has been chosen.
#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
/// Console output only.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Console plus a rolling log directory.
#[derive(Debug)]
pub struct Rolling {
    directory: PathBuf,
    rotation: LogRotation,
    keep: usize,
    json: bool,
}

mod sealed {
    pub trait Name {}
    pub trait Output {}
}
impl sealed::Name for Unnamed {}
impl sealed::Name for Named {}
impl sealed::Output for ConsoleOnly {}
impl sealed::Output for Rolling {}

/// Typestate builder: a name is required before [`init`](LoggerBuilder::init), and
/// file-only settings exist only after [`files`](LoggerBuilder::files).
#[derive(Debug)]
pub struct LoggerBuilder<N: sealed::Name = Unnamed, O: sealed::Output = ConsoleOnly> {
    name: N,
    output: O,
    level: LevelFilter,
    directives: Option<String>,
    console: bool,
}

impl<O: sealed::Output> LoggerBuilder<Unnamed, O> {
    /// Names the process; also the rolling file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, O> {
        LoggerBuilder {
            name: Named(name.into()),
            output: self.output,
            level: self.level,
            directives: self.directives,
            console: self.console,
        }
    }
}

impl<O: sealed::Output> LoggerBuilder<Named, O> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Module directives such as `folio_transmission=debug`, applied over the level.
    #[must_use]
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }
}

impl LoggerBuilder<Named, ConsoleOnly> {
    /// Adds a rolling log file under `directory` (daily, ten files kept).
    pub fn files(self, directory: impl Into<PathBuf>) -> LoggerBuilder<Named, Rolling> {
        LoggerBuilder {
            name: self.name,
            output: Rolling {
                directory: directory.into(),
                rotation: LogRotation::Daily,
                keep: 10,
                json: false,
            },
            level: self.level,
            directives: self.directives,
            console: self.console,
        }
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// [`LoggerError::Setting`] when console output is disabled (nothing would be
    /// written) or the directives do not parse, and
    /// [`LoggerError::AlreadyInstalled`] on a second call in the same process.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = checked_name(&self.name)?;
        if !self.console {
            return Err(LoggerError::Setting {
                message: "console is off and no log directory is set".into(),
                context: Some(name.to_owned().into()),
            });
        }
        let filter = layers::filter(self.level, self.directives.as_deref())?;
        tracing_subscriber::registry().with(filter).with(layers::console()).try_init()?;
        Ok(Logger { file_guard: None })
    }
}

impl LoggerBuilder<Named, Rolling> {
    #[must_use]
    pub const fn rotation(mut self, rotation: LogRotation) -> Self {
        self.output.rotation = rotation;
        self
    }

    /// Number of rolled files retained on disk.
    #[must_use]
    pub const fn keep(mut self, files: usize) -> Self {
        self.output.keep = files;
        self
    }

    /// Writes file lines as JSON objects. Console output stays human-readable.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.output.json = enabled;
        self
    }

    /// Installs the subscriber and opens the log directory.
    ///
    /// # Errors
    /// As for the console-only builder, plus [`LoggerError::Directory`] and
    /// [`LoggerError::Appender`] when the file cannot be created, and
    /// [`LoggerError::Setting`] for `keep == 0`.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = checked_name(&self.name)?;
        let Rolling { directory, rotation, keep, json } = self.output;
        if keep == 0 {
            return Err(LoggerError::Setting {
                message: "at least one log file must be kept".into(),
                context: Some("log.max_files".into()),
            });
        }

        let filter = layers::filter(self.level, self.directives.as_deref())?;
        let (file, guard) =
            layers::rolling_file(&directory, name, layers::rotation(rotation), keep, json)?;
        let console = self.console.then(layers::console);

        tracing_subscriber::registry().with(filter).with(file).with(console).try_init()?;
        tracing::debug!(directory = %directory.display(), ?rotation, keep, "File logging enabled");
        Ok(Logger { file_guard: Some(guard) })
    }
}

fn checked_name(name: &Named) -> Result<&str, LoggerError> {
    let trimmed = name.0.trim();
    if trimmed.is_empty() {
        return Err(LoggerError::Setting { message: "logger name is empty".into(), context: None });
    }
    Ok(trimmed)
}

/// Keeps the file writer alive. Dropping it flushes pending lines.
#[must_use = "dropping the logger stops file output"]
#[derive(Debug)]
pub struct Logger {
    file_guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use]
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: Unnamed,
            output: ConsoleOnly,
            level: LevelFilter::INFO,
            directives: None,
            console: true,
        }
    }

    /// Installs logging as described by the site's `[log]` section.
    ///
    /// A rolling file is added only when `log.directory` is set.
    ///
    /// # Errors
    /// [`LoggerError::Setting`] for an unknown level, plus anything `init` returns.
    pub fn from_config(name: impl Into<String>, log: &LogConfig) -> Result<Self, LoggerError> {
        let mut builder = Self::builder().name(name).level(parse_level(&log.level)?).console(log.console);
        if let Some(directives) = &log.filter {
            builder = builder.directives(directives.clone());
        }

        match &log.directory {
            Some(directory) => builder
                .files(directory)
                .rotation(log.rotation)
                .keep(log.max_files)
                .json(log.json)
                .init(),
            None => builder.init(),
        }
    }

    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Parses `"info"`, `" DEBUG "` and the like.
///
/// # Errors
/// [`LoggerError::Setting`] for names `tracing` does not know.
pub fn parse_level(raw: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(raw.trim()).map_err(|_| LoggerError::Setting {
        message: format!("unknown level '{raw}'").into(),
        context: Some("log.level".into()),
    })
}
