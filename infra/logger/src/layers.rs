use crate::error::{LoggerError, LoggerErrorExt};
use folio_domain::config::LogRotation;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

const FILE_SUFFIX: &str = "log";

pub(crate) const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

/// `level` as the default directive, then `directives` or `RUST_LOG` on top.
pub(crate) fn filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        None => Ok(builder.from_env_lossy()),
        Some(raw) => builder.parse(raw).map_err(|e| LoggerError::Setting {
            message: format!("'{raw}': {e}").into(),
            context: Some("log.filter".into()),
        }),
    }
}

pub(crate) fn console<S>() -> BoxedLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer().compact().with_target(false).boxed()
}

/// Non-blocking rolling file layer. The guard must outlive every log call.
pub(crate) fn rolling_file<S>(
    directory: &Path,
    prefix: &str,
    rotation: Rotation,
    keep: usize,
    json: bool,
) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    std::fs::create_dir_all(directory).context(directory.display().to_string())?;

    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(prefix)
        .filename_suffix(FILE_SUFFIX)
        .max_log_files(keep)
        .build(directory)
        .context(directory.display().to_string())?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rotation_maps_to_appender() {
        assert_eq!(rotation(LogRotation::Hourly), Rotation::HOURLY);
        assert_eq!(rotation(LogRotation::Never), Rotation::NEVER);
    }

    #[test]
    fn broken_directives_name_the_setting() {
        let err = filter(LevelFilter::INFO, Some("folio=[")).unwrap_err();
        assert_eq!(err.kind(), "setting");
        assert!(err.to_string().contains("log.filter"));
    }

    #[test]
    fn explicit_directives_parse() {
        assert!(filter(LevelFilter::WARN, Some("folio_transmission=debug,reqwest=info")).is_ok());
    }
}
