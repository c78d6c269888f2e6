use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Default config file stem, resolved against the working directory.
pub const DEFAULT_CONFIG_STEM: &str = "folio";
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "FOLIO";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file. An explicit `path` must exist; when
///    `path` is `None` the `folio` file (any supported extension) is used if present.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `FOLIO__`.
///    Nested structures are accessed using double underscores (e.g., `FOLIO__RELAY__ENDPOINT`
///    maps to `relay.endpoint`).
///
/// # Errors
/// This function will return an error if:
/// * An explicitly specified configuration file cannot be found.
/// * The content of the file or environment does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
/// use folio_domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.transmission.tick_ms > 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_STEM), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading site config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
