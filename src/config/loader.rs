//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::PlotConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Syntax of a configuration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    /// Pick a format from the file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Toml,
        }
    }
}

/// Load the plot configuration.
///
/// With no `source` the built-in defaults are returned. Otherwise the file
/// must define every field with a valid value; nothing is filled in from the
/// defaults.
pub fn load_config(source: Option<&Path>) -> Result<PlotConfig, ConfigError> {
    let config = match source {
        None => {
            tracing::debug!("No configuration source given, using built-in defaults");
            PlotConfig::default()
        }
        Some(path) => {
            let format = SourceFormat::from_path(path);
            tracing::debug!(path = %path.display(), ?format, "Reading configuration source");

            let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
            deserialize(&content, format)?
        }
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        dpi = config.dpi,
        dotsize = config.dotsize,
        tolerance = config.tolerance,
        xscale = %config.xscale,
        yscale = %config.yscale,
        truncate = config.truncate,
        min_intensity = config.min_intensity,
        "Plot configuration loaded"
    );

    Ok(config)
}

/// Parse and validate configuration held in memory.
pub fn parse_config(content: &str, format: SourceFormat) -> Result<PlotConfig, ConfigError> {
    let config = deserialize(content, format)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn deserialize(content: &str, format: SourceFormat) -> Result<PlotConfig, ConfigError> {
    let config = match format {
        SourceFormat::Toml => toml::from_str(content)?,
        SourceFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}
