//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic and enum checks)
//! - Validate value ranges (dpi > 0, tolerance > 0, truncate >= 1,
//!   min_intensity in [0, 1])
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PlotConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is handed to the plotter

use crate::config::schema::PlotConfig;

/// A single semantic problem with a configuration value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("dpi must be positive")]
    ZeroDpi,

    #[error("{field} must be a finite number greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("truncate must be a finite ratio of at least 1, got {0}")]
    TruncateBelowOne(f64),

    #[error("min_intensity must lie in [0, 1], got {0}")]
    IntensityOutOfRange(f64),
}

/// Check every range constraint on `config`.
pub fn validate_config(config: &PlotConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.dpi == 0 {
        errors.push(ValidationError::ZeroDpi);
    }

    for (field, value) in [("dotsize", config.dotsize), ("tolerance", config.tolerance)] {
        if !is_positive(value) {
            errors.push(ValidationError::NotPositive { field, value });
        }
    }

    if !(config.truncate.is_finite() && config.truncate >= 1.0) {
        errors.push(ValidationError::TruncateBelowOne(config.truncate));
    }

    if !(0.0..=1.0).contains(&config.min_intensity) {
        errors.push(ValidationError::IntensityOutOfRange(config.min_intensity));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
