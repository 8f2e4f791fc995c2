//! Plot configuration for the two-data-set benchmark comparison scatterplot.

pub mod config;
pub mod observability;

pub use config::{load_config, AxisScale, ConfigError, PlotConfig};
