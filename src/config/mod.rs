//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults, or config file (TOML/JSON) given with -c
//!     → loader.rs (parse & deserialize, enum checks)
//!     → validation.rs (range checks)
//!     → PlotConfig (validated, immutable)
//!     → read by the plotter
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded and never reloaded
//! - Every field is required in a file; no partial defaults
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError, SourceFormat};
pub use schema::{AxisScale, PlotConfig};
pub use validation::{validate_config, ValidationError};
