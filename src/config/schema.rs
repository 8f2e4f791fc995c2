//! Configuration schema definitions.
//!
//! This module defines the settings record read by the comparison plotter.
//! Every field is required in a configuration source; there is no per-field
//! fallback to the built-in defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Settings for a two-data-set comparison scatterplot.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlotConfig {
    /// Dots per inch for the output file. Larger values make a bigger image.
    pub dpi: u32,

    /// Radius of each dot, in units defined by the renderer.
    pub dotsize: f64,

    /// Title at the top of the image.
    pub title: String,

    /// Data points whose maximum and minimum times differ by more than this
    /// factor are discarded as noise.
    pub tolerance: f64,

    /// Scaling applied to the x axis.
    pub xscale: AxisScale,

    /// Scaling applied to the y axis.
    pub yscale: AxisScale,

    /// X axis label (`None` leaves it blank).
    #[serde(deserialize_with = "label", serialize_with = "serialize_label")]
    pub xlabel: Option<String>,

    /// Y axis label (`None` leaves it blank).
    #[serde(deserialize_with = "label", serialize_with = "serialize_label")]
    pub ylabel: Option<String>,

    /// Ratio beyond which the maximum colour intensity is assigned.
    pub truncate: f64,

    /// Minimum colour intensity, in `[0, 1]`.
    ///
    /// At 0 tiny differences plot close to neutral; at 1 every point is flat
    /// blue or flat red.
    pub min_intensity: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            dpi: 96,
            dotsize: 48.0,
            title: "FLINT vs Magma Z[x] GCD (Scale = 20)".to_string(),
            tolerance: 1000.0,
            xscale: AxisScale::Log2,
            yscale: AxisScale::Log2,
            xlabel: Some("Length".to_string()),
            ylabel: Some("Bits".to_string()),
            truncate: 20.0,
            min_intensity: 0.2,
        }
    }
}

impl PlotConfig {
    /// Whether a measurement's spread is small enough to keep the point.
    ///
    /// Both times must be positive and finite with `min_time <= max_time`.
    pub fn within_tolerance(&self, min_time: f64, max_time: f64) -> bool {
        if !min_time.is_finite() || !max_time.is_finite() {
            return false;
        }
        if min_time <= 0.0 || max_time < min_time {
            return false;
        }
        max_time / min_time <= self.tolerance
    }

    /// How far a benchmark ratio has progressed towards `truncate`.
    ///
    /// Ratios are symmetric: `r` and `1/r` saturate equally. Returns 1.0 at or
    /// beyond `truncate`, otherwise 0.0 for a ratio of 1. With `truncate = 1`
    /// every ratio is at the threshold, so every ratio saturates.
    pub fn saturation(&self, ratio: f64) -> f64 {
        if !ratio.is_finite() || ratio <= 0.0 {
            return 1.0;
        }
        let magnitude = ratio.max(ratio.recip());
        if magnitude >= self.truncate || self.truncate <= 1.0 {
            return 1.0;
        }
        (magnitude.ln() / self.truncate.ln()).clamp(0.0, 1.0)
    }

    /// Render as a TOML source accepted by the loader.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Render as a JSON source accepted by the loader.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Axis transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    None,
    Log2,
    Log10,
}

impl AxisScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisScale::None => "none",
            AxisScale::Log2 => "log2",
            AxisScale::Log10 => "log10",
        }
    }

    /// Map a data value onto the axis.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            AxisScale::None => value,
            AxisScale::Log2 => value.log2(),
            AxisScale::Log10 => value.log10(),
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known axis scale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown axis scale '{0}' (expected none, log2 or log10)")]
pub struct UnknownScale(pub String);

impl FromStr for AxisScale {
    type Err = UnknownScale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(AxisScale::None),
            "log2" => Ok(AxisScale::Log2),
            "log10" => Ok(AxisScale::Log10),
            other => Err(UnknownScale(other.to_string())),
        }
    }
}

// Labels are required keys. TOML has no null, so an empty string also means
// "no label".
fn label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn serialize_label<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}
