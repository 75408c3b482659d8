use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunestat/config.toml` or `~/.config/tunestat/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNESTAT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub report: ReportSettings,
    pub plot: PlotSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Where the duplicate report is written. Relative paths resolve
    /// against the current working directory.
    pub path: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dups.txt"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Number of equal-width buckets in the duration histogram.
    pub histogram_bins: usize,
    /// Multiplier applied to the longest duration to get the x-axis upper bound.
    pub duration_headroom: f64,
    /// Lower bound of the rating axis.
    pub rating_min: f64,
    /// Upper bound of the rating axis.
    pub rating_max: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            histogram_bins: 20,
            duration_headroom: 1.05,
            rating_min: -1.0,
            rating_max: 110.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box of the plot view.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Duration vs rating ~ ".to_string(),
        }
    }
}
