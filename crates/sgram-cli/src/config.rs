use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sgram_core::{ErrorInfo, Family, SgramError};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "SGRAMS_CONFIG";

/// YAML-configurable defaults for the command line tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Family used when `--type` is absent.
    #[serde(default)]
    pub default_family: Family,
    /// Index range for listings and exports.
    #[serde(default)]
    pub range: RangeConfig,
    /// Path tracing defaults.
    #[serde(default)]
    pub trace: TraceConfig,
    /// Export defaults.
    #[serde(default)]
    pub export: ExportConfig,
    /// Log filter used when neither `SGRAMS_LOG` nor `-v` is given.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_family: Family::default(),
            range: RangeConfig::default(),
            trace: TraceConfig::default(),
            export: ExportConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

/// Half-open index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    /// First index.
    #[serde(default)]
    pub start: usize,
    /// One past the last index.
    #[serde(default = "default_range_end")]
    pub end: usize,
}

fn default_range_end() -> usize {
    12
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: default_range_end(),
        }
    }
}

impl RangeConfig {
    /// The range clamped to the domain of `family`.
    pub fn clamped(&self, family: Family) -> Range<usize> {
        let end = self.end.min(family.max_index() + 1);
        self.start.min(end)..end
    }
}

/// Defaults for `trace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceConfig {
    /// Number of steps walked.
    #[serde(default = "default_steps")]
    pub steps: usize,
}

fn default_steps() -> usize {
    10
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}

/// Output format of `export`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Markdown tables.
    #[default]
    Markdown,
    /// Hashed JSON catalog.
    Json,
}

impl ExportFormat {
    /// File extension of the format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

/// Defaults for `export`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Output format.
    #[serde(default)]
    pub format: ExportFormat,
    /// Output path; derived from the family when absent.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl CliConfig {
    /// Parses a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, SgramError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            SgramError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml(&raw).map_err(|err| err.with_context("path", path.display()))
    }

    /// Parses YAML text; an empty document yields the defaults.
    pub fn from_yaml(raw: &str) -> Result<Self, SgramError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|err| {
            SgramError::Config(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_hint("see the documented keys: default_family, range, trace, export, log_filter"),
            )
        })
    }

    /// Loads `explicit`, else the file named by `SGRAMS_CONFIG`, else the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, SgramError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}
