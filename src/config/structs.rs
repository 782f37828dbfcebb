//! Configuration struct definitions.

use serde::Deserialize;
use std::str::FromStr;

/// Formatter section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    /// Preset name (debug, info, custom).
    pub preset: String,
    /// Literal component after the timestamp in presets.
    pub context_name: Option<String>,
    /// Literal component after the context name in presets.
    pub version: Option<String>,
    /// Component templates, used by the custom preset only.
    pub components: Vec<String>,
    /// Separator, used by the custom preset only.
    pub separator: Option<String>,
    /// strftime pattern.
    pub timestamp_format: String,
    /// Timezone (local, utc, or an offset like +02:00).
    pub timezone: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            preset: "info".to_string(),
            context_name: None,
            version: None,
            components: Vec::new(),
            separator: None,
            timestamp_format: crate::fmt::TimestampRule::DEFAULT_PATTERN.to_string(),
            timezone: "local".to_string(),
        }
    }
}

/// Pipe section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PipeConfig {
    /// Target (stdout, stderr, file).
    pub target: String,
    /// File path, required when target is file.
    pub path: Option<String>,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            target: "stdout".to_string(),
            path: None,
        }
    }
}

/// Which formatter layout `[format]` selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Debug,
    Info,
    /// Built from `components` and `separator`.
    Custom,
}

impl FromStr for PresetKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "custom" => Ok(Self::Custom),
            _ => Err(crate::Error::UnknownPreset(s.to_string())),
        }
    }
}

/// Where `[pipe]` sends lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeTarget {
    Stdout,
    Stderr,
    File,
}

impl FromStr for PipeTarget {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "file" => Ok(Self::File),
            _ => Err(crate::Error::UnknownTarget(s.to_string())),
        }
    }
}
