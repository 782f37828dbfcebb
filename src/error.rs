//! Unified error type for configuration and sink construction.
//!
//! Rendering and writing never produce one of these: formatting is total and write
//! failures belong to the sink.

use std::path::PathBuf;

/// Error type for logpipe operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading config or opening a sink.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Timezone string that is neither `local`, `utc`, nor a `+HH:MM` offset.
    InvalidTimezone(String),
    /// strftime pattern chrono refuses to parse or format.
    InvalidTimestampFormat(String),
    /// Preset name other than `debug`, `info`, or `custom`.
    UnknownPreset(String),
    /// Pipe target other than `stdout`, `stderr`, or `file`.
    UnknownTarget(String),
    /// File target configured without a path.
    MissingPath,
    /// File sink path could not be resolved.
    InvalidPath(PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidTimezone(s) => write!(f, "invalid timezone: {s}"),
            Self::InvalidTimestampFormat(s) => write!(f, "invalid timestamp format: {s}"),
            Self::UnknownPreset(s) => write!(f, "unknown preset: {s}"),
            Self::UnknownTarget(s) => write!(f, "unknown pipe target: {s}"),
            Self::MissingPath => write!(f, "file target requires a path"),
            Self::InvalidPath(p) => write!(f, "invalid path: {}", p.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
