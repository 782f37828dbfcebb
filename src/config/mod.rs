//! TOML configuration: which formatter layout to use and where lines go.
//!
//! Separated from struct definitions so that loading and conversion into typed values
//! stay independent of the serde schema.

mod structs;

pub use structs::{FormatConfig, PipeConfig, PipeTarget, PresetKind};

use crate::fmt::{Formatter, FormatterConfig, PresetOptions, TimestampRule, Timezone, template};
use crate::internal;
use crate::pipe::{FileSink, Pipe};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config: Info preset on stdout.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub pipe: PipeConfig,
}

impl Config {
    /// Loads from the default location, or returns defaults when no file exists there.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/logpipe/logpipe.toml`, e.g. `~/.config/logpipe/logpipe.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "logpipe")
            .map(|dirs| dirs.config_dir().join("logpipe.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Checks every string-typed field converts to its typed value.
    ///
    /// # Errors
    /// The first invalid preset, timezone, timestamp pattern, or pipe target.
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.parse_preset()?;
        self.timestamp_rule()?.validate()?;
        let target = self.parse_target()?;
        if target == PipeTarget::File && self.pipe.path.is_none() {
            return Err(crate::Error::MissingPath);
        }
        Ok(())
    }

    /// # Errors
    /// `UnknownPreset` for names other than debug, info, custom.
    pub fn parse_preset(&self) -> Result<PresetKind, crate::Error> {
        self.format.preset.parse()
    }

    /// # Errors
    /// `UnknownTarget` for names other than stdout, stderr, file.
    pub fn parse_target(&self) -> Result<PipeTarget, crate::Error> {
        self.pipe.target.parse()
    }

    /// # Errors
    /// `InvalidTimezone` when the timezone string doesn't parse.
    pub fn timestamp_rule(&self) -> Result<TimestampRule, crate::Error> {
        let timezone: Timezone = self.format.timezone.parse()?;
        Ok(TimestampRule::new(&self.format.timestamp_format).timezone(timezone))
    }

    /// Builds the formatter `[format]` describes.
    ///
    /// # Errors
    /// Unknown preset, bad timezone, or a timestamp pattern chrono rejects.
    pub fn formatter(&self) -> Result<Formatter, crate::Error> {
        let rule = self.timestamp_rule()?;
        rule.validate()?;

        let config = match self.parse_preset()? {
            PresetKind::Debug => FormatterConfig::debug_preset(&self.preset_options(rule)),
            PresetKind::Info => FormatterConfig::info_preset(&self.preset_options(rule)),
            PresetKind::Custom => {
                let mut config = FormatterConfig::new()
                    .components(template::parse_all(&self.format.components))
                    .timestamp(rule);
                if let Some(separator) = &self.format.separator {
                    config = config.separator(separator);
                }
                config
            }
        };

        Ok(Formatter::new(config))
    }

    fn preset_options(&self, rule: TimestampRule) -> PresetOptions {
        PresetOptions {
            context_name: self.format.context_name.clone(),
            version: self.format.version.clone(),
            timestamp: rule,
        }
    }

    /// Opens the pipe `[pipe]` describes.
    ///
    /// # Errors
    /// Unknown target, a file target without a path, or a file that can't be opened.
    pub fn pipe(&self) -> Result<Pipe, crate::Error> {
        match self.parse_target()? {
            PipeTarget::Stdout => Ok(Pipe::stdout()),
            PipeTarget::Stderr => Ok(Pipe::stderr()),
            PipeTarget::File => {
                let path = self.pipe.path.as_ref().ok_or(crate::Error::MissingPath)?;
                Ok(Pipe::new(FileSink::open(path)?))
            }
        }
    }
}
