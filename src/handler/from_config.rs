//! Handler construction from logpipe config files.

use super::Handler;
use crate::config::Config;
use crate::internal;

impl Handler {
    /// Builds a handler from the default config file, falling back to defaults when the
    /// file is missing or unreadable.
    ///
    /// # Errors
    /// The config loaded but describes an invalid formatter or an unopenable pipe.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("HANDLER", &format!("Using default config: {e}"));
            Config::default()
        });
        Self::from_config(&config)
    }

    /// Builds a handler from a loaded config.
    ///
    /// # Errors
    /// Unknown preset or target, bad timezone or timestamp pattern, or a file target
    /// that can't be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        internal::debug("HANDLER", "Building handler from config");
        internal::debug(
            "HANDLER",
            &format!(
                "Format: preset={}, timezone={}",
                config.format.preset, config.format.timezone
            ),
        );

        let formatter = config.formatter()?;
        let pipe = config.pipe()?;

        internal::debug(
            "HANDLER",
            &format!("Handler ready (target={})", config.pipe.target),
        );
        Ok(Self::new(formatter, pipe))
    }
}
