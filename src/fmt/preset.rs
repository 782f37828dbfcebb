//! Named formatter configurations for the two common cases: verbose debug lines with
//! call-site info, and compact info lines.

use super::component::LogComponent;
use super::formatter::{Formatter, FormatterConfig};
use super::timestamp::TimestampRule;

/// Separator shared by both presets.
pub const PRESET_SEPARATOR: &str = " ▶ ";

/// Inputs the presets accept. `context_name` and `version` become literal components
/// right after the timestamp, and are left out entirely when `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetOptions {
    pub context_name: Option<String>,
    pub version: Option<String>,
    pub timestamp: TimestampRule,
}

impl PresetOptions {
    /// No context name, no version, default timestamp rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Literal shown right after the timestamp.
    #[must_use]
    pub fn context_name(mut self, name: impl Into<String>) -> Self {
        self.context_name = Some(name.into());
        self
    }

    /// Literal shown after the context name.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Rule for the leading timestamp.
    #[must_use]
    pub fn timestamp(mut self, rule: TimestampRule) -> Self {
        self.timestamp = rule;
        self
    }

    fn leading(&self) -> Vec<LogComponent> {
        let mut components = vec![LogComponent::Timestamp];
        if let Some(name) = &self.context_name {
            components.push(LogComponent::text(name));
        }
        if let Some(version) = &self.version {
            components.push(LogComponent::text(version));
        }
        components
    }
}

impl FormatterConfig {
    /// `timestamp, [context], [version], level, file:line, function, message, metadata`
    #[must_use]
    pub fn debug_preset(options: &PresetOptions) -> Self {
        Self::new()
            .components(options.leading())
            .components([
                LogComponent::Level,
                LogComponent::group([
                    LogComponent::File,
                    LogComponent::text(":"),
                    LogComponent::Line,
                ]),
                LogComponent::Function,
                LogComponent::Message,
                LogComponent::Metadata,
            ])
            .separator(PRESET_SEPARATOR)
            .timestamp(options.timestamp.clone())
    }

    /// `timestamp, [context], [version], level, message`
    #[must_use]
    pub fn info_preset(options: &PresetOptions) -> Self {
        Self::new()
            .components(options.leading())
            .components([LogComponent::Level, LogComponent::Message])
            .separator(PRESET_SEPARATOR)
            .timestamp(options.timestamp.clone())
    }
}

impl Formatter {
    /// Formatter over `FormatterConfig::debug_preset`.
    #[must_use]
    pub fn debug_preset(options: &PresetOptions) -> Self {
        Self::new(FormatterConfig::debug_preset(options))
    }

    /// Formatter over `FormatterConfig::info_preset`.
    #[must_use]
    pub fn info_preset(options: &PresetOptions) -> Self {
        Self::new(FormatterConfig::info_preset(options))
    }
}
