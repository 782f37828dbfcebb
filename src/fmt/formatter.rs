//! Component-sequence rendering: each component renders to a string, empty ones drop out,
//! survivors are joined with the separator.

use super::component::LogComponent;
use super::template;
use super::timestamp::TimestampRule;
use crate::event::LogEvent;

use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// Ordered components, separator, and timestamp rule. Built once, reused for every line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterConfig {
    format: Vec<LogComponent>,
    separator: Option<String>,
    timestamp: TimestampRule,
}

impl FormatterConfig {
    /// Empty sequence, no separator, default timestamp rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one component.
    #[must_use]
    pub fn component(mut self, component: LogComponent) -> Self {
        self.format.push(component);
        self
    }

    /// Appends components in order.
    #[must_use]
    pub fn components(mut self, components: impl IntoIterator<Item = LogComponent>) -> Self {
        self.format.extend(components);
        self
    }

    /// Appends one component parsed from a template such as `"{file}:{line}"`.
    #[must_use]
    pub fn template(self, template: &str) -> Self {
        self.component(template::parse(template))
    }

    /// Text placed between non-empty components. Unset means concatenation.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Rule used by every `Timestamp` component.
    #[must_use]
    pub fn timestamp(mut self, rule: TimestampRule) -> Self {
        self.timestamp = rule;
        self
    }

    /// Components in render order.
    #[must_use]
    pub fn format(&self) -> &[LogComponent] {
        &self.format
    }

    /// The separator, if one is set.
    #[must_use]
    pub fn separator_str(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    /// The timestamp rule in use.
    #[must_use]
    pub const fn timestamp_rule(&self) -> &TimestampRule {
        &self.timestamp
    }
}

/// Renders log events into single lines according to a `FormatterConfig`.
///
/// Rendering is total: absent inputs become empty components, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    config: FormatterConfig,
}

impl From<FormatterConfig> for Formatter {
    fn from(config: FormatterConfig) -> Self {
        Self::new(config)
    }
}

impl Formatter {
    /// Freezes `config` into a formatter.
    #[must_use]
    pub const fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// The configuration this formatter renders with.
    #[must_use]
    pub const fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Renders `event` at the current instant.
    #[must_use]
    pub fn render(&self, event: &LogEvent<'_>) -> String {
        self.render_at(event, Utc::now())
    }

    /// Renders `event` with every timestamp component showing `instant`.
    #[must_use]
    pub fn render_at(&self, event: &LogEvent<'_>, instant: DateTime<Utc>) -> String {
        let parts: Vec<Cow<'_, str>> = self
            .config
            .format
            .iter()
            .map(|component| self.render_component(component, event, instant))
            .filter(|part| !part.is_empty())
            .collect();

        parts.join(self.config.separator.as_deref().unwrap_or(""))
    }

    fn render_component<'a>(
        &'a self,
        component: &'a LogComponent,
        event: &LogEvent<'a>,
        instant: DateTime<Utc>,
    ) -> Cow<'a, str> {
        match component {
            LogComponent::Timestamp => Cow::Owned(self.config.timestamp.render(instant)),
            LogComponent::Level => Cow::Borrowed(event.level.as_str()),
            LogComponent::Message => Cow::Borrowed(event.message),
            LogComponent::Function => Cow::Borrowed(event.function),
            LogComponent::File => Cow::Borrowed(event.file),
            LogComponent::Line => Cow::Owned(event.line.to_string()),
            LogComponent::Metadata => Cow::Borrowed(event.metadata.unwrap_or_default()),
            LogComponent::Text(text) => Cow::Borrowed(text.as_str()),
            LogComponent::Group(children) => Cow::Owned(
                children
                    .iter()
                    .map(|child| self.render_component(child, event, instant))
                    .collect(),
            ),
        }
    }
}
