//! Timestamp rendering rule: a strftime pattern plus the zone the instant is shown in.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Zone the captured instant is converted to before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timezone {
    /// The host's local zone.
    #[default]
    Local,
    Utc,
    /// Fixed offset east of UTC.
    Fixed(FixedOffset),
}

impl FromStr for Timezone {
    type Err = crate::Error;

    /// Accepts `local`, `utc` (also `z`, `gmt`), and offsets like `+02:00`, `-0530`, `+09`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => return Ok(Self::Local),
            "utc" | "z" | "gmt" => return Ok(Self::Utc),
            _ => {}
        }

        parse_offset(trimmed)
            .map(Self::Fixed)
            .ok_or_else(|| crate::Error::InvalidTimezone(s.to_string()))
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|&c| c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// strftime pattern (chrono syntax) plus timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampRule {
    pattern: String,
    timezone: Timezone,
}

impl Default for TimestampRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATTERN)
    }
}

impl TimestampRule {
    /// ISO 8601 with numeric offset, e.g. `2024-03-01T12:00:00+0000`.
    pub const DEFAULT_PATTERN: &'static str = "%Y-%m-%dT%H:%M:%S%z";

    /// Rule in the local timezone.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            timezone: Timezone::Local,
        }
    }

    /// Zone the instant is converted to before formatting.
    #[must_use]
    pub const fn timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// The strftime pattern as configured.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The configured zone.
    #[must_use]
    pub const fn zone(&self) -> Timezone {
        self.timezone
    }

    /// Reports patterns chrono cannot parse or cannot format. Rendering such a pattern
    /// yields an empty string.
    ///
    /// # Errors
    /// `InvalidTimestampFormat` when the pattern contains an unknown or malformed specifier,
    /// or one that parses but fails at format time (e.g. `%#z`).
    pub fn validate(&self) -> Result<(), crate::Error> {
        if StrftimeItems::new(&self.pattern).any(|item| matches!(item, Item::Error)) {
            return Err(crate::Error::InvalidTimestampFormat(self.pattern.clone()));
        }
        self.try_render(Utc::now()).map(|_| ())
    }

    /// Formats `instant` in the configured zone, reporting a pattern chrono refuses.
    ///
    /// # Errors
    /// `InvalidTimestampFormat` when formatting fails.
    pub fn try_render(&self, instant: DateTime<Utc>) -> Result<String, crate::Error> {
        let items = StrftimeItems::new(&self.pattern);
        let mut out = String::new();

        let result = match self.timezone {
            Timezone::Local => write!(
                out,
                "{}",
                instant.with_timezone(&Local).format_with_items(items)
            ),
            Timezone::Utc => write!(out, "{}", instant.format_with_items(items)),
            Timezone::Fixed(offset) => write!(
                out,
                "{}",
                instant.with_timezone(&offset).format_with_items(items)
            ),
        };

        result
            .map(|()| out)
            .map_err(|_| crate::Error::InvalidTimestampFormat(self.pattern.clone()))
    }

    /// Formats `instant` in the configured zone. Never panics: a pattern chrono refuses
    /// renders as an empty string.
    #[must_use]
    pub fn render(&self, instant: DateTime<Utc>) -> String {
        self.try_render(instant).unwrap_or_default()
    }
}
