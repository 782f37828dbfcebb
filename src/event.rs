//! The facade hands over one borrowed event per log call.

use crate::level::Level;

/// Everything a formatter needs to render one line. Borrowed so the facade's
/// strings are never copied before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEvent<'a> {
    pub level: Level,
    pub message: &'a str,
    /// Already prettified by the caller; `None` renders as an empty component.
    pub metadata: Option<&'a str>,
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

impl<'a> LogEvent<'a> {
    /// Event with empty call-site info and no metadata.
    #[must_use]
    pub const fn new(level: Level, message: &'a str) -> Self {
        Self {
            level,
            message,
            metadata: None,
            file: "",
            function: "",
            line: 0,
        }
    }

    #[must_use]
    pub const fn metadata(mut self, metadata: Option<&'a str>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Call-site location, usually from `file!()`, `module_path!()` and `line!()`.
    #[must_use]
    pub const fn location(mut self, file: &'a str, function: &'a str, line: u32) -> Self {
        self.file = file;
        self.function = function;
        self.line = line;
        self
    }
}
