//! The backend a logging facade drives: one formatter, one pipe, one line per call.

mod builder;
mod from_config;

pub use builder::HandlerBuilder;

use crate::event::LogEvent;
use crate::fmt::Formatter;
use crate::pipe::Pipe;
use std::io;

/// Immutable after build, so it can be shared across threads behind an `Arc` or a static.
#[derive(Debug)]
pub struct Handler {
    formatter: Formatter,
    pipe: Pipe,
}

impl Handler {
    /// Defaults to the Info preset on stdout.
    #[must_use]
    pub fn builder() -> HandlerBuilder {
        HandlerBuilder::new()
    }

    /// Pairs an existing formatter with a pipe.
    #[must_use]
    pub const fn new(formatter: Formatter, pipe: Pipe) -> Self {
        Self { formatter, pipe }
    }

    /// Renders and writes one line. Sink failures are dropped; use `try_log` to see them.
    pub fn log(&self, event: &LogEvent<'_>) {
        let _ = self.try_log(event);
    }

    /// Renders and writes one line, returning the sink's result.
    ///
    /// # Errors
    /// Whatever the bound sink reports for the append.
    pub fn try_log(&self, event: &LogEvent<'_>) -> io::Result<()> {
        let line = self.formatter.render(event);
        self.pipe.write(&line)
    }

    /// The formatter every event is rendered with.
    #[must_use]
    pub const fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// The pipe rendered lines are written to.
    #[must_use]
    pub const fn pipe(&self) -> &Pipe {
        &self.pipe
    }
}
