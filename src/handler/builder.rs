//! Stepwise construction of a `Handler`.

use super::Handler;
use crate::fmt::{Formatter, PresetOptions};
use crate::pipe::{Pipe, Sink};

/// Anything left unset falls back to the Info preset and stdout at `build`.
#[derive(Debug, Default)]
pub struct HandlerBuilder {
    formatter: Option<Formatter>,
    pipe: Option<Pipe>,
}

impl HandlerBuilder {
    /// Empty builder; see `build` for the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a `Formatter` or a bare `FormatterConfig`.
    #[must_use]
    pub fn formatter(mut self, formatter: impl Into<Formatter>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    /// Uses the Debug preset.
    #[must_use]
    pub fn debug_preset(self, options: &PresetOptions) -> Self {
        self.formatter(Formatter::debug_preset(options))
    }

    /// Uses the Info preset.
    #[must_use]
    pub fn info_preset(self, options: &PresetOptions) -> Self {
        self.formatter(Formatter::info_preset(options))
    }

    /// Writes through `pipe`.
    #[must_use]
    pub fn pipe(mut self, pipe: Pipe) -> Self {
        self.pipe = Some(pipe);
        self
    }

    /// Writes to standard output.
    #[must_use]
    pub fn stdout(self) -> Self {
        self.pipe(Pipe::stdout())
    }

    /// Writes to standard error.
    #[must_use]
    pub fn stderr(self) -> Self {
        self.pipe(Pipe::stderr())
    }

    /// Wraps `sink` in a new `Pipe`.
    #[must_use]
    pub fn sink(self, sink: impl Sink + 'static) -> Self {
        self.pipe(Pipe::new(sink))
    }

    /// Finishes the handler, filling unset parts with the Info preset and stdout.
    #[must_use]
    pub fn build(self) -> Handler {
        Handler {
            formatter: self
                .formatter
                .unwrap_or_else(|| Formatter::info_preset(&PresetOptions::default())),
            pipe: self.pipe.unwrap_or_else(Pipe::stdout),
        }
    }
}
