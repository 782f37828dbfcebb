//! Delivery of formatted lines. A `Pipe` adds the trailing newline and hands the text to
//! its `Sink` in one call; anything that can append a string can be a sink.

mod memory;
mod stdio;
mod writer;

pub use memory::MemorySink;
pub use stdio::{Stderr, Stdout};
pub use writer::{FileSink, WriterSink};

use std::io;

/// Destination capable of appending text.
///
/// `Send + Sync` so a pipe can be shared across threads. Serializing concurrent appends
/// is the sink's job.
pub trait Sink: Send + Sync {
    /// Appends `text` exactly as given.
    ///
    /// # Errors
    /// Whatever the underlying destination reports.
    fn append(&self, text: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn append(&self, text: &str) -> io::Result<()> {
        (**self).append(text)
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn append(&self, text: &str) -> io::Result<()> {
        (**self).append(text)
    }
}

/// Thin synchronous forwarder from formatted lines to a sink.
pub struct Pipe {
    sink: Box<dyn Sink>,
}

impl Pipe {
    /// Binds any sink.
    #[must_use]
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Pipe bound to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Stdout)
    }

    /// Pipe bound to the process's standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Stderr)
    }

    /// Appends `line` plus a newline with a single `append` call. No retries, no buffering.
    ///
    /// # Errors
    /// The sink's own error, passed through untouched.
    pub fn write(&self, line: &str) -> io::Result<()> {
        let mut text = String::with_capacity(line.len() + 1);
        text.push_str(line);
        text.push('\n');
        self.sink.append(&text)
    }
}

impl std::fmt::Debug for Pipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipe").finish_non_exhaustive()
    }
}
