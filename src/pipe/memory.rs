//! In-memory sink that records every append. Clones share the same buffer, so one clone
//! can be handed to a pipe while another is inspected.

use super::Sink;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    appends: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.appends.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every appended string, one entry per `append` call.
    #[must_use]
    pub fn appends(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// All appended text concatenated.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lock().concat()
    }

    /// Appended text split into lines, without the newlines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }

    /// Drops everything appended so far.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Sink for MemorySink {
    fn append(&self, text: &str) -> io::Result<()> {
        self.lock().push(text.to_string());
        Ok(())
    }
}
