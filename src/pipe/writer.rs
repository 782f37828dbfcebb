//! Sinks over arbitrary `io::Write` destinations, files included.

use super::Sink;
use crate::internal;

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Any writer behind a mutex. Each append is one locked `write_all` followed by a flush,
/// so wrapping a `BufWriter` still delivers every line immediately.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn append(&self, text: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

/// Constructor namespace for append-mode file sinks.
pub struct FileSink;

impl FileSink {
    /// Opens `path` for appending, creating it and any missing parent directories.
    /// A leading `~` is expanded to the home directory.
    ///
    /// # Errors
    /// `InvalidPath` for a non-UTF-8 path, `Io` when the directory or file cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<WriterSink<File>, crate::Error> {
        let path = resolve_path(path.as_ref())?;
        internal::trace("FILE", &format!("Resolved path: {}", path.display()));

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            match fs::create_dir_all(parent) {
                Ok(()) => {
                    internal::debug("FILE", &format!("Created directory: {}", parent.display()));
                }
                Err(e) => {
                    internal::error(
                        "FILE",
                        &format!("Failed to create directory {}: {}", parent.display(), e),
                    );
                    return Err(e.into());
                }
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(WriterSink::new(file))
    }
}

fn resolve_path(path: &Path) -> Result<PathBuf, crate::Error> {
    let raw = path
        .to_str()
        .ok_or_else(|| crate::Error::InvalidPath(path.to_path_buf()))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}
