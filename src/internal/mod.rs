//! logpipe's own diagnostic logger, used while loading config and opening sinks.
//!
//! Silent until `init` is called. `OnceLock` means the first initializer wins and later
//! calls are no-ops, even if several entry points race.

use crate::event::LogEvent;
use crate::fmt::{FormatterConfig, LogComponent, PRESET_SEPARATOR};
use crate::handler::Handler;
use crate::level::Level;
use crate::pipe::{Pipe, Sink};
use std::sync::OnceLock;

struct InternalLogger {
    min_level: Level,
    handler: Handler,
}

static INTERNAL_LOGGER: OnceLock<InternalLogger> = OnceLock::new();

/// Diagnostics at `min_level` and above go to stderr.
pub fn init(min_level: Level) {
    init_with_pipe(min_level, Pipe::stderr());
}

/// Diagnostics at `min_level` and above go to `sink`.
pub fn init_with_sink(min_level: Level, sink: impl Sink + 'static) {
    init_with_pipe(min_level, Pipe::new(sink));
}

fn init_with_pipe(min_level: Level, pipe: Pipe) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| InternalLogger {
        min_level,
        handler: Handler::builder()
            .formatter(internal_format())
            .pipe(pipe)
            .build(),
    });
    if !was_init {
        debug("INTERNAL", &format!("Internal logger ready (level={min_level})"));
    }
}

/// `<timestamp> ▶ logpipe ▶ <level> ▶ <scope> ▶ <message>`; the scope travels in the
/// function slot.
fn internal_format() -> FormatterConfig {
    FormatterConfig::new()
        .components([
            LogComponent::Timestamp,
            LogComponent::text("logpipe"),
            LogComponent::Level,
            LogComponent::Function,
            LogComponent::Message,
        ])
        .separator(PRESET_SEPARATOR)
}

/// Whether `init` has run.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// Pre-init calls silently vanish.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get()
        && level >= logger.min_level
    {
        logger
            .handler
            .log(&LogEvent::new(level, msg).location("", scope, 0));
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
