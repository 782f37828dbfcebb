#![forbid(unsafe_code)]

//! `logpipe` - component-based log line formatting with pluggable output pipes.
//!
//! A logging facade hands over a structured event; a [`Formatter`] renders it into one
//! line from an ordered list of [`LogComponent`]s, and a [`Pipe`] appends that line plus
//! a newline to a [`Sink`]. Empty components drop out so absent fields never leave a
//! dangling separator.
//!
//! # Example
//!
//! ```
//! use logpipe::{Formatter, FormatterConfig, Level, LogComponent, LogEvent};
//!
//! let formatter = Formatter::new(
//!     FormatterConfig::new()
//!         .components([LogComponent::Level, LogComponent::Message, LogComponent::Metadata])
//!         .separator(" "),
//! );
//!
//! let event = LogEvent::new(Level::Info, "hello");
//! assert_eq!(formatter.render(&event), "info hello");
//! ```
//!
//! With presets and a handler:
//!
//! ```
//! use logpipe::{Handler, PresetOptions};
//!
//! let handler = Handler::builder()
//!     .debug_preset(&PresetOptions::new().context_name("SDK").version("v1"))
//!     .stderr()
//!     .build();
//!
//! logpipe::info!(handler, "ready");
//! ```

pub mod config;
mod error;
mod event;
pub mod fmt;
pub mod handler;
pub mod internal;
pub mod level;
mod macros;
pub mod pipe;

pub use config::Config;
pub use error::Error;
pub use event::LogEvent;
pub use fmt::{
    Formatter, FormatterConfig, LogComponent, PRESET_SEPARATOR, PresetOptions, TimestampRule,
    Timezone,
};
pub use handler::{Handler, HandlerBuilder};
pub use level::Level;
pub use pipe::{FileSink, MemorySink, Pipe, Sink, Stderr, Stdout, WriterSink};
