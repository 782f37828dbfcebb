//! Line rendering. Components, the template syntax config files use for them, the
//! timestamp rule, the formatter itself, and the built-in presets each get a module.

mod component;
mod formatter;
mod preset;
pub mod template;
mod timestamp;

pub use component::LogComponent;
pub use formatter::{Formatter, FormatterConfig};
pub use preset::{PRESET_SEPARATOR, PresetOptions};
pub use timestamp::{TimestampRule, Timezone};
