#![no_main]
use libfuzzer_sys::fuzz_target;
use logpipe::fmt::template;
use logpipe::{Formatter, FormatterConfig, Level, LogEvent};

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let component = template::parse(data);

    // Also exercise rendering the parsed component
    let formatter = Formatter::new(FormatterConfig::new().component(component).separator(" "));
    let event = LogEvent::new(Level::Info, "test")
        .metadata(Some("k=v"))
        .location("fuzz.rs", "fuzz", 1);
    let _ = formatter.render(&event);
});
