//! Tests for the Debug and Info presets.

use chrono::{TimeZone, Utc};
use logpipe::{
    Formatter, FormatterConfig, Level, LogComponent, LogEvent, PRESET_SEPARATOR, PresetOptions,
    TimestampRule, Timezone,
};

fn options() -> PresetOptions {
    PresetOptions::new().timestamp(TimestampRule::new("%Y-%m-%d").timezone(Timezone::Utc))
}

#[test]
fn debug_preset_full_line() {
    let formatter = Formatter::debug_preset(&options().context_name("SDK").version("v1"));
    let event = LogEvent::new(Level::Info, "ready").location("main.go", "init", 10);
    let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    assert_eq!(
        formatter.render_at(&event, instant),
        "2024-01-02 ▶ SDK ▶ v1 ▶ info ▶ main.go:10 ▶ init ▶ ready"
    );
}

#[test]
fn debug_preset_with_current_time() {
    let options = PresetOptions::new().context_name("SDK").version("v1");
    let formatter = Formatter::debug_preset(&options);
    let event = LogEvent::new(Level::Info, "ready").location("main.go", "init", 10);

    let line = formatter.render(&event);
    let (ts, rest) = line.split_once(PRESET_SEPARATOR).unwrap();
    assert!(!ts.is_empty());
    assert_eq!(rest, "SDK ▶ v1 ▶ info ▶ main.go:10 ▶ init ▶ ready");
}

#[test]
fn debug_preset_appends_metadata() {
    let formatter = Formatter::debug_preset(&options());
    let event = LogEvent::new(Level::Error, "failed")
        .metadata(Some("code=7"))
        .location("db.rs", "query", 88);
    let instant = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    assert_eq!(
        formatter.render_at(&event, instant),
        "2024-01-02 ▶ error ▶ db.rs:88 ▶ query ▶ failed ▶ code=7"
    );
}

#[test]
fn info_preset_layout() {
    let formatter = Formatter::info_preset(&options().context_name("SDK"));
    let event = LogEvent::new(Level::Warning, "slow")
        .metadata(Some("ignored"))
        .location("x.rs", "f", 1);
    let instant = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    assert_eq!(
        formatter.render_at(&event, instant),
        "2024-01-02 ▶ SDK ▶ warning ▶ slow"
    );
}

#[test]
fn presets_omit_unset_context_and_version() {
    let config = FormatterConfig::info_preset(&PresetOptions::new());
    assert_eq!(
        config.format(),
        &[
            LogComponent::Timestamp,
            LogComponent::Level,
            LogComponent::Message
        ]
    );
    assert_eq!(config.separator_str(), Some(" ▶ "));
}

#[test]
fn debug_preset_component_list() {
    let config = FormatterConfig::debug_preset(&PresetOptions::new().version("v2"));
    assert_eq!(
        config.format(),
        &[
            LogComponent::Timestamp,
            LogComponent::text("v2"),
            LogComponent::Level,
            LogComponent::group([
                LogComponent::File,
                LogComponent::text(":"),
                LogComponent::Line,
            ]),
            LogComponent::Function,
            LogComponent::Message,
            LogComponent::Metadata,
        ]
    );
}
