//! Tests for config parsing and conversion into formatter and pipe.

use chrono::{TimeZone, Utc};
use logpipe::config::{PipeTarget, PresetKind};
use logpipe::{Config, Error, Handler, Level, LogComponent, LogEvent, Timezone};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.parse_preset().unwrap(), PresetKind::Info);
    assert_eq!(config.parse_target().unwrap(), PipeTarget::Stdout);
    assert_eq!(config.timestamp_rule().unwrap().zone(), Timezone::Local);
    assert!(config.validate().is_ok());
}

#[test]
fn missing_file_uses_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn debug_preset_from_config() {
    let config = Config::parse(
        r#"
[format]
preset = "debug"
context_name = "SDK"
version = "v1"
timestamp_format = "%Y"
timezone = "utc"
"#,
    )
    .unwrap();

    let formatter = config.formatter().unwrap();
    let event = LogEvent::new(Level::Info, "ready").location("main.go", "init", 10);
    let instant = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    assert_eq!(
        formatter.render_at(&event, instant),
        "2024 ▶ SDK ▶ v1 ▶ info ▶ main.go:10 ▶ init ▶ ready"
    );
}

#[test]
fn custom_components_from_config() {
    let config = Config::parse(
        r#"
[format]
preset = "custom"
components = ["level", "{file}:{line}", "message", "metadata"]
separator = " | "
"#,
    )
    .unwrap();

    let formatter = config.formatter().unwrap();
    assert_eq!(formatter.config().format().len(), 4);
    assert_eq!(formatter.config().format()[0], LogComponent::Level);

    let event = LogEvent::new(Level::Error, "x").location("a.rs", "f", 5);
    assert_eq!(formatter.render(&event), "error | a.rs:5 | x");
}

#[test]
fn custom_without_separator_concatenates() {
    let config = Config::parse(
        r#"
[format]
preset = "custom"
components = ["[", "level", "] ", "message"]
"#,
    )
    .unwrap();

    let formatter = config.formatter().unwrap();
    assert_eq!(
        formatter.render(&LogEvent::new(Level::Debug, "m")),
        "[debug] m"
    );
}

#[test]
fn invalid_values_are_reported() {
    let bad_preset = Config::parse("[format]\npreset = \"verbose\"").unwrap();
    assert!(matches!(
        bad_preset.formatter(),
        Err(Error::UnknownPreset(p)) if p == "verbose"
    ));

    let bad_zone = Config::parse("[format]\ntimezone = \"mars\"").unwrap();
    assert!(matches!(bad_zone.validate(), Err(Error::InvalidTimezone(_))));

    let bad_pattern = Config::parse("[format]\ntimestamp_format = \"%Q\"").unwrap();
    assert!(matches!(
        bad_pattern.formatter(),
        Err(Error::InvalidTimestampFormat(_))
    ));

    let format_time_failure = Config::parse(
        "[format]\npreset = \"info\"\ntimestamp_format = \"%#z\"\ntimezone = \"utc\"",
    )
    .unwrap();
    assert!(matches!(
        format_time_failure.validate(),
        Err(Error::InvalidTimestampFormat(p)) if p == "%#z"
    ));
    assert!(matches!(
        format_time_failure.formatter(),
        Err(Error::InvalidTimestampFormat(_))
    ));

    let bad_target = Config::parse("[pipe]\ntarget = \"syslog\"").unwrap();
    assert!(matches!(bad_target.pipe(), Err(Error::UnknownTarget(_))));

    let no_path = Config::parse("[pipe]\ntarget = \"file\"").unwrap();
    assert!(matches!(no_path.validate(), Err(Error::MissingPath)));
    assert!(matches!(no_path.pipe(), Err(Error::MissingPath)));
}

#[test]
fn syntax_error_is_parse_error() {
    let result = Config::parse("[format\npreset = ");
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn load_from_file_and_build_handler() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("logs").join("app.log");
    let config_path = tmp_dir.path().join("logpipe.toml");

    fs::write(
        &config_path,
        format!(
            r#"
[format]
preset = "custom"
components = ["level", "message"]
separator = ": "

[pipe]
target = "file"
path = "{}"
"#,
            log_path.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert!(config.validate().is_ok());

    let handler = Handler::from_config(&config).unwrap();
    handler.log(&LogEvent::new(Level::Notice, "configured"));

    assert_eq!(fs::read_to_string(log_path).unwrap(), "notice: configured\n");
}

#[test]
fn stderr_target() {
    let config = Config::parse("[pipe]\ntarget = \"STDERR\"").unwrap();
    assert_eq!(config.parse_target().unwrap(), PipeTarget::Stderr);
    assert!(Handler::from_config(&config).is_ok());
}
