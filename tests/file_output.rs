use logpipe::{FileSink, Handler, Level, LogComponent, LogEvent, Pipe, Sink};
use std::fs;
use tempfile::TempDir;

#[test]
fn file_sink_creates_parent_directories() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("logs").join("nested").join("app.log");

    let sink = FileSink::open(&path).unwrap();
    sink.append("hello\n").unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "hello\n");
}

#[test]
fn file_sink_appends_to_existing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    fs::write(&path, "existing\n").unwrap();

    let pipe = Pipe::new(FileSink::open(&path).unwrap());
    pipe.write("one").unwrap();
    pipe.write("two").unwrap();

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["existing", "one", "two"]);
}

#[test]
fn handler_writes_formatted_lines_to_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("out.log");

    let handler = Handler::builder()
        .formatter(
            logpipe::FormatterConfig::new()
                .components([
                    LogComponent::Level,
                    LogComponent::Message,
                    LogComponent::Metadata,
                ])
                .separator("|"),
        )
        .sink(FileSink::open(&path).unwrap())
        .build();

    handler.log(&LogEvent::new(Level::Info, "started"));
    handler.log(&LogEvent::new(Level::Error, "failed").metadata(Some("code=2")));

    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content, "info|started\nerror|failed|code=2\n");
}

#[test]
fn file_sink_fails_when_parent_is_a_file() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let result = FileSink::open(blocker.join("app.log"));
    assert!(matches!(result, Err(logpipe::Error::Io(_))));
}
