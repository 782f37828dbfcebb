//! Tests for pipes and the built-in sinks.

use logpipe::{MemorySink, Pipe, Sink, WriterSink};
use std::io;
use std::sync::Arc;

#[test]
fn write_appends_line_and_newline_once() {
    let sink = MemorySink::new();
    let pipe = Pipe::new(sink.clone());

    pipe.write("abc").unwrap();

    assert_eq!(sink.appends(), vec!["abc\n".to_string()]);
}

#[test]
fn each_write_is_one_append() {
    let sink = MemorySink::new();
    let pipe = Pipe::new(sink.clone());

    pipe.write("one").unwrap();
    pipe.write("").unwrap();
    pipe.write("three").unwrap();

    assert_eq!(sink.appends().len(), 3);
    assert_eq!(sink.contents(), "one\n\nthree\n");
    assert_eq!(sink.lines(), vec!["one", "", "three"]);
}

#[test]
fn memory_sink_clear() {
    let sink = MemorySink::new();
    sink.append("x").unwrap();
    sink.clear();
    assert!(sink.appends().is_empty());
}

struct FailingSink;

impl Sink for FailingSink {
    fn append(&self, _text: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn sink_errors_pass_through() {
    let pipe = Pipe::new(FailingSink);
    let err = pipe.write("lost").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn writer_sink_collects_bytes() {
    let sink = Arc::new(WriterSink::new(Vec::new()));
    let pipe = Pipe::new(Arc::clone(&sink));

    pipe.write("first").unwrap();
    pipe.write("second").unwrap();
    drop(pipe);

    let sink = Arc::try_unwrap(sink).unwrap();
    assert_eq!(sink.into_inner(), b"first\nsecond\n");
}

#[test]
fn standard_stream_pipes_write() {
    Pipe::stdout().write("stdout pipe test").unwrap();
    Pipe::stderr().write("stderr pipe test").unwrap();
}

#[test]
fn shared_pipe_across_threads() {
    let sink = MemorySink::new();
    let pipe = Arc::new(Pipe::new(sink.clone()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pipe = Arc::clone(&pipe);
            std::thread::spawn(move || {
                for j in 0..25 {
                    pipe.write(&format!("t{i}-{j}")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 100);
    assert!(lines.iter().all(|l| l.starts_with('t')));
}
