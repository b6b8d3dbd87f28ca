//! Integration tests: the greet service wired to the real adapters.

use greeter_adapters::{JsonRenderer, MemoryWriter};
use greeter_core::prelude::*;

fn service(writer: &MemoryWriter) -> GreetService {
    GreetService::new(Box::new(JsonRenderer::new()), Box::new(writer.clone()))
}

#[test]
fn test_run_writes_one_line() {
    let writer = MemoryWriter::new();
    service(&writer)
        .run(ArgumentList::new(["prog", "foo", "bar"]))
        .unwrap();

    assert_eq!(
        writer.contents(),
        "{\"Hello\":\"World\",\"args\":[\"prog\",\"foo\",\"bar\"]}\n"
    );
}

#[test]
fn test_run_with_no_arguments() {
    let writer = MemoryWriter::new();
    service(&writer).run(ArgumentList::default()).unwrap();

    assert_eq!(writer.lines(), ["{\"Hello\":\"World\",\"args\":[]}"]);
}

#[test]
fn test_escaped_arguments_round_trip() {
    let original = ArgumentList::new(["prog", "quote\"d", "back\\slash", "both \\\""]);
    let writer = MemoryWriter::new();
    service(&writer).run(original.clone()).unwrap();

    let line = writer.lines().remove(0);
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    let parsed: Vec<String> = value["args"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_owned())
        .collect();
    assert_eq!(parsed, original.into_inner());

    let record: GreetingRecord = serde_json::from_str(&line).unwrap();
    assert_eq!(record.hello(), "World");
}

#[test]
fn test_hello_key_comes_first() {
    let text = service(&MemoryWriter::new())
        .render(ArgumentList::new(["args", "Hello"]))
        .unwrap();

    let hello = text.find("\"Hello\"").unwrap();
    let args = text.find("\"args\"").unwrap();
    assert!(hello < args);
    assert!(text.starts_with("{\"Hello\":\"World\","));
}

#[test]
fn test_flag_like_arguments_are_data() {
    let writer = MemoryWriter::new();
    service(&writer)
        .run(ArgumentList::new(["prog", "--help", "-v", "--version"]))
        .unwrap();

    assert_eq!(
        writer.lines(),
        ["{\"Hello\":\"World\",\"args\":[\"prog\",\"--help\",\"-v\",\"--version\"]}"]
    );
}
