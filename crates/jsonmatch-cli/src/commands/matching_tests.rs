use std::io::{self, BufRead, Cursor, Read};

use indoc::indoc;
use jsonmatch_lib::Pattern;

use super::matching::{MatchLinesError, Summary, match_lines};

fn run(pattern: &str, input: &str) -> (String, Summary) {
    let pattern = Pattern::parse(pattern).unwrap();
    let mut output = Vec::new();
    let summary = match_lines(&pattern, Cursor::new(input), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), summary)
}

#[test]
fn writes_one_object_per_matching_line() {
    let input = indoc! {r#"
        {"id": 1, "tags": ["a", "b"]}
        {"id": 2, "tags": []}
        {"id": 3, "tags": ["c"], "extra": true}
    "#};

    let (output, summary) = run(r#"{"id": <=id>, "tags": [0: <=first>]}"#, input);

    insta::assert_snapshot!(output, @r#"
    {"id":1,"first":"a"}
    {"id":3,"first":"c"}
    "#);
    assert_eq!(
        summary,
        Summary {
            lines: 3,
            matched: 2,
            skipped: 1,
        }
    );
}

#[test]
fn invalid_documents_are_skipped() {
    let input = indoc! {r#"
        not json
        {"a": 1}
    "#};

    let (output, summary) = run(r#"{"a": <=a>}"#, input);

    insta::assert_snapshot!(output, @r#"{"a":1}"#);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn blank_lines_are_ignored() {
    let input = "\n{\"a\": 1}\n   \n\n{\"a\": 2}\n";

    let (output, summary) = run(r#"{"a": <=a>}"#, input);

    insta::assert_snapshot!(output, @r#"
    {"a":1}
    {"a":2}
    "#);
    assert_eq!(summary.lines, 2);
    assert_eq!(summary.matched, 2);
}

#[test]
fn pattern_without_bindings_emits_empty_objects() {
    let (output, summary) = run("[0: true]", "[true]\n[false]\n");

    insta::assert_snapshot!(output, @"{}");
    assert_eq!(summary.matched, 1);
}

#[test]
fn back_references_use_structural_equality() {
    let input = indoc! {r#"
        {"a": {"x": 1, "y": [2]}, "b": {"y": [2], "x": 1.0}}
        {"a": [1, 2], "b": [2, 1]}
    "#};

    let (output, summary) = run(r#"{"a": <=v>, "b": <v>}"#, input);

    insta::assert_snapshot!(output, @r#"{"v":{"x":1,"y":[2]}}"#);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn last_line_without_newline() {
    let (output, _) = run("<=doc>", "1\n\"two\"");

    insta::assert_snapshot!(output, @r#"
    {"doc":1}
    {"doc":"two"}
    "#);
}

#[test]
fn empty_input() {
    let (output, summary) = run("{}", "");

    assert!(output.is_empty());
    assert_eq!(summary, Summary::default());
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::other("disk on fire"))
    }

    fn consume(&mut self, _: usize) {}
}

#[test]
fn read_failure_stops_the_run() {
    let pattern = Pattern::parse("{}").unwrap();

    let err = match_lines(&pattern, FailingReader, Vec::new()).unwrap_err();

    assert!(matches!(err, MatchLinesError::Read { line: 1, .. }));
    insta::assert_snapshot!(err, @"failed to read input line 1: disk on fire");
}

struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("pipe closed"))
    }
}

#[test]
fn write_failure_stops_the_run() {
    let pattern = Pattern::parse("<=x>").unwrap();

    let err = match_lines(&pattern, Cursor::new("1\n"), FailingWriter).unwrap_err();

    assert!(matches!(
        err,
        MatchLinesError::Encode { line: 1, .. } | MatchLinesError::Write(_)
    ));
}
