//! Tests for input resolution: every `InputSource` shape must normalize to
//! the same text, differing only in origin label.

use std::fs::File;
use std::io::{Cursor, Write as _};

use rstest::rstest;
use smelt::{InputSource, NodeKind, SourceCode};

const SAMPLE: &str = "class Sample\nend\n";

fn temp_source_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.rb");
    let mut file = File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn string_input_has_string_origin() {
    let source = SourceCode::from_string(SAMPLE);
    assert_eq!(source.origin(), "string");
    assert_eq!(source.text(), SAMPLE);
}

#[test]
fn stream_input_has_stdin_origin() {
    let source = SourceCode::from_stream(Cursor::new(SAMPLE.as_bytes().to_vec())).unwrap();
    assert_eq!(source.origin(), "STDIN");
    assert_eq!(source.text(), SAMPLE);
}

#[test]
fn path_input_uses_the_path_as_origin() {
    let (_dir, path) = temp_source_file(SAMPLE);
    let source = SourceCode::from_path(&path).unwrap();
    assert_eq!(source.origin(), path.display().to_string());
    assert_eq!(source.text(), SAMPLE);
}

#[test]
fn open_file_input_keeps_its_path_as_origin() {
    let (_dir, path) = temp_source_file(SAMPLE);
    let file = File::open(&path).unwrap();
    let source = SourceCode::from_file(&path, file).unwrap();
    assert_eq!(source.origin(), path.display().to_string());
    assert_eq!(source.text(), SAMPLE);
}

#[test]
fn missing_path_surfaces_io_error_not_parse_failure() {
    let err = SourceCode::from_path("/no/such/dir/missing.rb").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[rstest]
#[case::text(InputSource::Text(SAMPLE.to_string()))]
#[case::stream(InputSource::Stream(Box::new(Cursor::new(SAMPLE.as_bytes().to_vec()))))]
fn every_shape_parses_to_the_same_tree(#[case] input: InputSource) {
    let source = SourceCode::from_source(input).unwrap();
    let tree = source.syntax_tree().unwrap();
    let root = tree.root().unwrap();
    assert!(matches!(&root.kind, NodeKind::ClassDef { name, .. } if name == "Sample"));
}

#[test]
fn failure_origin_matches_the_input_shape() {
    let (_dir, path) = temp_source_file("class Broken");
    let source = SourceCode::from_path(&path).unwrap();
    let failure = source.syntax_tree().unwrap_err();
    assert_eq!(failure.origin, path.display().to_string());
}
