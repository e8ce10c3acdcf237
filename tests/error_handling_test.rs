//! Tests for structured error handling in the asnames library
//!
//! Only I/O failures abort a load; malformed input never does.

#![allow(clippy::unwrap_used)]

use asnames::{parse_line, AsNames, AsNamesConfig, FormatError, LoadError};
use std::path::PathBuf;

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    match AsNames::load(&path) {
        Err(LoadError::Io {
            path: Some(reported),
            source,
        }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Io error, got: {:?}", other),
    }
}

#[test]
fn test_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = AsNames::load(dir.path());
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn test_io_error_message_names_path() {
    let path = PathBuf::from("/nonexistent/asnames.txt");
    let err = AsNames::load(&path).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/asnames.txt"));
}

#[test]
fn test_invalid_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();

    let config = AsNamesConfig {
        unknown_full: String::new(),
    };
    let err = AsNames::load_with_config(&path, config).unwrap_err();
    assert!(matches!(err, LoadError::Config(_)));
    assert!(err.to_string().starts_with("Invalid configuration"));
}

#[test]
fn test_all_malformed_file_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.txt");
    std::fs::write(&path, "ASN44 BROKEN - TEST\nAS4.4.4 BROKEN - TEST\nGAHOGA - WTF\n").unwrap();

    let db = AsNames::load(&path).unwrap();
    assert!(db.is_empty());
    assert_eq!(db.summary().skipped, 3);
}

#[test]
fn test_parse_line_errors_propagate() {
    let err = parse_line("GAHOGA - WTF").unwrap_err();
    assert_eq!(
        err,
        FormatError::MalformedLine {
            line: "GAHOGA - WTF".to_string()
        }
    );
    assert_eq!(err.to_string(), "malformed line: GAHOGA - WTF");
}
