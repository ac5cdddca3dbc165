//! Error Extension Tests

use lair_domain::error::{Error, Result};
use lair_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let io_error = io::Error::new(io::ErrorKind::InvalidData, "bad toml");

    let result: Result<()> = Err(io_error).config_context("failed to parse config");

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.starts_with("failed to parse config"));
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let err: std::result::Result<u8, io::Error> = Err(io::Error::other("boom"));
    match err.with_context(|| format!("step {}", 3)) {
        Err(Error::Infrastructure { message, .. }) => assert_eq!(message, "step 3: boom"),
        _ => panic!("Expected Infrastructure error"),
    }
}
