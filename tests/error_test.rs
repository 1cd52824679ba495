use std::io;

use scaffold_tree::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid options".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid options.");

    let err = Error::NameCollisionError {
        name: "pkg".to_string(),
        first: "{{ a }}".to_string(),
        second: "{{ b }}".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Name collision: '{{ a }}' and '{{ b }}' both resolve to 'pkg'."
    );
}
