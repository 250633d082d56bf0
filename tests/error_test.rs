use std::io;

use instantiate::error::Error;

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
    let err = Error::TemplateNotFoundError { template_dir: "dne".to_string() };
    assert_eq!(err.to_string(), "Template \"dne\" does not exist.");

    let err = Error::DestinationExistsError { destination: "work/01-foo".to_string() };
    assert_eq!(err.to_string(), "Destination \"work/01-foo\" already exists.");

    let err = Error::file("a/b", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert_eq!(err.to_string(), "IO error on \"a/b\": denied");
}
