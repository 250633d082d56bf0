use instantiate::{error::Error, numbering::infer_next_number};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_disabled_numbering_does_not_read_directory() {
    let result = infer_next_number("/definitely/not/a/real/directory", None).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_empty_directory_starts_at_one() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(infer_next_number(temp_dir.path(), Some(2)).unwrap(), Some("01".to_string()));
    assert_eq!(infer_next_number(temp_dir.path(), Some(3)).unwrap(), Some("001".to_string()));
}

#[test]
fn test_next_after_highest() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["01-intro", "03-loops", "02-functions", "notes"] {
        fs::create_dir(temp_dir.path().join(name)).unwrap();
    }

    assert_eq!(infer_next_number(temp_dir.path(), Some(2)).unwrap(), Some("04".to_string()));
}

#[test]
fn test_only_directories_with_full_prefix_count() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("02-homework")).unwrap();
    // Too few digits for width 2
    fs::create_dir(temp_dir.path().join("7-homework")).unwrap();
    // Digits not at the start
    fs::create_dir(temp_dir.path().join("hw-09")).unwrap();
    // A numbered file, not a directory
    fs::write(temp_dir.path().join("08-notes.txt"), "").unwrap();

    assert_eq!(infer_next_number(temp_dir.path(), Some(2)).unwrap(), Some("03".to_string()));
}

#[test]
fn test_longer_numbers_use_their_first_digits() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("123-project")).unwrap();

    assert_eq!(infer_next_number(temp_dir.path(), Some(2)).unwrap(), Some("13".to_string()));
}

#[test]
fn test_overflow_grows_wider() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("99-last")).unwrap();

    assert_eq!(infer_next_number(temp_dir.path(), Some(2)).unwrap(), Some("100".to_string()));
}

#[test]
fn test_zero_width_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    match infer_next_number(temp_dir.path(), Some(0)) {
        Err(Error::InvalidNumberingWidth { width: 0 }) => (),
        other => panic!("Expected InvalidNumberingWidth, got {other:?}"),
    }
}

#[test]
fn test_missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(infer_next_number(temp_dir.path().join("missing"), Some(2)).is_err());
}
