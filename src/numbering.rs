//! Sequential project numbering.
//! Looks at the numbered folders next to the new project (`01-intro`,
//! `02-loops`, ...) and works out the number the new project should get.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Returns the `width`-digit prefix of `name` when it consists of ASCII digits only.
fn numeric_prefix(name: &str, width: usize) -> Option<&str> {
    let end = name.char_indices().nth(width).map(|(i, _)| i).unwrap_or(name.len());
    let prefix = &name[..end];
    if prefix.chars().count() == width && prefix.chars().all(|c| c.is_ascii_digit()) {
        Some(prefix)
    } else {
        None
    }
}

/// Adds one to a string of decimal digits, growing it on carry out of the top digit.
fn increment(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for byte in out.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    out.insert(0, b'1');
    String::from_utf8_lossy(&out).into_owned()
}

/// Computes the next project number for the directory `directory`.
///
/// Only immediate subdirectories whose names start with exactly `width`
/// decimal digits are considered. The result is the largest such prefix plus
/// one, zero-padded to `width` digits, or `1` padded when nothing qualifies.
/// A number that no longer fits in `width` digits is returned wider rather
/// than rejected (`99` becomes `100`).
///
/// Returns `Ok(None)` without reading the directory when `width` is `None`.
///
/// # Errors
/// * `Error::InvalidNumberingWidth` if `width` is zero
/// * `Error::FileError` if the directory cannot be listed
pub fn infer_next_number<P: AsRef<Path>>(
    directory: P,
    width: Option<usize>,
) -> Result<Option<String>> {
    let Some(width) = width else {
        return Ok(None);
    };
    if width == 0 {
        return Err(Error::InvalidNumberingWidth { width });
    }

    let directory = directory.as_ref();
    let mut highest: Option<String> = None;

    for entry in fs::read_dir(directory).map_err(|e| Error::file(directory, e))? {
        let entry = entry.map_err(|e| Error::file(directory, e))?;
        // Follows symlinks, so a link to a numbered folder counts too.
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(prefix) = numeric_prefix(&name, width) {
            // Every prefix has the same length, so string order is numeric order.
            if highest.as_deref().map_or(true, |current| prefix > current) {
                highest = Some(prefix.to_string());
            }
        }
    }

    let number = match highest {
        Some(digits) => increment(&digits),
        None => format!("{:0width$}", 1),
    };
    debug!("Next project number in {} is {}", directory.display(), number);
    Ok(Some(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix("02-homework", 2), Some("02"));
        assert_eq!(numeric_prefix("123-x", 3), Some("123"));
        assert_eq!(numeric_prefix("1-x", 2), None);
        assert_eq!(numeric_prefix("7", 2), None);
        assert_eq!(numeric_prefix("a1-x", 1), None);
        assert_eq!(numeric_prefix("é1", 1), None);
    }

    #[test]
    fn test_increment() {
        assert_eq!(increment("01"), "02");
        assert_eq!(increment("09"), "10");
        assert_eq!(increment("099"), "100");
        assert_eq!(increment("99"), "100");
    }
}
