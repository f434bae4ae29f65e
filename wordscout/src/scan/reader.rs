use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::trace;

use crate::errors::{ScanError, ScanResult};

const BUFFER_CAPACITY: usize = 65536;

/// Reads a whole file as UTF-8 text.
///
/// The handle is owned by this call and closed before it returns.
pub fn read_text(path: &Path) -> ScanResult<String> {
    trace!("Reading {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScanError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => ScanError::permission_denied(path),
        _ => ScanError::IoError(e),
    })?;

    let mut reader = BufReader::with_capacity(BUFFER_CAPACITY, file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    String::from_utf8(bytes).map_err(|e| ScanError::encoding_error(path, e))
}

/// Keywords from `keywords` that occur anywhere in `content`
pub fn matching_keywords<'a>(
    content: &'a str,
    keywords: &'a [String],
) -> impl Iterator<Item = &'a str> + 'a {
    keywords
        .iter()
        .filter(move |keyword| content.contains(keyword.as_str()))
        .map(String::as_str)
}

/// Drops repeated keywords, keeping the first occurrence of each
pub fn unique_keywords(keywords: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        if !unique.contains(keyword) {
            unique.push(keyword.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_read_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words_1.txt");
        fs::write(&path, "choose and come").unwrap();

        assert_eq!(read_text(&path).unwrap(), "choose and come");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, ScanError::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.dat");
        fs::write(&path, [0x63, 0x6f, 0xff, 0xfe]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, ScanError::EncodingError { .. }));
    }

    #[test]
    fn test_read_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_text(dir.path()).is_err());
    }

    #[test]
    fn test_matching_keywords_is_substring_match() {
        let words = keywords(&["choose", "come", "cost", "welcome"]);
        let found: Vec<&str> = matching_keywords("the outcome is welcome", &words).collect();
        assert_eq!(found, vec!["come", "welcome"]);
    }

    #[test]
    fn test_matching_keywords_is_case_sensitive() {
        let words = keywords(&["Cost"]);
        assert_eq!(matching_keywords("the cost is high", &words).count(), 0);
    }

    #[test]
    fn test_unique_keywords() {
        let words = keywords(&["come", "cost", "come"]);
        assert_eq!(unique_keywords(&words), vec!["come", "cost"]);
    }
}
