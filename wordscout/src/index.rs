//! The keyword index produced by every scanner.
//!
//! A `KeywordIndex` maps each keyword to the files it was found in. Both scanners
//! build the same value; only the order inside each file list depends on which
//! unit of work finished first:
//! ```rust,ignore
//! let shared = SharedStateScanner::new().scan(&files, &keywords);
//! let isolated = IsolatedStateScanner::new().scan(&files, &keywords);
//! assert!(shared.same_contents(&isolated));
//! ```
//! Keywords that matched nothing are never stored, so an empty index means
//! "no matches at all".

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// Mapping from keyword to the files it was found in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<PathBuf>>",
    into = "BTreeMap<String, Vec<PathBuf>>"
)]
pub struct KeywordIndex {
    entries: BTreeMap<String, Vec<PathBuf>>,
}

impl From<BTreeMap<String, Vec<PathBuf>>> for KeywordIndex {
    fn from(mut entries: BTreeMap<String, Vec<PathBuf>>) -> Self {
        entries.retain(|_, paths| !paths.is_empty());
        Self { entries }
    }
}

impl From<KeywordIndex> for BTreeMap<String, Vec<PathBuf>> {
    fn from(index: KeywordIndex) -> Self {
        index.entries
    }
}

/// Matches from a single file, sent from an isolated worker to the collector
pub type PartialResult = KeywordIndex;

impl KeywordIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends `path` to the entry for `keyword`, creating the entry if needed
    pub fn record(&mut self, keyword: &str, path: &Path) {
        self.entries
            .entry(keyword.to_string())
            .or_default()
            .push(path.to_path_buf());
    }

    /// Merges another index into this one.
    ///
    /// Incoming file lists are appended after the existing ones in the order
    /// they appear in `other`.
    pub fn merge(&mut self, other: KeywordIndex) {
        for (keyword, paths) in other.entries {
            if paths.is_empty() {
                continue;
            }
            self.entries.entry(keyword).or_default().extend(paths);
        }
    }

    /// Files recorded for `keyword`, if any
    pub fn get(&self, keyword: &str) -> Option<&[PathBuf]> {
        self.entries.get(keyword).map(Vec::as_slice)
    }

    /// Whether `keyword` was recorded for `path`
    pub fn contains(&self, keyword: &str, path: &Path) -> bool {
        self.get(keyword)
            .is_some_and(|paths| paths.iter().any(|p| p == path))
    }

    /// Number of keywords with at least one file
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (keyword, file) entries
    pub fn total_entries(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterates keywords in lexical order with their file lists
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.entries
            .iter()
            .map(|(keyword, paths)| (keyword.as_str(), paths.as_slice()))
    }

    /// Keywords recorded for a given file
    pub fn keywords_for(&self, path: &Path) -> Vec<&str> {
        self.iter()
            .filter(|(_, paths)| paths.iter().any(|p| p == path))
            .map(|(keyword, _)| keyword)
            .collect()
    }

    /// Order-insensitive view of the index
    pub fn to_sets(&self) -> BTreeMap<String, BTreeSet<PathBuf>> {
        self.entries
            .iter()
            .map(|(keyword, paths)| (keyword.clone(), paths.iter().cloned().collect()))
            .collect()
    }

    /// True when both indexes hold the same files per keyword, ignoring order
    pub fn same_contents(&self, other: &KeywordIndex) -> bool {
        self.to_sets() == other.to_sets()
    }

    /// Renders the index as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for KeywordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (keyword, paths)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: [", keyword)?;
            for (j, path) in paths.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", path.display().to_string())?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
