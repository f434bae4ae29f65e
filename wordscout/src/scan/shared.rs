use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error, info};

use super::reader::{matching_keywords, read_text, unique_keywords};
use super::KeywordScanner;
use crate::index::KeywordIndex;
use crate::metrics::ScanMetrics;

/// Scans every file in its own rayon task, all writing into one locked index.
///
/// The mutex covers the whole index and is only taken to append a single
/// (keyword, file) entry. Reading and matching happen outside the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedStateScanner {
    metrics: ScanMetrics,
}

impl SharedStateScanner {
    pub fn new() -> Self {
        Default::default()
    }
}

impl KeywordScanner for SharedStateScanner {
    fn name(&self) -> &'static str {
        "Shared-state"
    }

    fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    fn scan(&self, files: &[PathBuf], keywords: &[String]) -> KeywordIndex {
        info!(
            "Shared-state scan of {} files for {} keywords",
            files.len(),
            keywords.len()
        );

        if keywords.is_empty() {
            debug!("No keywords provided, returning empty result");
            return KeywordIndex::new();
        }

        let keywords = unique_keywords(keywords);
        let shared = Mutex::new(KeywordIndex::new());

        // The scope only returns once every spawned task has finished.
        rayon::scope(|s| {
            for path in files {
                let keywords = &keywords;
                let shared = &shared;
                let metrics = &self.metrics;
                s.spawn(move |_| scan_file(path, keywords, shared, metrics));
            }
        });

        let index = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
        self.metrics.log_stats();
        index
    }
}

/// One unit of work: read `path`, then append each hit under the lock
fn scan_file(
    path: &Path,
    keywords: &[String],
    shared: &Mutex<KeywordIndex>,
    metrics: &ScanMetrics,
) {
    let content = match read_text(path) {
        Ok(content) => content,
        Err(e) => {
            error!("Error processing file {}: {}", path.display(), e);
            metrics.record_file_failed();
            return;
        }
    };
    metrics.record_file_scanned(content.len() as u64);

    let mut hits = 0;
    for keyword in matching_keywords(&content, keywords) {
        shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(keyword, path);
        hits += 1;
    }
    metrics.record_matches(hits);
    debug!("{}: {} keyword(s) matched", path.display(), hits);
}
