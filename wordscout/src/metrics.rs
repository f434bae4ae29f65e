use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Tracks counters for a scanner, accumulated across every `scan` call on it.
///
/// Call [`ScanMetrics::reset`] between runs to measure a single scan.
///
/// Failed files leave no trace in a [`KeywordIndex`](crate::index::KeywordIndex);
/// these counters are the place where they become visible.
#[derive(Debug, Clone)]
pub struct ScanMetrics {
    files_scanned: Arc<AtomicU64>,
    files_failed: Arc<AtomicU64>,
    bytes_read: Arc<AtomicU64>,
    matches_recorded: Arc<AtomicU64>,
}

impl ScanMetrics {
    /// Creates a new ScanMetrics instance
    pub fn new() -> Self {
        Self {
            files_scanned: Arc::new(AtomicU64::new(0)),
            files_failed: Arc::new(AtomicU64::new(0)),
            bytes_read: Arc::new(AtomicU64::new(0)),
            matches_recorded: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records a file that was read and scanned
    pub fn record_file_scanned(&self, bytes: u64) {
        self.files_scanned.fetch_add(1, Ordering::Relaxed);
        let total = self.bytes_read.fetch_add(bytes, Ordering::Relaxed) + bytes;
        debug!("Scanned {} bytes, total read: {} bytes", bytes, total);
    }

    /// Records a file that could not be read
    pub fn record_file_failed(&self) {
        self.files_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records keyword hits added to the index
    pub fn record_matches(&self, count: u64) {
        self.matches_recorded.fetch_add(count, Ordering::Relaxed);
    }

    /// Zeroes all counters before a new run
    pub fn reset(&self) {
        self.files_scanned.store(0, Ordering::Relaxed);
        self.files_failed.store(0, Ordering::Relaxed);
        self.bytes_read.store(0, Ordering::Relaxed);
        self.matches_recorded.store(0, Ordering::Relaxed);
    }

    /// Gets current statistics
    pub fn get_stats(&self) -> ScanStats {
        ScanStats {
            files_scanned: self.files_scanned.load(Ordering::Relaxed),
            files_failed: self.files_failed.load(Ordering::Relaxed),
            bytes_read: self.bytes_read.load(Ordering::Relaxed),
            matches_recorded: self.matches_recorded.load(Ordering::Relaxed),
        }
    }

    /// Logs current statistics
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Scan stats:\n\
             Files scanned/failed: {}/{}\n\
             Bytes read: {}\n\
             Matches recorded: {}",
            stats.files_scanned, stats.files_failed, stats.bytes_read, stats.matches_recorded
        );
    }
}

impl Default for ScanMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of scan counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: u64,
    pub files_failed: u64,
    pub bytes_read: u64,
    pub matches_recorded: u64,
}
