//! Concurrent keyword scanning, in two flavours.
//!
//! Both scanners take a list of files and a list of keywords and return a
//! [`KeywordIndex`]. They differ only in how the units of work talk to each
//! other:
//!
//! 1. **Shared state** ([`SharedStateScanner`])
//!    Every file gets a rayon task. Tasks borrow one `Mutex<KeywordIndex>` and
//!    lock it for each append:
//!    ```rust,ignore
//!    rayon::scope(|s| {
//!        for path in files {
//!            s.spawn(|_| {
//!                let content = read_text(path)?;
//!                for keyword in matching_keywords(&content, keywords) {
//!                    shared.lock().record(keyword, path);
//!                }
//!            });
//!        }
//!    });
//!    ```
//!
//! 2. **Isolated state** ([`IsolatedStateScanner`])
//!    Every file gets an OS thread that owns its inputs outright and reports
//!    through a channel. Nothing is locked on the worker side:
//!    ```rust,ignore
//!    let (tx, rx) = crossbeam_channel::unbounded();
//!    for path in files {
//!        let tx = tx.clone();
//!        thread::spawn(move || tx.send(scan_private(path, keywords)));
//!    }
//!    // join everything, then drain
//!    for partial in rx.try_iter() { index.merge(partial) }
//!    ```
//!
//! # Error Handling
//!
//! A file that cannot be read is logged and skipped by the unit of work that
//! owns it. `scan` itself never fails: the caller always gets an index built
//! from the files that could be read.

pub mod isolated;
pub mod reader;
pub mod shared;
pub mod timing;

use std::fmt;
use std::path::PathBuf;

use crate::index::KeywordIndex;
use crate::metrics::ScanMetrics;

pub use isolated::IsolatedStateScanner;
pub use shared::SharedStateScanner;
pub use timing::{run_timed, TimedRun};

/// Common contract of every scanner
pub trait KeywordScanner: Send + Sync {
    /// Human readable name used in reports
    fn name(&self) -> &'static str;

    /// Scans every file for every keyword and blocks until all units finish
    fn scan(&self, files: &[PathBuf], keywords: &[String]) -> KeywordIndex;

    /// Counters accumulated across the runs of this scanner
    fn metrics(&self) -> &ScanMetrics;
}

/// The available concurrency models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStrategy {
    SharedState,
    IsolatedState,
}

impl ScanStrategy {
    /// Every strategy, in the order the driver runs them
    pub const ALL: [ScanStrategy; 2] = [ScanStrategy::SharedState, ScanStrategy::IsolatedState];

    /// Builds a fresh scanner for this strategy
    pub fn scanner(self) -> Box<dyn KeywordScanner> {
        match self {
            ScanStrategy::SharedState => Box::new(SharedStateScanner::new()),
            ScanStrategy::IsolatedState => Box::new(IsolatedStateScanner::new()),
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStrategy::SharedState => write!(f, "shared-state"),
            ScanStrategy::IsolatedState => write!(f, "isolated-state"),
        }
    }
}
