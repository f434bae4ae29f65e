use crossbeam_channel::{unbounded, Sender};
use std::path::PathBuf;
use std::thread;
use tracing::{debug, error, info};

use super::reader::{matching_keywords, read_text, unique_keywords};
use super::KeywordScanner;
use crate::errors::ScanError;
use crate::index::{KeywordIndex, PartialResult};
use crate::metrics::ScanMetrics;

/// What a worker hands back to the collector once its file is done
#[derive(Debug)]
struct WorkerMessage {
    path: PathBuf,
    bytes_read: u64,
    partial: PartialResult,
}

/// Scans every file on its own OS thread with no shared state.
///
/// Each worker owns a copy of its path and of the keyword list, builds a
/// private [`PartialResult`] and sends it over an unbounded channel. The
/// collector joins every worker before it drains the channel, so no message
/// can arrive after the drain starts. Metrics are only touched by the
/// collector.
#[derive(Debug, Clone, Default)]
pub struct IsolatedStateScanner {
    metrics: ScanMetrics,
}

impl IsolatedStateScanner {
    pub fn new() -> Self {
        Default::default()
    }
}

impl KeywordScanner for IsolatedStateScanner {
    fn name(&self) -> &'static str {
        "Isolated-state"
    }

    fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    fn scan(&self, files: &[PathBuf], keywords: &[String]) -> KeywordIndex {
        info!(
            "Isolated-state scan of {} files for {} keywords",
            files.len(),
            keywords.len()
        );

        if keywords.is_empty() {
            debug!("No keywords provided, returning empty result");
            return KeywordIndex::new();
        }

        let keywords = unique_keywords(keywords);
        // Unbounded: every worker can deliver before anyone reads.
        let (sender, receiver) = unbounded::<WorkerMessage>();

        let mut workers = Vec::with_capacity(files.len());
        for (id, path) in files.iter().enumerate() {
            let worker_path = path.clone();
            let worker_keywords = keywords.clone();
            let worker_sender = sender.clone();

            let spawned = thread::Builder::new()
                .name(format!("wordscout-worker-{}", id))
                .spawn(move || run_worker(worker_path, worker_keywords, worker_sender));

            match spawned {
                Ok(handle) => workers.push((path, handle)),
                Err(e) => {
                    error!("Error processing file {}: {}", path.display(), e);
                    self.metrics.record_file_failed();
                }
            }
        }
        drop(sender);

        let dispatched = workers.len();
        for (path, handle) in workers {
            if handle.join().is_err() {
                error!("{}", ScanError::worker_panicked(path));
            }
        }

        // All workers are joined, so try_iter sees every message that was sent.
        let mut index = KeywordIndex::new();
        let mut received = 0;
        for message in receiver.try_iter() {
            received += 1;
            self.metrics.record_file_scanned(message.bytes_read);
            self.metrics
                .record_matches(message.partial.total_entries() as u64);
            debug!(
                "Collected {} keyword(s) from {}",
                message.partial.len(),
                message.path.display()
            );
            index.merge(message.partial);
        }

        // Workers that failed to read their file send nothing.
        for _ in received..dispatched {
            self.metrics.record_file_failed();
        }

        self.metrics.log_stats();
        index
    }
}

/// Body of one worker thread. Sends nothing when the file cannot be read.
fn run_worker(path: PathBuf, keywords: Vec<String>, sender: Sender<WorkerMessage>) {
    let content = match read_text(&path) {
        Ok(content) => content,
        Err(e) => {
            error!("Error processing file {}: {}", path.display(), e);
            return;
        }
    };

    let mut partial = PartialResult::new();
    for keyword in matching_keywords(&content, &keywords) {
        partial.record(keyword, &path);
    }

    let message = WorkerMessage {
        bytes_read: content.len() as u64,
        partial,
        path,
    };
    if sender.send(message).is_err() {
        error!("Collector hung up before a partial result could be delivered");
    }
}
