use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

use super::KeywordScanner;
use crate::index::KeywordIndex;

/// Outcome of a timed scan
#[derive(Debug, Clone)]
pub struct TimedRun {
    pub name: &'static str,
    pub index: KeywordIndex,
    pub elapsed: Duration,
}

impl TimedRun {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// One-line report, e.g. `Shared-state approach took 0.0012 seconds`
    pub fn summary(&self) -> String {
        format!("{} approach took {:.4} seconds", self.name, self.seconds())
    }
}

/// Runs `scanner` and measures only the wall-clock time of the scan call
pub fn run_timed(
    scanner: &dyn KeywordScanner,
    files: &[PathBuf],
    keywords: &[String],
) -> TimedRun {
    let start = Instant::now();
    let index = scanner.scan(files, keywords);
    let elapsed = start.elapsed();

    info!(
        "{} scan finished in {}: {} keywords matched",
        scanner.name(),
        humantime::format_duration(elapsed),
        index.len()
    );

    TimedRun {
        name: scanner.name(),
        index,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::SharedStateScanner;

    #[test]
    fn test_summary_format() {
        let run = TimedRun {
            name: "Shared-state",
            index: KeywordIndex::new(),
            elapsed: Duration::from_millis(1234),
        };
        assert_eq!(run.summary(), "Shared-state approach took 1.2340 seconds");
    }

    #[test]
    fn test_empty_file_list_is_near_instant() {
        let run = run_timed(&SharedStateScanner::new(), &[], &["cost".to_string()]);
        assert!(run.index.is_empty());
        assert!(run.elapsed < Duration::from_secs(1));
        assert_eq!(run.name, "Shared-state");
    }
}
