pub mod config;
pub mod errors;
pub mod index;
pub mod metrics;
pub mod scan;

pub use config::ScanConfig;
pub use errors::{ScanError, ScanResult};
pub use index::{KeywordIndex, PartialResult};
pub use metrics::{ScanMetrics, ScanStats};
pub use scan::{
    run_timed, IsolatedStateScanner, KeywordScanner, ScanStrategy, SharedStateScanner, TimedRun,
};

/// Runs one strategy over the files and keywords in `config`, timing the scan
pub fn scan(strategy: ScanStrategy, config: &ScanConfig) -> TimedRun {
    let scanner = strategy.scanner();
    run_timed(scanner.as_ref(), &config.files, &config.keywords)
}
