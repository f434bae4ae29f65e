use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordscout::{scan, ScanConfig, ScanStrategy};

/// Scans a fixed set of files for a fixed set of keywords, once with
/// shared-state workers and once with isolated workers, and reports how long
/// each took.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let config = ScanConfig::default();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    for (i, strategy) in ScanStrategy::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        info!("Running {} scan", strategy);
        let run = scan(strategy, &config);

        println!("{}", format!("{} version:", run.name).bright_blue().bold());
        println!("{}", run.summary());
        println!("{}", run.index.to_json()?);
    }

    Ok(())
}
