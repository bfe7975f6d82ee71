//! Replay a CSV of daily scores through the rebalancer.
//!
//! Reads a long-format CSV with `date`, `symbol` and `score` columns (plus an optional
//! boolean `tradable` column), rebalances a paper book on every date and prints one row
//! per day.
//!
//! Usage: `cargo run --bin replay --features cli -- SCORES.csv [OPTIONS]`
//! Example: `cargo run --bin replay --features cli -- scores.csv --top-k 5 --screen`

use std::{env, fs::File, path::PathBuf};

use polars::prelude::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use xsmom::{
    rebalance::prelude::*,
    utils::{FeedColumns, FrameFeed, records_frame},
};

const USAGE: &str = "Usage: replay SCORES.csv [--top-k N] [--leverage X] [--screen] \
                     [--config FILE.json] [--out RECORDS.csv]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1].starts_with("--") {
        eprintln!("{USAGE}");
        eprintln!("Example: replay scores.csv --top-k 5 --leverage 1.5");
        std::process::exit(1);
    }

    let config = parse_config(&args)?;
    let rebalancer = Rebalancer::with_config(config)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(PathBuf::from(&args[1])))?
        .finish()?;
    let feed = FrameFeed::from_frame(&df, &FeedColumns::default())?;

    println!(
        "\nReplaying {} day(s) from {} (top {} per leg, {:.2}x gross, weight {:.4})\n",
        feed.len(),
        args[1],
        rebalancer.config().top_k,
        rebalancer.config().gross_leverage,
        rebalancer.leg_weight()
    );

    let mut book = PaperBook::new();
    let mut records: Vec<RebalanceRecord> = Vec::with_capacity(feed.len());

    for date in feed.dates() {
        let tradable = feed.tradable(date);
        match rebalancer.run(date, &feed, &tradable, &mut book, &mut records) {
            Ok(_) => {}
            Err(e) if e.is_recoverable() => {
                warn!(date = %date, error = %e, "rebalance rejected, keeping previous book");
            }
            Err(e) => return Err(e.into()),
        }
    }

    print_summary(&records, &book);

    if let Some(path) = flag_value(&args, "--out") {
        let mut frame = records_frame(&records)?;
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut frame)?;
        println!("\nWrote {} record(s) to {path}", frame.height());
    }

    Ok(())
}

/// Start from `--config` (or the defaults) and apply the individual flags on top.
fn parse_config(args: &[String]) -> Result<RebalanceConfig, Box<dyn std::error::Error>> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => RebalanceConfig::default(),
    };

    if let Some(k) = flag_value(args, "--top-k") {
        config.top_k = k.parse().map_err(|e| format!("invalid --top-k {k:?}: {e}"))?;
    }
    if let Some(x) = flag_value(args, "--leverage") {
        config.gross_leverage = x.parse().map_err(|e| format!("invalid --leverage {x:?}: {e}"))?;
    }
    if args.iter().any(|a| a == "--screen") {
        config.screen_untradable = true;
    }

    Ok(config)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn print_summary(records: &[RebalanceRecord], book: &PaperBook) {
    println!(
        "{:<12} {:>9} {:>6} {:>7} {:>9}  {}",
        "Date", "Universe", "Longs", "Shorts", "Leverage", "Skipped"
    );
    println!("{}", "-".repeat(60));

    for record in records {
        let skipped: Vec<&str> = record.skipped.iter().map(Asset::as_str).collect();
        println!(
            "{:<12} {:>9} {:>6} {:>7} {:>9.4}  {}",
            record.date.to_string(),
            record.universe_size,
            record.longs,
            record.shorts,
            record.leverage,
            skipped.join(",")
        );
    }

    let stuck: usize = records.iter().map(RebalanceRecord::skipped_closes).sum();
    println!("{}", "-".repeat(60));
    println!(
        "Final book: {} position(s), {:.4}x gross; {} skipped close(s) over {} day(s)",
        book.portfolio().len(),
        book.portfolio().leverage(),
        stuck,
        records.len()
    );

    for (asset, weight) in book.portfolio().positions() {
        println!("  {:<10} {weight:>+9.4}", asset.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(flags: &[&str]) -> Vec<String> {
        ["replay", "scores.csv"].iter().chain(flags).map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(parse_config(&args(&[])).unwrap(), RebalanceConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse_config(&args(&["--top-k", "5", "--leverage", "1.5", "--screen"])).unwrap();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.gross_leverage, 1.5);
        assert!(config.screen_untradable);
    }

    #[test]
    fn flags_take_precedence_over_config_file() {
        let path = std::env::temp_dir().join(format!("xsmom-replay-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"top_k": 10, "gross_leverage": 1.0}"#).unwrap();
        let file = path.to_string_lossy().into_owned();

        let config = parse_config(&args(&["--config", &file, "--top-k", "4"])).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.top_k, 4);
        assert_eq!(config.gross_leverage, 1.0);
        assert!(!config.screen_untradable);
    }

    #[test]
    fn bad_flag_value_is_an_error() {
        let err = parse_config(&args(&["--top-k", "three"])).unwrap_err();
        assert!(err.to_string().contains("--top-k"));
    }
}
