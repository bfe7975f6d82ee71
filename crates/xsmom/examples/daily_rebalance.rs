//! Example: three days of momentum rebalancing on a small tech universe.
//!
//! DELL is shorted on the first day and rallies into the middle of the ranking on the
//! second while halted, so its close is skipped. It is flattened on the third day once
//! it trades again.
//!
//! Run with: `cargo run --example daily_rebalance --features full`

use polars::prelude::*;
use xsmom::{
    rebalance::prelude::*,
    utils::{FeedColumns, FrameFeed, records_frame},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    let df = df! {
        "date" => [
            "2013-10-28", "2013-10-28", "2013-10-28", "2013-10-28", "2013-10-28", "2013-10-28", "2013-10-28",
            "2013-10-29", "2013-10-29", "2013-10-29", "2013-10-29", "2013-10-29", "2013-10-29", "2013-10-29",
            "2013-10-30", "2013-10-30", "2013-10-30", "2013-10-30", "2013-10-30", "2013-10-30", "2013-10-30",
        ],
        "symbol" => [
            "AAPL", "MSFT", "CSCO", "INTC", "IBM", "HPQ", "DELL",
            "AAPL", "MSFT", "CSCO", "INTC", "IBM", "HPQ", "DELL",
            "AAPL", "MSFT", "CSCO", "INTC", "IBM", "HPQ", "DELL",
        ],
        "score" => [
            0.12, 0.09, 0.07, 0.01, -0.03, -0.05, -0.11,
            0.10, 0.08, 0.02, 0.04, -0.02, -0.06, 0.03,
            0.11, 0.06, 0.01, 0.05, -0.04, -0.01, 0.02,
        ],
        "tradable" => [
            true, true, true, true, true, true, true,
            true, true, true, true, true, true, false,
            true, true, true, true, true, true, true,
        ],
    }?;

    let feed = FrameFeed::from_frame(&df, &FeedColumns::default())?;
    let rebalancer = Rebalancer::new();
    let mut book = PaperBook::new();
    let mut records: Vec<RebalanceRecord> = Vec::new();

    for date in feed.dates() {
        let tradable = feed.tradable(date);
        let record = rebalancer.run(date, &feed, &tradable, &mut book, &mut records)?;
        println!(
            "{date}: {} long / {} short, pre-trade leverage {:.2}, skipped {:?}",
            record.longs,
            record.shorts,
            record.leverage,
            record.skipped.iter().map(Asset::as_str).collect::<Vec<_>>()
        );
    }

    println!("\nFinal positions:");
    for (asset, weight) in book.portfolio().positions() {
        println!("  {:<6} {weight:+.4}", asset.as_str());
    }

    println!("\n{}", records_frame(&records)?);

    Ok(())
}
