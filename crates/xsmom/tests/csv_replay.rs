//! Daily loop driven from a CSV file.
#![allow(missing_docs)]

use std::{fs, path::PathBuf};

use polars::prelude::*;
use xsmom::{
    rebalance::prelude::*,
    utils::{FeedColumns, FrameFeed, records_frame},
};

const SCORES: &str = "\
date,symbol,score,tradable
2013-10-28,AAPL,0.12,true
2013-10-28,MSFT,0.09,true
2013-10-28,CSCO,0.07,true
2013-10-28,INTC,0.01,true
2013-10-28,IBM,-0.03,true
2013-10-28,HPQ,-0.05,true
2013-10-28,DELL,-0.11,true
2013-10-29,AAPL,0.10,true
2013-10-29,MSFT,0.08,true
2013-10-29,CSCO,0.02,true
2013-10-29,INTC,0.04,true
2013-10-29,IBM,-0.02,true
2013-10-29,HPQ,-0.06,true
2013-10-29,DELL,0.03,false
";

fn read_scores(name: &str) -> DataFrame {
    let path: PathBuf =
        std::env::temp_dir().join(format!("xsmom-{}-{name}.csv", std::process::id()));
    fs::write(&path, SCORES).unwrap();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.clone()))
        .unwrap()
        .finish()
        .unwrap();
    fs::remove_file(&path).unwrap();
    df
}

#[test]
fn replays_csv_days_in_order() {
    let df = read_scores("order");
    let feed = FrameFeed::from_frame(&df, &FeedColumns::default()).unwrap();
    assert_eq!(feed.len(), 2);

    let rebalancer = Rebalancer::new();
    let mut book = PaperBook::new();
    let mut records: Vec<RebalanceRecord> = Vec::new();

    for date in feed.dates() {
        let tradable = feed.tradable(date);
        rebalancer.run(date, &feed, &tradable, &mut book, &mut records).unwrap();
    }

    assert_eq!(records.len(), 2);
    assert!(records[0].date < records[1].date);
    assert!(records[0].skipped.is_empty());
    // DELL moved to the median while halted.
    assert_eq!(records[1].skipped, vec![Asset::new("DELL")]);
    assert!(book.portfolio().is_held(&Asset::new("DELL")));
    assert!(book.portfolio().is_held(&Asset::new("INTC")));
    // CSCO rotated from the long leg into the short leg.
    assert!(book.portfolio().position(&Asset::new("CSCO")).is_some_and(|w| w < 0.0));

    let frame = records_frame(&records).unwrap();
    assert_eq!(frame.height(), 2);
    let skipped = frame.column("skipped").unwrap().str().unwrap();
    assert_eq!(skipped.get(1), Some("DELL"));
}

#[test]
fn screening_keeps_halted_names_out_of_the_legs() {
    let df = read_scores("screen");
    let feed = FrameFeed::from_frame(&df, &FeedColumns::default()).unwrap();
    let day = feed.dates().last().unwrap();

    let config = RebalanceConfig { screen_untradable: true, ..RebalanceConfig::default() };
    let rebalancer = Rebalancer::with_config(config).unwrap();
    let scores = feed.scores(day).unwrap();
    let plan = rebalancer.plan(&scores, &PortfolioState::new(), &feed.tradable(day)).unwrap();

    assert!(!plan.selection.contains(&Asset::new("DELL")));
    assert_eq!(plan.record.universe_size, 7);
}
