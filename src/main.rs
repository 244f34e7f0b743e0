use std::io::{stderr, stdout};
use std::process::exit;

use anyhow::{Context, Result};
use bank2ofx::{Config, StatementBuilder, convert};
use chrono::Utc;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: bank2ofx [input].csv > [output].ofx");
        exit(1);
    }

    setup_logging(LevelFilter::INFO);

    // Checked before the input is touched.
    let config = Config::from_build_env()
        .context("rebuild with BANK2OFX_BANK_ID and BANK2OFX_ACCOUNT_ID set")?;

    let path = &args[1];
    let builder = StatementBuilder::new().filename(path);

    let mut output = stdout().lock();
    let statement = convert(&config, builder, Utc::now().date_naive(), &mut output)
        .with_context(|| format!("failed to convert {path}"))?;

    info!(
        transactions = statement.transactions.len(),
        "wrote OFX statement"
    );

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    // stdout carries the document, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
