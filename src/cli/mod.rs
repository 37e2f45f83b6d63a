//! Command line walkthrough over the built-in demo journal.

pub mod output;

use std::env;

use chrono::NaiveDate;

use crate::config::{Config, ConfigManager};
use crate::errors::TallyError;
use crate::journal::{sample_journal, DateMask, DateSpan, Transaction, TransactionKind};
use crate::query::{
    before_date, by_kind, by_merchant, descriptions, find_by_id, in_amount_range, in_date_span,
    total_amount_matching,
};
use crate::report::{format_amount, format_date, render_listing, render_summary, JournalSummary};

const USAGE: &str = "\
tally_core_cli - transaction journal walkthrough

Usage: tally_core_cli [OPTIONS]

Options:
  --json             Print the journal summary as JSON and exit
  --currency <CODE>  Set the report currency and persist it
  -h, --help         Show this help
  -V, --version      Show version and build metadata";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub json: bool,
    pub currency: Option<String>,
    pub version: bool,
    pub help: bool,
}

/// Parses command line options, rejecting anything unrecognised.
pub fn parse_args<I>(args: I) -> Result<CliOptions, TallyError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--currency" => {
                let code = args.next().ok_or_else(|| {
                    TallyError::Usage("--currency needs a code, e.g. --currency EUR".into())
                })?;
                options.currency = Some(code.to_uppercase());
            }
            "--version" | "-V" => options.version = true,
            "--help" | "-h" => options.help = true,
            unknown => {
                return Err(TallyError::Usage(format!(
                    "unknown option `{unknown}`, try --help"
                )))
            }
        }
    }
    Ok(options)
}

pub fn run_cli() -> Result<(), TallyError> {
    let options = parse_args(env::args().skip(1))?;
    run_with_options(options)
}

fn run_with_options(options: CliOptions) -> Result<(), TallyError> {
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }
    if options.version {
        print_version();
        return Ok(());
    }

    let manager = ConfigManager::new()?;
    let mut config = manager.load()?;
    if let Some(code) = &options.currency {
        config.currency = code.clone();
        manager.save(&config)?;
        output::success(format!("Report currency set to {code}"));
    }

    let journal = sample_journal();
    let summary = JournalSummary::from_journal(&journal);
    tracing::info!(transactions = journal.len(), "journal loaded");

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    output::section("Journal");
    println!("{}", render_listing(&journal, &config));

    output::section("Queries");
    print_walkthrough(&journal, &config);

    output::section("Summary");
    println!("{}", render_summary(&summary, &config));
    Ok(())
}

fn print_walkthrough(journal: &[Transaction], config: &Config) {
    let span = DateSpan::new(demo_date(2024, 1, 15), demo_date(2024, 2, 10));
    output::info(format!(
        "Between {} and {}: {} transaction(s)",
        format_date(span.start, config.date_style),
        format_date(span.end, config.date_style),
        in_date_span(journal, span).len()
    ));

    let february_total = total_amount_matching(journal, DateMask::in_month(2024, 2));
    output::info(format!(
        "Spent in February 2024: {}",
        format_amount(february_total, &config.currency)
    ));

    output::info(format!(
        "Debit transactions: {}",
        by_kind(journal, &TransactionKind::Debit).len()
    ));
    output::info(format!(
        "Purchases at SuperMarket: {}",
        by_merchant(journal, "SuperMarket").len()
    ));
    output::info(format!(
        "Amounts between 100 and 500: {}",
        in_amount_range(journal, 100.0, 500.0).len()
    ));

    let cutoff = demo_date(2024, 2, 10);
    output::info(format!(
        "Before {}: {} transaction(s)",
        format_date(cutoff, config.date_style),
        before_date(journal, cutoff).len()
    ));

    match find_by_id(journal, 2) {
        Some(transaction) => output::info(format!(
            "Transaction #2: {} at {}",
            transaction.description, transaction.merchant
        )),
        None => output::info("Transaction #2: not found"),
    }

    output::info(format!(
        "Descriptions: {}",
        descriptions(journal).join(", ")
    ));
}

fn print_version() {
    println!(
        "tally_core {} ({} {}, {} {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("TALLY_CORE_BUILD_HASH"),
        env!("TALLY_CORE_BUILD_STATUS"),
        env!("TALLY_CORE_BUILD_TARGET"),
        env!("TALLY_CORE_BUILD_PROFILE"),
        env!("TALLY_CORE_BUILD_TIMESTAMP"),
    );
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
