//! # scanloc
//!
//! A CLI tool for quick codebase size inspection.
//!
//! ## Overview
//!
//! scanloc is built on top of scanloclib. It walks a directory (`inside` by
//! default), skips the directory names listed in `.filter`, prints the line
//! and character count of every `.py`, `.cs`, `.cpp`, `.js`, `.ts` and `.lua`
//! file, then the totals, and offers to save a markdown report.
//!
//! ## Usage
//!
//! ```bash
//! # Scan ./inside using ./.filter, ask before writing ./report.md
//! scanloc
//!
//! # Scan another directory and write the report without asking
//! scanloc src --yes --report sizes.md
//!
//! # Never write a report
//! scanloc --no-report
//! ```
//!
//! The process exits with status 0 whether or not files were found, files
//! failed to read, or the report could not be written.

mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use scanloclib::{
    run, RunOutcome, ScanOptions, DEFAULT_FILTER_FILE, DEFAULT_REPORT_PATH, DEFAULT_ROOT,
};
use tracing_subscriber::EnvFilter;

use crate::render::{TerminalConfirm, TerminalSink};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("scanloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count lines and characters of source files, with an optional markdown report")
        .arg(
            Arg::new("root")
                .help("Directory to scan")
                .default_value(DEFAULT_ROOT),
        )
        .arg(
            Arg::new("filter-file")
                .long("filter-file")
                .value_name("FILE")
                .default_value(DEFAULT_FILTER_FILE)
                .help("File listing directory names to skip, one per line"),
        )
        .arg(
            Arg::new("report")
                .short('o')
                .long("report")
                .value_name("FILE")
                .default_value(DEFAULT_REPORT_PATH)
                .help("Where to write the markdown report"),
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .action(ArgAction::SetTrue)
                .conflicts_with("no-report")
                .help("Write the report without asking"),
        )
        .arg(
            Arg::new("no-report")
                .short('n')
                .long("no-report")
                .action(ArgAction::SetTrue)
                .help("Do not write the report and do not ask"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored output"),
        )
}

/// Build scan options from matches
fn build_options(matches: &ArgMatches) -> ScanOptions {
    let mut options = ScanOptions::new();

    if let Some(root) = matches.get_one::<String>("root") {
        options = options.root(root);
    }
    if let Some(filter_file) = matches.get_one::<String>("filter-file") {
        options = options.filter_file(filter_file);
    }
    if let Some(report) = matches.get_one::<String>("report") {
        options = options.report_path(report);
    }

    if matches.get_flag("yes") {
        options = options.assume(true);
    } else if matches.get_flag("no-report") {
        options = options.assume(false);
    }

    options
}

/// Install the stderr log subscriber (`RUST_LOG`, default `warn`)
fn init_logging() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    if let Err(err) = init_logging() {
        eprintln!("Warning: logging disabled: {}", err);
    }

    if matches.get_flag("no-color") {
        console::set_colors_enabled(false);
    }

    let options = build_options(&matches);
    tracing::debug!(?options, "starting scan");

    let mut sink = TerminalSink::new();
    let mut confirm = TerminalConfirm::new();

    match run(&options, &mut sink, &mut confirm) {
        RunOutcome::NoFiles => tracing::debug!("nothing to count"),
        RunOutcome::Completed { totals, report, .. } => {
            tracing::debug!(?totals, ?report, "scan finished");
        }
    }

    ExitCode::SUCCESS
}
