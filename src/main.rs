//! bytescan - streaming word checksums and substring search

mod cli;

use anyhow::Context;
use bytescan::{Pattern, ScanConfig, Scanner};
use clap::Parser;
use cli::{Cli, Mode};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = ScanConfig::new(cli.block_size as usize)?;

    match cli.mode {
        Mode::Checksum => run_checksum(&cli, config),
        Mode::Find => run_find(&cli, config),
    }
}

fn run_checksum(cli: &Cli, config: ScanConfig) -> anyhow::Result<()> {
    let mut scanner = Scanner::open(&cli.file, config)
        .with_context(|| format!("cannot scan {}", cli.file.display()))?;

    let bar = make_progress_bar(cli.progress);
    let mut sink = |percent: u8| bar.set_position(u64::from(percent));

    let total = scanner.checksum_with_progress(&mut sink)?;
    bar.finish_and_clear();

    println!("Checksum = {}", total);
    Ok(())
}

fn run_find(cli: &Cli, config: ScanConfig) -> anyhow::Result<()> {
    // Validate the pattern before touching the file.
    let pattern = Pattern::new(cli.search.clone().unwrap_or_default())?;

    let mut scanner = Scanner::open(&cli.file, config)
        .with_context(|| format!("cannot scan {}", cli.file.display()))?;

    let bar = make_progress_bar(cli.progress);
    let mut sink = |percent: u8| bar.set_position(u64::from(percent));

    let occurrences = scanner.find_with_progress(&pattern, &mut sink)?;
    bar.finish_and_clear();

    if occurrences.is_empty() {
        println!("no occurrences");
    } else {
        let offsets: Vec<String> = occurrences.iter().map(u64::to_string).collect();
        println!("{}", offsets.join(" "));
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("bytescan=warn"),
        1 => EnvFilter::new("bytescan=info"),
        2 => EnvFilter::new("bytescan=debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn make_progress_bar(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}%")
            .unwrap()
            .progress_chars("=>-"),
    );
    bar
}
