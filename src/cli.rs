//! CLI argument parsing for bytescan.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// bytescan - streaming word checksums and substring search
#[derive(Parser, Debug)]
#[command(name = "bytescan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File to scan
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Scan mode
    #[arg(short = 'm', long = "mode", value_enum, ignore_case = true)]
    pub mode: Mode,

    /// String to search for (required when mode is find)
    #[arg(short = 's', long = "search", required_if_eq("mode", "find"))]
    pub search: Option<String>,

    /// Block size in bytes (minimum 4)
    #[arg(
        long,
        default_value_t = bytescan::ScanConfig::default().block_size() as u64,
        value_parser = clap::value_parser!(u64).range(4..)
    )]
    pub block_size: u64,

    /// Show a progress bar
    #[arg(short = 'P', long)]
    pub progress: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The two scan modes.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Locate every occurrence of a literal substring
    Find,
    /// Sum the file's bytes as little-endian 32-bit words
    Checksum,
}
