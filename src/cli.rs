//! Command-line interface for cinetui

use clap::Parser;
use std::path::PathBuf;

/// cinetui - a terminal movie catalog with a ratings/revenue chart
#[derive(Parser, Debug)]
#[command(name = "cinetui")]
#[command(about = "Maintain a small movie catalog and chart ratings against box office")]
#[command(version)]
pub struct Cli {
    /// Path to the CSV file backing the catalog.
    ///
    /// Created and seeded with five well-known movies on first run.
    #[arg(long, default_value = "movies_data.csv")]
    pub data_file: PathBuf,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
