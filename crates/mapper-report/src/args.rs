//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Build a dashboard report from a person snapshot.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mapper-report")]
#[command(about = "Dashboard report for community mapper person snapshots")]
#[command(version)]
pub struct ReportArgs {
    /// JSON file holding an array of person records
    pub people_path: PathBuf,

    /// Reference date (YYYY-MM-DD); today when absent
    #[arg(value_parser = parse_as_of)]
    pub as_of: Option<NaiveDate>,

    /// Configuration file; defaults apply when it does not exist
    #[arg(short, long, default_value = "mapper-config.yaml", env = "MAPPER_CONFIG")]
    pub config: PathBuf,
}

fn parse_as_of(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
}
