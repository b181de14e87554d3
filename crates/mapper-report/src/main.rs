//! Dashboard report binary for the community mapper.
//!
//! Reads a JSON snapshot of person records exported by the surrounding
//! application, runs the relevance and scheduling engine over it, and prints
//! the dashboard report as pretty JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! mapper-report <people.json> [as-of YYYY-MM-DD] [--config mapper-config.yaml]
//! ```
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing, `RUST_LOG`, default `info`)
//! 2. Parse arguments
//! 3. Load configuration from `--config` (default `mapper-config.yaml`), or
//!    use defaults when the file does not exist
//! 4. Load the person snapshot
//! 5. Build and print the report

mod args;
mod error;

use std::path::Path;

use clap::Parser;
use mapper_engine::{EngineConfig, build_dashboard};
use mapper_types::PersonRecord;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::ReportArgs;
use crate::error::ReportError;

/// Application entry point for the report binary.
///
/// # Errors
///
/// Returns an error if the configuration or snapshot are invalid. Argument
/// errors are reported by clap, which exits with a usage message.
fn main() -> Result<(), ReportError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // 2. Parse arguments.
    let args = ReportArgs::parse();

    // 3. Load configuration.
    let config = load_config(&args.config)?;
    info!(
        default_tier = %config.scoring.default_tier,
        lookahead_days = config.agenda.lookahead_days,
        top_contacts = config.dashboard.top_contacts,
        "Configuration loaded"
    );

    // 4. Load the snapshot.
    let records = load_records(&args.people_path)?;
    let as_of = args
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    info!(records = records.len(), %as_of, "Person snapshot loaded");

    // 5. Build and print.
    let report = build_dashboard(&records, as_of, &config);
    info!(
        total_people = report.total_people,
        issues = report.issues.len(),
        agenda = report.projection.agenda.len(),
        "Dashboard report built"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Load the engine configuration, falling back to defaults when the file
/// does not exist.
fn load_config(path: &Path) -> Result<EngineConfig, ReportError> {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Ok(EngineConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(EngineConfig::parse(&contents)?)
}

/// Read a JSON array of person records.
fn load_records(path: &Path) -> Result<Vec<PersonRecord>, ReportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReportError::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/mapper-config.yaml"));
        assert_eq!(config.ok(), Some(EngineConfig::default()));
    }

    #[test]
    fn project_config_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../mapper-config.yaml");
        let config = load_config(&path);
        assert_eq!(config.ok(), Some(EngineConfig::default()));
    }

    #[test]
    fn directory_is_a_read_error() {
        let config = load_config(Path::new(env!("CARGO_MANIFEST_DIR")));
        assert!(matches!(config, Err(ReportError::ConfigRead { .. })));
    }

    #[test]
    fn missing_snapshot_is_reported_with_its_path() {
        let path = Path::new("/nonexistent/people.json");
        let records = load_records(path);
        assert!(
            matches!(records, Err(ReportError::Snapshot { path: ref p, .. }) if p == path)
        );
    }
}
