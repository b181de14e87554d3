//! Contact relevance and scheduling engine for the community mapper.
//!
//! Every operation here is a pure function of its arguments: a person
//! snapshot, an `as_of` date, and an [`EngineConfig`]. There is no I/O, no
//! clock, and no shared mutable state, so any number of dashboard renders
//! can call in parallel without coordination.
//!
//! # Modules
//!
//! - [`agenda`] -- Overdue/due-soon classification, birthdays, and the agenda
//! - [`config`] -- YAML configuration ([`EngineConfig`])
//! - [`dashboard`] -- One-call dashboard report composition
//! - [`dates`] -- Age, day deltas, age brackets, and date parsing
//! - [`error`] -- [`ClassificationError`]
//! - [`frequency`] -- Contact-frequency clock and schedule projection
//! - [`normalize`] -- Raw record defaulting at the engine boundary
//! - [`relevance`] -- Weighted relevance score and stable ranking
//! - [`segment`] -- Segment penetration and rating averages

pub mod agenda;
pub mod config;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod frequency;
pub mod normalize;
pub mod relevance;
pub mod segment;

// Re-export primary types and entry points at crate root for convenience.
pub use agenda::{classify, next_birthday, project};
pub use config::{ConfigError, EngineConfig};
pub use dashboard::{build_dashboard, dashboard_for};
pub use dates::{age_in_years, days_between};
pub use error::ClassificationError;
pub use frequency::{missed_last_cycle, next_due_date, project_schedule, schedule_for};
pub use normalize::{normalize, normalize_all};
pub use relevance::{rank_by_relevance, relevance, relevance_of, score_all, score_person};
pub use segment::{EngagementCriteria, aggregate, aggregate_by};
