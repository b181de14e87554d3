//! Error types for the mapper-engine crate.
//!
//! The engine defaults rather than fails. The only condition surfaced to the
//! caller is a categorical value outside its known set, so bad data shows up
//! in reports instead of being scored at a misleading default weight.

/// A categorical field held a value the engine does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    /// The proximity tier label is not one of the known tiers.
    #[error("unknown proximity tier: {label:?}")]
    UnknownProximityTier {
        /// The label as it appeared on the record.
        label: String,
    },
}
