//! Configuration loading and typed config structures for the engine.
//!
//! Hosts keep their tunables in `mapper-config.yaml`. Every section and
//! field is optional; anything left out takes the default documented on the
//! field. The engine never reads the file itself: callers read it, hand the
//! text to [`EngineConfig::parse`] once, and pass the result in.

use serde::Deserialize;

use mapper_types::ProximityTier;

use crate::segment::EngagementCriteria;

/// Errors that can occur when parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Defaults applied while normalizing records.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Who counts as engaged for penetration.
    #[serde(default)]
    pub engagement: EngagementCriteria,

    /// Agenda lookahead.
    #[serde(default)]
    pub agenda: AgendaConfig,

    /// Dashboard composition.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl EngineConfig {
    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Normalization defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoringConfig {
    /// Tier assumed for records without one (default: `regular`).
    #[serde(default = "default_tier")]
    pub default_tier: ProximityTier,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_tier: default_tier(),
        }
    }
}

/// Agenda settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgendaConfig {
    /// Days ahead of `as_of` that count as "due soon" (default: 30).
    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            lookahead_days: default_lookahead_days(),
        }
    }
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    /// Length of the relevance ranking (default: 10).
    #[serde(default = "default_top_contacts")]
    pub top_contacts: usize,

    /// An engaged person contacted within this many days counts as
    /// mobilized (default: 30).
    #[serde(default = "default_mobilization_window_days")]
    pub mobilization_window_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_contacts: default_top_contacts(),
            mobilization_window_days: default_mobilization_window_days(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (required by serde's `default = "..."` attribute)
// ---------------------------------------------------------------------------

const fn default_tier() -> ProximityTier {
    ProximityTier::Regular
}

const fn default_lookahead_days() -> u32 {
    30
}

const fn default_top_contacts() -> usize {
    10
}

const fn default_mobilization_window_days() -> u32 {
    30
}
