//! Enumeration types for the community mapper.
//!
//! Labels coming from the CRUD layer are free-form strings. Each enum here
//! owns the mapping from those labels to a closed set of variants; the
//! engine decides what an unknown label means (error or default).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lowercase a raw label and fold spaces and hyphens into underscores.
fn fold_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

// ---------------------------------------------------------------------------
// Proximity tier
// ---------------------------------------------------------------------------

/// How close a person sits to the mapper's owner, innermost first.
///
/// The derived ordering follows declaration order, so `Inner < Peripheral`
/// and sorted collections list the closest circle first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ProximityTier {
    /// Family, core team, and closest allies.
    Inner,
    /// Trusted friends and frequent collaborators.
    Close,
    /// People contacted on a regular basis.
    Regular,
    /// Known people with occasional contact.
    Acquaintance,
    /// Loose ties at the edge of the network.
    Peripheral,
}

impl ProximityTier {
    /// Every tier, innermost first.
    pub const ALL: [Self; 5] = [
        Self::Inner,
        Self::Close,
        Self::Regular,
        Self::Acquaintance,
        Self::Peripheral,
    ];

    /// Scoring weight: 5 for the innermost tier down to 1 for the outermost.
    pub const fn weight(self) -> u8 {
        match self {
            Self::Inner => 5,
            Self::Close => 4,
            Self::Regular => 3,
            Self::Acquaintance => 2,
            Self::Peripheral => 1,
        }
    }

    /// Canonical snake-case label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Close => "close",
            Self::Regular => "regular",
            Self::Acquaintance => "acquaintance",
            Self::Peripheral => "peripheral",
        }
    }

    /// Parse a tier label. Accepts canonical names, a few common synonyms,
    /// and the numeric rank `1` (inner) through `5` (peripheral).
    ///
    /// Returns `None` for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        match fold_label(label).as_str() {
            "inner" | "inner_circle" | "innermost" | "core" | "1" => Some(Self::Inner),
            "close" | "close_circle" | "2" => Some(Self::Close),
            "regular" | "middle" | "3" => Some(Self::Regular),
            "acquaintance" | "known" | "4" => Some(Self::Acquaintance),
            "peripheral" | "outer" | "distant" | "5" => Some(Self::Peripheral),
            _ => None,
        }
    }
}

impl core::fmt::Display for ProximityTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Contact frequency
// ---------------------------------------------------------------------------

/// Desired cadence for staying in touch with a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ContactFrequency {
    /// Every day.
    Daily,
    /// Every seven days.
    Weekly,
    /// Every calendar month.
    Monthly,
    /// Every three calendar months.
    Quarterly,
    /// Every calendar year.
    Yearly,
}

impl ContactFrequency {
    /// Scoring weight: daily 5 down to yearly 1.
    pub const fn weight(self) -> u8 {
        match self {
            Self::Daily => 5,
            Self::Weekly => 4,
            Self::Monthly => 3,
            Self::Quarterly => 2,
            Self::Yearly => 1,
        }
    }

    /// Canonical snake-case label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Parse a frequency label, or `None` if it is not recognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match fold_label(label).as_str() {
            "daily" | "day" => Some(Self::Daily),
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            "quarterly" | "quarter" => Some(Self::Quarterly),
            "yearly" | "year" | "annual" | "annually" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl core::fmt::Display for ContactFrequency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Projection classifications
// ---------------------------------------------------------------------------

/// Where a scheduled person stands relative to the lookahead window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ContactStatus {
    /// The last cycle was missed.
    Overdue,
    /// Next contact falls inside the lookahead window.
    DueSoon,
    /// Next contact falls beyond the lookahead window.
    Scheduled,
}

/// What an agenda line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum AgendaKind {
    /// A contact that is overdue or due soon.
    Contact,
    /// An upcoming birthday.
    Birthday,
}

/// Built-in categorical attributes a population can be segmented by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SegmentDimension {
    /// Profession class.
    Profession,
    /// Neighborhood of residence.
    Neighborhood,
    /// Political party affiliation.
    Party,
    /// Age bracket derived from the birth date.
    AgeBracket,
}

impl SegmentDimension {
    /// Every dimension, in report order.
    pub const ALL: [Self; 4] = [
        Self::Profession,
        Self::Neighborhood,
        Self::Party,
        Self::AgeBracket,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_weights_descend_from_inner() {
        let weights: Vec<u8> = ProximityTier::ALL.iter().map(|t| t.weight()).collect();
        assert_eq!(weights, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn tier_ordering_is_innermost_first() {
        assert!(ProximityTier::Inner < ProximityTier::Close);
        assert!(ProximityTier::Acquaintance < ProximityTier::Peripheral);
    }

    #[test]
    fn tier_labels_are_folded() {
        assert_eq!(ProximityTier::from_label(" Inner Circle "), Some(ProximityTier::Inner));
        assert_eq!(ProximityTier::from_label("PERIPHERAL"), Some(ProximityTier::Peripheral));
        assert_eq!(ProximityTier::from_label("3"), Some(ProximityTier::Regular));
        assert_eq!(ProximityTier::from_label("stranger"), None);
        assert_eq!(ProximityTier::from_label(""), None);
    }

    #[test]
    fn tier_label_round_trips_through_as_str() {
        for tier in ProximityTier::ALL {
            assert_eq!(ProximityTier::from_label(tier.as_str()), Some(tier));
        }
    }

    #[test]
    fn frequency_labels_and_weights() {
        assert_eq!(ContactFrequency::from_label("Weekly"), Some(ContactFrequency::Weekly));
        assert_eq!(ContactFrequency::from_label("annual"), Some(ContactFrequency::Yearly));
        assert_eq!(ContactFrequency::from_label("fortnightly"), None);
        assert_eq!(ContactFrequency::Daily.weight(), 5);
        assert_eq!(ContactFrequency::Yearly.weight(), 1);
    }

    #[test]
    fn tier_serializes_snake_case() {
        let json = serde_json::to_string(&ProximityTier::Acquaintance).ok();
        assert_eq!(json.as_deref(), Some("\"acquaintance\""));
        let status = serde_json::to_string(&ContactStatus::DueSoon).ok();
        assert_eq!(status.as_deref(), Some("\"due_soon\""));
    }
}
