//! Person entity structs.
//!
//! [`PersonRecord`] is what the CRUD layer hands over: every field optional,
//! labels and dates as raw strings. [`Person`] is the fully-defaulted form
//! that every engine computation runs on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ContactFrequency, ProximityTier};
use crate::ids::PersonId;

/// Segment key used when a categorical field is absent or blank.
pub const UNCLASSIFIED: &str = "unclassified";

/// Neutral value for a missing 1-5 rating.
pub const NEUTRAL_RATING: u8 = 3;

// ---------------------------------------------------------------------------
// Raw record
// ---------------------------------------------------------------------------

/// A person as stored by the surrounding application.
///
/// Nothing here is validated. Ratings are signed so out-of-range values
/// survive deserialization and can be clamped (and logged) by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct PersonRecord {
    /// Stable identifier, if the record has been persisted.
    pub id: Option<PersonId>,
    /// Display name.
    pub name: Option<String>,
    /// Proximity tier label (`inner`, `close`, ... or rank `1`-`5`).
    pub proximity_tier: Option<String>,
    /// Importance rating, nominally 1-5.
    pub importance: Option<i32>,
    /// Trust rating, nominally 1-5.
    pub trust_level: Option<i32>,
    /// Influence rating, nominally 1-5.
    pub influence_level: Option<i32>,
    /// Birth date as `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub birth_date: Option<String>,
    /// Date of the last contact as `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub last_contact_date: Option<String>,
    /// Contact cadence label (`daily`, `weekly`, ...).
    pub contact_frequency: Option<String>,
    /// Profession class.
    pub profession: Option<String>,
    /// Neighborhood of residence.
    pub neighborhood: Option<String>,
    /// Political party affiliation.
    pub party: Option<String>,
}

// ---------------------------------------------------------------------------
// Normalized person
// ---------------------------------------------------------------------------

/// A person with every default applied.
///
/// Ratings are guaranteed to lie in `1..=5`. Categorical fields hold
/// [`UNCLASSIFIED`] rather than being empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Person {
    /// Stable identifier.
    pub id: PersonId,
    /// Display name (empty when the record had none).
    pub name: String,
    /// Relational closeness.
    pub proximity_tier: ProximityTier,
    /// Importance rating, 1-5.
    pub importance: u8,
    /// Trust rating, 1-5.
    pub trust_level: u8,
    /// Influence rating, 1-5.
    pub influence_level: u8,
    /// Birth date, if known.
    pub birth_date: Option<NaiveDate>,
    /// Last contact date, if any contact was ever logged.
    pub last_contact_date: Option<NaiveDate>,
    /// Desired contact cadence, if one is set.
    pub contact_frequency: Option<ContactFrequency>,
    /// Profession class.
    pub profession: String,
    /// Neighborhood of residence.
    pub neighborhood: String,
    /// Political party affiliation.
    pub party: String,
}

impl Person {
    /// A person in the given tier with neutral ratings and nothing else set.
    pub fn new(id: PersonId, name: impl Into<String>, proximity_tier: ProximityTier) -> Self {
        Self {
            id,
            name: name.into(),
            proximity_tier,
            importance: NEUTRAL_RATING,
            trust_level: NEUTRAL_RATING,
            influence_level: NEUTRAL_RATING,
            birth_date: None,
            last_contact_date: None,
            contact_frequency: None,
            profession: UNCLASSIFIED.to_owned(),
            neighborhood: UNCLASSIFIED.to_owned(),
            party: UNCLASSIFIED.to_owned(),
        }
    }
}
