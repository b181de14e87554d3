//! Conversion of raw records into fully-defaulted [`Person`] values.
//!
//! All defaulting policy lives here and runs once, at the engine boundary:
//!
//! - missing ratings become [`NEUTRAL_RATING`], out-of-range ratings are
//!   clamped into `1..=5`;
//! - a missing proximity tier becomes the configured default tier, an
//!   unknown one is a [`ClassificationError`];
//! - unknown cadences and unparseable dates are dropped;
//! - blank categorical fields become [`UNCLASSIFIED`].
//!
//! Every lossy default except the missing-value cases is logged at `warn`.

use chrono::NaiveDate;

use mapper_types::{
    ContactFrequency, NEUTRAL_RATING, Person, PersonId, PersonRecord, ProximityTier, RecordIssue,
    UNCLASSIFIED,
};

use crate::dates::parse_calendar_date;
use crate::error::ClassificationError;

/// Lowest valid rating.
const MIN_RATING: i32 = 1;

/// Highest valid rating.
const MAX_RATING: i32 = 5;

/// Normalize the record at `index` in its snapshot.
///
/// Records without an id get one derived from `index`.
pub fn normalize(
    record: &PersonRecord,
    index: usize,
    default_tier: ProximityTier,
) -> Result<Person, ClassificationError> {
    let id = record.id.unwrap_or_else(|| PersonId::for_record(index));
    let proximity_tier = tier(record.proximity_tier.as_deref(), default_tier)?;

    Ok(Person {
        id,
        name: record.name.as_deref().map(str::trim).unwrap_or_default().to_owned(),
        proximity_tier,
        importance: rating(record.importance, "importance", id),
        trust_level: rating(record.trust_level, "trust_level", id),
        influence_level: rating(record.influence_level, "influence_level", id),
        birth_date: date(record.birth_date.as_deref(), "birth_date", id),
        last_contact_date: date(record.last_contact_date.as_deref(), "last_contact_date", id),
        contact_frequency: frequency(record.contact_frequency.as_deref(), id),
        profession: category(record.profession.as_deref()),
        neighborhood: category(record.neighborhood.as_deref()),
        party: category(record.party.as_deref()),
    })
}

/// Normalize a snapshot, setting aside records that cannot be classified.
///
/// A bad record degrades only itself: it is reported as a [`RecordIssue`]
/// and the rest of the snapshot is still returned in input order.
pub fn normalize_all(
    records: &[PersonRecord],
    default_tier: ProximityTier,
) -> (Vec<Person>, Vec<RecordIssue>) {
    let mut people = Vec::with_capacity(records.len());
    let mut issues = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match normalize(record, index, default_tier) {
            Ok(person) => people.push(person),
            Err(err) => {
                tracing::warn!(index, error = %err, "Skipping unclassifiable person record");
                issues.push(RecordIssue {
                    index: u32::try_from(index).unwrap_or(u32::MAX),
                    person_id: record.id,
                    name: record.name.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        accepted = people.len(),
        rejected = issues.len(),
        "Normalized person snapshot"
    );
    (people, issues)
}

fn tier(
    raw: Option<&str>,
    default_tier: ProximityTier,
) -> Result<ProximityTier, ClassificationError> {
    match raw.map(str::trim).filter(|label| !label.is_empty()) {
        None => Ok(default_tier),
        Some(label) => ProximityTier::from_label(label).ok_or_else(|| {
            ClassificationError::UnknownProximityTier {
                label: label.to_owned(),
            }
        }),
    }
}

fn rating(raw: Option<i32>, field: &'static str, id: PersonId) -> u8 {
    let Some(value) = raw else {
        return NEUTRAL_RATING;
    };
    let clamped = value.clamp(MIN_RATING, MAX_RATING);
    if clamped != value {
        tracing::warn!(person_id = %id, field, value, clamped, "Rating out of range, clamping");
    }
    u8::try_from(clamped).unwrap_or(NEUTRAL_RATING)
}

fn date(raw: Option<&str>, field: &'static str, id: PersonId) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    let parsed = parse_calendar_date(raw);
    if parsed.is_none() {
        tracing::warn!(person_id = %id, field, value = raw, "Unparseable date, ignoring");
    }
    parsed
}

fn frequency(raw: Option<&str>, id: PersonId) -> Option<ContactFrequency> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    let parsed = ContactFrequency::from_label(raw);
    if parsed.is_none() {
        tracing::warn!(person_id = %id, value = raw, "Unknown contact frequency, leaving unscheduled");
    }
    parsed
}

fn category(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(UNCLASSIFIED)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tier: Option<&str>) -> PersonRecord {
        PersonRecord {
            name: Some(String::from("  Caio ")),
            proximity_tier: tier.map(str::to_owned),
            ..PersonRecord::default()
        }
    }

    #[test]
    fn empty_record_takes_every_default() {
        let person = normalize(&PersonRecord::default(), 0, ProximityTier::Regular);
        assert!(person.is_ok());
        let Ok(person) = person else { return };
        assert_eq!(person.proximity_tier, ProximityTier::Regular);
        assert_eq!(person.importance, NEUTRAL_RATING);
        assert_eq!(person.trust_level, NEUTRAL_RATING);
        assert_eq!(person.influence_level, NEUTRAL_RATING);
        assert_eq!(person.name, "");
        assert_eq!(person.party, UNCLASSIFIED);
        assert!(person.birth_date.is_none());
        assert!(person.contact_frequency.is_none());
    }

    #[test]
    fn absent_tier_uses_configured_default() {
        let person = normalize(&record(None), 0, ProximityTier::Peripheral);
        assert_eq!(person.map(|p| p.proximity_tier), Ok(ProximityTier::Peripheral));
        let blank = normalize(&record(Some("  ")), 0, ProximityTier::Close);
        assert_eq!(blank.map(|p| p.proximity_tier), Ok(ProximityTier::Close));
    }

    #[test]
    fn unknown_tier_is_a_classification_error() {
        let result = normalize(&record(Some("stranger")), 0, ProximityTier::Regular);
        assert_eq!(
            result.map(|p| p.id),
            Err(ClassificationError::UnknownProximityTier {
                label: String::from("stranger"),
            })
        );
    }

    #[test]
    fn ratings_are_clamped() {
        let raw = PersonRecord {
            importance: Some(9),
            trust_level: Some(0),
            influence_level: Some(4),
            ..PersonRecord::default()
        };
        let person = normalize(&raw, 0, ProximityTier::Regular);
        assert_eq!(
            person.map(|p| (p.importance, p.trust_level, p.influence_level)),
            Ok((5, 1, 4))
        );
    }

    #[test]
    fn bad_dates_and_cadences_are_dropped() {
        let raw = PersonRecord {
            birth_date: Some(String::from("31/12/1980")),
            last_contact_date: Some(String::from("2024-05-02T14:00:00Z")),
            contact_frequency: Some(String::from("fortnightly")),
            ..PersonRecord::default()
        };
        let person = normalize(&raw, 0, ProximityTier::Regular);
        assert!(person.is_ok());
        let Ok(person) = person else { return };
        assert!(person.birth_date.is_none());
        assert_eq!(person.last_contact_date, NaiveDate::from_ymd_opt(2024, 5, 2));
        assert!(person.contact_frequency.is_none());
    }

    #[test]
    fn categories_are_trimmed() {
        let raw = PersonRecord {
            profession: Some(String::from(" Nurse ")),
            neighborhood: Some(String::new()),
            ..PersonRecord::default()
        };
        let person = normalize(&raw, 0, ProximityTier::Regular);
        assert_eq!(
            person.map(|p| (p.profession, p.neighborhood)),
            Ok((String::from("Nurse"), String::from(UNCLASSIFIED)))
        );
    }

    #[test]
    fn existing_id_is_kept() {
        let id = PersonId::for_record(99);
        let raw = PersonRecord {
            id: Some(id),
            ..PersonRecord::default()
        };
        assert_eq!(normalize(&raw, 0, ProximityTier::Regular).map(|p| p.id), Ok(id));
    }

    #[test]
    fn missing_id_is_derived_from_position() {
        let raw = record(Some("inner"));
        let first = normalize(&raw, 2, ProximityTier::Regular).map(|p| p.id);
        let again = normalize(&raw, 2, ProximityTier::Regular).map(|p| p.id);
        assert_eq!(first, Ok(PersonId::for_record(2)));
        assert_eq!(first, again);
        assert_ne!(
            normalize(&raw, 3, ProximityTier::Regular).map(|p| p.id),
            first
        );
    }

    #[test]
    fn normalize_all_sets_aside_bad_records() {
        let records = vec![record(Some("inner")), record(Some("???")), record(None)];
        let (people, issues) = normalize_all(&records, ProximityTier::Regular);
        assert_eq!(people.len(), 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.first().map(|i| i.index), Some(1));
        assert_eq!(
            issues.first().and_then(|i| i.name.clone()).as_deref(),
            Some("  Caio ")
        );
        assert_eq!(people.first().map(|p| p.name.as_str()), Some("Caio"));
    }
}
