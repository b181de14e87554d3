//! Relevance scoring.
//!
//! ```text
//! relevance = 0.4 * proximity_weight + 0.3 * importance + 0.3 * frequency_weight
//! ```
//!
//! Every term is a 1-5 weight, so the score is an exact decimal in
//! `[1.0, 5.0]`. Equal inputs give equal scores; ordering among ties is left
//! to [`rank_by_relevance`], which keeps input order.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use mapper_types::{ContactFrequency, Person, ProximityTier, ScoredPerson};

use crate::dates::age_in_years;
use crate::frequency::schedule_for;

/// Weight of the proximity term (0.4).
const PROXIMITY_SHARE: Decimal = Decimal::from_parts(4, 0, 0, false, 1);

/// Weight of the importance term (0.3).
const IMPORTANCE_SHARE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

/// Weight of the frequency term (0.3).
const FREQUENCY_SHARE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

/// Frequency weight used when no cadence is set.
pub const DEFAULT_FREQUENCY_WEIGHT: u8 = 2;

/// Frequency weight for an optional cadence.
pub fn frequency_weight(frequency: Option<ContactFrequency>) -> u8 {
    frequency.map_or(DEFAULT_FREQUENCY_WEIGHT, ContactFrequency::weight)
}

/// Weighted relevance of a tier, importance rating, and cadence.
///
/// `importance` is clamped into `1..=5` so the result stays in bounds even
/// for callers that skip normalization.
#[allow(clippy::arithmetic_side_effects)]
pub fn relevance(
    tier: ProximityTier,
    importance: u8,
    frequency: Option<ContactFrequency>,
) -> Decimal {
    // Products of single-digit values with one decimal place cannot overflow.
    PROXIMITY_SHARE * Decimal::from(tier.weight())
        + IMPORTANCE_SHARE * Decimal::from(importance.clamp(1, 5))
        + FREQUENCY_SHARE * Decimal::from(frequency_weight(frequency))
}

/// Relevance of a normalized person.
pub fn relevance_of(person: &Person) -> Decimal {
    relevance(
        person.proximity_tier,
        person.importance,
        person.contact_frequency,
    )
}

/// Derive relevance, age, and schedule for one person.
pub fn score_person(person: &Person, as_of: NaiveDate) -> ScoredPerson {
    ScoredPerson {
        relevance: relevance_of(person),
        age: person.birth_date.map(|born| age_in_years(born, as_of)),
        schedule: schedule_for(person, as_of),
        person: person.clone(),
    }
}

/// Score every person, preserving input order.
pub fn score_all(people: &[Person], as_of: NaiveDate) -> Vec<ScoredPerson> {
    people.iter().map(|person| score_person(person, as_of)).collect()
}

/// Sort by relevance, highest first. Stable: ties keep their input order.
pub fn rank_by_relevance(scored: &mut [ScoredPerson]) {
    scored.sort_by(|a, b| b.relevance.cmp(&a.relevance));
}

#[cfg(test)]
mod tests {
    use mapper_types::PersonId;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn weights_combine_linearly() {
        // 0.4*5 + 0.3*5 + 0.3*4
        assert_eq!(
            relevance(ProximityTier::Inner, 5, Some(ContactFrequency::Weekly)),
            dec!(4.7)
        );
        // 0.4*1 + 0.3*1 + 0.3*1
        assert_eq!(
            relevance(ProximityTier::Peripheral, 1, Some(ContactFrequency::Yearly)),
            dec!(1.0)
        );
    }

    #[test]
    fn missing_frequency_weighs_two() {
        // 0.4*3 + 0.3*3 + 0.3*2
        assert_eq!(relevance(ProximityTier::Regular, 3, None), dec!(2.7));
    }

    #[test]
    fn bounds_hold_for_every_input() {
        let frequencies = [
            None,
            Some(ContactFrequency::Daily),
            Some(ContactFrequency::Weekly),
            Some(ContactFrequency::Monthly),
            Some(ContactFrequency::Quarterly),
            Some(ContactFrequency::Yearly),
        ];
        for tier in ProximityTier::ALL {
            for importance in 0..=9 {
                for frequency in frequencies {
                    let score = relevance(tier, importance, frequency);
                    assert!(score >= dec!(1.0), "{score} below bounds");
                    assert!(score <= dec!(5.0), "{score} above bounds");
                }
            }
        }
    }

    #[test]
    fn maximum_is_five() {
        assert_eq!(
            relevance(ProximityTier::Inner, 5, Some(ContactFrequency::Daily)),
            dec!(5.0)
        );
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default();
        let first = Person::new(PersonId::for_record(0), "first", ProximityTier::Regular);
        let second = Person::new(PersonId::for_record(1), "second", ProximityTier::Regular);
        let top = Person::new(PersonId::for_record(2), "top", ProximityTier::Inner);

        let mut scored = score_all(&[first.clone(), second.clone(), top.clone()], as_of);
        rank_by_relevance(&mut scored);

        let order: Vec<PersonId> = scored.iter().map(|s| s.person.id).collect();
        assert_eq!(order, vec![top.id, first.id, second.id]);
    }

    #[test]
    fn scoring_derives_age_and_schedule() {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default();
        let mut person = Person::new(PersonId::for_record(0), "Bia", ProximityTier::Close);
        person.birth_date = NaiveDate::from_ymd_opt(1990, 6, 16);
        person.last_contact_date = NaiveDate::from_ymd_opt(2024, 6, 1);
        person.contact_frequency = Some(ContactFrequency::Weekly);

        let scored = score_person(&person, as_of);
        assert_eq!(scored.age, Some(33));
        assert_eq!(
            scored.schedule.map(|s| s.next_due_date),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
        // 0.4*4 + 0.3*3 + 0.3*4
        assert_eq!(scored.relevance, dec!(3.7));
    }
}
