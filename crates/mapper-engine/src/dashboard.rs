//! Dashboard report composition.
//!
//! One call turns a raw snapshot into everything the dashboard views render,
//! so every view reads the same numbers instead of recomputing them.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use mapper_types::{
    DashboardReport, Person, PersonRecord, ProximityTier, RatingAverages, RecordIssue,
    SegmentDimension,
};

use crate::agenda::project;
use crate::config::EngineConfig;
use crate::dates::days_until;
use crate::normalize::normalize_all;
use crate::relevance::{rank_by_relevance, score_all};
use crate::segment::{EngagementCriteria, aggregate_by, average, percentage};

/// Build the dashboard report for a raw snapshot.
pub fn build_dashboard(
    records: &[PersonRecord],
    as_of: NaiveDate,
    config: &EngineConfig,
) -> DashboardReport {
    let (people, issues) = normalize_all(records, config.scoring.default_tier);
    dashboard_for(&people, issues, as_of, config)
}

/// Build the dashboard report for an already-normalized population.
pub fn dashboard_for(
    people: &[Person],
    issues: Vec<RecordIssue>,
    as_of: NaiveDate,
    config: &EngineConfig,
) -> DashboardReport {
    let mut scored = score_all(people, as_of);
    let projection = project(&scored, as_of, config.agenda.lookahead_days);

    rank_by_relevance(&mut scored);
    scored.truncate(config.dashboard.top_contacts);

    let segments = SegmentDimension::ALL
        .into_iter()
        .map(|dimension| aggregate_by(people, dimension, &config.engagement, as_of))
        .collect();

    let total = count(people.len());
    let engaged = count(
        people
            .iter()
            .filter(|person| config.engagement.is_engaged(person))
            .count(),
    );

    let report = DashboardReport {
        as_of,
        total_people: total,
        issues,
        tier_breakdown: tier_breakdown(people),
        top_contacts: scored,
        segments,
        overall_penetration: percentage(engaged, total),
        mobilization: percentage(
            mobilized(
                people,
                &config.engagement,
                as_of,
                config.dashboard.mobilization_window_days,
            ),
            engaged,
        ),
        average_ratings: average_ratings(people),
        projection,
    };

    tracing::debug!(
        %as_of,
        total_people = report.total_people,
        issues = report.issues.len(),
        overall_penetration = %report.overall_penetration,
        mobilization = %report.mobilization,
        "Built dashboard report"
    );
    report
}

/// Head count per tier. Every tier is present, empty ones with 0.
pub fn tier_breakdown(people: &[Person]) -> BTreeMap<ProximityTier, u32> {
    let mut counts: BTreeMap<ProximityTier, u32> =
        ProximityTier::ALL.into_iter().map(|tier| (tier, 0)).collect();
    for person in people {
        let slot = counts.entry(person.proximity_tier).or_insert(0);
        *slot = slot.saturating_add(1);
    }
    counts
}

/// Engaged people whose last contact lies within `window_days` before `as_of`.
pub fn mobilized(
    people: &[Person],
    criteria: &EngagementCriteria,
    as_of: NaiveDate,
    window_days: u32,
) -> u32 {
    let window = i64::from(window_days);
    count(
        people
            .iter()
            .filter(|person| criteria.is_engaged(person))
            .filter_map(|person| person.last_contact_date)
            .map(|last| days_until(last, as_of))
            .filter(|since| (0..=window).contains(since))
            .count(),
    )
}

/// Mean ratings across `people`; neutral when empty.
pub fn average_ratings(people: &[Person]) -> RatingAverages {
    let sum = |rating: fn(&Person) -> u8| {
        people
            .iter()
            .fold(0_u32, |acc, person| acc.saturating_add(u32::from(rating(person))))
    };
    let total = count(people.len());

    RatingAverages {
        importance: average(sum(|p| p.importance), total),
        trust: average(sum(|p| p.trust_level), total),
        influence: average(sum(|p| p.influence_level), total),
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use mapper_types::{ContactFrequency, PersonId};
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    fn person(tier: ProximityTier, last_contact: Option<NaiveDate>) -> Person {
        let mut person = Person::new(PersonId::for_record(0), "", tier);
        person.last_contact_date = last_contact;
        person
    }

    #[test]
    fn breakdown_lists_every_tier() {
        let people = vec![
            person(ProximityTier::Inner, None),
            person(ProximityTier::Inner, None),
            person(ProximityTier::Peripheral, None),
        ];
        let breakdown = tier_breakdown(&people);
        assert_eq!(breakdown.len(), 5);
        assert_eq!(breakdown.get(&ProximityTier::Inner), Some(&2));
        assert_eq!(breakdown.get(&ProximityTier::Close), Some(&0));
        assert_eq!(breakdown.get(&ProximityTier::Peripheral), Some(&1));
    }

    #[test]
    fn mobilization_counts_recent_engaged_contacts() {
        let as_of = date(2024, 6, 15);
        let people = vec![
            person(ProximityTier::Inner, Some(date(2024, 6, 1))),
            person(ProximityTier::Close, Some(date(2024, 1, 1))),
            person(ProximityTier::Regular, None),
            person(ProximityTier::Peripheral, Some(date(2024, 6, 14))),
        ];
        let criteria = EngagementCriteria::default();
        assert_eq!(mobilized(&people, &criteria, as_of, 30), 1);
    }

    #[test]
    fn empty_population_is_neutral() {
        let averages = average_ratings(&[]);
        assert_eq!(averages.importance, dec!(3));
        let report = dashboard_for(&[], Vec::new(), date(2024, 6, 15), &EngineConfig::default());
        assert_eq!(report.total_people, 0);
        assert_eq!(report.overall_penetration, dec!(0));
        assert_eq!(report.mobilization, dec!(0));
        assert!(report.top_contacts.is_empty());
        assert!(report.segments.iter().all(|table| table.segments.is_empty()));
    }

    #[test]
    fn report_truncates_ranking() {
        let as_of = date(2024, 6, 15);
        let mut people: Vec<Person> = (0..15)
            .map(|index| Person::new(PersonId::for_record(index), "", ProximityTier::Regular))
            .collect();
        if let Some(first) = people.first_mut() {
            first.contact_frequency = Some(ContactFrequency::Daily);
        }
        let top_id = people.first().map(|p| p.id);

        let report = dashboard_for(&people, Vec::new(), as_of, &EngineConfig::default());
        assert_eq!(report.top_contacts.len(), 10);
        assert_eq!(report.top_contacts.first().map(|s| s.person.id), top_id);
        assert_eq!(report.overall_penetration, dec!(100));
        assert_eq!(report.segments.len(), 4);
    }
}
