//! Segment aggregation.
//!
//! Groups a population by a categorical key and reports, per key, how many
//! people are engaged, how many there are in total, the resulting
//! penetration, and the mean ratings of the engaged subset.
//!
//! # Invariants
//!
//! - Only keys with at least one engaged person are reported. A key present
//!   in the population with zero engaged members does not appear at all.
//! - Penetration is 0 (not NaN, not an error) for an empty segment.
//! - Rows are ordered by engaged count descending, then key ascending.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use mapper_types::{
    NEUTRAL_RATING, Person, ProximityTier, SegmentDimension, SegmentSummary, SegmentTable,
    UNCLASSIFIED,
};

use crate::dates::{age_bracket, age_in_years};

/// Decimal places kept on percentages and averages.
const REPORT_SCALE: u32 = 2;

/// Which people count as engaged (the penetration numerator).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngagementCriteria {
    /// Engaged proximity tiers; `None` means everyone is engaged.
    #[serde(default = "default_engaged_tiers")]
    pub tiers: Option<BTreeSet<ProximityTier>>,
}

impl EngagementCriteria {
    /// Everyone counts as engaged.
    pub const fn everyone() -> Self {
        Self { tiers: None }
    }

    /// People in any of the given tiers count as engaged.
    pub fn tiers(tiers: impl IntoIterator<Item = ProximityTier>) -> Self {
        Self {
            tiers: Some(tiers.into_iter().collect()),
        }
    }

    /// Whether `person` is engaged under these criteria.
    pub fn is_engaged(&self, person: &Person) -> bool {
        self.tiers
            .as_ref()
            .is_none_or(|tiers| tiers.contains(&person.proximity_tier))
    }
}

impl Default for EngagementCriteria {
    fn default() -> Self {
        Self {
            tiers: default_engaged_tiers(),
        }
    }
}

fn default_engaged_tiers() -> Option<BTreeSet<ProximityTier>> {
    Some(BTreeSet::from([
        ProximityTier::Inner,
        ProximityTier::Close,
        ProximityTier::Regular,
    ]))
}

/// Running totals for one key.
#[derive(Debug, Default)]
struct Tally {
    total: u32,
    engaged: u32,
    influence: u32,
    trust: u32,
    importance: u32,
}

/// Group `people` by `key` and summarize each group against `engaged`.
pub fn aggregate<K, P>(people: &[Person], key: K, engaged: P) -> Vec<SegmentSummary>
where
    K: Fn(&Person) -> String,
    P: Fn(&Person) -> bool,
{
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for person in people {
        let tally = tallies.entry(key(person)).or_default();
        tally.total = tally.total.saturating_add(1);
        if engaged(person) {
            tally.engaged = tally.engaged.saturating_add(1);
            tally.influence = tally.influence.saturating_add(u32::from(person.influence_level));
            tally.trust = tally.trust.saturating_add(u32::from(person.trust_level));
            tally.importance = tally.importance.saturating_add(u32::from(person.importance));
        }
    }

    let mut rows: Vec<SegmentSummary> = tallies
        .into_iter()
        .filter(|(_, tally)| tally.engaged > 0)
        .map(|(key, tally)| SegmentSummary {
            key,
            engaged_count: tally.engaged,
            total_count: tally.total,
            penetration: percentage(tally.engaged, tally.total),
            avg_influence: average(tally.influence, tally.engaged),
            avg_trust: average(tally.trust, tally.engaged),
            avg_importance: average(tally.importance, tally.engaged),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.engaged_count
            .cmp(&a.engaged_count)
            .then_with(|| a.key.cmp(&b.key))
    });
    rows
}

/// Segment key of `person` along a built-in dimension.
pub fn dimension_key(dimension: SegmentDimension, person: &Person, as_of: NaiveDate) -> String {
    match dimension {
        SegmentDimension::Profession => person.profession.clone(),
        SegmentDimension::Neighborhood => person.neighborhood.clone(),
        SegmentDimension::Party => person.party.clone(),
        SegmentDimension::AgeBracket => person
            .birth_date
            .and_then(|born| age_bracket(age_in_years(born, as_of)))
            .unwrap_or(UNCLASSIFIED)
            .to_owned(),
    }
}

/// Segment table for a built-in dimension.
pub fn aggregate_by(
    people: &[Person],
    dimension: SegmentDimension,
    criteria: &EngagementCriteria,
    as_of: NaiveDate,
) -> SegmentTable {
    let segments = aggregate(
        people,
        |person| dimension_key(dimension, person, as_of),
        |person| criteria.is_engaged(person),
    );
    tracing::debug!(?dimension, segments = segments.len(), "Aggregated segments");
    SegmentTable {
        dimension,
        segments,
    }
}

/// `part / whole * 100`, rounded; 0 when `whole` is 0.
pub fn percentage(part: u32, whole: u32) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(Decimal::from(whole)))
        .map_or(Decimal::ZERO, |pct| pct.round_dp(REPORT_SCALE))
}

/// `sum / count`, rounded; the neutral rating when `count` is 0.
pub fn average(sum: u32, count: u32) -> Decimal {
    if count == 0 {
        return Decimal::from(NEUTRAL_RATING);
    }
    Decimal::from(sum)
        .checked_div(Decimal::from(count))
        .map_or(Decimal::from(NEUTRAL_RATING), |mean| mean.round_dp(REPORT_SCALE))
}
