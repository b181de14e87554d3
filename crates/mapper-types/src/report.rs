//! Derived outputs of the relevance and scheduling engine.
//!
//! These are plain data: the engine builds them from a person snapshot and
//! the dashboard views render them as-is.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AgendaKind, ContactFrequency, ContactStatus, ProximityTier, SegmentDimension};
use crate::ids::PersonId;
use crate::structs::Person;

// ---------------------------------------------------------------------------
// Scheduling
// ---------------------------------------------------------------------------

/// Contact schedule projected from a last-contact date and a cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ContactSchedule {
    /// Cadence the schedule was projected with.
    pub frequency: ContactFrequency,
    /// Anchor of the projection.
    pub last_contact_date: NaiveDate,
    /// First occurrence on or after `as_of`.
    pub next_due_date: NaiveDate,
    /// `last_contact_date + one interval < as_of`.
    pub missed_last_cycle: bool,
    /// The first occurrence that passed without contact, when one did.
    pub first_missed_date: Option<NaiveDate>,
    /// Occurrences that fell strictly before `as_of`.
    pub missed_cycles: u32,
    /// Whole days from the last contact to `as_of`.
    pub days_since_contact: i64,
}

/// A normalized person together with everything the engine derives for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScoredPerson {
    /// The normalized person.
    pub person: Person,
    /// Weighted relevance in `[1.0, 5.0]`.
    #[ts(as = "String")]
    pub relevance: Decimal,
    /// Age in whole years at `as_of`, when the birth date is known.
    pub age: Option<i32>,
    /// Contact schedule, when the person has a cadence and a last contact.
    pub schedule: Option<ContactSchedule>,
}

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

/// Engagement metrics for one value of a categorical attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SegmentSummary {
    /// The attribute value (e.g. a neighborhood name).
    pub key: String,
    /// Engaged people carrying this value.
    pub engaged_count: u32,
    /// All people carrying this value.
    pub total_count: u32,
    /// `engaged_count / total_count * 100`, two decimal places.
    #[ts(as = "String")]
    pub penetration: Decimal,
    /// Mean influence of the engaged subset.
    #[ts(as = "String")]
    pub avg_influence: Decimal,
    /// Mean trust of the engaged subset.
    #[ts(as = "String")]
    pub avg_trust: Decimal,
    /// Mean importance of the engaged subset.
    #[ts(as = "String")]
    pub avg_importance: Decimal,
}

/// All segments for one dimension, largest engaged count first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SegmentTable {
    /// The attribute the population was grouped by.
    pub dimension: SegmentDimension,
    /// One row per value with at least one engaged person.
    pub segments: Vec<SegmentSummary>,
}

// ---------------------------------------------------------------------------
// Agenda
// ---------------------------------------------------------------------------

/// Next birthday of a person relative to `as_of`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BirthdayProjection {
    /// Whose birthday.
    pub person_id: PersonId,
    /// Display name.
    pub name: String,
    /// Next anniversary on or after `as_of`.
    pub date: NaiveDate,
    /// Age reached on that date.
    pub turning: i32,
    /// Days from `as_of` to `date`.
    pub days_until: i64,
    /// Whether `date` falls inside the lookahead window.
    pub upcoming: bool,
}

/// One line of the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AgendaItem {
    /// Who the line is about.
    pub person_id: PersonId,
    /// Display name.
    pub name: String,
    /// Contact or birthday.
    pub kind: AgendaKind,
    /// Due date, first missed date for overdue contacts, or anniversary.
    pub date: NaiveDate,
    /// Days from `as_of` to `date` (negative when overdue).
    pub days_until: i64,
    /// Contact status for contact lines.
    pub status: Option<ContactStatus>,
    /// Age being turned for birthday lines.
    pub turning: Option<i32>,
}

/// Classification of a population against a lookahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Projection {
    /// Reference date.
    pub as_of: NaiveDate,
    /// Window length in days.
    pub lookahead_days: u32,
    /// People who missed their last cycle.
    pub overdue: Vec<PersonId>,
    /// People due within the window.
    pub due_soon: Vec<PersonId>,
    /// People due beyond the window.
    pub scheduled: Vec<PersonId>,
    /// People with no schedule at all.
    pub unscheduled: Vec<PersonId>,
    /// Next birthday of everyone with a known birth date, soonest first.
    pub birthdays: Vec<BirthdayProjection>,
    /// Overdue and due-soon contacts plus upcoming birthdays, by date.
    pub agenda: Vec<AgendaItem>,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// A record that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RecordIssue {
    /// Position of the record in the input snapshot.
    pub index: u32,
    /// Identifier, when the record carried one.
    pub person_id: Option<PersonId>,
    /// Name, when the record carried one.
    pub name: Option<String>,
    /// What was wrong.
    pub message: String,
}

/// Mean ratings across a population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RatingAverages {
    /// Mean importance.
    #[ts(as = "String")]
    pub importance: Decimal,
    /// Mean trust.
    #[ts(as = "String")]
    pub trust: Decimal,
    /// Mean influence.
    #[ts(as = "String")]
    pub influence: Decimal,
}

/// Everything a dashboard view renders for one snapshot and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DashboardReport {
    /// Reference date.
    pub as_of: NaiveDate,
    /// People that were scored.
    pub total_people: u32,
    /// Records left out of the report.
    pub issues: Vec<RecordIssue>,
    /// Head count per proximity tier; every tier is present.
    pub tier_breakdown: BTreeMap<ProximityTier, u32>,
    /// Most relevant people, highest first.
    pub top_contacts: Vec<ScoredPerson>,
    /// One segment table per built-in dimension.
    pub segments: Vec<SegmentTable>,
    /// Engaged share of the whole population, in percent.
    #[ts(as = "String")]
    pub overall_penetration: Decimal,
    /// Share of engaged people contacted within the mobilization window.
    #[ts(as = "String")]
    pub mobilization: Decimal,
    /// Mean ratings across everyone scored.
    pub average_ratings: RatingAverages,
    /// Overdue, due-soon, and birthday projection.
    pub projection: Projection,
}
