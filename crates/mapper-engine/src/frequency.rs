//! Contact-frequency clock.
//!
//! Maps a cadence to a calendar-aware recurrence step and projects the next
//! due date from a last-contact date.
//!
//! # Invariants
//!
//! - Each occurrence is one step after the previous occurrence. Month-end
//!   clamping carries forward: a 31 January monthly contact is next due on
//!   29 February, then 29 March.
//! - `next_due_date >= as_of` whenever a schedule exists, and it is at least
//!   one step after the last contact.
//! - `missed_last_cycle` is `last_contact + one step < as_of`; it is the only
//!   overdue signal, since the rolled-forward date is never in the past.

use chrono::{Days, Months, NaiveDate};

use mapper_types::{ContactFrequency, ContactSchedule, Person};

use crate::dates::days_until;

/// Calendar step between two consecutive occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceStep {
    /// A fixed number of days.
    Days(u64),
    /// A number of calendar months, clamped to the end of shorter months.
    Months(u32),
}

/// Recurrence step for a cadence.
pub const fn recurrence_step(frequency: ContactFrequency) -> RecurrenceStep {
    match frequency {
        ContactFrequency::Daily => RecurrenceStep::Days(1),
        ContactFrequency::Weekly => RecurrenceStep::Days(7),
        ContactFrequency::Monthly => RecurrenceStep::Months(1),
        ContactFrequency::Quarterly => RecurrenceStep::Months(3),
        ContactFrequency::Yearly => RecurrenceStep::Months(12),
    }
}

/// The date one step after `date`.
///
/// Returns `None` if the date would leave chrono's supported range.
pub fn advance(date: NaiveDate, step: RecurrenceStep) -> Option<NaiveDate> {
    match step {
        RecurrenceStep::Days(days) => date.checked_add_days(Days::new(days)),
        RecurrenceStep::Months(months) => date.checked_add_months(Months::new(months)),
    }
}

/// First occurrence strictly after the last contact that is on or after
/// `as_of`, rolling past any number of missed cycles.
pub fn next_due_date(
    last_contact: NaiveDate,
    frequency: ContactFrequency,
    as_of: NaiveDate,
) -> Option<NaiveDate> {
    roll_forward(last_contact, recurrence_step(frequency), as_of).map(|rollover| rollover.next)
}

/// Whether the occurrence one step after the last contact already passed.
pub fn missed_last_cycle(
    last_contact: NaiveDate,
    frequency: ContactFrequency,
    as_of: NaiveDate,
) -> bool {
    advance(last_contact, recurrence_step(frequency)).is_some_and(|first| first < as_of)
}

/// Full schedule for a last contact and cadence.
///
/// Returns `None` ("no schedule") only on date overflow.
pub fn project_schedule(
    last_contact: NaiveDate,
    frequency: ContactFrequency,
    as_of: NaiveDate,
) -> Option<ContactSchedule> {
    let rollover = roll_forward(last_contact, recurrence_step(frequency), as_of)?;
    let missed_last_cycle = rollover.first < as_of;

    Some(ContactSchedule {
        frequency,
        last_contact_date: last_contact,
        next_due_date: rollover.next,
        missed_last_cycle,
        first_missed_date: missed_last_cycle.then_some(rollover.first),
        missed_cycles: rollover.steps.saturating_sub(1),
        days_since_contact: days_until(last_contact, as_of),
    })
}

/// Schedule for a person, or `None` without both a cadence and a last contact.
pub fn schedule_for(person: &Person, as_of: NaiveDate) -> Option<ContactSchedule> {
    let frequency = person.contact_frequency?;
    let last_contact = person.last_contact_date?;
    let schedule = project_schedule(last_contact, frequency, as_of);
    if schedule.is_none() {
        tracing::warn!(
            person_id = %person.id,
            %last_contact,
            %frequency,
            "Contact schedule overflowed the calendar, leaving unscheduled"
        );
    }
    schedule
}

/// Result of stepping forward from a last contact.
struct Rollover {
    /// One step after the last contact.
    first: NaiveDate,
    /// First occurrence on or after `as_of`.
    next: NaiveDate,
    /// Steps taken to reach `next` (at least 1).
    steps: u32,
}

/// Apply `step` from `last_contact`, at least once, until the date is on or
/// after `as_of`.
fn roll_forward(
    last_contact: NaiveDate,
    step: RecurrenceStep,
    as_of: NaiveDate,
) -> Option<Rollover> {
    let first = advance(last_contact, step)?;
    let mut next = first;
    let mut steps: u32 = 1;
    while next < as_of {
        next = advance(next, step)?;
        steps = steps.checked_add(1)?;
    }
    Some(Rollover { first, next, steps })
}
