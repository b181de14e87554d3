//! Overdue and upcoming event projection.
//!
//! Classifies every scheduled person against a lookahead window and builds
//! the agenda the dashboard calendar shows: overdue contacts, contacts due
//! within the window, and birthdays within the window, soonest first.

use chrono::{Datelike, NaiveDate};

use mapper_types::{
    AgendaItem, AgendaKind, BirthdayProjection, ContactSchedule, ContactStatus, Person, Projection,
    ScoredPerson,
};

use crate::dates::{anniversary_in, days_until};

/// Where a schedule stands relative to `as_of` and the lookahead window.
///
/// Overdue wins over the window check: a person who missed a cycle is
/// overdue even if the rolled-forward date is tomorrow.
pub fn classify(schedule: &ContactSchedule, as_of: NaiveDate, lookahead_days: u32) -> ContactStatus {
    if schedule.missed_last_cycle {
        ContactStatus::Overdue
    } else if days_until(as_of, schedule.next_due_date) <= i64::from(lookahead_days) {
        ContactStatus::DueSoon
    } else {
        ContactStatus::Scheduled
    }
}

/// Next birthday of `person` on or after `as_of`.
///
/// Considers this year's and next year's anniversaries. Returns `None`
/// without a birth date, or when the person is not yet one year old by that
/// anniversary (birth dates on or after `as_of`).
pub fn next_birthday(
    person: &Person,
    as_of: NaiveDate,
    lookahead_days: u32,
) -> Option<BirthdayProjection> {
    let born = person.birth_date?;
    let this_year = as_of.year();
    let date = [Some(this_year), this_year.checked_add(1)]
        .into_iter()
        .flatten()
        .filter_map(|year| anniversary_in(born, year))
        .find(|anniversary| *anniversary >= as_of)?;

    let turning = date.year().saturating_sub(born.year());
    if turning < 1 {
        return None;
    }
    let days_until = days_until(as_of, date);

    Some(BirthdayProjection {
        person_id: person.id,
        name: person.name.clone(),
        date,
        turning,
        days_until,
        upcoming: days_until <= i64::from(lookahead_days),
    })
}

/// Classify a scored population and build its agenda.
///
/// Agenda lines are sorted by date; the sort is stable, so same-day lines
/// keep input order with contact lines ahead of birthdays.
pub fn project(scored: &[ScoredPerson], as_of: NaiveDate, lookahead_days: u32) -> Projection {
    let mut overdue = Vec::new();
    let mut due_soon = Vec::new();
    let mut scheduled = Vec::new();
    let mut unscheduled = Vec::new();
    let mut agenda = Vec::new();

    for entry in scored {
        let person = &entry.person;
        let Some(schedule) = &entry.schedule else {
            unscheduled.push(person.id);
            continue;
        };

        let status = classify(schedule, as_of, lookahead_days);
        let date = match status {
            ContactStatus::Overdue => {
                overdue.push(person.id);
                schedule.first_missed_date.unwrap_or(schedule.next_due_date)
            }
            ContactStatus::DueSoon => {
                due_soon.push(person.id);
                schedule.next_due_date
            }
            ContactStatus::Scheduled => {
                scheduled.push(person.id);
                continue;
            }
        };

        agenda.push(AgendaItem {
            person_id: person.id,
            name: person.name.clone(),
            kind: AgendaKind::Contact,
            date,
            days_until: days_until(as_of, date),
            status: Some(status),
            turning: None,
        });
    }

    let mut birthdays: Vec<BirthdayProjection> = scored
        .iter()
        .filter_map(|entry| next_birthday(&entry.person, as_of, lookahead_days))
        .collect();
    birthdays.sort_by_key(|birthday| birthday.date);

    agenda.extend(
        birthdays
            .iter()
            .filter(|birthday| birthday.upcoming)
            .map(|birthday| AgendaItem {
                person_id: birthday.person_id,
                name: birthday.name.clone(),
                kind: AgendaKind::Birthday,
                date: birthday.date,
                days_until: birthday.days_until,
                status: None,
                turning: Some(birthday.turning),
            }),
    );
    agenda.sort_by_key(|item| item.date);

    tracing::debug!(
        %as_of,
        lookahead_days,
        overdue = overdue.len(),
        due_soon = due_soon.len(),
        scheduled = scheduled.len(),
        unscheduled = unscheduled.len(),
        agenda = agenda.len(),
        "Projected contact agenda"
    );

    Projection {
        as_of,
        lookahead_days,
        overdue,
        due_soon,
        scheduled,
        unscheduled,
        birthdays,
        agenda,
    }
}
