//! Shared type definitions for the community mapper.
//!
//! This crate is the single source of truth for the shapes exchanged between
//! the relevance engine and the dashboard. Types flow downstream to
//! `TypeScript` via `ts-rs` so client components render exactly what the
//! engine produced.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for person identifiers
//! - [`enums`] -- Proximity tiers, contact frequencies, and classifications
//! - [`structs`] -- Raw and normalized person records
//! - [`report`] -- Schedules, segments, agenda, and dashboard outputs

pub mod enums;
pub mod ids;
pub mod report;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AgendaKind, ContactFrequency, ContactStatus, ProximityTier, SegmentDimension};
pub use ids::PersonId;
pub use report::{
    AgendaItem, BirthdayProjection, ContactSchedule, DashboardReport, Projection, RatingAverages,
    RecordIssue, ScoredPerson, SegmentSummary, SegmentTable,
};
pub use structs::{NEUTRAL_RATING, Person, PersonRecord, UNCLASSIFIED};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for the dashboard.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::PersonId::export_all();

        let _ = crate::enums::ProximityTier::export_all();
        let _ = crate::enums::ContactFrequency::export_all();
        let _ = crate::enums::ContactStatus::export_all();
        let _ = crate::enums::AgendaKind::export_all();
        let _ = crate::enums::SegmentDimension::export_all();

        let _ = crate::structs::PersonRecord::export_all();
        let _ = crate::structs::Person::export_all();

        let _ = crate::report::ContactSchedule::export_all();
        let _ = crate::report::ScoredPerson::export_all();
        let _ = crate::report::SegmentSummary::export_all();
        let _ = crate::report::SegmentTable::export_all();
        let _ = crate::report::BirthdayProjection::export_all();
        let _ = crate::report::AgendaItem::export_all();
        let _ = crate::report::Projection::export_all();
        let _ = crate::report::RecordIssue::export_all();
        let _ = crate::report::RatingAverages::export_all();
        let _ = crate::report::DashboardReport::export_all();
    }
}
