//! Person identifier.
//!
//! Person records arrive from the CRUD layer with a stable identifier. When a
//! record has none (CSV imports, fixtures), the engine derives one from the
//! record's position in the snapshot, so the same snapshot always yields the
//! same ids.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Namespace for ids derived from a record's snapshot position.
const RECORD_NAMESPACE: Uuid = Uuid::from_u128(0x3c0f_9a52_7d1e_4b8a_9e61_5f2d_0a47_c3b9);

/// Unique identifier for a person tracked by the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PersonId(pub Uuid);

impl PersonId {
    /// Name-based (v5) id for the record at `index` in a snapshot.
    pub fn for_record(index: usize) -> Self {
        let index = u64::try_from(index).unwrap_or(u64::MAX);
        Self(Uuid::new_v5(&RECORD_NAMESPACE, &index.to_be_bytes()))
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl core::fmt::Display for PersonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PersonId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<PersonId> for Uuid {
    fn from(id: PersonId) -> Self {
        id.0
    }
}
