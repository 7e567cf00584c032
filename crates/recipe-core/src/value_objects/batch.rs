//! Per-id result of a batch delete

use serde::Serialize;

use super::Id;

/// Outcome of deleting several records by id
///
/// Ids are reported in request order, duplicates collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteOutcome {
    pub deleted: Vec<Id>,
    pub not_found: Vec<Id>,
}

impl BatchDeleteOutcome {
    /// Build an outcome from the requested ids and the ids the store actually removed
    pub fn from_removed(requested: &[Id], removed: &[Id]) -> Self {
        let mut outcome = Self::default();
        for id in requested {
            if outcome.deleted.contains(id) || outcome.not_found.contains(id) {
                continue;
            }
            if removed.contains(id) {
                outcome.deleted.push(*id);
            } else {
                outcome.not_found.push(*id);
            }
        }
        outcome
    }

    /// Legacy "any succeeded" answer
    pub fn any_deleted(&self) -> bool {
        !self.deleted.is_empty()
    }

    pub fn all_deleted(&self) -> bool {
        self.not_found.is_empty()
    }
}
