use serde::{Deserialize, Serialize};

use super::ids::{DivisionId, EventId};
use super::sail_number::SailNumber;

/// One boat registered for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub event_id: EventId,
    pub sail_number: SailNumber,
    pub name: String,
    pub division_ids: Option<Vec<DivisionId>>,
}

impl Entry {
    pub fn is_in_division(&self, division_id: &DivisionId) -> bool {
        self.division_ids
            .as_deref()
            .is_some_and(|ids| ids.contains(division_id))
    }
}

/// Narrow an entry list to one division before scoring it as a fleet.
pub fn entries_in_division(entries: &[Entry], division_id: &DivisionId) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.is_in_division(division_id))
        .cloned()
        .collect()
}
