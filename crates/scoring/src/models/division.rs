use serde::{Deserialize, Serialize};

use super::ids::{DivisionId, EventId};

/// A named split of an event's fleet (e.g. "Gold", "Club"). The core only
/// ever uses divisions to pre-filter the entry set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    pub division_id: DivisionId,
    pub event_id: EventId,
    pub name: String,
}
