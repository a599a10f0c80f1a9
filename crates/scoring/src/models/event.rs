use serde::{Deserialize, Serialize};

use super::ids::EventId;

/// One regatta. The discard schedule is the list of race-count thresholds
/// at which an entry earns one more discard; see
/// [`num_discards`](crate::services::discards::num_discards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: EventId,
    pub name: String,
    pub discard_schedule: Vec<i64>,
}
