use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::{EventId, RaceId};

/// One scheduled race of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub event_id: EventId,
    pub race_id: RaceId,
    pub start_time: NaiveDateTime,
    pub notes: Option<String>,
}
