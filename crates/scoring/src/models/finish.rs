use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::RaceId;
use super::sail_number::SailNumber;

/// A recorded finish of one boat in one race.
///
/// `rc_scoring` carries a race-committee code such as "DNF", "DSQ" or
/// "OCS". A finish with a code is scored by the penalty rule regardless
/// of its `finish_time`; the timestamp is still kept as a record of
/// when the boat crossed (or when the code was entered).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finish {
    pub sail_number: SailNumber,
    pub race_id: RaceId,
    pub finish_time: NaiveDateTime,
    pub rc_scoring: Option<String>,
}

impl Finish {
    /// The effective penalty code, if any.
    ///
    /// Committee software sometimes stores an empty or whitespace-only
    /// string instead of omitting the field. Those are treated as no
    /// code at all.
    pub fn penalty_code(&self) -> Option<&str> {
        match self.rc_scoring.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(code) => Some(code),
        }
    }
}
