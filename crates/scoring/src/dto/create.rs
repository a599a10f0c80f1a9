use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, ScoringError};
use crate::models::{Division, DivisionId, Entry, Event, EventId, Finish, Race, RaceId, SailNumber};
use crate::services::discards::validate_schedule;

/// Discard schedule as clients send it: either a list of thresholds or the
/// comma-separated shorthand ("3,6,9").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiscardScheduleField {
    Thresholds(Vec<i64>),
    Shorthand(String),
}

impl DiscardScheduleField {
    pub fn resolve(&self) -> Result<Vec<i64>> {
        match self {
            Self::Thresholds(thresholds) => Ok(thresholds.clone()),
            Self::Shorthand(raw) => parse_discard_schedule(raw),
        }
    }
}

/// Parse the comma-separated discard shorthand.
///
/// Empty segments are skipped, so `"3,6,"` and `"3, 6"` both yield `[3, 6]`
/// and an empty string yields an empty schedule.
pub fn parse_discard_schedule(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment.parse::<i64>().map_err(|_| {
                ScoringError::Validation(format!(
                    "discard must be comma-separated integers, got {segment:?}"
                ))
            })
        })
        .collect()
}

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    pub discard_schedule: DiscardScheduleField,
}

impl CreateEventRequest {
    /// Validate and normalize into an [`Event`] under the id the store issued.
    pub fn build(self, event_id: EventId) -> Result<Event> {
        self.validate()?;

        let discard_schedule = self.discard_schedule.resolve()?;
        validate_schedule(&discard_schedule)?;

        Ok(Event {
            event_id,
            name: self.name.trim().to_string(),
            discard_schedule,
        })
    }
}

/// Request payload for registering an entry in an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEntryRequest {
    pub event_id: EventId,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Sail number must be between 1 and 64 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub sail_number: String,

    #[validate(length(max = 255))]
    pub name: String,

    pub division_ids: Option<Vec<DivisionId>>,
}

impl CreateEntryRequest {
    pub fn build(self) -> Result<Entry> {
        self.validate()?;

        Ok(Entry {
            event_id: self.event_id,
            sail_number: SailNumber::new(self.sail_number.trim()),
            name: self.name.trim().to_string(),
            division_ids: self.division_ids,
        })
    }
}

/// Request payload for creating a division within an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDivisionRequest {
    pub event_id: EventId,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
}

impl CreateDivisionRequest {
    pub fn build(self, division_id: DivisionId) -> Result<Division> {
        self.validate()?;

        Ok(Division {
            division_id,
            event_id: self.event_id,
            name: self.name.trim().to_string(),
        })
    }
}

/// Request payload for scheduling a race
///
/// Unlike event and division ids, race ids are chosen by the committee
/// and arrive in the payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRaceRequest {
    pub event_id: EventId,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Race id must be between 1 and 64 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub race_id: String,

    pub start_time: NaiveDateTime,

    #[validate(length(max = 1024))]
    pub notes: Option<String>,
}

impl CreateRaceRequest {
    pub fn build(self) -> Result<Race> {
        self.validate()?;

        Ok(Race {
            event_id: self.event_id,
            race_id: RaceId::new(self.race_id.trim()),
            start_time: self.start_time,
            notes: clean_optional(self.notes),
        })
    }
}

/// Request payload for recording a finish
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFinishRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Sail number must be between 1 and 64 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub sail_number: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Race id must be between 1 and 64 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub race_id: String,

    pub finish_time: NaiveDateTime,

    #[validate(length(max = 32))]
    pub rc_scoring: Option<String>,
}

impl CreateFinishRequest {
    pub fn build(self) -> Result<Finish> {
        self.validate()?;

        Ok(Finish {
            sail_number: SailNumber::new(self.sail_number.trim()),
            race_id: RaceId::new(self.race_id.trim()),
            finish_time: self.finish_time,
            rc_scoring: clean_optional(self.rc_scoring),
        })
    }
}

// Validation helpers

fn validate_not_blank(value: &str) -> std::result::Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
