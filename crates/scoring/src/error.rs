use thiserror::Error;
use validator::ValidationErrors;

use crate::models::EventId;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Invalid discard schedule: {0}")]
    InvalidDiscardSchedule(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

impl ScoringError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScoringError::EventNotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ScoringError::Validation(_))
    }
}

impl From<ValidationErrors> for ScoringError {
    fn from(errors: ValidationErrors) -> Self {
        let details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                })
            })
            .collect();

        Self::Validation(details.join("; "))
    }
}
