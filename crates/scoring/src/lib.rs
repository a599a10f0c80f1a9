pub mod dto;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod validate;

pub use error::{Result, ScoringError};
pub use render::to_csv_string;
pub use services::score_event;
pub use validate::{InputValidator, ValidationReport};

// Re-export the result row types
pub use dto::{ResultRow, ScoreCell, SeriesResult};
