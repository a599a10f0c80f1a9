pub mod create;
pub mod result;

pub use create::{
    CreateDivisionRequest, CreateEntryRequest, CreateEventRequest, CreateFinishRequest,
    CreateRaceRequest, DiscardScheduleField, parse_discard_schedule,
};
pub use result::{ResultRow, ScoreCell, SeriesResult};
