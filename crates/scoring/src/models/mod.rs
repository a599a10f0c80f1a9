pub mod division;
pub mod entry;
pub mod event;
pub mod finish;
pub mod ids;
pub mod race;
pub mod sail_number;

pub use division::Division;
pub use entry::{Entry, entries_in_division};
pub use event::Event;
pub use finish::Finish;
pub use ids::{DivisionId, EventId, RaceId};
pub use race::Race;
pub use sail_number::{NormalizedSailNumber, SailNumber};
