pub mod discards;
pub mod positions;
pub mod series;
pub mod tiebreak;

pub use discards::{num_discards, total_and_net, validate_schedule};
pub use positions::{FlaggedFinish, RacePlacements, assign_placements, penalty_score, race_order};
pub use series::{DNC, rank_display, score_event};
pub use tiebreak::A8Key;
