use serde::Serialize;

use crate::models::{EventId, RaceId, SailNumber};

/// One race cell of a result row.
///
/// `score` is absent only when a race could not be scored for the entry at
/// all; after penalty resolution every cell normally carries a score.
/// `annotation` holds the penalty code shown next to the score ("DNC",
/// "DNF", ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCell {
    pub score: Option<f64>,
    pub discarded: bool,
    pub annotation: Option<String>,
}

/// One boat's series result: rank, per-race cells aligned to the race
/// order, TOTAL and NET.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub sail_number: SailNumber,
    pub name: String,
    pub rank: i64,
    pub rank_display: String,
    pub cells: Vec<ScoreCell>,
    pub total: f64,
    pub net: f64,
}

/// A full scored series: the rows plus the race order the cells are
/// aligned to, so callers can render or reshape without recomputing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesResult {
    pub event_id: EventId,
    pub race_order: Vec<RaceId>,
    pub rows: Vec<ResultRow>,
}
