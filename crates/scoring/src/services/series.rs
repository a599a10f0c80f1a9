use std::collections::HashMap;

use crate::dto::{ResultRow, ScoreCell, SeriesResult};
use crate::error::{Result, ScoringError};
use crate::models::{Entry, Event, EventId, Finish, Race, RaceId, SailNumber};
use crate::services::discards::{num_discards, total_and_net, validate_schedule};
use crate::services::positions::{assign_placements, penalty_score, race_order};
use crate::services::tiebreak::A8Key;

/// Annotation for an entry with no finish record in a race.
pub const DNC: &str = "DNC";

/// Score one event: placements from finish times, penalties for rc-scored
/// and absent boats, discards, TOTAL/NET, A8 tie-breaks, ranks.
///
/// Entries and races belonging to other events are ignored. An event with
/// no entries yields an empty row list. The computation holds no state,
/// so rerunning it on unchanged input returns an identical value.
pub fn score_event(
    event_id: &EventId,
    events: &[Event],
    entries: &[Entry],
    races: &[Race],
    finishes: &[Finish],
) -> Result<SeriesResult> {
    let event = events
        .iter()
        .find(|e| &e.event_id == event_id)
        .ok_or_else(|| ScoringError::EventNotFound(event_id.clone()))?;
    validate_schedule(&event.discard_schedule)?;

    let race_order = race_order(races, event_id);
    let event_entries: Vec<&Entry> =
        entries.iter().filter(|e| &e.event_id == event_id).collect();

    tracing::debug!(
        "Scoring event {}: {} entries, {} races",
        event_id,
        event_entries.len(),
        race_order.len()
    );

    if event_entries.is_empty() {
        return Ok(SeriesResult {
            event_id: event_id.clone(),
            race_order,
            rows: Vec::new(),
        });
    }

    let placements = assign_placements(finishes, &race_order);
    let penalty = penalty_score(event_entries.len());
    let n_discards = num_discards(race_order.len(), &event.discard_schedule);

    let mut flagged_codes: HashMap<(&SailNumber, &RaceId), &str> = HashMap::new();
    for flagged in &placements.flagged {
        flagged_codes.insert((&flagged.sail_number, &flagged.race_id), &flagged.code);
    }

    struct ScoredEntry<'a> {
        entry: &'a Entry,
        cells: Vec<ScoreCell>,
        total: f64,
        net: f64,
        a8: A8Key,
    }

    let mut scored: Vec<ScoredEntry> = Vec::with_capacity(event_entries.len());
    for entry in event_entries {
        let mut race_scores: Vec<Option<f64>> = Vec::with_capacity(race_order.len());
        let mut annotations: Vec<Option<String>> = Vec::with_capacity(race_order.len());
        for race_id in &race_order {
            if let Some(code) = flagged_codes.get(&(&entry.sail_number, race_id)) {
                race_scores.push(Some(penalty));
                annotations.push(Some((*code).to_string()));
            } else if let Some(placement) = placements.placement(&entry.sail_number, race_id) {
                race_scores.push(Some(placement));
                annotations.push(None);
            } else {
                race_scores.push(Some(penalty));
                annotations.push(Some(DNC.to_string()));
            }
        }

        let (total, net, is_discarded) = total_and_net(&race_scores, n_discards);
        let a8 = A8Key::new(&race_scores, &is_discarded);

        let cells = race_scores
            .iter()
            .zip(&is_discarded)
            .zip(annotations)
            .map(|((score, &discarded), annotation)| ScoreCell {
                score: *score,
                discarded,
                annotation,
            })
            .collect();

        scored.push(ScoredEntry {
            entry,
            cells,
            total,
            net,
            a8,
        });
    }

    // Stable sort: a full A8 tie keeps input order, ranks stay distinct.
    scored.sort_by(|a, b| a.net.total_cmp(&b.net).then_with(|| a.a8.cmp(&b.a8)));

    let rows = scored
        .into_iter()
        .enumerate()
        .map(|(idx, s)| {
            let rank = (idx + 1) as i64;
            ResultRow {
                sail_number: s.entry.sail_number.clone(),
                name: s.entry.name.clone(),
                rank,
                rank_display: rank_display(rank),
                cells: s.cells,
                total: s.total,
                net: s.net,
            }
        })
        .collect();

    Ok(SeriesResult {
        event_id: event_id.clone(),
        race_order,
        rows,
    })
}

/// "1st", "2nd", "3rd", then "{n}th" for every other rank, 11 through 13
/// included.
pub fn rank_display(rank: i64) -> String {
    match rank {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}
