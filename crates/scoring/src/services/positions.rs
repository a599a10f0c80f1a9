use std::collections::{HashMap, HashSet};

use crate::models::{EventId, Finish, Race, RaceId, SailNumber};

/// The canonical race sequence for an event: start time ascending, race
/// id ascending as the tiebreak. Fixed once per computation; every later
/// stage aligns its per-race data to this order.
pub fn race_order(races: &[Race], event_id: &EventId) -> Vec<RaceId> {
    let mut event_races: Vec<&Race> = races.iter().filter(|r| &r.event_id == event_id).collect();
    event_races.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.race_id.cmp(&b.race_id))
    });
    event_races.into_iter().map(|r| r.race_id.clone()).collect()
}

/// A finish the race committee scored instead of the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct FlaggedFinish {
    pub sail_number: SailNumber,
    pub race_id: RaceId,
    pub code: String,
}

/// Per-race placements plus the finishes that left the ranking pool.
#[derive(Debug, Default)]
pub struct RacePlacements {
    placements: HashMap<SailNumber, HashMap<RaceId, f64>>,
    pub flagged: Vec<FlaggedFinish>,
}

impl RacePlacements {
    pub fn placement(&self, sail_number: &SailNumber, race_id: &RaceId) -> Option<f64> {
        self.placements
            .get(sail_number)
            .and_then(|by_race| by_race.get(race_id))
            .copied()
    }
}

/// Convert finish times into 1-based placements, one race at a time.
///
/// Finishes carrying a penalty code are pulled out of the ranking pool
/// and returned as [`FlaggedFinish`] records; the remaining finishes are
/// sorted by finish time (stable, so equal times keep input order) and
/// placed 1, 2, 3, ... Duplicate records for one boat in one race keep
/// the earliest finish time, and a boat that is both time-recorded and
/// rc-scored keeps only the rc score. Finishes referencing a race id
/// outside `race_order` are dropped.
pub fn assign_placements(finishes: &[Finish], race_order: &[RaceId]) -> RacePlacements {
    let mut by_race: HashMap<&RaceId, Vec<&Finish>> =
        race_order.iter().map(|rid| (rid, Vec::new())).collect();
    for finish in finishes {
        if let Some(bucket) = by_race.get_mut(&finish.race_id) {
            bucket.push(finish);
        }
    }

    let mut result = RacePlacements::default();
    for race_id in race_order {
        let race_finishes = &by_race[race_id];

        let (flagged, normal): (Vec<&Finish>, Vec<&Finish>) = race_finishes
            .iter()
            .copied()
            .partition(|f| f.penalty_code().is_some());

        let flagged = dedup_earliest(flagged, race_id);
        let flagged_sails: HashSet<&SailNumber> =
            flagged.iter().map(|f| &f.sail_number).collect();

        let normal: Vec<&Finish> = normal
            .into_iter()
            .filter(|f| {
                if flagged_sails.contains(&f.sail_number) {
                    tracing::warn!(
                        "Finish for {} in race {} is both time-recorded and rc-scored; keeping the rc score",
                        f.sail_number,
                        race_id
                    );
                    return false;
                }
                true
            })
            .collect();
        let mut normal = dedup_earliest(normal, race_id);
        normal.sort_by(|a, b| a.finish_time.cmp(&b.finish_time));

        for (idx, finish) in normal.iter().enumerate() {
            result
                .placements
                .entry(finish.sail_number.clone())
                .or_default()
                .insert(race_id.clone(), (idx + 1) as f64);
        }

        for finish in flagged {
            if let Some(code) = finish.penalty_code() {
                result.flagged.push(FlaggedFinish {
                    sail_number: finish.sail_number.clone(),
                    race_id: race_id.clone(),
                    code: code.to_string(),
                });
            }
        }
    }

    result
}

/// The fixed low-point penalty for an event: one worse than any placement
/// the fleet can produce.
pub fn penalty_score(entry_count: usize) -> f64 {
    (entry_count + 1) as f64
}

// Keep one record per boat, preferring the earliest finish time. The
// survivor occupies the first record's input slot, which is the order the
// stable time sort sees.
fn dedup_earliest<'a>(finishes: Vec<&'a Finish>, race_id: &RaceId) -> Vec<&'a Finish> {
    let mut index: HashMap<&SailNumber, usize> = HashMap::new();
    let mut kept: Vec<&Finish> = Vec::new();
    for finish in finishes {
        match index.get(&finish.sail_number) {
            None => {
                index.insert(&finish.sail_number, kept.len());
                kept.push(finish);
            }
            Some(&at) => {
                tracing::warn!(
                    "Duplicate finish for {} in race {}; keeping the earliest",
                    finish.sail_number,
                    race_id
                );
                if finish.finish_time < kept[at].finish_time {
                    kept[at] = finish;
                }
            }
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn race(event: &str, id: &str, h: u32, m: u32) -> Race {
        Race {
            event_id: EventId::new(event),
            race_id: RaceId::new(id),
            start_time: at(h, m, 0),
            notes: None,
        }
    }

    fn finish(sail: &str, race: &str, h: u32, m: u32, s: u32) -> Finish {
        Finish {
            sail_number: SailNumber::new(sail),
            race_id: RaceId::new(race),
            finish_time: at(h, m, s),
            rc_scoring: None,
        }
    }

    fn finish_code(sail: &str, race: &str, h: u32, m: u32, s: u32, code: &str) -> Finish {
        Finish {
            rc_scoring: Some(code.to_string()),
            ..finish(sail, race, h, m, s)
        }
    }

    fn sn(sail: &str) -> SailNumber {
        SailNumber::new(sail)
    }

    fn rid(id: &str) -> RaceId {
        RaceId::new(id)
    }

    #[test]
    fn test_race_order_sorts_by_start_then_id() {
        let races = vec![
            race("e1", "3", 14, 0),
            race("e1", "1", 10, 0),
            race("e2", "9", 9, 0),
            race("e1", "2", 14, 0),
        ];
        let order = race_order(&races, &EventId::new("e1"));
        assert_eq!(order, vec![rid("1"), rid("2"), rid("3")]);
    }

    #[test]
    fn test_placements_follow_finish_times() {
        let finishes = vec![
            finish("B", "1", 14, 32, 0),
            finish("A", "1", 14, 30, 0),
            finish("C", "1", 14, 34, 0),
        ];
        let placements = assign_placements(&finishes, &[rid("1")]);

        assert_eq!(placements.placement(&sn("A"), &rid("1")), Some(1.0));
        assert_eq!(placements.placement(&sn("B"), &rid("1")), Some(2.0));
        assert_eq!(placements.placement(&sn("C"), &rid("1")), Some(3.0));
        assert!(placements.flagged.is_empty());
    }

    #[test]
    fn test_flagged_finish_leaves_ranking_pool() {
        let finishes = vec![
            finish("A", "1", 14, 30, 0),
            finish_code("B", "1", 14, 31, 0, "DNF"),
            finish("C", "1", 14, 32, 0),
        ];
        let placements = assign_placements(&finishes, &[rid("1")]);

        assert_eq!(placements.placement(&sn("A"), &rid("1")), Some(1.0));
        assert_eq!(placements.placement(&sn("B"), &rid("1")), None);
        assert_eq!(placements.placement(&sn("C"), &rid("1")), Some(2.0));
        assert_eq!(
            placements.flagged,
            vec![FlaggedFinish {
                sail_number: sn("B"),
                race_id: rid("1"),
                code: "DNF".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_finish_keeps_earliest() {
        // A's later record arrives first; the earlier time must still win
        // the placement comparison against B.
        let finishes = vec![
            finish("A", "1", 14, 35, 0),
            finish("A", "1", 14, 30, 0),
            finish("B", "1", 14, 32, 0),
        ];
        let placements = assign_placements(&finishes, &[rid("1")]);

        assert_eq!(placements.placement(&sn("A"), &rid("1")), Some(1.0));
        assert_eq!(placements.placement(&sn("B"), &rid("1")), Some(2.0));
    }

    #[test]
    fn test_rc_score_wins_over_time_record() {
        let finishes = vec![
            finish("A", "1", 14, 30, 0),
            finish_code("A", "1", 14, 30, 0, "DSQ"),
            finish("B", "1", 14, 31, 0),
        ];
        let placements = assign_placements(&finishes, &[rid("1")]);

        assert_eq!(placements.placement(&sn("A"), &rid("1")), None);
        assert_eq!(placements.placement(&sn("B"), &rid("1")), Some(1.0));
        assert_eq!(placements.flagged.len(), 1);
        assert_eq!(placements.flagged[0].code, "DSQ");
    }

    #[test]
    fn test_equal_times_keep_input_order() {
        let finishes = vec![
            finish("A", "1", 14, 30, 0),
            finish("B", "1", 14, 30, 0),
        ];
        let placements = assign_placements(&finishes, &[rid("1")]);

        assert_eq!(placements.placement(&sn("A"), &rid("1")), Some(1.0));
        assert_eq!(placements.placement(&sn("B"), &rid("1")), Some(2.0));
    }

    #[test]
    fn test_unknown_race_dropped() {
        let finishes = vec![
            finish("A", "1", 14, 30, 0),
            finish("A", "99", 15, 30, 0),
        ];
        let placements = assign_placements(&finishes, &[rid("1")]);

        assert_eq!(placements.placement(&sn("A"), &rid("1")), Some(1.0));
        assert_eq!(placements.placement(&sn("A"), &rid("99")), None);
    }

    #[test]
    fn test_penalty_score_is_fleet_size_plus_one() {
        assert_eq!(penalty_score(5), 6.0);
        assert_eq!(penalty_score(0), 1.0);
    }
}
