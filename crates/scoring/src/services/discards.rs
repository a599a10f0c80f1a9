use crate::error::{Result, ScoringError};

/// Reject discard schedules that are not lists of non-negative thresholds.
pub fn validate_schedule(schedule: &[i64]) -> Result<()> {
    if let Some(t) = schedule.iter().find(|t| **t < 0) {
        return Err(ScoringError::InvalidDiscardSchedule(format!(
            "thresholds must be non-negative, got {t}"
        )));
    }
    Ok(())
}

/// How many worst races an entry may discard.
///
/// The count of thresholds the race count has reached: `[3, 6, 9]` with
/// 4 races allows 1 discard, with 9 races all 3. Constant across every
/// entry of an event, so it is computed once per scoring run.
pub fn num_discards(n_races: usize, thresholds: &[i64]) -> usize {
    thresholds.iter().filter(|t| n_races as i64 >= **t).count()
}

/// TOTAL, NET, and the discard mask for one entry's score vector.
///
/// TOTAL sums every present score. The worst `num_discards` present
/// scores are marked discarded, ranked by score descending then race
/// index descending, so of two equal scores the later race goes first.
/// NET is TOTAL minus the discarded sum. With zero discards or zero
/// present scores nothing is discarded and NET equals TOTAL.
pub fn total_and_net(
    race_scores: &[Option<f64>],
    num_discards: usize,
) -> (f64, f64, Vec<bool>) {
    let scored: Vec<(f64, usize)> = race_scores
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.map(|s| (s, i)))
        .collect();
    let total: f64 = scored.iter().map(|(s, _)| *s).sum();
    let mut is_discarded = vec![false; race_scores.len()];

    if num_discards == 0 || scored.is_empty() {
        return (total, total, is_discarded);
    }

    let mut by_worst = scored;
    by_worst.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    let to_discard = num_discards.min(by_worst.len());
    for &(_, i) in &by_worst[..to_discard] {
        is_discarded[i] = true;
    }

    let discarded_sum: f64 = by_worst[..to_discard].iter().map(|(s, _)| *s).sum();
    (total, total - discarded_sum, is_discarded)
}
