use std::cmp::Ordering;

/// RRS A8 comparison key, consulted only between entries with equal NET.
///
/// `ranked` is the entry's non-discarded scores sorted best first (A8.1).
/// `countback` is every score in reverse race order with absent slots
/// mapped to infinity, so a missing race always compares worse than any
/// real score (A8.2). Keys compare lexicographically, `ranked` before
/// `countback`.
#[derive(Debug, Clone, PartialEq)]
pub struct A8Key {
    ranked: Vec<f64>,
    countback: Vec<f64>,
}

impl A8Key {
    pub fn new(race_scores: &[Option<f64>], is_discarded: &[bool]) -> Self {
        let mut ranked: Vec<f64> = race_scores
            .iter()
            .zip(is_discarded)
            .filter_map(|(score, &discarded)| match *score {
                Some(s) if !discarded => Some(s),
                _ => None,
            })
            .collect();
        ranked.sort_by(f64::total_cmp);

        let countback = race_scores
            .iter()
            .rev()
            .map(|score| score.unwrap_or(f64::INFINITY))
            .collect();

        Self { ranked, countback }
    }

    pub fn cmp(&self, other: &Self) -> Ordering {
        cmp_scores(&self.ranked, &other.ranked)
            .then_with(|| cmp_scores(&self.countback, &other.countback))
    }
}

// Lexicographic with the shorter sequence first on an equal prefix.
fn cmp_scores(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        let ord = x.total_cmp(y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}
