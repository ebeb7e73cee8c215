//! Progress Aggregator
//!
//! Summary statistics over the bucket assignment and the practice history.
//! Recomputed from scratch on every call.

use std::collections::{BTreeMap, HashMap};

use crate::buckets::BucketAssignment;
use crate::types::{PracticeEvent, ProgressStats};

/// Per-bucket card counts, zero-filled from bucket 0 to the highest bucket present
pub fn cards_by_bucket(buckets: &BucketAssignment) -> BTreeMap<u32, usize> {
    let mut counts: BTreeMap<u32, usize> = (0..=buckets.max_bucket()).map(|b| (b, 0)).collect();
    for (bucket, cards) in buckets.iter() {
        counts.insert(bucket, cards.len());
    }
    counts
}

/// Percentage of answers graded `Easy` or `Hard`; 0 for an empty history
pub fn success_rate(history: &[PracticeEvent]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let successes = history
        .iter()
        .filter(|event| event.difficulty.counts_as_success())
        .count();
    successes as f64 / history.len() as f64 * 100.0
}

/// Mean number of history events per distinct card; 0 for an empty history
pub fn average_moves_per_card(history: &[PracticeEvent]) -> f64 {
    let mut moves: HashMap<(&str, &str), usize> = HashMap::new();
    for event in history {
        *moves.entry(event.card_key()).or_insert(0) += 1;
    }
    if moves.is_empty() {
        return 0.0;
    }
    let total: usize = moves.values().sum();
    total as f64 / moves.len() as f64
}

pub fn compute_progress(buckets: &BucketAssignment, history: &[PracticeEvent]) -> ProgressStats {
    ProgressStats {
        total_cards: buckets.total_cards(),
        cards_by_bucket: cards_by_bucket(buckets),
        success_rate: success_rate(history),
        average_moves_per_card: average_moves_per_card(history),
        total_practice_events: history.len(),
    }
}
