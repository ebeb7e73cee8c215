//! Leitner Scheduler
//!
//! Bucket 0 is reviewed every day; bucket `n` every `2^n` days, so each
//! promotion doubles the review interval.

use std::collections::BTreeSet;

use crate::buckets::BucketArrayView;
use crate::types::{Card, NEW_CARDS_BUCKET};

/// Days between reviews of `bucket`, `None` when `2^bucket` overflows
pub fn review_interval(bucket: u32) -> Option<u64> {
    if bucket == NEW_CARDS_BUCKET {
        return Some(1);
    }
    1u64.checked_shl(bucket)
}

/// Whether cards in `bucket` are due on `day`.
///
/// Day 0 makes every bucket due. Buckets whose interval does not fit in a
/// `u64` only come due on day 0.
pub fn is_bucket_due(bucket: u32, day: u64) -> bool {
    if bucket == NEW_CARDS_BUCKET {
        return true;
    }
    match review_interval(bucket) {
        Some(interval) => day % interval == 0,
        None => day == 0,
    }
}

/// Union of the cards in every bucket due on `day`
pub fn due_cards(view: &BucketArrayView, day: u64) -> BTreeSet<Card> {
    view.iter()
        .filter(|(bucket, _)| is_bucket_due(*bucket, day))
        .flat_map(|(_, cards)| cards.iter().cloned())
        .collect()
}
