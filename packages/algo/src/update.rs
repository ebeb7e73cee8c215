//! Update Engine
//!
//! Moves a card between buckets after an answer. The input assignment is
//! never modified; every call returns a fresh snapshot.

use crate::buckets::BucketAssignment;
use crate::types::{Card, Difficulty, NEW_CARDS_BUCKET};

/// Result of applying one answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub buckets: BucketAssignment,
    /// Bucket before the answer, `None` if the card was not placed
    pub previous_bucket: Option<u32>,
    pub new_bucket: u32,
}

/// Destination bucket for a card currently in `current`.
///
/// - `Wrong` resets to bucket 0
/// - `Hard` keeps the card where it is (bucket 0 if unplaced)
/// - any other grade promotes by one (bucket 1 if unplaced)
pub fn next_bucket(current: Option<u32>, difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Wrong => NEW_CARDS_BUCKET,
        Difficulty::Hard => current.unwrap_or(NEW_CARDS_BUCKET),
        Difficulty::Easy | Difficulty::Medium => match current {
            Some(bucket) => bucket.saturating_add(1),
            None => NEW_CARDS_BUCKET + 1,
        },
    }
}

/// Applies an answer and reports where the card came from and went to
pub fn update_with_outcome(
    buckets: &BucketAssignment,
    card: &Card,
    difficulty: Difficulty,
) -> UpdateOutcome {
    let mut next = buckets.clone();
    let previous_bucket = buckets.bucket_of(card);

    // Reinsert the stored value so hint and tags survive the move
    let stored = match previous_bucket {
        Some(bucket) => next.bucket_mut(bucket).take(card),
        None => {
            next.bucket_mut(NEW_CARDS_BUCKET);
            None
        }
    };

    let new_bucket = next_bucket(previous_bucket, difficulty);
    next.bucket_mut(new_bucket).insert(stored.unwrap_or_else(|| card.clone()));

    UpdateOutcome {
        buckets: next,
        previous_bucket,
        new_bucket,
    }
}

/// New assignment after answering `card` with `difficulty`
pub fn update(buckets: &BucketAssignment, card: &Card, difficulty: Difficulty) -> BucketAssignment {
    update_with_outcome(buckets, card, difficulty).buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn card(name: &str) -> Card {
        Card::new(name, format!("{name}!"))
    }

    #[test]
    fn test_easy_promotes_from_zero() {
        let buckets = BucketAssignment::from_buckets([(0, vec![card("a")])]);
        let next = update(&buckets, &card("a"), Difficulty::Easy);

        assert_eq!(next.get(0), Some(&BTreeSet::new()));
        assert_eq!(next.get(1), Some(&BTreeSet::from([card("a")])));
    }

    #[test]
    fn test_wrong_resets_to_zero() {
        let buckets = BucketAssignment::from_buckets([(5, vec![card("a")])]);
        let outcome = update_with_outcome(&buckets, &card("a"), Difficulty::Wrong);

        assert_eq!(outcome.previous_bucket, Some(5));
        assert_eq!(outcome.new_bucket, 0);
        assert_eq!(outcome.buckets.bucket_of(&card("a")), Some(0));
        assert!(outcome.buckets.get(5).unwrap().is_empty());
    }

    #[test]
    fn test_hard_stays_put() {
        let buckets = BucketAssignment::from_buckets([(3, vec![card("a")])]);
        let next = update(&buckets, &card("a"), Difficulty::Hard);
        assert_eq!(next.bucket_of(&card("a")), Some(3));
        assert_eq!(next.total_cards(), 1);
    }

    #[test]
    fn test_medium_promotes() {
        let buckets = BucketAssignment::from_buckets([(2, vec![card("a")])]);
        let next = update(&buckets, &card("a"), Difficulty::Medium);
        assert_eq!(next.bucket_of(&card("a")), Some(3));
    }

    #[test]
    fn test_unplaced_card_transitions() {
        let buckets = BucketAssignment::default();

        let easy = update_with_outcome(&buckets, &card("z"), Difficulty::Easy);
        assert_eq!(easy.previous_bucket, None);
        assert_eq!(easy.new_bucket, 1);
        assert!(easy.buckets.get(0).is_some());

        let hard = update(&buckets, &card("z"), Difficulty::Hard);
        assert_eq!(hard.bucket_of(&card("z")), Some(0));

        let wrong = update(&buckets, &card("z"), Difficulty::Wrong);
        assert_eq!(wrong.bucket_of(&card("z")), Some(0));
    }

    #[test]
    fn test_input_snapshot_untouched() {
        let buckets = BucketAssignment::from_buckets([
            (0, vec![card("a")]),
            (1, vec![card("b")]),
        ]);
        let before = buckets.clone();

        let _ = update(&buckets, &card("a"), Difficulty::Easy);
        let _ = update(&buckets, &card("b"), Difficulty::Wrong);

        assert_eq!(buckets, before);
    }

    #[test]
    fn test_other_cards_unaffected() {
        let buckets = BucketAssignment::from_buckets([
            (0, vec![card("a"), card("b")]),
            (2, vec![card("c")]),
        ]);
        let next = update(&buckets, &card("a"), Difficulty::Easy);
        assert_eq!(next.bucket_of(&card("b")), Some(0));
        assert_eq!(next.bucket_of(&card("c")), Some(2));
        assert_eq!(next.total_cards(), 3);
    }

    #[test]
    fn test_next_bucket_rule() {
        assert_eq!(next_bucket(Some(4), Difficulty::Wrong), 0);
        assert_eq!(next_bucket(Some(4), Difficulty::Hard), 4);
        assert_eq!(next_bucket(Some(4), Difficulty::Easy), 5);
        assert_eq!(next_bucket(Some(4), Difficulty::Medium), 5);
        assert_eq!(next_bucket(None, Difficulty::Easy), 1);
        assert_eq!(next_bucket(None, Difficulty::Hard), 0);
        assert_eq!(next_bucket(Some(u32::MAX), Difficulty::Easy), u32::MAX);
    }

    #[test]
    fn test_updated_card_keeps_its_hint() {
        let hinted = card("a").with_hint("think of apples");
        let buckets = BucketAssignment::from_buckets([(0, vec![hinted])]);
        let next = update(&buckets, &card("a"), Difficulty::Easy);
        let moved = next.find_card("a", "a!").unwrap();
        assert_eq!(moved.hint.as_deref(), Some("think of apples"));
    }
}
