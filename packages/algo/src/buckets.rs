//! Bucket Assignment Model
//!
//! The authoritative scheduling state: which bucket every card currently
//! sits in. A card belongs to at most one bucket. Values are treated as
//! snapshots; operations that change placement return a new assignment.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::{Card, NEW_CARDS_BUCKET};

/// Mapping from bucket number to the cards in that bucket
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAssignment")]
pub struct BucketAssignment {
    buckets: BTreeMap<u32, BTreeSet<Card>>,
}

/// Wire shape of an assignment before single-membership is enforced
#[derive(Deserialize)]
struct RawAssignment {
    buckets: BTreeMap<u32, Vec<Card>>,
}

impl From<RawAssignment> for BucketAssignment {
    fn from(raw: RawAssignment) -> Self {
        Self::from_buckets(raw.buckets)
    }
}

/// Dense per-bucket view, index `i` holding the cards of bucket `i`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketArrayView {
    buckets: Vec<BTreeSet<Card>>,
}

impl BucketAssignment {
    /// Empty assignment with bucket 0 present
    pub fn new() -> Self {
        let mut buckets = BTreeMap::new();
        buckets.insert(NEW_CARDS_BUCKET, BTreeSet::new());
        Self { buckets }
    }

    /// Places every card in bucket 0, keeping the first of any duplicates
    pub fn with_new_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut assignment = Self::new();
        assignment.bucket_mut(NEW_CARDS_BUCKET).extend(cards);
        assignment
    }

    /// Builds an assignment from explicit `(bucket, cards)` pairs.
    ///
    /// A card listed under several buckets is kept in the lowest one so the
    /// single-membership invariant holds for any input.
    pub fn from_buckets<I, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, C)>,
        C: IntoIterator<Item = Card>,
    {
        let mut grouped: BTreeMap<u32, Vec<Card>> = BTreeMap::new();
        for (bucket, cards) in entries {
            grouped.entry(bucket).or_default().extend(cards);
        }

        let mut assignment = Self {
            buckets: BTreeMap::new(),
        };
        for (bucket, cards) in grouped {
            assignment.bucket_mut(bucket).extend(cards);
        }
        assignment.dedupe_lowest_bucket();
        assignment
    }

    fn dedupe_lowest_bucket(&mut self) {
        let mut seen: BTreeSet<Card> = BTreeSet::new();
        for cards in self.buckets.values_mut() {
            cards.retain(|card| seen.insert(card.clone()));
        }
    }

    pub(crate) fn bucket_mut(&mut self, bucket: u32) -> &mut BTreeSet<Card> {
        self.buckets.entry(bucket).or_default()
    }

    pub fn get(&self, bucket: u32) -> Option<&BTreeSet<Card>> {
        self.buckets.get(&bucket)
    }

    /// Bucket numbers present in the mapping, including empty ones
    pub fn bucket_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.buckets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &BTreeSet<Card>)> {
        self.buckets.iter().map(|(bucket, cards)| (*bucket, cards))
    }

    /// Every placed card with its bucket, in bucket order
    pub fn placed_cards(&self) -> impl Iterator<Item = (u32, &Card)> {
        self.iter()
            .flat_map(|(bucket, cards)| cards.iter().map(move |card| (bucket, card)))
    }

    /// Highest bucket number present, 0 when the mapping is empty
    pub fn max_bucket(&self) -> u32 {
        self.buckets.keys().next_back().copied().unwrap_or(NEW_CARDS_BUCKET)
    }

    pub fn total_cards(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_cards() == 0
    }

    /// Bucket currently holding `card`, scanning every bucket
    pub fn bucket_of(&self, card: &Card) -> Option<u32> {
        self.buckets
            .iter()
            .find(|(_, cards)| cards.contains(card))
            .map(|(bucket, _)| *bucket)
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.bucket_of(card).is_some()
    }

    /// Resolves a card by its natural key
    pub fn find_card(&self, front: &str, back: &str) -> Option<&Card> {
        self.buckets
            .values()
            .flat_map(|cards| cards.iter())
            .find(|card| card.matches(front, back))
    }

    /// New assignment with `card` added to bucket 0.
    ///
    /// Returns `None` when a card with the same identity is already placed.
    pub fn with_new_card(&self, card: Card) -> Option<Self> {
        if self.contains(&card) {
            return None;
        }
        let mut next = self.clone();
        next.bucket_mut(NEW_CARDS_BUCKET).insert(card);
        Some(next)
    }

    pub fn to_array_view(&self) -> BucketArrayView {
        to_array_view(self)
    }
}

/// Dense view from bucket 0 up to the highest bucket present.
///
/// Missing bucket numbers below the maximum become empty sets, so the view
/// always has `max_bucket + 1` entries.
pub fn to_array_view(assignment: &BucketAssignment) -> BucketArrayView {
    let len = assignment.max_bucket() as usize + 1;
    let mut buckets = vec![BTreeSet::new(); len];
    for (bucket, cards) in assignment.iter() {
        buckets[bucket as usize] = cards.clone();
    }
    BucketArrayView { buckets }
}

impl BucketArrayView {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, bucket: usize) -> Option<&BTreeSet<Card>> {
        self.buckets.get(bucket)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &BTreeSet<Card>)> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(bucket, cards)| (bucket as u32, cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> Card {
        Card::new(name, format!("{name}-back"))
    }

    #[test]
    fn test_new_has_empty_bucket_zero() {
        let assignment = BucketAssignment::new();
        assert_eq!(assignment.get(0).map(BTreeSet::len), Some(0));
        assert_eq!(assignment.total_cards(), 0);
        assert!(assignment.is_empty());
    }

    #[test]
    fn test_array_view_fills_holes() {
        let assignment = BucketAssignment::from_buckets([
            (0, vec![card("a")]),
            (3, vec![card("b")]),
        ]);
        let view = assignment.to_array_view();

        assert_eq!(view.len(), 4);
        assert!(view.get(1).unwrap().is_empty());
        assert!(view.get(2).unwrap().is_empty());
        assert!(view.get(3).unwrap().contains(&card("b")));
    }

    #[test]
    fn test_array_view_of_empty_mapping() {
        let assignment = BucketAssignment::default();
        let view = to_array_view(&assignment);
        assert_eq!(view.len(), 1);
        assert!(view.get(0).unwrap().is_empty());
    }

    #[test]
    fn test_array_view_keeps_trailing_empty_bucket() {
        let assignment = BucketAssignment::from_buckets([
            (0, vec![card("a")]),
            (2, Vec::new()),
        ]);
        assert_eq!(assignment.to_array_view().len(), 3);
    }

    #[test]
    fn test_from_buckets_keeps_lowest_duplicate() {
        let assignment = BucketAssignment::from_buckets([
            (2, vec![card("a")]),
            (1, vec![card("a"), card("b")]),
        ]);
        assert_eq!(assignment.bucket_of(&card("a")), Some(1));
        assert_eq!(assignment.total_cards(), 2);
    }

    #[test]
    fn test_find_card_by_natural_key() {
        let assignment = BucketAssignment::from_buckets([(4, vec![card("x").with_hint("h")])]);
        let found = assignment.find_card("x", "x-back").unwrap();
        assert_eq!(found.hint.as_deref(), Some("h"));
        assert!(assignment.find_card("x", "other").is_none());
    }

    #[test]
    fn test_with_new_card_rejects_duplicates() {
        let assignment = BucketAssignment::from_buckets([(2, vec![card("a")])]);

        assert!(assignment.with_new_card(card("a")).is_none());

        let next = assignment.with_new_card(card("b")).unwrap();
        assert_eq!(next.bucket_of(&card("b")), Some(0));
        assert!(!assignment.contains(&card("b")));
    }

    #[test]
    fn test_placed_cards_in_bucket_order() {
        let assignment = BucketAssignment::from_buckets([
            (1, vec![card("b")]),
            (0, vec![card("a")]),
        ]);
        let placed: Vec<_> = assignment
            .placed_cards()
            .map(|(bucket, c)| (bucket, c.front.clone()))
            .collect();
        assert_eq!(placed, vec![(0, "a".to_string()), (1, "b".to_string())]);
    }

    #[test]
    fn test_deserialize_keeps_lowest_duplicate() {
        let json = serde_json::json!({
            "buckets": {
                "1": [{"front": "a", "back": "a-back"}],
                "2": [{"front": "a", "back": "a-back"}, {"front": "b", "back": "b-back"}]
            }
        });
        let assignment: BucketAssignment = serde_json::from_value(json).unwrap();

        assert_eq!(assignment.total_cards(), 2);
        assert_eq!(assignment.bucket_of(&card("a")), Some(1));
        assert_eq!(assignment.bucket_of(&card("b")), Some(2));

        let next = crate::update::update(&assignment, &card("a"), crate::Difficulty::Wrong);
        assert_eq!(next.total_cards(), 2);
        assert_eq!(next.placed_cards().filter(|(_, c)| **c == card("a")).count(), 1);
    }
}
