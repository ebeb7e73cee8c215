//! In-memory study state: simulated day, bucket assignment and practice history.
//!
//! The store only swaps snapshots in and out; all scheduling decisions are
//! made by `leitner_algo`. Callers serialize access through `AppState`.

use leitner_algo::{BucketAssignment, Card, PracticeEvent};

#[derive(Debug, Clone)]
pub struct StudyStore {
    day: u64,
    buckets: BucketAssignment,
    history: Vec<PracticeEvent>,
}

impl StudyStore {
    pub fn new(start_day: u64, buckets: BucketAssignment) -> Self {
        Self {
            day: start_day,
            buckets,
            history: Vec::new(),
        }
    }

    pub fn with_cards<I>(start_day: u64, cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self::new(start_day, BucketAssignment::with_new_cards(cards))
    }

    pub fn current_day(&self) -> u64 {
        self.day
    }

    /// Advances the simulated day and returns the new value
    pub fn increment_day(&mut self) -> u64 {
        self.day = self.day.saturating_add(1);
        self.day
    }

    pub fn buckets(&self) -> &BucketAssignment {
        &self.buckets
    }

    pub fn set_buckets(&mut self, buckets: BucketAssignment) {
        self.buckets = buckets;
    }

    pub fn find_card(&self, front: &str, back: &str) -> Option<Card> {
        self.buckets.find_card(front, back).cloned()
    }

    pub fn find_card_bucket(&self, card: &Card) -> Option<u32> {
        self.buckets.bucket_of(card)
    }

    pub fn history(&self) -> &[PracticeEvent] {
        &self.history
    }

    pub fn add_history_record(&mut self, event: PracticeEvent) {
        self.history.push(event);
    }
}

impl Default for StudyStore {
    fn default() -> Self {
        Self::new(0, BucketAssignment::new())
    }
}
