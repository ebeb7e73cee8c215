//! Common Types and Constants
//!
//! Shared data structures used across the scheduling modules.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Bucket holding new cards and cards answered wrong
pub const NEW_CARDS_BUCKET: u32 = 0;

/// Returned by hint lookup when a card carries no usable hint
pub const NO_HINT_AVAILABLE: &str = "No hint available for this card.";

// ==================== Card ====================

/// A single flashcard.
///
/// Identity is the `(front, back)` pair: two cards with the same faces are the
/// same card for equality, ordering and hashing, whatever their hint or tags.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub front: String,
    pub back: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            hint: None,
            tags: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Natural key of the card
    pub fn key(&self) -> (&str, &str) {
        (self.front.as_str(), self.back.as_str())
    }

    pub fn matches(&self, front: &str, back: &str) -> bool {
        self.front == front && self.back == back
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

// ==================== Difficulty ====================

/// Recall grade reported for a practiced card.
///
/// Ordinals follow the canonical four-level enumeration. Only `Wrong` and
/// `Hard` have dedicated transitions; every other grade promotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Wrong,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Wrong,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wrong" => Some(Difficulty::Wrong),
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Difficulty::Wrong),
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            Difficulty::Wrong => 0,
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Wrong => "wrong",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Grades counted as a successful recall in progress statistics
    pub fn counts_as_success(&self) -> bool {
        matches!(self, Difficulty::Easy | Difficulty::Hard)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== History ====================

/// One answered card, appended to the practice history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeEvent {
    pub card_front: String,
    pub card_back: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub difficulty: Difficulty,
    /// `None` when the card was not placed in any bucket before the answer
    pub previous_bucket: Option<u32>,
    pub new_bucket: u32,
}

impl PracticeEvent {
    pub fn new(
        card: &Card,
        timestamp: i64,
        difficulty: Difficulty,
        previous_bucket: Option<u32>,
        new_bucket: u32,
    ) -> Self {
        Self {
            card_front: card.front.clone(),
            card_back: card.back.clone(),
            timestamp,
            difficulty,
            previous_bucket,
            new_bucket,
        }
    }

    pub fn card_key(&self) -> (&str, &str) {
        (self.card_front.as_str(), self.card_back.as_str())
    }
}

// ==================== Progress ====================

/// Snapshot of learning progress, recomputed on every request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_cards: usize,
    pub cards_by_bucket: BTreeMap<u32, usize>,
    /// Percentage in `[0, 100]`
    pub success_rate: f64,
    pub average_moves_per_card: f64,
    pub total_practice_events: usize,
}

// ==================== Tests ====================
