use leitner_algo::{
    compute_progress, due_cards, get_hint, update_with_outcome, Card, Difficulty, PracticeEvent,
    ProgressStats,
};
use serde::Serialize;
use serde_json::Value;

use crate::response::AppError;
use crate::store::StudyStore;

#[derive(Debug, thiserror::Error)]
pub enum PracticeError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<PracticeError> for AppError {
    fn from(err: PracticeError) -> Self {
        match err {
            PracticeError::Validation(message) => AppError::validation(message),
            PracticeError::NotFound(message) => AppError::not_found(message),
            PracticeError::Conflict(message) => AppError::conflict(message),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeSession {
    pub cards: Vec<Card>,
    pub day: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedCard {
    #[serde(flatten)]
    pub card: Card,
    pub bucket: u32,
}

#[derive(Debug, Clone, Default)]
pub struct NewCard {
    pub front: Option<String>,
    pub back: Option<String>,
    pub hint: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Accepts either a grade name (`"easy"`) or its ordinal (`1`)
pub fn parse_difficulty(value: Option<&Value>) -> Result<Difficulty, PracticeError> {
    let parsed = match value {
        Some(Value::String(name)) => Difficulty::from_str(name.trim()),
        Some(Value::Number(number)) => number.as_i64().and_then(Difficulty::from_index),
        _ => None,
    };
    parsed.ok_or_else(|| PracticeError::Validation("Invalid difficulty level".to_string()))
}

fn require_card_key<'a>(
    front: Option<&'a str>,
    back: Option<&'a str>,
) -> Result<(&'a str, &'a str), PracticeError> {
    match (front, back) {
        (Some(front), Some(back)) => Ok((front, back)),
        _ => Err(PracticeError::Validation(
            "Missing cardFront or cardBack".to_string(),
        )),
    }
}

fn resolve_card(store: &StudyStore, front: &str, back: &str) -> Result<Card, PracticeError> {
    store
        .find_card(front, back)
        .ok_or_else(|| PracticeError::NotFound("Card not found".to_string()))
}

pub fn practice_session(store: &StudyStore) -> PracticeSession {
    let day = store.current_day();
    let view = store.buckets().to_array_view();
    let cards: Vec<Card> = due_cards(&view, day).into_iter().collect();

    tracing::info!(day, due = cards.len(), "practice session served");

    PracticeSession { cards, day }
}

/// Applies an answer, swaps in the new snapshot and appends the history record
pub fn record_answer(
    store: &mut StudyStore,
    front: Option<&str>,
    back: Option<&str>,
    difficulty: Option<&Value>,
    timestamp: i64,
) -> Result<PracticeEvent, PracticeError> {
    let difficulty = parse_difficulty(difficulty)?;
    let (front, back) = require_card_key(front, back)?;
    let card = resolve_card(store, front, back)?;

    let outcome = update_with_outcome(store.buckets(), &card, difficulty);
    store.set_buckets(outcome.buckets);

    let event = PracticeEvent::new(
        &card,
        timestamp,
        difficulty,
        outcome.previous_bucket,
        outcome.new_bucket,
    );
    store.add_history_record(event.clone());

    tracing::info!(
        front = %card.front,
        %difficulty,
        previous_bucket = ?outcome.previous_bucket,
        new_bucket = outcome.new_bucket,
        "card updated"
    );

    Ok(event)
}

pub fn hint_for(
    store: &StudyStore,
    front: Option<&str>,
    back: Option<&str>,
) -> Result<String, PracticeError> {
    let (front, back) = require_card_key(front, back)?;
    let card = resolve_card(store, front, back)?;
    let hint = get_hint(&card).to_string();

    tracing::debug!(front = %card.front, %hint, "hint requested");

    Ok(hint)
}

pub fn progress(store: &StudyStore) -> ProgressStats {
    compute_progress(store.buckets(), store.history())
}

pub fn advance_day(store: &mut StudyStore) -> u64 {
    let day = store.increment_day();
    tracing::info!(day, "advanced simulated day");
    day
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Places a new card in bucket 0
pub fn add_card(store: &mut StudyStore, input: NewCard) -> Result<Card, PracticeError> {
    let (Some(front), Some(back)) = (non_blank(input.front), non_blank(input.back)) else {
        return Err(PracticeError::Validation(
            "Front and back are required".to_string(),
        ));
    };

    let mut card = Card::new(front, back);
    card.hint = non_blank(input.hint);
    card.tags = input.tags.unwrap_or_default();

    let Some(next) = store.buckets().with_new_card(card.clone()) else {
        return Err(PracticeError::Conflict(
            "A card with the same front and back already exists".to_string(),
        ));
    };
    store.set_buckets(next);

    tracing::info!(front = %card.front, "added new card");

    Ok(card)
}

pub fn list_cards(store: &StudyStore) -> Vec<PlacedCard> {
    store
        .buckets()
        .placed_cards()
        .map(|(bucket, card)| PlacedCard {
            card: card.clone(),
            bucket,
        })
        .collect()
}
