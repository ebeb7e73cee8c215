use std::collections::HashSet;
use std::path::Path;

use leitner_algo::Card;

use crate::store::StudyStore;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed deck {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed deck {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of cards, dropping blank-faced cards and later duplicates
/// of the same front/back
pub async fn load_seed_cards(path: &Path) -> Result<Vec<Card>, SeedError> {
    let display = path.display().to_string();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: display.clone(),
            source,
        })?;

    let parsed: Vec<Card> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: display.clone(),
        source,
    })?;

    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(parsed.len());
    for card in parsed {
        if card.front.trim().is_empty() || card.back.trim().is_empty() {
            tracing::warn!(front = %card.front, back = %card.back, "seed card with blank face skipped");
            continue;
        }
        if seen.insert(card.clone()) {
            cards.push(card);
        } else {
            tracing::warn!(front = %card.front, back = %card.back, "duplicate card in seed deck skipped");
        }
    }

    Ok(cards)
}

/// Initial store for the process; a broken seed deck never blocks startup
pub async fn initial_store(seed_path: Option<&Path>, start_day: u64) -> StudyStore {
    let Some(path) = seed_path else {
        return StudyStore::with_cards(start_day, Vec::new());
    };

    match load_seed_cards(path).await {
        Ok(cards) => {
            tracing::info!(count = cards.len(), path = %path.display(), "seeded deck into bucket 0");
            StudyStore::with_cards(start_day, cards)
        }
        Err(err) => {
            tracing::warn!(error = %err, "seed deck not loaded, starting empty");
            StudyStore::with_cards(start_day, Vec::new())
        }
    }
}
