//! Hint lookup

use crate::types::{Card, NO_HINT_AVAILABLE};

/// Stored hint of `card`, or [`NO_HINT_AVAILABLE`] when it has none
pub fn get_hint(card: &Card) -> &str {
    match card.hint.as_deref() {
        Some(hint) if !hint.is_empty() => hint,
        _ => NO_HINT_AVAILABLE,
    }
}
