//! # leitner-algo - Leitner flashcard scheduling core
//!
//! Pure Rust implementation of a Leitner spaced-repetition system:
//!
//! - **Bucket Assignment** - which numbered bucket each card sits in
//! - **Scheduler** - bucket 0 every day, bucket `n` every `2^n` days
//! - **Update Engine** - grade-driven bucket transitions
//! - **Progress** - summary statistics over the practice history
//!
//! Everything here is synchronous and side-effect free. Callers own the
//! state; functions take a snapshot and return a new one.
//!
//! ## Modules
//!
//! - [`buckets`] - bucket assignment model and dense array view
//! - [`scheduler`] - due-card selection
//! - [`update`] - bucket transitions
//! - [`hint`] - hint lookup
//! - [`progress`] - progress statistics
//! - [`types`] - cards, grades, history events and constants
//!
//! ## Example
//!
//! ```rust
//! use leitner_algo::{due_cards, update, BucketAssignment, Card, Difficulty};
//!
//! let card = Card::new("hola", "hello");
//! let buckets = BucketAssignment::with_new_cards([card.clone()]);
//!
//! let due = due_cards(&buckets.to_array_view(), 1);
//! assert!(due.contains(&card));
//!
//! let buckets = update(&buckets, &card, Difficulty::Easy);
//! assert_eq!(buckets.bucket_of(&card), Some(1));
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod buckets;
pub mod hint;
pub mod progress;
pub mod scheduler;
pub mod types;
pub mod update;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use buckets::{to_array_view, BucketArrayView, BucketAssignment};

pub use hint::get_hint;

pub use progress::compute_progress;

pub use scheduler::{due_cards, is_bucket_due, review_interval};

pub use update::{next_bucket, update, update_with_outcome, UpdateOutcome};
