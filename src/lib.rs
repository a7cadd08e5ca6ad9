#![warn(missing_docs)]

//! Fuzzy guest-name matching for RSVP lookups.
//!
//! `guestmatch` finds the single guest, among every guest of every invite,
//! whose name best matches what someone typed. It tolerates missing
//! accents, case differences, partial names, reordered words and
//! misspellings, and always picks the same winner for the same input.
//!
//! Scores come from a layered scorer (exact, prefix, substring, word-level,
//! then a whole-string fallback); the matcher filters by a minimum score
//! and breaks ties by shorter name.

/// Canonical comparison form for names and search terms.
pub mod normalize;

/// Levenshtein edit distance.
pub mod distance;

/// Layered similarity scoring of one name against a search term.
pub mod scoring;

/// Candidate views and the trait for exposing a guest name.
pub mod candidate;

/// Ranking and best-match selection across candidates.
pub mod matcher;

/// Thresholds for scoring and acceptance.
pub mod options;

/// Invite lookup over an abstract invite store.
pub mod lookup;

/// Errors raised by invite lookups.
pub mod error;

// Re-export primary public API types and functions at the crate root.
pub use candidate::{AsGuestName, Candidate};
pub use distance::{distance, similarity_percent};
pub use error::{LookupError, Result};
pub use lookup::{Guest, InMemoryStore, Invite, InviteMatch, InviteStore, find_invite};
pub use matcher::{
    RankedCandidate, compare_ranked, find_best_match, find_best_match_with, rank_candidates,
};
pub use normalize::normalize;
pub use options::MatchOptions;
pub use scoring::{PreparedTerm, ScoreBreakdown, Tier, score, score_detailed, score_with};
