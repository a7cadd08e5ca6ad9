//! Tunable thresholds for scoring and match acceptance.
//!
//! [`MatchOptions`] gathers the three gates that decide whether a score is
//! good enough. The tier score constants themselves live in
//! [`scoring`](crate::scoring).

use serde::{Deserialize, Serialize};

/// Minimum score a candidate needs to be accepted as a match.
pub const DEFAULT_MIN_SCORE: f64 = 40.0;

/// Minimum whole-string similarity the fallback tier will report.
pub const DEFAULT_FALLBACK_MIN_SIMILARITY: f64 = 50.0;

/// A search word counts toward the word-level score only above this value.
pub const DEFAULT_WORD_MIN_SCORE: f64 = 40.0;

/// Thresholds that control scoring and match acceptance.
///
/// # Defaults
///
/// - `min_score`: `40.0` (inclusive)
/// - `fallback_min_similarity`: `50.0` (inclusive)
/// - `word_min_score`: `40.0` (exclusive)
///
/// The acceptance threshold is looser than the fallback gate: a word-level
/// score between 40 and 50 is accepted, while a whole-string similarity in
/// the same range is not.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use guestmatch::MatchOptions;
///
/// let opts = MatchOptions::default();
/// assert_eq!(opts.min_score, 40.0);
///
/// let strict = MatchOptions { min_score: 75.0, ..Default::default() };
/// assert_eq!(strict.fallback_min_similarity, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Candidates scoring below this are dropped by the matcher.
    pub min_score: f64,
    /// The fallback tier returns 0 when whole-string similarity is below this.
    pub fallback_min_similarity: f64,
    /// A search word's best score must exceed this to count as matched.
    pub word_min_score: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            fallback_min_similarity: DEFAULT_FALLBACK_MIN_SIMILARITY,
            word_min_score: DEFAULT_WORD_MIN_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = MatchOptions::default();
        assert_eq!(opts.min_score, 40.0);
        assert_eq!(opts.fallback_min_similarity, 50.0);
        assert_eq!(opts.word_min_score, 40.0);
    }

    #[test]
    fn struct_update_syntax() {
        let opts = MatchOptions {
            min_score: 60.0,
            ..Default::default()
        };
        assert_eq!(opts.min_score, 60.0);
        assert_eq!(opts.word_min_score, DEFAULT_WORD_MIN_SCORE);
    }

    #[test]
    fn deserialize_partial_json_fills_defaults() {
        let opts: MatchOptions = serde_json::from_str(r#"{ "min_score": 55.5 }"#).unwrap();
        assert_eq!(opts.min_score, 55.5);
        assert_eq!(opts.fallback_min_similarity, DEFAULT_FALLBACK_MIN_SIMILARITY);
    }

    #[test]
    fn deserialize_empty_object_is_default() {
        let opts: MatchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, MatchOptions::default());
    }

    #[test]
    fn debug_formatting() {
        let debug_str = format!("{:?}", MatchOptions::default());
        assert!(debug_str.contains("min_score"));
        assert!(debug_str.contains("fallback_min_similarity"));
    }
}
