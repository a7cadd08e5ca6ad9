//! Word-level tier: scores a search term word by word against a name.
//!
//! Both sides are split on runs of whitespace. Each search word takes its
//! best score across all name words; words that clear the per-word gate
//! count toward coverage. The result is the average over *all* search words
//! multiplied by the coverage ratio, so an unmatched word costs twice.

use crate::distance::similarity_percent;

use super::{WORD_CONTAINS_SCORE, WORD_EXACT_SCORE, WORD_PREFIX_SCORE};

/// Split normalized text into its non-empty whitespace-separated words.
pub(crate) fn tokenize(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Score one search word against one name word.
///
/// The first applicable rule decides: equality (100), name word starts
/// with the search word (80), name word contains it (60), otherwise the
/// edit-distance similarity percentage.
///
/// # Examples
///
/// ```
/// use guestmatch::scoring::word_pair_score;
///
/// assert_eq!(word_pair_score("ana", "ana"), 100.0);
/// assert_eq!(word_pair_score("ana", "anabela"), 80.0);
/// assert_eq!(word_pair_score("bel", "anabela"), 60.0);
/// assert!((word_pair_score("sylva", "silva") - 80.0).abs() < 1e-9);
/// ```
pub fn word_pair_score(search_word: &str, guest_word: &str) -> f64 {
    if search_word == guest_word {
        WORD_EXACT_SCORE
    } else if guest_word.starts_with(search_word) {
        WORD_PREFIX_SCORE
    } else if guest_word.contains(search_word) {
        WORD_CONTAINS_SCORE
    } else {
        similarity_percent(search_word, guest_word)
    }
}

/// Run the word-level tier.
///
/// Returns `None` when either side has no words or when no search word
/// scored above `word_min_score`; the scorer then falls through to the
/// whole-string fallback.
pub(crate) fn word_level_score(
    search_words: &[String],
    guest_name: &str,
    word_min_score: f64,
) -> Option<f64> {
    let guest_words = tokenize(guest_name);
    if search_words.is_empty() || guest_words.is_empty() {
        return None;
    }

    let mut counted = 0usize;
    let mut total = 0.0f64;

    for search_word in search_words {
        let best = guest_words
            .iter()
            .map(|guest_word| word_pair_score(search_word, guest_word))
            .fold(0.0f64, f64::max);

        if best > word_min_score {
            counted += 1;
            total += best;
        }
    }

    if counted == 0 {
        return None;
    }

    let n = search_words.len() as f64;
    Some((total / n) * (counted as f64 / n))
}
