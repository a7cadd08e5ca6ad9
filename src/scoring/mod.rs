//! Similarity scoring between a search term and a single guest name.
//!
//! A score is a number in `[0, 100]` produced by the first tier that fires,
//! checked in this order:
//!
//! | Tier        | Score                                   |
//! |-------------|-----------------------------------------|
//! | `Exact`     | 100                                     |
//! | `Prefix`    | `90 + 10 * len(term) / len(name)`       |
//! | `Substring` | `70 + 20 * len(term) / len(name)`       |
//! | `WordLevel` | average best word score * coverage      |
//! | `Fallback`  | whole-string similarity if at least 50  |
//! | `NoMatch`   | 0                                       |
//!
//! Later tiers are never blended into an earlier result. All comparisons
//! run on [normalized](crate::normalize) text and all lengths are counted
//! in characters.

mod words;

use memchr::memmem::Finder;
use serde::Serialize;

pub use words::word_pair_score;

use crate::distance::similarity_percent;
use crate::normalize::{char_len, normalize};
use crate::options::MatchOptions;

/// Score of a normalized exact match.
pub const EXACT_SCORE: f64 = 100.0;
/// Lowest score of the prefix tier.
pub const PREFIX_BASE: f64 = 90.0;
/// Range added on top of [`PREFIX_BASE`] in proportion to coverage.
pub const PREFIX_SPAN: f64 = 10.0;
/// Lowest score of the substring tier.
pub const SUBSTRING_BASE: f64 = 70.0;
/// Range added on top of [`SUBSTRING_BASE`] in proportion to coverage.
pub const SUBSTRING_SPAN: f64 = 20.0;
/// Per-word score when a search word equals a name word.
pub const WORD_EXACT_SCORE: f64 = 100.0;
/// Per-word score when a name word starts with the search word.
pub const WORD_PREFIX_SCORE: f64 = 80.0;
/// Per-word score when a name word contains the search word.
pub const WORD_CONTAINS_SCORE: f64 = 60.0;

/// The tier that decided a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    /// Normalized forms are identical.
    Exact,
    /// The name starts with the term.
    Prefix,
    /// The name contains the term somewhere after its start.
    Substring,
    /// Word-by-word comparison found at least one matching word.
    WordLevel,
    /// Whole-string edit similarity cleared the fallback gate.
    Fallback,
    /// Nothing matched; the score is 0.
    NoMatch,
}

/// A score together with the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Similarity in `[0, 100]`.
    pub score: f64,
    /// Which tier decided the score.
    pub tier: Tier,
}

impl ScoreBreakdown {
    fn new(score: f64, tier: Tier) -> Self {
        Self { score, tier }
    }
}

/// A search term normalized once and reused across many candidates.
///
/// Holds the normalized term, its character count, its words and a
/// substring searcher, so that scoring hundreds of guests does not redo
/// that work per guest.
///
/// # Examples
///
/// ```
/// use guestmatch::{MatchOptions, PreparedTerm, Tier};
///
/// let term = PreparedTerm::new("Ana Paula");
/// let result = term.score("Ana Paula Ferreira", &MatchOptions::default());
/// assert_eq!(result.tier, Tier::Prefix);
/// assert_eq!(result.score, 95.0);
/// ```
#[derive(Debug)]
pub struct PreparedTerm {
    normalized: String,
    char_count: usize,
    words: Vec<String>,
    /// `None` when the normalized term is empty.
    finder: Option<Finder<'static>>,
}

impl PreparedTerm {
    /// Normalize `term` and precompute everything the tiers need.
    pub fn new(term: &str) -> Self {
        let normalized = normalize(term);
        let char_count = char_len(&normalized);
        let words = words::tokenize(&normalized)
            .into_iter()
            .map(str::to_owned)
            .collect();
        let finder = if normalized.is_empty() {
            None
        } else {
            Some(Finder::new(normalized.as_bytes()).into_owned())
        };
        Self {
            normalized,
            char_count,
            words,
            finder,
        }
    }

    /// The normalized search term.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Whether the term is empty after normalization.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Score `guest_name` against this term.
    pub fn score(&self, guest_name: &str, options: &MatchOptions) -> ScoreBreakdown {
        let name = normalize(guest_name);
        self.score_normalized(&name, options)
    }

    /// Score an already-normalized name.
    pub(crate) fn score_normalized(&self, name: &str, options: &MatchOptions) -> ScoreBreakdown {
        TIERS
            .iter()
            .find_map(|tier| tier(self, name, options))
            .unwrap_or(ScoreBreakdown::new(0.0, Tier::NoMatch))
    }

    /// Fraction of the name covered by the term, in characters.
    fn coverage(&self, name: &str) -> f64 {
        let name_len = char_len(name);
        if name_len == 0 {
            return 0.0;
        }
        self.char_count as f64 / name_len as f64
    }
}

/// One scoring tier: `Some` when it decides the score, `None` to defer.
type TierFn = fn(&PreparedTerm, &str, &MatchOptions) -> Option<ScoreBreakdown>;

/// Tiers in precedence order. The first `Some` wins.
const TIERS: [TierFn; 5] = [exact, prefix, substring, word_level, fallback];

fn exact(term: &PreparedTerm, name: &str, _: &MatchOptions) -> Option<ScoreBreakdown> {
    (name == term.normalized).then(|| ScoreBreakdown::new(EXACT_SCORE, Tier::Exact))
}

fn prefix(term: &PreparedTerm, name: &str, _: &MatchOptions) -> Option<ScoreBreakdown> {
    name.starts_with(term.normalized.as_str()).then(|| {
        ScoreBreakdown::new(PREFIX_BASE + PREFIX_SPAN * term.coverage(name), Tier::Prefix)
    })
}

fn substring(term: &PreparedTerm, name: &str, _: &MatchOptions) -> Option<ScoreBreakdown> {
    // An empty term is a prefix of everything, so it never reaches here.
    let finder = term.finder.as_ref()?;
    finder.find(name.as_bytes())?;
    Some(ScoreBreakdown::new(
        SUBSTRING_BASE + SUBSTRING_SPAN * term.coverage(name),
        Tier::Substring,
    ))
}

fn word_level(term: &PreparedTerm, name: &str, options: &MatchOptions) -> Option<ScoreBreakdown> {
    words::word_level_score(&term.words, name, options.word_min_score)
        .map(|score| ScoreBreakdown::new(score, Tier::WordLevel))
}

fn fallback(term: &PreparedTerm, name: &str, options: &MatchOptions) -> Option<ScoreBreakdown> {
    let similarity = similarity_percent(&term.normalized, name);
    if similarity >= options.fallback_min_similarity {
        Some(ScoreBreakdown::new(similarity, Tier::Fallback))
    } else {
        Some(ScoreBreakdown::new(0.0, Tier::NoMatch))
    }
}

/// Score how well `guest_name` matches `search_term`, in `[0, 100]`.
///
/// Uses [`MatchOptions::default`]. See the [module docs](self) for the tiers.
///
/// # Examples
///
/// ```
/// use guestmatch::score;
///
/// assert_eq!(score("joao", "Jo\u{00E3}o"), 100.0);
/// assert_eq!(score("MARIA", "maria"), 100.0);
/// assert!(score("Maria", "Maria Silva Santos") >= 90.0);
/// assert_eq!(score("Zzzxq", "Maria Silva"), 0.0);
/// ```
pub fn score(search_term: &str, guest_name: &str) -> f64 {
    score_with(search_term, guest_name, &MatchOptions::default())
}

/// Like [`score`], with explicit thresholds.
pub fn score_with(search_term: &str, guest_name: &str, options: &MatchOptions) -> f64 {
    score_detailed(search_term, guest_name, options).score
}

/// Score `guest_name` against `search_term` and report the deciding tier.
///
/// # Examples
///
/// ```
/// use guestmatch::{MatchOptions, Tier, score_detailed};
///
/// let opts = MatchOptions::default();
/// assert_eq!(score_detailed("ilva", "Maria Silva Santos", &opts).tier, Tier::Substring);
/// assert_eq!(score_detailed("Silva Maria", "Maria Silva Santos", &opts).tier, Tier::WordLevel);
/// ```
pub fn score_detailed(search_term: &str, guest_name: &str, options: &MatchOptions) -> ScoreBreakdown {
    PreparedTerm::new(search_term).score(guest_name, options)
}
