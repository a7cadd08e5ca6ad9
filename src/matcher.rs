//! Selection of the best-matching guest across a candidate snapshot.
//!
//! Every candidate with a non-blank name is scored against the search term,
//! candidates below the acceptance threshold are dropped, and the rest are
//! ordered by:
//!
//! 1. **Higher score first.**
//! 2. **Shorter name first** (in characters) when scores tie.
//! 3. **Earlier position** in the input when both tie (stable sort).
//!
//! The result depends only on the term and the snapshot, never on anything
//! outside them.

use std::cmp::Ordering;

use log::debug;

use crate::candidate::AsGuestName;
use crate::normalize::{char_len, normalize};
use crate::options::MatchOptions;
use crate::scoring::{PreparedTerm, Tier};

/// A candidate that cleared the acceptance threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate<'a, C> {
    /// The matched candidate.
    pub candidate: &'a C,
    /// Its position in the input slice.
    pub index: usize,
    /// Its similarity score in `[0, 100]`.
    pub score: f64,
    /// The tier that produced the score.
    pub tier: Tier,
}

impl<C: AsGuestName> RankedCandidate<'_, C> {
    /// The candidate's guest name, as entered.
    pub fn guest_name(&self) -> &str {
        self.candidate.guest_name()
    }
}

/// Comparator used to order accepted candidates.
///
/// Higher score sorts first; on equal scores the shorter guest name (in
/// characters) sorts first.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use guestmatch::{RankedCandidate, Tier, compare_ranked};
///
/// let names = ["Maria Silva", "Maria"];
/// let long = RankedCandidate { candidate: &names[0], index: 0, score: 90.0, tier: Tier::Prefix };
/// let short = RankedCandidate { candidate: &names[1], index: 1, score: 90.0, tier: Tier::Prefix };
///
/// assert_eq!(compare_ranked(&short, &long), Ordering::Less);
/// ```
pub fn compare_ranked<C: AsGuestName>(
    a: &RankedCandidate<'_, C>,
    b: &RankedCandidate<'_, C>,
) -> Ordering {
    // Scores are never NaN, but treat an indeterminate comparison as a tie.
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| char_len(a.guest_name()).cmp(&char_len(b.guest_name())))
}

/// Score every candidate and return those accepted, best first.
///
/// Candidates whose name is blank after normalization are skipped. A blank
/// search term yields no results.
///
/// # Examples
///
/// ```
/// use guestmatch::{MatchOptions, rank_candidates};
///
/// let names = ["Mariana Costa", "Maria Silva", "Jo\u{00E3}o"];
/// let ranked = rank_candidates("Maria", &names, &MatchOptions::default());
/// let order: Vec<_> = ranked.iter().map(|r| r.guest_name()).collect();
/// assert_eq!(order, ["Maria Silva", "Mariana Costa"]);
/// ```
pub fn rank_candidates<'a, C: AsGuestName>(
    search_term: &str,
    candidates: &'a [C],
    options: &MatchOptions,
) -> Vec<RankedCandidate<'a, C>> {
    let term = PreparedTerm::new(search_term);
    if term.is_empty() {
        debug!("blank search term, skipping {} candidates", candidates.len());
        return Vec::new();
    }

    let mut ranked: Vec<RankedCandidate<'a, C>> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let name = normalize(candidate.guest_name());
            if name.is_empty() {
                return None;
            }
            let breakdown = term.score_normalized(&name, options);
            (breakdown.score >= options.min_score).then_some(RankedCandidate {
                candidate,
                index,
                score: breakdown.score,
                tier: breakdown.tier,
            })
        })
        .collect();

    // Stable sort keeps input order as the last tie-break.
    ranked.sort_by(compare_ranked);

    debug!(
        "ranked {:?} against {} candidates: {} accepted",
        term.as_str(),
        candidates.len(),
        ranked.len()
    );

    ranked
}

/// Find the single best match for `search_term`, using default thresholds.
///
/// Returns `None` when no candidate reaches the acceptance threshold,
/// including when `candidates` is empty.
///
/// # Examples
///
/// ```
/// use guestmatch::find_best_match;
///
/// let names = ["Maria Silva", "Mariana Costa"];
/// let best = find_best_match("Maria", &names).unwrap();
/// assert_eq!(best.guest_name(), "Maria Silva");
///
/// assert!(find_best_match("Zzzxq", &names).is_none());
/// ```
pub fn find_best_match<'a, C: AsGuestName>(
    search_term: &str,
    candidates: &'a [C],
) -> Option<RankedCandidate<'a, C>> {
    find_best_match_with(search_term, candidates, &MatchOptions::default())
}

/// Like [`find_best_match`], with explicit thresholds.
pub fn find_best_match_with<'a, C: AsGuestName>(
    search_term: &str,
    candidates: &'a [C],
    options: &MatchOptions,
) -> Option<RankedCandidate<'a, C>> {
    rank_candidates(search_term, candidates, options)
        .into_iter()
        .next()
}
