//! Levenshtein edit distance and the percentage similarity derived from it.

/// Compute the Levenshtein distance between `a` and `b`.
///
/// Unit cost for insertion, deletion and substitution, measured over
/// Unicode scalar values. The full `(|a|+1) x (|b|+1)` table is filled with
/// no banding or early exit: callers turn the exact distance into a score.
///
/// # Examples
///
/// ```
/// use guestmatch::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("", "ana"), 3);
/// assert_eq!(distance("maria", "maria"), 0);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let cols = b.len() + 1;

    // Row-major flat table: dp[i * cols + j].
    let mut dp = vec![0usize; (a.len() + 1) * cols];
    for i in 0..=a.len() {
        dp[i * cols] = i;
    }
    for j in 0..=b.len() {
        dp[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i * cols + j] = if a[i - 1] == b[j - 1] {
                dp[(i - 1) * cols + (j - 1)]
            } else {
                let deletion = dp[(i - 1) * cols + j];
                let insertion = dp[i * cols + (j - 1)];
                let substitution = dp[(i - 1) * cols + (j - 1)];
                1 + deletion.min(insertion).min(substitution)
            };
        }
    }

    dp[a.len() * cols + b.len()]
}

/// Similarity of two strings as a percentage in `[0, 100]`.
///
/// `(1 - distance / max_len) * 100`, where `max_len` is the longer of the
/// two character lengths. Two empty strings score 0.
pub fn similarity_percent(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    (1.0 - distance(a, b) as f64 / max_len as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_kitten_sitting() {
        assert_eq!(distance("kitten", "sitting"), 3);
    }

    #[test]
    fn identical_strings_are_zero() {
        assert_eq!(distance("ana paula", "ana paula"), 0);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn empty_side_costs_other_length() {
        assert_eq!(distance("", "souza"), 5);
        assert_eq!(distance("souza", ""), 5);
    }

    #[test]
    fn symmetric() {
        let pairs = [
            ("maria", "mariana"),
            ("paula", "souza"),
            ("flaw", "lawn"),
            ("joao", "jo\u{00E3}o"),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn single_substitution() {
        assert_eq!(distance("silva", "sylva"), 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // U+00E3 is two bytes in UTF-8 but one substitution away from 'a'.
        assert_eq!(distance("joao", "jo\u{00E3}o"), 1);
    }

    #[test]
    fn paula_souza_distance() {
        assert_eq!(distance("paula", "souza"), 3);
    }

    #[test]
    fn similarity_of_identical_is_hundred() {
        assert_eq!(similarity_percent("maria", "maria"), 100.0);
    }

    #[test]
    fn similarity_of_disjoint_is_zero() {
        assert_eq!(similarity_percent("abc", "xyz"), 0.0);
    }

    #[test]
    fn similarity_of_two_empties_is_zero() {
        assert_eq!(similarity_percent("", ""), 0.0);
    }

    #[test]
    fn similarity_one_typo_in_five() {
        let sim = similarity_percent("silva", "sylva");
        assert!((sim - 80.0).abs() < 1e-9, "got {sim}");
    }
}
