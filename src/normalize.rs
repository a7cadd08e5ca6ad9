//! Canonical comparison form for guest names and search terms.
//!
//! Every comparison made by the scorer happens on normalized text: lower
//! case, diacritics stripped, surrounding whitespace trimmed. Internal
//! whitespace is left untouched; the word-level tier splits on runs of
//! whitespace itself.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strip diacritics by NFD decomposition and removal of combining marks.
///
/// Returns [`Cow::Borrowed`] when nothing was removed, so plain ASCII names
/// never allocate here.
///
/// # Examples
///
/// ```
/// use guestmatch::normalize::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Jo\u{00E3}o"), "Joao");
/// assert!(matches!(strip_diacritics("Joao"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn strip_diacritics(s: &str) -> Cow<'_, str> {
    // ASCII never carries combining marks.
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();

    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

/// Normalize `text` into its comparison form.
///
/// Lower-cases, strips diacritics and trims leading/trailing whitespace.
/// Total over all inputs and idempotent.
///
/// # Examples
///
/// ```
/// use guestmatch::normalize;
///
/// assert_eq!(normalize("  Jo\u{00E3}o  "), "joao");
/// assert_eq!(normalize("MARIA"), "maria");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    // Lower-casing first can yield precomposed letters (e.g. from title-case
    // digraphs), so diacritics are stripped afterwards.
    let lower = lowercase(text);
    strip_diacritics(&lower).trim().to_owned()
}

/// Lowercase with an ASCII fast path that skips Unicode case tables.
fn lowercase(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(s.to_ascii_lowercase())
        } else {
            Cow::Borrowed(s)
        }
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

/// Number of Unicode scalar values in `s`.
///
/// All length ratios in scoring are measured in characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    if s.is_ascii() {
        s.len()
    } else {
        s.chars().count()
    }
}
