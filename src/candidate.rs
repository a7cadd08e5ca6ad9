//! Read-only views of the guests a search runs over.
//!
//! The matcher only needs a name from each item. [`AsGuestName`] exposes it,
//! so any guest-like type can be ranked directly; [`Candidate`] is the
//! ready-made view pairing a name with opaque guest and invite handles.

use std::borrow::Cow;

/// Types that expose a guest name to match against.
///
/// # Built-in Implementations
///
/// - [`String`], [`str`], [`&str`] and [`Cow<'_, str>`] -- the string itself
/// - [`Candidate`] -- its `guest_name` field
///
/// # Examples
///
/// ```
/// use guestmatch::AsGuestName;
///
/// let owned = String::from("Ana Paula");
/// assert_eq!(owned.guest_name(), "Ana Paula");
/// ```
pub trait AsGuestName {
    /// Returns the free-text name of this guest.
    fn guest_name(&self) -> &str;
}

impl AsGuestName for String {
    fn guest_name(&self) -> &str {
        self.as_str()
    }
}

impl AsGuestName for str {
    fn guest_name(&self) -> &str {
        self
    }
}

// Needed so that `C = &str` satisfies the bound without double-referencing.
impl AsGuestName for &str {
    fn guest_name(&self) -> &str {
        self
    }
}

impl AsGuestName for Cow<'_, str> {
    fn guest_name(&self) -> &str {
        self.as_ref()
    }
}

/// One guest as seen by the matcher.
///
/// `guest` and `invite` are handles owned by whoever built the candidate
/// list (ids, indices, references); the matcher never inspects them.
///
/// # Examples
///
/// ```
/// use guestmatch::{Candidate, find_best_match};
///
/// let candidates = vec![
///     Candidate::new("Ana Paula Ferreira", "guest-1", "invite-a"),
///     Candidate::new("Ana Beatriz Souza", "guest-2", "invite-b"),
/// ];
/// let best = find_best_match("Ana Paula", &candidates).unwrap();
/// assert_eq!(best.candidate.invite, "invite-a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<G, I> {
    /// Free text entered by an administrator; may be empty.
    pub guest_name: String,
    /// Handle to the guest record.
    pub guest: G,
    /// Handle to the invite the guest belongs to.
    pub invite: I,
}

impl<G, I> Candidate<G, I> {
    /// Build a candidate from a name and its guest/invite handles.
    pub fn new(guest_name: impl Into<String>, guest: G, invite: I) -> Self {
        Self {
            guest_name: guest_name.into(),
            guest,
            invite,
        }
    }
}

impl<G, I> AsGuestName for Candidate<G, I> {
    fn guest_name(&self) -> &str {
        &self.guest_name
    }
}
