//! Invite lookup by approximate guest name.
//!
//! This is the "confirm attendance" flow without its HTTP framing: take the
//! raw name a guest typed, reject it if blank, take a fresh snapshot of all
//! invites from an [`InviteStore`], flatten every guest into a
//! [`Candidate`], and return the invite owning the best-matching guest.

use log::info;
use serde::{Deserialize, Serialize};

use crate::candidate::{AsGuestName, Candidate};
use crate::error::{BoxError, LookupError, Result};
use crate::matcher::find_best_match_with;
use crate::options::MatchOptions;
use crate::scoring::Tier;

/// An individual attendee belonging to exactly one invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Stable identifier assigned by the store.
    pub id: String,
    /// Free-text name, as entered by an administrator.
    pub name: String,
    /// RSVP answer, `None` until the guest responds.
    #[serde(default)]
    pub attending: Option<bool>,
}

impl AsGuestName for Guest {
    fn guest_name(&self) -> &str {
        &self.name
    }
}

/// A household or party grouping zero or more guests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    /// Stable identifier assigned by the store.
    pub id: String,
    /// Display label for the invite, e.g. a family name.
    pub label: String,
    /// Contact phone or e-mail.
    #[serde(default)]
    pub contact: Option<String>,
    /// Guests on this invite.
    #[serde(default)]
    pub guests: Vec<Guest>,
}

/// Source of invite snapshots.
///
/// Persistence lives outside this crate; implement this for whatever holds
/// the invites. Each lookup calls [`invites`](InviteStore::invites) once.
pub trait InviteStore {
    /// Return every invite together with its guests.
    fn invites(&self) -> std::result::Result<Vec<Invite>, BoxError>;
}

/// An [`InviteStore`] over invites held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    invites: Vec<Invite>,
}

impl InMemoryStore {
    /// Wrap an existing list of invites.
    pub fn new(invites: Vec<Invite>) -> Self {
        Self { invites }
    }
}

impl InviteStore for InMemoryStore {
    fn invites(&self) -> std::result::Result<Vec<Invite>, BoxError> {
        Ok(self.invites.clone())
    }
}

/// The outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InviteMatch {
    /// The matched invite, with all of its guests.
    pub invite: Invite,
    /// The specific guest whose name matched.
    pub guest: Guest,
    /// Similarity score of the match, in `[0, 100]`.
    pub score: f64,
    /// Tier that produced the score.
    pub tier: Tier,
}

/// Flatten invites into one candidate per guest.
///
/// Handles are positions: `guest` indexes into the invite's `guests`,
/// `invite` indexes into `invites`. Order follows the input, invite by
/// invite.
///
/// # Examples
///
/// ```
/// use guestmatch::lookup::{Guest, Invite, candidates_from_invites};
///
/// let invites = vec![Invite {
///     id: "a".into(),
///     label: "Ferreira".into(),
///     contact: None,
///     guests: vec![Guest { id: "g1".into(), name: "Ana Paula".into(), attending: None }],
/// }];
/// let candidates = candidates_from_invites(&invites);
/// assert_eq!(candidates[0].guest_name, "Ana Paula");
/// assert_eq!((candidates[0].invite, candidates[0].guest), (0, 0));
/// ```
pub fn candidates_from_invites(invites: &[Invite]) -> Vec<Candidate<usize, usize>> {
    invites
        .iter()
        .enumerate()
        .flat_map(|(invite_idx, invite)| {
            invite
                .guests
                .iter()
                .enumerate()
                .map(move |(guest_idx, guest)| {
                    Candidate::new(guest.name.as_str(), guest_idx, invite_idx)
                })
        })
        .collect()
}

/// Look up the invite whose guest best matches `query`.
///
/// # Errors
///
/// - [`LookupError::BlankQuery`] if `query` is empty after trimming
/// - [`LookupError::Store`] if the store fails
/// - [`LookupError::NotFound`] if no guest reaches `options.min_score`
///
/// # Examples
///
/// ```
/// use guestmatch::MatchOptions;
/// use guestmatch::lookup::{Guest, InMemoryStore, Invite, find_invite};
///
/// let guest = |id: &str, name: &str| Guest { id: id.into(), name: name.into(), attending: None };
/// let store = InMemoryStore::new(vec![
///     Invite { id: "a".into(), label: "Ferreira".into(), contact: None,
///              guests: vec![guest("g1", "Ana Paula Ferreira")] },
///     Invite { id: "b".into(), label: "Souza".into(), contact: None,
///              guests: vec![guest("g2", "Ana Beatriz Souza")] },
/// ]);
///
/// let found = find_invite("Ana Paula", &store, &MatchOptions::default()).unwrap();
/// assert_eq!(found.invite.id, "a");
/// assert_eq!(found.guest.name, "Ana Paula Ferreira");
/// ```
pub fn find_invite<S: InviteStore + ?Sized>(
    query: &str,
    store: &S,
    options: &MatchOptions,
) -> Result<InviteMatch> {
    let query = query.trim();
    if query.is_empty() {
        return Err(LookupError::BlankQuery);
    }

    let mut invites = store.invites().map_err(LookupError::Store)?;
    let candidates = candidates_from_invites(&invites);

    let Some(best) = find_best_match_with(query, &candidates, options) else {
        info!("no invite matched {query:?} among {} guests", candidates.len());
        return Err(LookupError::NotFound {
            query: query.to_owned(),
        });
    };

    let (invite_idx, guest_idx) = (best.candidate.invite, best.candidate.guest);
    let (score, tier) = (best.score, best.tier);
    info!(
        "matched {query:?} to guest {:?} on invite {invite_idx} with score {score:.2} ({tier:?})",
        best.guest_name()
    );

    let invite = invites.swap_remove(invite_idx);
    let guest = invite.guests[guest_idx].clone();

    Ok(InviteMatch {
        invite,
        guest,
        score,
        tier,
    })
}
