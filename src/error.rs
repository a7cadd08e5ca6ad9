//! Error types for invite lookups.
//!
//! Scoring and matching are total and never fail; only the lookup layer,
//! which validates the raw query and talks to an invite store, has errors.

use thiserror::Error;

/// Boxed error returned by [`InviteStore`](crate::lookup::InviteStore)
/// implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when looking up an invite by guest name.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The query was empty or whitespace only.
    #[error("search query is blank")]
    BlankQuery,

    /// No guest scored high enough. Callers should ask the guest to
    /// re-enter their name rather than treat this as a system failure.
    #[error("no invite found for {query:?}")]
    NotFound {
        /// The trimmed query that found nothing.
        query: String,
    },

    /// The invite store could not produce a snapshot.
    #[error("invite store failed: {0}")]
    Store(#[source] BoxError),
}

/// Result alias for invite lookups.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(LookupError::BlankQuery.to_string(), "search query is blank");
        let err = LookupError::NotFound {
            query: "Zzzxq".to_owned(),
        };
        assert_eq!(err.to_string(), "no invite found for \"Zzzxq\"");
    }

    #[test]
    fn store_error_keeps_source() {
        use std::error::Error as _;

        let inner: BoxError = "connection reset".into();
        let err = LookupError::Store(inner);
        assert_eq!(err.to_string(), "invite store failed: connection reset");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("connection reset"));
    }
}
