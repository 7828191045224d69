//! Storage seam for per-client session state.

use crate::types::Session;

/// Holds the session of a single client.
///
/// The HTTP layer implements this over a signed cookie; the gatekeeper only
/// ever sees this trait.
pub trait SessionStore {
    /// Returns the current session, if one exists.
    fn get(&self) -> Option<Session>;

    /// Replaces the current session.
    fn set(&mut self, session: Session);

    /// Removes all session state.
    fn clear(&mut self);
}
