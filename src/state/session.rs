#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserSession;
use crate::util::token_store;

/// Session state tracking the logged-in user.
///
/// Provided as an `RwSignal` context by the app shell. The Session pages
/// (login/signup) are the only writers; every other page reads the token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserSession>,
}

impl SessionState {
    /// Rebuild a session from a token persisted in a previous page load.
    /// Only the token survives the round trip; the profile is refetched
    /// lazily by whoever needs it.
    pub fn from_stored_token() -> Self {
        let user = token_store::load().map(|token| UserSession {
            email: String::new(),
            token,
            profile: None,
        });
        Self { user }
    }

    /// The bearer token for the current session, if logged in.
    pub fn token(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Install a freshly authenticated user.
    pub fn log_in(&mut self, user: UserSession) {
        self.user = Some(user);
    }

    /// Drop the session. The caller clears persisted storage separately.
    pub fn log_out(&mut self) {
        self.user = None;
    }
}
