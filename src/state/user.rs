//! User records.

use crate::state::ConnId;
use std::collections::HashSet;

/// A registered user.
///
/// Created on the first login attempt with an unseen name; lives for the rest
/// of the process. At most one connection is bound at a time; "active" is
/// exactly "a session handle is present", so the invariant cannot drift.
#[derive(Debug)]
pub struct User {
    /// Unique, immutable name.
    pub name: String,
    /// Opaque credential, compared verbatim at login.
    password: String,
    /// Names of rooms this user has joined.
    pub rooms: HashSet<String>,
    /// Non-owning handle to the bound connection, if any.
    session: Option<ConnId>,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            rooms: HashSet::new(),
            session: None,
        }
    }

    /// Verbatim credential comparison (hardening is out of scope).
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Whether a connection is currently bound.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The bound connection, if any.
    pub fn session(&self) -> Option<ConnId> {
        self.session
    }

    /// Bind this user to a connection.
    pub fn bind(&mut self, conn: ConnId) {
        self.session = Some(conn);
    }

    /// Release the bound connection.
    pub fn unbind(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tracks_session_handle() {
        let mut user = User::new("alice", "pw");
        assert!(!user.is_active());
        user.bind(7);
        assert!(user.is_active());
        assert_eq!(user.session(), Some(7));
        user.unbind();
        assert!(!user.is_active());
    }

    #[test]
    fn password_is_compared_verbatim() {
        let user = User::new("alice", "Secret");
        assert!(user.check_password("Secret"));
        assert!(!user.check_password("secret"));
    }
}
