//! The shared user/room directory.

use crate::error::HandlerError;
use crate::state::{ConnId, Message, Room, User};
use linechat_proto::validate_room_name;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Outcome of [`Registry::register_or_fetch`].
pub enum Registered<'a> {
    /// The name was unseen; a user was created but NOT authenticated.
    New,
    /// The name was known; the caller validates credentials and session state.
    Existing(&'a mut User),
}

/// Process-wide directory of users and rooms.
///
/// Single source of truth for existence and uniqueness. The `Hub` wraps this
/// in one mutex, so every command handler runs as an atomic transaction with
/// respect to all other connections; nothing here synchronizes on its own.
#[derive(Debug, Default)]
pub struct Registry {
    users: HashMap<String, User>,
    rooms: HashMap<String, Room>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the user if the name is unseen, else hand back the existing
    /// record for the caller to validate.
    pub fn register_or_fetch(&mut self, name: &str, password: &str) -> Registered<'_> {
        match self.users.entry(name.to_string()) {
            Entry::Occupied(entry) => Registered::Existing(entry.into_mut()),
            Entry::Vacant(entry) => {
                entry.insert(User::new(name, password));
                Registered::New
            }
        }
    }

    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    /// All registered users, unordered.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Create an ordinary room, enforcing the name rules.
    pub fn create_room(&mut self, name: &str, prefix: char) -> Result<(), HandlerError> {
        validate_room_name(name, prefix)?;
        if self.rooms.contains_key(name) {
            return Err(HandlerError::DuplicateRoom(name.to_string()));
        }
        self.rooms.insert(name.to_string(), Room::new(name));
        Ok(())
    }

    /// Fetch the IM room with this canonical name, creating it on first use.
    pub fn ensure_im_room(&mut self, name: &str) -> &mut Room {
        self.rooms
            .entry(name.to_string())
            .or_insert_with(|| Room::new(name))
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Names of all ordinary rooms, sorted. IM rooms are never listed.
    pub fn list_room_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .rooms
            .keys()
            .map(String::as_str)
            .filter(|name| !linechat_proto::is_im_name(name))
            .collect();
        names.sort_unstable();
        names
    }

    /// Record membership on both sides of the user/room relation.
    ///
    /// Idempotent; callers that must reject re-joins check first.
    pub fn join_room(&mut self, user_name: &str, room_name: &str) {
        let Some(room) = self.rooms.get_mut(room_name) else {
            return;
        };
        room.add_member(user_name);
        if let Some(user) = self.users.get_mut(user_name) {
            user.rooms.insert(room_name.to_string());
        }
    }

    /// Drop membership on both sides of the user/room relation.
    pub fn leave_room(&mut self, user_name: &str, room_name: &str) {
        if let Some(room) = self.rooms.get_mut(room_name) {
            room.remove_member(user_name);
        }
        if let Some(user) = self.users.get_mut(user_name) {
            user.rooms.remove(room_name);
        }
    }

    /// Deauthenticate a user: leave every joined room and release the session
    /// handle. Shared by explicit logout and disconnect cleanup.
    pub fn logout_user(&mut self, name: &str) {
        let joined: Vec<String> = self
            .users
            .get(name)
            .map(|user| user.rooms.iter().cloned().collect())
            .unwrap_or_default();
        for room_name in joined {
            self.leave_room(name, &room_name);
        }
        if let Some(user) = self.users.get_mut(name) {
            user.unbind();
            debug!(user = %name, "User deauthenticated");
        }
    }

    /// Append a message to a room and collect the connections of every member
    /// whose session handle is bound. Departed members are already absent from
    /// the membership set and receive nothing.
    pub fn append_message(&mut self, room_name: &str, message: Message) -> Vec<ConnId> {
        let Some(room) = self.rooms.get_mut(room_name) else {
            return Vec::new();
        };
        room.append(message);
        room.members()
            .filter_map(|member| self.users.get(member).and_then(User::session))
            .collect()
    }
}
