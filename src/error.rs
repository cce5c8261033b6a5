//! Unified error handling for linechatd.
//!
//! Every command failure is a recoverable rejection surfaced to the client as
//! one or more `error` response lines; nothing here terminates a connection.

use linechat_proto::{Reply, RoomNameError};
use thiserror::Error;

/// Errors that can occur during command handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("missing command prefix")]
    PrefixMismatch,

    #[error("unrecognized command: {0}")]
    UnknownCommand(String),

    #[error("authentication required")]
    AuthRequired,

    #[error("session already authenticated")]
    AlreadyAuthenticated,

    #[error("user {0} is already logged in elsewhere")]
    AlreadyLoggedIn(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("wrong number of arguments")]
    BadArgumentCount {
        /// Usage string shown to the client, without the command prefix.
        usage: &'static str,
    },

    #[error("unknown room: {0}")]
    UnknownRoom(String),

    #[error("room name in reserved IM namespace")]
    ReservedRoomName,

    #[error("room name contains forbidden character")]
    InvalidRoomName,

    #[error("already a member of {0}")]
    AlreadyMember(String),

    #[error("not a member of {0}")]
    NotMember(String),

    #[error("unknown users: {0:?}")]
    UnknownUsers(Vec<String>),

    #[error("room {0} already exists")]
    DuplicateRoom(String),

    #[error("empty message body")]
    EmptyMessageBody,

    #[error("no target rooms")]
    NoTargetRooms,

    #[error("no IM room started for that participant set")]
    IMRoomNotStarted,
}

impl From<RoomNameError> for HandlerError {
    fn from(err: RoomNameError) -> Self {
        match err {
            RoomNameError::Reserved => Self::ReservedRoomName,
            RoomNameError::ForbiddenChar => Self::InvalidRoomName,
        }
    }
}

impl HandlerError {
    /// Convert to the `error` reply lines sent to the offending client.
    ///
    /// Most variants map to a single line; `UnknownUsers` reports one line per
    /// unknown participant. `prefix` is the configured command prefix, quoted
    /// back in hints so clients see runnable commands.
    pub fn to_replies(&self, prefix: char) -> Vec<Reply> {
        let text = match self {
            Self::PrefixMismatch => format!("Need {prefix} for command prefix"),
            Self::UnknownCommand(cmd) => format!("Unrecognized command '{cmd}'"),
            Self::AuthRequired => {
                format!("Please login first with: {prefix}login <username> <password>")
            }
            Self::AlreadyAuthenticated => {
                "Already logged in - log out first to switch users".to_string()
            }
            Self::AlreadyLoggedIn(name) => format!("User {name} is already logged in"),
            Self::InvalidCredentials => "Invalid username/password".to_string(),
            Self::BadArgumentCount { usage } => {
                format!("Wrong number of arguments - usage: {prefix}{usage}")
            }
            Self::UnknownRoom(name) => format!("Cannot recognize room '{name}'"),
            Self::ReservedRoomName => format!(
                "Rooms starting with 'IM' are reserved - use {prefix}im for direct messages"
            ),
            Self::InvalidRoomName => format!(
                "Sorry, rooms cannot contain the characters | or {prefix} due to implementation details"
            ),
            Self::AlreadyMember(name) => format!("You have already joined room '{name}'"),
            Self::NotMember(name) => {
                format!("You have not joined room '{name}' - try {prefix}join first")
            }
            Self::UnknownUsers(names) => {
                return names
                    .iter()
                    .map(|name| Reply::error(format!("Unable to IM unknown user '{name}'")))
                    .collect();
            }
            Self::DuplicateRoom(name) => format!("Room '{name}' already exists"),
            Self::EmptyMessageBody => "A message needs non-blank contents to be sent".to_string(),
            Self::NoTargetRooms => {
                format!("Unsure of where to send message - try {prefix}join or {prefix}im first")
            }
            Self::IMRoomNotStarted => {
                format!("No IM started with those users - start one with {prefix}im first")
            }
        };
        vec![Reply::error(text)]
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
