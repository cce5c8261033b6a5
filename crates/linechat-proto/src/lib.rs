//! linechat-proto - wire protocol for the linechatd chat server.
//!
//! The protocol is newline-delimited text. Clients send prefixed commands
//! (`!login alice secret`), the server answers with prefixed responses
//! (`!login Login successful...`). This crate owns the pieces both sides
//! agree on: tokenizing inbound lines into a closed [`Command`] set,
//! rendering outbound [`Reply`] lines, and the room-naming rules (reserved
//! `IM` namespace, forbidden separator characters, canonical IM names).
//!
//! Parsing borrows from the input line; no allocation happens until a
//! handler decides to keep an argument.

pub mod command;
pub mod line;
pub mod reply;
pub mod room;

pub use command::Command;
pub use line::{ParseError, parse};
pub use reply::{Reply, ReplyKind};
pub use room::{RoomNameError, im_room_name, is_im_name, validate_room_name};

/// Character separating target names from message text in `msg`/`privmsg`.
///
/// Reserved on the wire, and therefore forbidden inside room names.
pub const DIVIDER: char = '|';
