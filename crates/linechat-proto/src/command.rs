//! The closed set of client commands.

/// A parsed client command.
///
/// The dispatcher matches this exhaustively; anything the parser does not
/// recognize lands in [`Command::Unknown`] with the keyword as typed.
/// Argument slices borrow from the inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Greeting request; the only command valid in every session state.
    Open,
    /// `login <username> <password>` - register or authenticate.
    Login(Vec<&'a str>),
    /// `logout` (aliases: `quit`, `exit`, `close`) - deauthenticate and close.
    Logout,
    /// `create <room>` - create an ordinary room.
    Create(Vec<&'a str>),
    /// `join <room>` - join an existing ordinary room.
    Join(Vec<&'a str>),
    /// `leave <room> [<room> ...]` - leave rooms, all-or-nothing.
    Leave(Vec<&'a str>),
    /// `list rooms|users [<room>]` - presence and membership queries.
    List(Vec<&'a str>),
    /// `msg <room> [<room> ...] | <text>` (alias: `message`).
    Msg(Vec<&'a str>),
    /// `im <user> [<user> ...]` - join/create the canonical IM room.
    Im(Vec<&'a str>),
    /// `privmsg <user> [<user> ...] | <text>` - send to an existing IM room.
    Privmsg(Vec<&'a str>),
    /// Anything else, carrying the keyword as the client typed it.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Map a keyword and its arguments onto a command variant.
    pub fn from_parts(keyword: &'a str, args: Vec<&'a str>) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "open" => Self::Open,
            "login" => Self::Login(args),
            "logout" | "quit" | "exit" | "close" => Self::Logout,
            "create" => Self::Create(args),
            "join" => Self::Join(args),
            "leave" => Self::Leave(args),
            "list" => Self::List(args),
            "msg" | "message" => Self::Msg(args),
            "im" => Self::Im(args),
            "privmsg" => Self::Privmsg(args),
            _ => Self::Unknown(keyword),
        }
    }

    /// Canonical keyword, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Login(_) => "login",
            Self::Logout => "logout",
            Self::Create(_) => "create",
            Self::Join(_) => "join",
            Self::Leave(_) => "leave",
            Self::List(_) => "list",
            Self::Msg(_) => "msg",
            Self::Im(_) => "im",
            Self::Privmsg(_) => "privmsg",
            Self::Unknown(_) => "unknown",
        }
    }
}
