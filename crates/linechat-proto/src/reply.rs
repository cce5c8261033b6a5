//! Outbound reply encoding.

/// Response keyword on an outbound line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Open,
    Login,
    Create,
    Close,
    Join,
    Leave,
    List,
    Msg,
    Im,
    Error,
}

impl ReplyKind {
    /// Wire keyword for this reply.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Login => "login",
            Self::Create => "create",
            Self::Close => "close",
            Self::Join => "join",
            Self::Leave => "leave",
            Self::List => "list",
            Self::Msg => "msg",
            Self::Im => "im",
            Self::Error => "error",
        }
    }
}

/// One server-to-client response line.
///
/// Rendered as `<prefix><keyword> <body>`, or just `<prefix><keyword>` when
/// there is no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub body: Option<String>,
}

impl Reply {
    /// A reply with a message body.
    pub fn new(kind: ReplyKind, body: impl Into<String>) -> Self {
        Self { kind, body: Some(body.into()) }
    }

    /// A bare reply with no body.
    pub fn bare(kind: ReplyKind) -> Self {
        Self { kind, body: None }
    }

    /// An `error` reply.
    pub fn error(body: impl Into<String>) -> Self {
        Self::new(ReplyKind::Error, body)
    }

    /// A `msg` reply carrying a formatted chat message.
    pub fn msg(body: impl Into<String>) -> Self {
        Self::new(ReplyKind::Msg, body)
    }

    /// Render this reply as one wire line (without the trailing newline).
    pub fn render(&self, prefix: char) -> String {
        match &self.body {
            Some(body) => format!("{prefix}{} {body}", self.kind.keyword()),
            None => format!("{prefix}{}", self.kind.keyword()),
        }
    }
}
