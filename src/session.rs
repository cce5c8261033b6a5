//! Per-connection session state and command dispatch.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{auth, messaging, room};
use crate::state::{ConnId, Hub, Registry};
use linechat_proto::{Command, ParseError, Reply};
use std::sync::Arc;
use tracing::{debug, info};

/// Per-connection authentication and dispatch state.
///
/// A session starts logged out, may bind to exactly one user via `login`, and
/// returns to logged out on logout or disconnect. Room membership lives on the
/// user record, not here.
pub struct Session {
    conn_id: ConnId,
    hub: Arc<Hub>,
    /// Name of the authenticated user, if any.
    user: Option<String>,
    /// Set by logout; tells the connection task to flush and close.
    closing: bool,
}

/// Handler context: one locked view of the shared state plus this session's
/// mutable bits. Constructed per command, dropped (releasing the registry
/// lock) when the handler returns.
pub struct Context<'a> {
    pub conn_id: ConnId,
    pub hub: &'a Hub,
    pub registry: &'a mut Registry,
    pub user: &'a mut Option<String>,
    pub closing: &'a mut bool,
}

impl Context<'_> {
    /// The configured command prefix.
    pub fn prefix(&self) -> char {
        self.hub.prefix
    }

    /// Queue a reply to this session's own connection.
    pub fn reply(&self, reply: Reply) {
        self.hub.send_to(self.conn_id, reply);
    }

    /// The authenticated user's name, or AuthRequired.
    pub fn require_user(&self) -> Result<&str, HandlerError> {
        self.user.as_deref().ok_or(HandlerError::AuthRequired)
    }
}

impl Session {
    pub fn new(conn_id: ConnId, hub: Arc<Hub>) -> Self {
        Self {
            conn_id,
            hub,
            user: None,
            closing: false,
        }
    }

    /// Whether logout asked the connection to close after flushing.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Process one inbound line: parse, dispatch, turn failures into `error`
    /// replies on this session's own connection.
    pub fn handle_line(&mut self, line: &str) {
        let prefix = self.hub.prefix;
        let result = match linechat_proto::parse(line, prefix) {
            Ok(command) => {
                debug!(
                    conn = self.conn_id,
                    user = self.user.as_deref().unwrap_or("-"),
                    command = command.name(),
                    "Dispatching command"
                );
                self.dispatch(command)
            }
            Err(ParseError::PrefixMismatch) => Err(HandlerError::PrefixMismatch),
        };

        if let Err(err) = result {
            debug!(conn = self.conn_id, error = %err, "Command rejected");
            for reply in err.to_replies(prefix) {
                self.hub.send_to(self.conn_id, reply);
            }
        }
    }

    /// Run one command under the registry lock.
    ///
    /// The lock is held for the whole handler, including fan-out, so each
    /// command is atomic with respect to every other connection.
    fn dispatch(&mut self, command: Command<'_>) -> HandlerResult {
        let hub = Arc::clone(&self.hub);
        let mut registry = hub.registry.lock();
        let mut ctx = Context {
            conn_id: self.conn_id,
            hub: &hub,
            registry: &mut *registry,
            user: &mut self.user,
            closing: &mut self.closing,
        };

        match command {
            Command::Open => auth::open(&mut ctx),
            Command::Login(args) => auth::login(&mut ctx, &args),
            Command::Logout => auth::logout(&mut ctx),
            Command::Create(args) => room::create(&mut ctx, &args),
            Command::Join(args) => room::join(&mut ctx, &args),
            Command::Leave(args) => room::leave(&mut ctx, &args),
            Command::List(args) => room::list(&mut ctx, &args),
            Command::Msg(args) => messaging::msg(&mut ctx, &args),
            Command::Im(args) => messaging::im(&mut ctx, &args),
            Command::Privmsg(args) => messaging::privmsg(&mut ctx, &args),
            Command::Unknown(keyword) => Err(HandlerError::UnknownCommand(keyword.to_string())),
        }
    }

    /// Disconnect cleanup: leave every joined room and release the user's
    /// session handle. Safe to call on a never-authenticated session.
    pub fn disconnect(&mut self) {
        if let Some(name) = self.user.take() {
            self.hub.registry.lock().logout_user(&name);
            info!(conn = self.conn_id, user = %name, "Disconnected user");
        } else {
            info!(conn = self.conn_id, "Disconnected logged out client");
        }
    }
}
