//! Shared server state.

mod message;
mod registry;
mod room;
mod user;

pub use message::Message;
pub use registry::{Registered, Registry};
pub use room::Room;
pub use user::User;

use crate::config::Config;
use dashmap::DashMap;
use linechat_proto::Reply;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// Non-owning handle to a connection; key into [`Hub::connections`].
pub type ConnId = u64;

/// Process-wide shared state, created once at startup and handed to every
/// connection task.
///
/// The registry sits behind a single mutex: each command handler locks it for
/// its whole run, which makes every handler an atomic transaction relative to
/// all other connections. The two-pass `leave` validation and the multi-room
/// `msg` send depend on exactly that. Outgoing delivery stays non-blocking
/// (unbounded senders), so holding the lock across fan-out is safe.
pub struct Hub {
    /// User/room directory; the transactional core.
    pub registry: Mutex<Registry>,
    /// Connection table: outgoing reply queue per live connection. Outside the
    /// transaction, entries come and go with the connection tasks.
    pub connections: DashMap<ConnId, mpsc::UnboundedSender<Reply>>,
    /// Command prefix clients must use.
    pub prefix: char,
    /// How many stored messages a join/im replays.
    pub replay_depth: usize,
    /// Server name, shown in the greeting.
    pub server_name: String,
    next_conn_id: AtomicU64,
}

impl Hub {
    pub fn new(config: &Config) -> Self {
        Self {
            registry: Mutex::new(Registry::new()),
            connections: DashMap::new(),
            prefix: config.protocol.prefix,
            replay_depth: config.protocol.replay_depth,
            server_name: config.server.name.clone(),
            next_conn_id: AtomicU64::new(1),
        }
    }

    /// Allocate a fresh connection id.
    pub fn allocate_conn_id(&self) -> ConnId {
        self.next_conn_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Queue a reply on a connection's outgoing channel.
    ///
    /// Fire-and-forget: a connection mid-teardown just misses the line.
    pub fn send_to(&self, conn: ConnId, reply: Reply) {
        if let Some(tx) = self.connections.get(&conn) {
            let _ = tx.send(reply);
        }
    }
}
