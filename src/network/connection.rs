//! Connection - handles an individual client connection.
//!
//! Each connection runs in its own Tokio task: a `select!` loop over inbound
//! lines and the outgoing reply queue. Inbound lines run the session handler
//! to completion (synchronously, under the registry lock) before the next
//! event on any connection touches shared state; outgoing replies are written
//! through a line codec. On logout the queue is drained so the close
//! confirmation reaches the client before the socket drops.

use crate::session::Session;
use crate::state::{ConnId, Hub};
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{info, instrument, warn};

/// Longest accepted inbound line; protects against unframed garbage.
const MAX_LINE_LEN: usize = 1024;

/// A client connection handler.
pub struct Connection {
    conn_id: ConnId,
    stream: TcpStream,
    addr: SocketAddr,
    hub: Arc<Hub>,
}

impl Connection {
    pub fn new(conn_id: ConnId, stream: TcpStream, addr: SocketAddr, hub: Arc<Hub>) -> Self {
        Self {
            conn_id,
            stream,
            addr,
            hub,
        }
    }

    /// Run the connection until EOF, a write failure, or logout.
    #[instrument(skip(self), fields(conn = %self.conn_id, addr = %self.addr), name = "connection")]
    pub async fn run(self) {
        let Connection {
            conn_id,
            stream,
            addr: _,
            hub,
        } = self;

        info!("Client connected");

        let (reader, writer) = stream.into_split();
        let mut inbound = FramedRead::new(reader, LinesCodec::new_with_max_length(MAX_LINE_LEN));
        let mut outbound = FramedWrite::new(writer, LinesCodec::new());

        let (tx, mut rx) = mpsc::unbounded_channel();
        hub.connections.insert(conn_id, tx);
        let prefix = hub.prefix;
        let mut session = Session::new(conn_id, Arc::clone(&hub));

        loop {
            tokio::select! {
                line = inbound.next() => match line {
                    Some(Ok(line)) => {
                        session.handle_line(&line);
                        if session.is_closing() {
                            // Flush queued replies (the close confirmation
                            // among them) before dropping the socket.
                            while let Ok(reply) = rx.try_recv() {
                                if outbound.send(reply.render(prefix)).await.is_err() {
                                    break;
                                }
                            }
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "Read error");
                        break;
                    }
                    None => break,
                },
                reply = rx.recv() => match reply {
                    Some(reply) => {
                        if let Err(e) = outbound.send(reply.render(prefix)).await {
                            warn!(error = %e, "Write error");
                            break;
                        }
                    }
                    // Sender side lives in the connection table until below,
                    // so this only happens on teardown races.
                    None => break,
                },
            }
        }

        hub.connections.remove(&conn_id);
        session.disconnect();
    }
}
