//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds to a socket and spawns a Connection task for each
//! incoming client.

use crate::network::Connection;
use crate::state::Hub;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    hub: Arc<Hub>,
}

impl Gateway {
    /// Bind the gateway to the specified address.
    pub async fn bind(addr: SocketAddr, hub: Arc<Hub>) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "Listener bound");
        Ok(Self { listener, hub })
    }

    /// Run the gateway, accepting connections forever.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (stream, addr) = self.listener.accept().await?;
            let hub = Arc::clone(&self.hub);
            let conn_id = hub.allocate_conn_id();
            tokio::spawn(async move {
                Connection::new(conn_id, stream, addr, hub).run().await;
            });
        }
    }
}
