//! Test chat client.
//!
//! A thin line-oriented client for integration testing: send prefixed
//! commands, assert on received response lines.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// A test client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
        })
    }

    /// Send one raw line.
    pub async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive a single response line (5s timeout).
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(RECV_TIMEOUT).await
    }

    /// Receive a response line with an explicit timeout.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        anyhow::ensure!(n > 0, "connection closed by server");
        Ok(line.trim_end().to_string())
    }

    /// Assert that no line arrives within `dur`.
    pub async fn expect_silence(&mut self, dur: Duration) -> anyhow::Result<()> {
        let mut line = String::new();
        match timeout(dur, self.reader.read_line(&mut line)).await {
            Err(_) => Ok(()),
            Ok(Ok(0)) => anyhow::bail!("connection closed while expecting silence"),
            Ok(Ok(_)) => anyhow::bail!("unexpected line: {}", line.trim_end()),
            Ok(Err(e)) => Err(e.into()),
        }
    }

    /// Assert the server closed the connection.
    pub async fn expect_eof(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        let n = timeout(RECV_TIMEOUT, self.reader.read_line(&mut line)).await??;
        anyhow::ensure!(n == 0, "expected EOF, got line: {}", line.trim_end());
        Ok(())
    }

    /// Log in as `name`, registering first if the name is unseen.
    pub async fn login(&mut self, name: &str, password: &str) -> anyhow::Result<()> {
        self.send_line(&format!("!login {name} {password}")).await?;
        let mut line = self.recv().await?;
        if line.starts_with("!error Registering new user") {
            self.send_line(&format!("!login {name} {password}")).await?;
            line = self.recv().await?;
        }
        anyhow::ensure!(
            line.starts_with("!login Login successful"),
            "login as {name} failed: {line}"
        );
        Ok(())
    }
}
