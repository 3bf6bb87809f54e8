//! TCP transport with a read timeout and an explicit lifecycle.
//!
//! The connection owns the one live socket. It is created by `connect`,
//! replaced wholesale on any transport error, and dropped on `close`. A read
//! timeout is not an error: a quiet channel is the normal case for a bot,
//! and `receive` reports it as `Ok(None)` so the caller just takes another
//! lap. A zero-byte read, on the other hand, is the peer hanging up and is
//! surfaced as a transport error so the run loop reconnects.

use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// Upper bound on a single read, matching typical IRC line traffic.
const READ_BUFFER_SIZE: usize = 2048;

/// Transport failure taxonomy. Everything here is non-fatal to the process:
/// the run loop answers each variant with a reconnect.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        source: std::io::Error,
    },
    #[error("send failed: {0}")]
    Send(std::io::Error),
    #[error("receive failed: {0}")]
    Receive(std::io::Error),
    #[error("connection closed by peer")]
    Closed,
    #[error("not connected")]
    NotConnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// Owns the single live TCP stream to the server.
pub struct Connection {
    host: String,
    port: u16,
    read_timeout: Duration,
    stream: Option<TcpStream>,
    status: ConnectionStatus,
}

impl Connection {
    pub fn new(host: &str, port: u16, read_timeout: Duration) -> Self {
        Self {
            host: host.to_string(),
            port,
            read_timeout,
            stream: None,
            status: ConnectionStatus::Disconnected,
        }
    }

    /// Open a fresh stream to the configured address. Any previous stream is
    /// dropped first, so `connect` is also the reconnect path.
    pub async fn connect(&mut self) -> Result<(), TransportError> {
        self.close();
        self.status = ConnectionStatus::Connecting;
        match TcpStream::connect((self.host.as_str(), self.port)).await {
            Ok(stream) => {
                self.stream = Some(stream);
                self.status = ConnectionStatus::Connected;
                Ok(())
            }
            Err(source) => {
                self.status = ConnectionStatus::Disconnected;
                Err(TransportError::Connect {
                    host: self.host.clone(),
                    port: self.port,
                    source,
                })
            }
        }
    }

    /// Write one line verbatim. The line is recorded to the diagnostic sink
    /// before transmission.
    pub async fn send(&mut self, line: &str) -> Result<(), TransportError> {
        let stream = self.stream.as_mut().ok_or(TransportError::NotConnected)?;
        debug!(">> {}", line.trim_end());
        stream
            .write_all(line.as_bytes())
            .await
            .map_err(TransportError::Send)
    }

    /// Read up to one buffer of data, bounded by the read timeout.
    ///
    /// `Ok(None)` means the timeout elapsed with nothing to read — a normal
    /// outcome, not a failure. `Err(Closed)` means the peer shut the stream.
    /// Bytes are decoded lossily; IRC servers make no encoding promises.
    pub async fn receive(&mut self) -> Result<Option<String>, TransportError> {
        let timeout = self.read_timeout;
        let stream = self.stream.as_mut().ok_or(TransportError::NotConnected)?;
        let mut buf = [0u8; READ_BUFFER_SIZE];
        match tokio::time::timeout(timeout, stream.read(&mut buf)).await {
            Err(_elapsed) => Ok(None),
            Ok(Err(e)) => Err(TransportError::Receive(e)),
            Ok(Ok(0)) => Err(TransportError::Closed),
            Ok(Ok(n)) => Ok(Some(String::from_utf8_lossy(&buf[..n]).into_owned())),
        }
    }

    /// Drop the stream if there is one. Idempotent; safe on a connection
    /// that was never opened.
    pub fn close(&mut self) {
        self.stream = None;
        self.status = ConnectionStatus::Disconnected;
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn local_server() -> (TcpListener, String, u16) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        (listener, addr.ip().to_string(), addr.port())
    }

    #[tokio::test]
    async fn test_connect_and_status() {
        let (listener, host, port) = local_server().await;
        let mut conn = Connection::new(&host, port, Duration::from_secs(1));
        assert_eq!(conn.status(), ConnectionStatus::Disconnected);
        conn.connect().await.unwrap();
        assert_eq!(conn.status(), ConnectionStatus::Connected);
        let _ = listener.accept().await.unwrap();
        conn.close();
        assert_eq!(conn.status(), ConnectionStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_connect_refused() {
        // Bind then drop to get a port that refuses connections.
        let (listener, host, port) = local_server().await;
        drop(listener);
        let mut conn = Connection::new(&host, port, Duration::from_secs(1));
        let err = conn.connect().await.unwrap_err();
        assert!(matches!(err, TransportError::Connect { .. }));
        assert_eq!(conn.status(), ConnectionStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_send_is_verbatim() {
        let (listener, host, port) = local_server().await;
        let mut conn = Connection::new(&host, port, Duration::from_secs(1));
        conn.connect().await.unwrap();
        let (mut sock, _) = listener.accept().await.unwrap();

        conn.send("NICK warden\n").await.unwrap();
        let mut buf = [0u8; 64];
        let n = sock.read(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"NICK warden\n");
    }

    #[tokio::test]
    async fn test_receive_timeout_is_not_an_error() {
        let (listener, host, port) = local_server().await;
        let mut conn = Connection::new(&host, port, Duration::from_millis(50));
        conn.connect().await.unwrap();
        let (_sock, _) = listener.accept().await.unwrap();

        let got = conn.receive().await.unwrap();
        assert_eq!(got, None);
        // Still connected; the caller just loops again.
        assert_eq!(conn.status(), ConnectionStatus::Connected);
    }

    #[tokio::test]
    async fn test_receive_data_and_peer_close() {
        let (listener, host, port) = local_server().await;
        let mut conn = Connection::new(&host, port, Duration::from_secs(1));
        conn.connect().await.unwrap();
        let (mut sock, _) = listener.accept().await.unwrap();

        sock.write_all(b"PING :abc\r\n").await.unwrap();
        let got = conn.receive().await.unwrap();
        assert_eq!(got.as_deref(), Some("PING :abc\r\n"));

        drop(sock);
        let err = conn.receive().await.unwrap_err();
        assert!(matches!(err, TransportError::Closed));
    }

    #[tokio::test]
    async fn test_use_before_connect() {
        let mut conn = Connection::new("127.0.0.1", 1, Duration::from_secs(1));
        assert!(matches!(
            conn.send("PING :pingis\n").await.unwrap_err(),
            TransportError::NotConnected
        ));
        assert!(matches!(
            conn.receive().await.unwrap_err(),
            TransportError::NotConnected
        ));
        // close() on a never-opened connection is a no-op.
        conn.close();
        conn.close();
    }
}
