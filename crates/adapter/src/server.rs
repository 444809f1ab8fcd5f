//! TCP control socket.
//!
//! A deliberately small listener: it accepts exactly one client for the
//! lifetime of the process and treats the connection as an unframed byte
//! pipe in both directions. Received payloads are forwarded into a bounded
//! queue for the game loop to drain on its own thread; nothing here ever
//! calls into the engine.
//!
//! Read semantics follow the classic blocking-socket shape: a short read
//! timeout that expires is "no data available" and the loop just spins
//! again; EOF or any read error closes the socket and the listener returns.
//! There is no reconnect.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, oneshot};

use crate::types::Direction;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Read timeout; expiry is silently ignored, not an error.
    pub read_timeout_ms: u64,
    /// Receive buffer size per read.
    pub buffer_size: usize,
    /// Bound on payloads queued for the game loop; overflow is dropped.
    pub max_pending_payloads: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 54543,
            read_timeout_ms: 3000,
            buffer_size: 4096,
            max_pending_payloads: 32,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables, falling back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let host = env::var("TUI_2048_HOST").unwrap_or(defaults.host);
        let port = env::var("TUI_2048_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);
        let read_timeout_ms = env::var("TUI_2048_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.read_timeout_ms);
        let max_pending_payloads = env::var("TUI_2048_MAX_PENDING")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_pending_payloads);

        Self {
            host,
            port,
            read_timeout_ms,
            buffer_size: defaults.buffer_size,
            max_pending_payloads,
        }
    }
}

/// Check if the control socket is disabled via environment
pub fn is_disabled() -> bool {
    std::env::var("TUI_2048_DISABLED")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// Preflight check that `host:port` can currently be bound.
pub fn check_tcp_listen_available(host: &str, port: u16) -> std::io::Result<()> {
    std::net::TcpListener::bind((host, port)).map(|_| ())
}

/// Decode a received payload as a move direction.
///
/// The wire format is plain UTF-8 text ("up", "down", "left", "right", or
/// single letters); anything else decodes to `None`.
pub fn decode_direction(payload: &[u8]) -> Option<Direction> {
    std::str::from_utf8(payload).ok().and_then(Direction::from_str)
}

/// Handle for pushing text to the connected client.
///
/// Cheap to clone; usable from the sync side of the bridge.
#[derive(Debug, Clone)]
pub struct ServerHandle {
    out_tx: mpsc::UnboundedSender<String>,
    connected: Arc<AtomicBool>,
}

impl ServerHandle {
    pub fn new(out_tx: mpsc::UnboundedSender<String>, connected: Arc<AtomicBool>) -> Self {
        Self { out_tx, connected }
    }

    pub fn connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Queue a UTF-8 string for the client, with no framing.
    ///
    /// With no client attached this is a logged no-op, never an error.
    pub fn send(&self, text: &str) {
        if !self.connected() {
            println!("[Server] no connection, dropping outbound text");
            return;
        }
        let _ = self.out_tx.send(text.to_string());
    }
}

/// Run the listener: bind, accept one client, pump bytes until it goes away.
///
/// The bound address is reported through `ready_tx` (the configured port may
/// be 0 for an ephemeral one). Returns once the client disconnects or the
/// first read error occurs; the connected flag tracks the client lifetime.
pub async fn run_server(
    config: ServerConfig,
    payload_tx: mpsc::Sender<Vec<u8>>,
    mut out_rx: mpsc::UnboundedReceiver<String>,
    connected: Arc<AtomicBool>,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let bound = listener.local_addr()?;
    println!("[Server] listening on {}", bound);
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let (socket, addr) = listener.accept().await?;
    println!("[Server] client connected from {}", addr);
    connected.store(true, Ordering::SeqCst);

    let (mut reader, mut writer) = socket.into_split();
    let read_timeout = Duration::from_millis(config.read_timeout_ms);
    let mut buf = vec![0u8; config.buffer_size];
    let mut out_open = true;

    loop {
        tokio::select! {
            outbound = out_rx.recv(), if out_open => {
                match outbound {
                    Some(text) => {
                        if let Err(e) = writer.write_all(text.as_bytes()).await {
                            println!("[Server] send failed: {}", e);
                            break;
                        }
                    }
                    None => out_open = false,
                }
            }
            read = tokio::time::timeout(read_timeout, reader.read(&mut buf)) => {
                match read {
                    // Timeout: no data available, keep waiting.
                    Err(_) => continue,
                    // Peer closed the connection.
                    Ok(Ok(0)) => break,
                    Ok(Ok(n)) => {
                        match payload_tx.try_send(buf[..n].to_vec()) {
                            Ok(()) => {}
                            Err(mpsc::error::TrySendError::Full(_)) => {
                                println!("[Server] command queue full, dropping {} bytes", n);
                            }
                            // Game loop is gone; nothing left to serve.
                            Err(mpsc::error::TrySendError::Closed(_)) => break,
                        }
                    }
                    Ok(Err(e)) => {
                        println!("[Server] receive failed: {}", e);
                        break;
                    }
                }
            }
        }
    }

    connected.store(false, Ordering::SeqCst);
    println!("[Server] client {} disconnected", addr);
    Ok(())
}
