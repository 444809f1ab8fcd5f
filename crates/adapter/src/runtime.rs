//! Control-socket runtime integration.
//!
//! Bridges the sync game loop with the async TCP listener. The listener
//! runs on its own tokio runtime and pushes received payloads into a
//! bounded queue; the game loop drains that queue once per tick with
//! [`Adapter::poll_payload`]. The listener never touches game state; the
//! queue is the only path between the two.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::server::{is_disabled, run_server, ServerConfig, ServerHandle};

/// Running control-socket instance.
pub struct Adapter {
    _rt: Runtime,
    payload_rx: mpsc::Receiver<Vec<u8>>,
    handle: ServerHandle,
    config: ServerConfig,
}

impl Adapter {
    /// Start the listener with the given configuration.
    pub fn start(config: ServerConfig) -> Result<Self> {
        let (payload_tx, payload_rx) = mpsc::channel(config.max_pending_payloads.max(1));
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let connected = Arc::new(AtomicBool::new(false));
        let handle = ServerHandle::new(out_tx, Arc::clone(&connected));

        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let server_config = config.clone();
        rt.spawn(async move {
            if let Err(e) = run_server(server_config, payload_tx, out_rx, connected, None).await {
                eprintln!("[Server] stopped: {}", e);
            }
        });

        Ok(Self {
            _rt: rt,
            payload_rx,
            handle,
            config,
        })
    }

    /// Start from environment variables.
    ///
    /// Returns `Ok(None)` when `TUI_2048_DISABLED` is set.
    pub fn start_from_env() -> Result<Option<Self>> {
        if is_disabled() {
            println!("[Server] control socket disabled via TUI_2048_DISABLED");
            return Ok(None);
        }
        Self::start(ServerConfig::from_env()).map(Some)
    }

    /// Take the next queued payload, if any.
    ///
    /// Non-blocking; call repeatedly once per tick to drain the queue.
    pub fn poll_payload(&mut self) -> Option<Vec<u8>> {
        self.payload_rx.try_recv().ok()
    }

    /// Queue a UTF-8 string for the client (logged no-op with no client).
    pub fn send(&self, text: &str) {
        self.handle.send(text);
    }

    pub fn connected(&self) -> bool {
        self.handle.connected()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
