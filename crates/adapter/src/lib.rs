//! Adapter module - remote control socket
//!
//! A TCP listener that external tooling can connect to. It is wired for
//! exactly one client and speaks no protocol at all: inbound payloads are
//! raw bytes handed to the game loop through a bounded queue, and the only
//! outbound path writes an unframed UTF-8 string.
//!
//! The gameplay binary starts the listener but currently discards whatever
//! it drains; received data drives nothing. The seam for changing that is
//! [`server::decode_direction`] plus the per-tick drain in the game loop;
//! the one rule a future wiring must keep is that moves reach the engine
//! only through the queue, never directly from the listener task.
//!
//! # Environment Variables
//!
//! - `TUI_2048_HOST` / `TUI_2048_PORT`: listen address (default
//!   127.0.0.1:54543)
//! - `TUI_2048_TIMEOUT_MS`: read timeout (default 3000)
//! - `TUI_2048_MAX_PENDING`: payload queue bound (default 32)
//! - `TUI_2048_DISABLED`: set to 1/true to not listen at all

pub mod runtime;
pub mod server;

pub use tui_2048_types as types;

pub use runtime::Adapter;
pub use server::{
    check_tcp_listen_available, decode_direction, is_disabled, run_server, ServerConfig,
    ServerHandle,
};
