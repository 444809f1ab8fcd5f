//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders
//! into a plain framebuffer of styled cells that a terminal backend
//! flushes, instead of going through widget/layout machinery.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout can be asserted in unit tests
//! - Full control over tile geometry (e.g. 8x3 characters per tile)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ServerInfoView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
