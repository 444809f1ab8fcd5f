//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation move processing
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 tile grid with the rotate/compact/merge move pass
//! - [`game_state`]: Board plus score, spawning, and game-over detection
//! - [`rng`]: Seeded LCG for tile placement
//! - [`snapshot`]: Copyable render-facing state
//!
//! # Game Rules
//!
//! Classic 2048 on a 4x4 grid:
//!
//! - A move slides every tile as far as it goes in one direction; equal
//!   neighbors along the move axis merge once into their doubled value
//! - Each merge adds the doubled value to the score
//! - Every move is followed by one spawn: a 2 (90%) or a 4 (10%) in a
//!   random empty cell
//! - The game is over when the board is full and no two neighbors are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::Direction;
//!
//! let mut game = GameState::new(12345);
//! game.apply_move(Direction::Left);
//!
//! assert!(!game.is_game_over());
//! let grid = game.grid();
//! assert!(grid.iter().flatten().any(|&v| v != 0));
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{merge_line, Board};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
