//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, UI rendering, socket adapter).
//!
//! # Board Dimensions
//!
//! The playfield is the classic 2048 grid:
//!
//! - **Size**: 4 columns x 4 rows (indexed 0-3)
//! - **Cell**: a [`Tile`] value; 0 is empty, any non-zero value is a power
//!   of two starting at 2
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Input poll interval (~30 Hz) |
//!
//! # Tile Spawning
//!
//! After every move one tile is spawned into a random empty cell. The value
//! is decided by a single roll in `0..FOUR_TILE_ODDS`: a roll of 0 places a
//! 4, anything else places a 2, so a 4 appears once in every
//! `FOUR_TILE_ODDS` spawns on average.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GRID_SIZE};
//!
//! // Parse from string (case-insensitive, single letters accepted)
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(Direction::from_str("R"), Some(Direction::Right));
//!
//! // Round-trip through the wire name
//! assert_eq!(Direction::Left.as_str(), "left");
//!
//! // Board dimensions
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Board edge length in cells (4x4 grid)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Input poll interval in milliseconds (~30 Hz)
pub const TICK_MS: u32 = 33;

/// Spawn roll range: a roll of 0 out of `0..FOUR_TILE_ODDS` spawns a 4,
/// every other roll spawns a 2.
pub const FOUR_TILE_ODDS: u32 = 10;

/// A single board cell value.
///
/// 0 means empty; every non-zero value is a power of two >= 2.
pub type Tile = u32;

/// The four move directions
///
/// Not stored anywhere; a direction is passed per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All directions, in a fixed order (handy for exhaustive sweeps in tests).
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Parse a direction from text (case-insensitive)
    ///
    /// Accepts full names or single letters:
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("l"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("up") || s.eq_ignore_ascii_case("u") {
            Some(Direction::Up)
        } else if s.eq_ignore_ascii_case("down") || s.eq_ignore_ascii_case("d") {
            Some(Direction::Down)
        } else if s.eq_ignore_ascii_case("left") || s.eq_ignore_ascii_case("l") {
            Some(Direction::Left)
        } else if s.eq_ignore_ascii_case("right") || s.eq_ignore_ascii_case("r") {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Convert to the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
