//! Game state module - board, score, and lifecycle
//!
//! Ties the board, RNG, and scoring together behind the move/query surface
//! the front end drives. The state is a single long-lived mutable value:
//! every accepted move mutates it in place and there is no reset path short
//! of constructing a new game.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, Tile, FOUR_TILE_ODDS, GRID_SIZE};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    game_over: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The fresh board holds exactly one tile: a 2 nine times out of ten,
    /// otherwise a 4, in a uniformly random cell.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            score: 0,
            game_over: false,
            rng: SimpleRng::new(seed),
        };
        state.spawn_tile();
        state
    }

    /// Create a game over a prepared board layout.
    ///
    /// Score starts at zero and the game-over flag is clear; the next spawn
    /// draws from a fresh RNG seeded with `seed`. Used by harnesses and
    /// tests that need to drive exact positions.
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            score: 0,
            game_over: false,
            rng: SimpleRng::new(seed),
        }
    }

    /// Apply one move: slide and merge toward `dir`, then spawn.
    ///
    /// Returns whether any tile moved or merged. A spawn attempt follows
    /// every call, including calls that change nothing; when the spawn
    /// finds no empty cell the game-over flag is computed instead.
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        let before = self.board;
        self.score += self.board.shift(dir);
        let changed = self.board != before;
        self.spawn_tile();
        changed
    }

    /// Place one random tile, or detect the end of the game.
    ///
    /// Picks a uniformly random empty cell and writes a 2 (or a 4, one roll
    /// in ten). With no empty cell left the board is dead exactly when no
    /// two neighbors hold equal values: that predicate decides the
    /// game-over flag and the board is left untouched.
    fn spawn_tile(&mut self) {
        let empties = self.board.empty_cells();
        if empties.is_empty() {
            self.game_over = !self.board.has_adjacent_pair();
            return;
        }

        let cell = empties[self.rng.next_range(empties.len() as u32) as usize];
        let value = if self.rng.next_range(FOUR_TILE_ODDS) == 0 { 4 } else { 2 };
        self.board.set_index(cell, value);
    }

    /// Read-only snapshot of the grid for rendering
    pub fn grid(&self) -> [[Tile; GRID_SIZE]; GRID_SIZE] {
        self.board.rows()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Capture the render-facing state in one value
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.rows(),
            score: self.score,
            game_over: self.game_over,
        }
    }
}
