//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the board simulation: piece geometry, the grid, and the
//! rules that move, lock and clear. It has **zero dependencies** on UI,
//! logging, or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Cheap to copy**: the grid is a flat array, so search code can clone it freely
//! - **Portable**: any shell (terminal, GUI, headless runner) can drive it
//!
//! # Module Structure
//!
//! - [`pieces`]: tetromino shapes, rotation states, bounding offsets
//! - [`board`]: 10x20 grid with placement checks, locking and row clearing
//! - [`game_state`]: the board model (active piece, commands, spawn, game over)
//! - [`rng`]: seeded piece source (uniform, 7-bag, or scripted)
//! - [`scoring`]: classic line-clear points
//!
//! # Rules
//!
//! - Pieces spawn in the North orientation, centered, with their top row on grid row 0.
//! - Rotation turns in place; a blocked rotation is a silent no-op (no wall kicks).
//! - A piece that cannot descend locks immediately on the next gravity step.
//! - Full rows are removed and everything above shifts down.
//! - A spawn pose that collides ends the game.
//!
//! # Example
//!
//! ```
//! use tetrai_core::GameState;
//! use tetrai_types::Command;
//!
//! let mut game = GameState::new(12345);
//! game.reset();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateRight);
//! let cleared = game.apply(Command::HardDrop);
//!
//! assert_eq!(cleared, 0);
//! assert_eq!(game.piece_id(), 2);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use tetrai_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, LockOutcome};
pub use game_state::{GameState, Tetromino};
pub use pieces::{cells_at, distinct_orientations, get_bounds, get_shape, Bounds, PieceShape};
pub use rng::{PieceQueue, PieceRule, SimpleRng};
pub use scoring::calculate_line_score;
