//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole simulation and has **no** terminal, timing or
//! file I/O. Given the same random source and the same sequence of actions it
//! always produces the same game.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven 4x4 piece masks and clockwise rotation
//! - [`board`]: 20x10 grid, full-row detection and row collapse
//! - [`collision`]: legality check for a mask at an origin
//! - [`tetromino`]: the active piece (move, rotate, lock)
//! - [`rng`]: the [`RandomSource`] seam and a seeded LCG
//! - [`scoring`]: flat 100 points per cleared row
//! - [`game_state`]: the tick-driven controller
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Rules
//!
//! - Gravity moves the piece down one row per tick.
//! - A piece that cannot move down locks immediately; there is no lock delay.
//! - Rotation is clockwise only and has no wall kicks: it fits in place or is rejected.
//! - Each cleared row scores 100 points.
//! - The game ends when a newly spawned piece overlaps the stack.
//!
//! # Example
//!
//! ```
//! use term_tetris_core::GameState;
//! use term_tetris_types::GameAction;
//!
//! let mut game = GameState::with_seed(12345);
//!
//! game.tick(Some(GameAction::MoveRight));
//! game.tick(Some(GameAction::RotateCw));
//! let locked = game.tick(Some(GameAction::HardDrop));
//!
//! assert!(locked);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::GameState;
pub use pieces::{get_mask, rotate_cw, Mask};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scoring::{calculate_score, ScoreState};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetromino::Tetromino;
