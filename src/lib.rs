//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! The simulation lives in dedicated crates under `crates/` and is re-exported
//! here as `term_tetris::{core, input, term, types}`. This package adds the
//! process-level pieces: environment configuration, the session log and the
//! interactive loop.

pub mod config;
pub mod session;
pub mod session_log;

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;

pub use config::GameConfig;
pub use session::{run_session, with_screen, SessionEnd, SessionSummary};
pub use session_log::{SessionLog, SessionRecord};
