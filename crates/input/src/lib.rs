//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and exposes a
//! non-blocking [`InputSource`] that the game loop samples once per tick.

pub mod map;
pub mod source;

pub use term_tetris_types as types;

pub use map::{handle_key_event, is_confirm, should_quit};
pub use source::{InputEvent, InputSource, ScriptedInput, TerminalInput};
