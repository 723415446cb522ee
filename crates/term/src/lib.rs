//! Terminal rendering layer.
//!
//! Rendering is split in two:
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure)
//! - a [`FrameSink`] shows the frame; [`TerminalRenderer`] writes it to the
//!   terminal through crossterm, [`MemorySink`] keeps it for inspection

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, CONFIRM_TEXT, GAME_OVER_TEXT};
pub use renderer::{
    encode_diff_into, encode_full_into, write_with_retry, FrameSink, MemorySink,
    TerminalRenderer, RENDER_RETRY_LIMIT,
};
