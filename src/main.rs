//! Terminal game runner (default binary).
//!
//! Reads configuration from the environment, takes over the terminal, runs
//! one session and restores the terminal. Always exits with status 0 unless
//! the terminal itself fails.

use anyhow::Result;

use term_tetris::core::{GameState, SimpleRng};
use term_tetris::input::TerminalInput;
use term_tetris::term::{GameView, TerminalRenderer};
use term_tetris::{
    run_session, with_screen, GameConfig, SessionEnd, SessionLog, SessionRecord,
};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let seed = config.seed.unwrap_or_else(rand::random);

    let mut log = match config.log_path.as_deref() {
        Some(path) => SessionLog::open(path).unwrap_or_else(|e| {
            eprintln!("[session-log] {:#}", e);
            SessionLog::disabled()
        }),
        None => SessionLog::disabled(),
    };
    log.record(&SessionRecord::SessionStart {
        seed,
        tick_ms: config.tick_ms,
    });

    let mut game = GameState::new(SimpleRng::new(seed));
    let view = GameView::default().with_color(config.color);
    let mut input = TerminalInput::new();

    let mut term = TerminalRenderer::new();
    let summary = with_screen(&mut term, |term| {
        run_session(
            &mut game,
            &mut input,
            term,
            &view,
            config.tick_interval(),
            &mut log,
        )
    })?;

    if let SessionEnd::GameOver { .. } = summary.end {
        println!(
            "Game over. Score: {}  Lines: {}  (seed {})",
            summary.score, summary.lines, seed
        );
    }
    Ok(())
}
