//! The interactive loop: sample input, tick, render, repeat.
//!
//! The loop is generic over its collaborators so the same code drives the
//! terminal binary and headless tests.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{GameSnapshot, GameState, RandomSource};
use crate::input::{InputEvent, InputSource};
use crate::session_log::{SessionLog, SessionRecord};
use crate::term::{FrameBuffer, FrameSink, GameView};
use crate::types::GameStatus;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player quit while the game was running.
    Quit,
    /// The game ended; `confirmed` is false if the player quit at the prompt.
    GameOver { confirmed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub score: u32,
    pub lines: u32,
    pub ticks: u64,
}

/// Drive `game` until it ends or the player quits.
///
/// Each iteration samples at most one input, runs one tick and presents one
/// frame, then sleeps for whatever is left of `tick`. The tick that ends the
/// game is rendered with the game-over message, after which the loop waits
/// for confirmation.
pub fn run_session<R, I, S, W>(
    game: &mut GameState<R>,
    input: &mut I,
    sink: &mut S,
    view: &GameView,
    tick: Duration,
    log: &mut SessionLog<W>,
) -> Result<SessionSummary>
where
    R: RandomSource,
    I: InputSource,
    S: FrameSink,
    W: std::io::Write,
{
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    while game.status() == GameStatus::Running {
        let started = Instant::now();

        let action = match input.poll_command()? {
            Some(InputEvent::Quit) => {
                log.record(&SessionRecord::Quit {
                    score: game.score(),
                    lines: game.lines(),
                    ticks: game.ticks(),
                });
                return Ok(summary(game, SessionEnd::Quit));
            }
            Some(InputEvent::Action(action)) => Some(action),
            None => None,
        };

        game.tick(action);
        if let Some(ev) = game.take_last_event() {
            log.record(&SessionRecord::lock(&ev, game.score(), game.lines()));
        }

        game.snapshot_into(&mut snap);
        view.render_into(&snap, &mut fb);
        sink.present(&fb)?;

        if game.is_game_over() {
            break;
        }
        if let Some(rest) = tick.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    log.record(&SessionRecord::GameOver {
        score: game.score(),
        lines: game.lines(),
        ticks: game.ticks(),
        pieces: game.pieces_locked(),
    });
    let confirmed = input.wait_for_confirm()?;
    Ok(summary(game, SessionEnd::GameOver { confirmed }))
}

/// Run `body` with `screen` taken over, restoring it on every path.
///
/// A failed `enter` skips `body` but still calls `exit`, since setup may have
/// stopped half way (raw mode on, alternate screen not). A restore failure is
/// reported on stderr; the body's result wins.
pub fn with_screen<S, T>(screen: &mut S, body: impl FnOnce(&mut S) -> Result<T>) -> Result<T>
where
    S: FrameSink,
{
    let result = screen.enter().and_then(|()| body(screen));
    if let Err(e) = screen.exit() {
        eprintln!("[term] failed to restore terminal: {:#}", e);
    }
    result
}

fn summary<R: RandomSource>(game: &GameState<R>, end: SessionEnd) -> SessionSummary {
    SessionSummary {
        end,
        score: game.score(),
        lines: game.lines(),
        ticks: game.ticks(),
    }
}
