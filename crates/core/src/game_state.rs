//! Game state module - the tick-driven controller
//!
//! `GameState` owns the board, the active piece, the score and the random
//! source. One call to [`GameState::tick`] is one discrete simulation step:
//!
//! 1. apply at most one input action,
//! 2. unless that action already locked the piece, try to move the piece down
//!    one row; if that is blocked, lock it, clear full rows, score them and
//!    spawn the next piece,
//! 3. a spawn that collides immediately ends the game.
//!
//! At most one piece locks per tick.
//!
//! `GameOver` is absorbing: further ticks do nothing until [`GameState::reset`].

use crate::board::Board;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::ScoreState;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetromino::Tetromino;
use crate::types::{GameAction, GameStatus, LockEvent, PieceKind, BOARD_HEIGHT};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Tetromino,
    score: ScoreState,
    status: GameStatus,
    rng: R,
    /// Ticks processed since the last reset.
    ticks: u64,
    /// Pieces locked since the last reset.
    pieces_locked: u32,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game driven by a seeded [`SimpleRng`].
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a running game with an empty board and a freshly spawned piece.
    pub fn new(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: Tetromino::new(PieceKind::I),
            score: ScoreState::new(),
            status: GameStatus::Running,
            rng,
            ticks: 0,
            pieces_locked: 0,
            last_event: None,
        };
        state.reset();
        state
    }

    /// Start a new game on the same random source.
    pub fn reset(&mut self) {
        self.board.reset();
        self.score.reset();
        self.status = GameStatus::Running;
        self.ticks = 0;
        self.pieces_locked = 0;
        self.last_event = None;
        self.spawn_piece();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score.total()
    }

    pub fn lines(&self) -> u32 {
        self.score.lines()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece, for scripted setups.
    pub fn set_active(&mut self, piece: Tetromino) {
        self.active = piece;
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = match self.status {
            GameStatus::Running => Some(ActiveSnapshot::from(self.active)),
            GameStatus::GameOver => None,
        };
        out.status = self.status;
        out.score = self.score.total();
        out.lines = self.score.lines();
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a random piece at the spawn origin.
    ///
    /// Returns false, and ends the game, if the spawn placement collides.
    pub fn spawn_piece(&mut self) -> bool {
        let index = self.rng.next_int(PieceKind::COUNT as u32) as usize;
        let kind = PieceKind::ALL[index % PieceKind::COUNT];
        self.active = Tetromino::new(kind);

        if self.active.collides(&self.board) {
            self.status = GameStatus::GameOver;
            return false;
        }
        true
    }

    /// Run one simulation step. Returns true if a piece locked during it.
    pub fn tick(&mut self, action: Option<GameAction>) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.ticks += 1;

        let locked_before = self.pieces_locked;
        if let Some(action) = action {
            self.apply_action(action);
        }
        // A drop that already locked ends the tick; the new piece is shown at spawn.
        if self.pieces_locked == locked_before {
            self.gravity_step();
        }
        self.pieces_locked != locked_before
    }

    /// Apply a single action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.is_game_over() {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.active.move_by(-1, 0, &self.board),
            GameAction::MoveRight => self.active.move_by(1, 0, &self.board),
            GameAction::RotateCw => self.active.rotate(&self.board),
            GameAction::SoftDrop => {
                self.gravity_step();
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Move the piece down one row, locking it if it cannot move.
    ///
    /// Returns true if the piece locked.
    pub fn gravity_step(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        if self.active.move_by(0, 1, &self.board) {
            return false;
        }
        self.lock_piece();
        true
    }

    /// Drop until the piece locks, for at most `BOARD_HEIGHT` steps.
    ///
    /// Returns false if the cap was reached without locking; play simply
    /// continues in that case.
    pub fn hard_drop(&mut self) -> bool {
        for _ in 0..BOARD_HEIGHT {
            if self.gravity_step() {
                return true;
            }
        }
        false
    }

    /// Lock the active piece onto the board, clear rows and spawn the next piece.
    fn lock_piece(&mut self) {
        let piece = self.active;
        piece.lock_into(&mut self.board);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let lines_cleared = self.board.clear_full_rows().len() as u32;
        let score_gained = self.score.record_clears(lines_cleared);

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            piece: piece.kind,
            lines_cleared,
            score_gained,
            game_over: !spawned,
        });
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
