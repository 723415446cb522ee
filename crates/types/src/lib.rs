//! Shared types and constants.
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! simulation core, the terminal front-end and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: (3, 0), the top-left corner of the piece's 4x4 box
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(1), Some(PieceKind::O));
//! assert_eq!(GameAction::from_key('w'), Some(GameAction::RotateCw));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn origin for every new piece, as (x, y) of the 4x4 box.
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Points awarded per cleared row (flat, no multi-line bonus).
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 300;

/// Fastest tick interval accepted from configuration (~60 FPS).
pub const MIN_TICK_MS: u64 = 16;

/// The seven tetromino piece kinds
///
/// The declaration order is the catalog order: `I, O, T, S, Z, J, L` map to
/// identities 0..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Number of distinct piece kinds.
    pub const COUNT: usize = 7;

    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index (0-6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by catalog index.
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Commands the controller accepts once per tick.
///
/// "No input" is expressed as `Option::<GameAction>::None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// One extra gravity step this tick
    SoftDrop,
    /// Fall until locked
    HardDrop,
}

impl GameAction {
    /// Map a typed character to an action.
    ///
    /// ```
    /// use term_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_key('a'), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_key(' '), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_key('x'), None);
    /// ```
    pub fn from_key(ch: char) -> Option<Self> {
        match ch {
            'a' => Some(GameAction::MoveLeft),
            'd' => Some(GameAction::MoveRight),
            'w' => Some(GameAction::RotateCw),
            's' => Some(GameAction::SoftDrop),
            ' ' => Some(GameAction::HardDrop),
            _ => None,
        }
    }
}

/// Session status. `GameOver` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Occupied; the kind only matters for rendering
pub type Cell = Option<PieceKind>;

/// Emitted by the controller each time a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub piece: PieceKind,
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// True when the piece spawned after this lock was blocked.
    pub game_over: bool,
}
