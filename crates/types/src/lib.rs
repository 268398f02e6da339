//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be
//! shared by the board model, the placement search, and any presentation
//! shell that drives them.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Examples
//!
//! ```
//! use tetrai_types::{Command, Orientation, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//! assert_eq!(piece.code(), 4);
//!
//! assert_eq!(Orientation::North.rotate_right(), Orientation::East);
//! assert_eq!(Orientation::from_index(5), Orientation::East);
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// The seven tetromino piece kinds.
///
/// Declaration order matches the cell codes written into the grid
/// (`I = 1` through `Z = 7`); `0` is reserved for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    L,
    J,
    T,
    O,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in cell-code order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Nonzero grid code for this kind (1..=7).
    pub const fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based position in [`PieceKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::L => 1,
            PieceKind::J => 2,
            PieceKind::T => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Inverse of [`PieceKind::code`]. Returns `None` for `0` and anything above `7`.
    ///
    /// ```
    /// use tetrai_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_code(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_code(0), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[code as usize - 1]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation state of a piece.
///
/// - **North**: spawn orientation (index 0)
/// - **East**: one step right (index 1)
/// - **South**: two steps (index 2)
/// - **West**: three steps right, or one step left (index 3)
///
/// Pieces with fewer distinct visual rotations still use all four states;
/// the piece catalog maps redundant states onto the canonical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Index in `0..4`.
    pub const fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Build from any index; wraps modulo 4.
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Orientation::North,
            1 => Orientation::East,
            2 => Orientation::South,
            _ => Orientation::West,
        }
    }

    /// One step clockwise (index + 1)
    pub fn rotate_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// One step counter-clockwise (index - 1)
    pub fn rotate_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::East => "east",
            Orientation::South => "south",
            Orientation::West => "west",
        }
    }
}

/// Commands a driver (human shell or agent) can push into the board model.
///
/// The command set is identical regardless of who issues it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Rotate the active piece one step counter-clockwise
    RotateLeft,
    /// Rotate the active piece one step clockwise
    RotateRight,
    /// Drop to the resting row and lock
    HardDrop,
    /// Advance one row, locking if the piece cannot descend
    StepGravity,
    /// Clear the board and start a new game
    Reset,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotateleft" => Some(Command::RotateLeft),
            "rotateright" => Some(Command::RotateRight),
            "harddrop" => Some(Command::HardDrop),
            "stepgravity" => Some(Command::StepGravity),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
            Command::HardDrop => "hardDrop",
            Command::StepGravity => "stepGravity",
            Command::Reset => "reset",
        }
    }
}

/// Who drives the active piece.
///
/// `Manual`: only explicit commands and gravity move the piece.
/// `Assisted`: the driving loop steers the piece toward the best placement
/// before every gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Manual,
    #[default]
    Assisted,
}

impl Mode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manual" => Some(Mode::Manual),
            "assisted" | "ai" => Some(Mode::Assisted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Manual => "manual",
            Mode::Assisted => "assisted",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Line clear scoring table (Classic Nintendo scoring, level 0)
///
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];
