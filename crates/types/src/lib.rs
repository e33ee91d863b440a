//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, so they can be shared by the engine,
//! the terminal front-end, and tests alike.
//!
//! # Board Dimensions
//!
//! The default stage is 10 columns by 20 rows. Row 0 is the top of the well.
//! Sessions may be created with other sizes; the engine never resizes a grid
//! after creation.
//!
//! # Timing Constants
//!
//! All durations are in milliseconds and are *caller* owned: the engine only
//! exposes the values, the game loop does the waiting.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Numerator of the gravity formula |
//! | `DROP_FLOOR_MS` | 200 | Added to every gravity interval |
//! | `SOFT_DROP_DIVISOR` | 10 | Gravity speed-up while soft drop is held |
//! | `SOFT_DROP_GRACE_MS` | 150 | Release timeout for terminals without key-up events |
//! | `CLEAR_ANIMATION_MS` | 1500 | Row disintegration effect before collapse |
//! | `TELEPORT_ANIMATION_MS` | 300 | Hard-drop beam effect |
//!
//! # Examples
//!
//! ```
//! use timelord_tetris_types::{Intent, PieceKind, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let intent = Intent::from_str("rotateCcw").unwrap();
//! assert_eq!(intent, Intent::RotateCcw);
//!
//! assert_eq!(DEFAULT_WIDTH, 10);
//! assert_eq!(DEFAULT_HEIGHT, 20);
//! ```

/// Default board width in cells
pub const DEFAULT_WIDTH: u16 = 10;

/// Default board height in cells
pub const DEFAULT_HEIGHT: u16 = 20;

/// Smallest board side accepted by the front-end (the I piece is 4 cells long)
pub const MIN_BOARD_SIDE: u16 = 4;

/// Gravity numerator: interval is `BASE_DROP_MS / (level + 1) + DROP_FLOOR_MS`
pub const BASE_DROP_MS: u32 = 1000;

/// Constant part of the gravity interval
pub const DROP_FLOOR_MS: u32 = 200;

/// Gravity is divided by this while a soft drop is held
pub const SOFT_DROP_DIVISOR: u32 = 10;

/// Soft drop is treated as released after this long without a press or repeat
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Duration of the row-clear effect before the caller signals `animation_elapsed`
pub const CLEAR_ANIMATION_MS: u32 = 1500;

/// Duration of the hard-drop beam effect
pub const TELEPORT_ANIMATION_MS: u32 = 300;

/// Level increases every this many cumulative rows
pub const ROWS_PER_LEVEL: u32 = 10;

/// A single lock can complete at most this many rows (a piece spans at most 4 rows)
pub const MAX_ROWS_PER_CLEAR: usize = 4;

/// Line clear points at level 0, indexed by `rows_cleared - 1`
///
/// Points are multiplied by (level + 1).
pub const LINE_POINTS: [u32; MAX_ROWS_PER_CLEAR] = [40, 100, 300, 1200];

/// The seven piece kinds
///
/// Each kind has a fixed shape matrix and a display color:
/// - **I**: cyan bar
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow square
/// - **S**: green
/// - **T**: purple
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use timelord_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Display color as an RGB triple
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (80, 227, 230),
            PieceKind::J => (36, 95, 223),
            PieceKind::L => (223, 173, 36),
            PieceKind::O => (223, 217, 36),
            PieceKind::S => (48, 211, 56),
            PieceKind::T => (132, 61, 198),
            PieceKind::Z => (227, 78, 78),
        }
    }
}

/// Lifecycle tag of a grid cell
///
/// - **Empty**: holds no piece
/// - **Locked**: holds a piece that has settled for good
/// - **Transient**: holds the falling piece's projection, or a row marked
///   for clearing while a clear session is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellStatus {
    #[default]
    Empty,
    Locked,
    Transient,
}

/// A cell on the game board
///
/// Fields are private so the pairing invariant holds: a locked cell always
/// carries a kind and an empty cell never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    kind: Option<PieceKind>,
    status: CellStatus,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind: None,
        status: CellStatus::Empty,
    };

    pub const fn locked(kind: PieceKind) -> Self {
        Self {
            kind: Some(kind),
            status: CellStatus::Locked,
        }
    }

    pub const fn transient(kind: PieceKind) -> Self {
        Self {
            kind: Some(kind),
            status: CellStatus::Transient,
        }
    }

    /// Build a cell from a kind and status, or `None` if the pair breaks the invariant
    pub fn new(kind: Option<PieceKind>, status: CellStatus) -> Option<Self> {
        match (kind, status) {
            (None, CellStatus::Empty) => Some(Self::EMPTY),
            (Some(kind), CellStatus::Locked) => Some(Self::locked(kind)),
            (Some(kind), CellStatus::Transient) => Some(Self::transient(kind)),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<PieceKind> {
        self.kind
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
    }

    pub fn is_locked(&self) -> bool {
        self.status == CellStatus::Locked
    }

    pub fn is_transient(&self) -> bool {
        self.status == CellStatus::Transient
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotateDir {
    Cw,
    Ccw,
}

/// Abstract player intents
///
/// Input decoding (keys, pointer, touch) lives outside the engine; the engine
/// only ever sees one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop one row now and speed up gravity while held
    SoftDropStart,
    /// Restore the level gravity
    SoftDropRelease,
    /// Teleport the piece to its landing row and lock it
    HardDrop,
    /// Rotate 90° clockwise
    RotateCw,
    /// Rotate 90° counter-clockwise
    RotateCcw,
}

impl Intent {
    /// Parse intent from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use timelord_tetris_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("SOFTDROPSTART"), Some(Intent::SoftDropStart));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdropstart" => Some(Intent::SoftDropStart),
            "softdroprelease" => Some(Intent::SoftDropRelease),
            "harddrop" => Some(Intent::HardDrop),
            "rotatecw" => Some(Intent::RotateCw),
            "rotateccw" => Some(Intent::RotateCcw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDropStart => "softDropStart",
            Intent::SoftDropRelease => "softDropRelease",
            Intent::HardDrop => "hardDrop",
            Intent::RotateCw => "rotateCw",
            Intent::RotateCcw => "rotateCcw",
        }
    }
}

/// What an intent, tick, or rotation actually did
///
/// Invalid requests are never errors; they report one of these instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Moved,
    Blocked,
    /// A blocked descent locked the piece into the grid
    Locked,
    Rotated,
    RotationFailed,
    IgnoredDuringClear,
    IgnoredAfterGameOver,
    /// Gravity rate changed without moving the piece
    IntervalChanged,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Moved => "moved",
            Outcome::Blocked => "blocked",
            Outcome::Locked => "locked",
            Outcome::Rotated => "rotated",
            Outcome::RotationFailed => "rotation-failed",
            Outcome::IgnoredDuringClear => "ignored-during-clear",
            Outcome::IgnoredAfterGameOver => "ignored-after-gameover",
            Outcome::IntervalChanged => "interval-changed",
        }
    }

    /// True for the two "state refused the request" outcomes
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            Outcome::IgnoredDuringClear | Outcome::IgnoredAfterGameOver
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_timing_defaults() {
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_FLOOR_MS, 200);
        assert_eq!(CLEAR_ANIMATION_MS, 1500);
        assert_eq!(TELEPORT_ANIMATION_MS, 300);
        assert_eq!(LINE_POINTS, [40, 100, 300, 1200]);
    }

    #[test]
    fn cell_constructors_keep_kind_status_pairing() {
        assert!(Cell::EMPTY.is_empty());
        assert_eq!(Cell::EMPTY.status(), CellStatus::Empty);
        assert_eq!(Cell::default(), Cell::EMPTY);

        let locked = Cell::locked(PieceKind::T);
        assert_eq!(locked.kind(), Some(PieceKind::T));
        assert!(locked.is_locked());

        assert_eq!(Cell::new(None, CellStatus::Locked), None);
        assert_eq!(Cell::new(Some(PieceKind::I), CellStatus::Empty), None);
        assert_eq!(
            Cell::new(Some(PieceKind::S), CellStatus::Transient),
            Some(Cell::transient(PieceKind::S))
        );
    }

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn intent_names_parse_back() {
        for intent in [
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDropStart,
            Intent::SoftDropRelease,
            Intent::HardDrop,
            Intent::RotateCw,
            Intent::RotateCcw,
        ] {
            assert_eq!(Intent::from_str(intent.as_str()), Some(intent));
        }
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::IgnoredAfterGameOver.as_str(), "ignored-after-gameover");
        assert!(Outcome::IgnoredDuringClear.is_ignored());
        assert!(!Outcome::Locked.is_ignored());
    }
}
