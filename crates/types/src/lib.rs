//! Shared types and constants for the falling-block simulation.
//!
//! Everything here is plain data with no behaviour beyond parsing and
//! formatting, so it can be used by the core simulation, the input mapping
//! and the terminal front end alike.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 20 | Board rows |
//! | `DEFAULT_COLS` | 10 | Board columns |
//! | `DEFAULT_TICK_MS` | 500 | Gravity interval |
//! | `DEFAULT_POINTS_PER_LINE` | 100 | Score per cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{format_elapsed, Command, ShapeId};
//!
//! assert_eq!(Command::from_str("move-left"), Some(Command::MoveLeft));
//! assert_eq!(ShapeId(0).tag(), 1);
//! assert_eq!(format_elapsed(75), "01:15");
//! ```

/// Default board height in cells.
pub const DEFAULT_ROWS: usize = 20;

/// Default board width in cells.
pub const DEFAULT_COLS: usize = 10;

/// Default gravity interval in milliseconds.
pub const DEFAULT_TICK_MS: u32 = 500;

/// Points awarded per cleared row.
pub const DEFAULT_POINTS_PER_LINE: u32 = 100;

/// Milliseconds per elapsed-time step.
pub const SECOND_MS: u32 = 1000;

/// Largest shape set that still fits into a `u8` cell tag.
pub const MAX_SHAPES: usize = 254;

/// Largest supported board dimension along either axis.
pub const MAX_BOARD_DIM: usize = 256;

/// Cell value of an empty board cell.
pub const EMPTY: u8 = 0;

/// Index of a shape inside the configured shape set.
///
/// Board cells store `tag()` rather than the raw index so that `0` stays
/// reserved for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u8);

impl ShapeId {
    /// Board cell value written when a piece of this shape lands.
    pub fn tag(self) -> u8 {
        self.0.saturating_add(1)
    }

    /// Inverse of [`ShapeId::tag`]. Returns `None` for empty cells.
    pub fn from_tag(tag: u8) -> Option<Self> {
        tag.checked_sub(1).map(ShapeId)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Discrete input commands applied to the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shift one column left
    MoveLeft,
    /// Shift one column right
    MoveRight,
    /// Move one row down; never lands the piece
    SoftDrop,
    /// Rotate the piece matrix 90° clockwise
    Rotate,
}

impl Command {
    /// Parse a command name (case-insensitive).
    ///
    /// Accepts kebab-case (`"move-left"`) and camelCase (`"moveLeft"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("soft-drop"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("moveRight"), Some(Command::MoveRight));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "softdrop" | "down" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "move-left",
            Command::MoveRight => "move-right",
            Command::SoftDrop => "soft-drop",
            Command::Rotate => "rotate",
        }
    }
}

/// Observable phases of a session.
///
/// Landing happens inside a gravity step and is never observed between
/// calls, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed but never started
    Idle,
    /// Waiting to place the next piece
    Spawning,
    /// A piece is on the board and gravity applies
    Falling,
    /// Terminal until the next `start()`
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Spawning => "spawning",
            Phase::Falling => "falling",
            Phase::GameOver => "game-over",
        }
    }
}

/// Format whole seconds as `mm:ss`.
///
/// Minutes keep growing past 99 rather than wrapping.
pub fn format_elapsed(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
