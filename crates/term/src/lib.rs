//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a core [`core::Snapshot`] is drawn
//! into a plain framebuffer, which is then flushed to the terminal with
//! diffing. No widget library is involved, so the aspect ratio (2 characters
//! per board cell) stays under our control.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tag_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
