//! Terminal input module.
//!
//! Maps `crossterm` key events onto session commands and session control.
//! The simulation itself never sees key codes; the binary translates a
//! [`KeyAction`] into `Session::queue_command`, `toggle_pause` or `start`.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit, KeyAction};
