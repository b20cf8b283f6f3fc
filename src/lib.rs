//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{types,core,input,term}`
//! and adds the TOML config file loader used by the terminal binary.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
