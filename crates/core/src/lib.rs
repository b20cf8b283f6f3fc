//! Core simulation - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules and session state machine.
//! It has **no dependencies** on terminals, files or wall clocks:
//!
//! - **Deterministic**: shapes come from an injected [`ShapeSource`]; time
//!   only enters through [`Session::tick`]
//! - **Configurable**: grid size, gravity interval, scoring rate and the
//!   shape set all live in [`GameConfig`]
//! - **Total**: every operation either commits a new valid state or is a
//!   no-op; placement rejection is a `false`, not an error
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size occupancy grid with row clearing
//! - [`piece`]: shape matrices, rotation, the falling piece and shape sets
//! - [`collision`]: placement predicates
//! - [`rng`]: shape sources (uniform LCG, scripted, closures)
//! - [`clock`]: interval timers driven by explicit deltas
//! - [`scoring`]: points per cleared row
//! - [`config`]: per-variant configuration and validation
//! - [`session`]: the Spawning/Falling/GameOver state machine
//! - [`snapshot`]: read-only merged view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, Session};
//! use blockfall_types::{Command, Phase};
//!
//! let mut session = Session::new(GameConfig::default(), 12345);
//! session.start();
//! session.tick(0); // spawns the first piece
//! assert_eq!(session.phase(), Phase::Falling);
//!
//! session.apply(Command::MoveLeft);
//! session.apply(Command::Rotate);
//! session.tick(500); // one gravity step
//!
//! let snap = session.snapshot();
//! assert_eq!(snap.score, 0);
//! assert_eq!(snap.cells.len(), 20 * 10);
//! ```

pub mod board;
pub mod clock;
pub mod collision;
pub mod config;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use clock::IntervalTimer;
pub use collision::{can_place, fits, shape_fits};
pub use config::{ConfigError, GameConfig};
pub use piece::{Piece, Shape, ShapeError, ShapeSet};
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng, UniformShapes};
pub use scoring::line_clear_score;
pub use session::{LandingEvent, Session, COMMAND_QUEUE_CAPACITY};
pub use snapshot::Snapshot;
