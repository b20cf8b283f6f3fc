//! Session module - the falling-block state machine
//!
//! A [`Session`] owns one board, the active piece, the score, elapsed time
//! and the two interval timers (gravity and seconds). All mutation happens
//! through `start`/`stop`/`resume`, [`Session::apply`] for input commands and
//! [`Session::tick`] for the passage of time, so the host decides how time is
//! scheduled.
//!
//! Phases: `Idle -> Spawning -> Falling -> (Landing) -> Spawning | GameOver`.
//! Landing runs inside a gravity step and immediately spawns the next piece.

use arrayvec::ArrayVec;
use log::{debug, info, trace, warn};

use crate::board::Board;
use crate::clock::IntervalTimer;
use crate::collision::{can_place, fits};
use crate::config::GameConfig;
use crate::piece::Piece;
use crate::rng::{ShapeSource, UniformShapes};
use crate::scoring::line_clear_score;
use crate::snapshot::Snapshot;
use crate::types::{format_elapsed, Command, Phase, ShapeId, SECOND_MS};

/// Commands buffered between two ticks; further commands are dropped.
pub const COMMAND_QUEUE_CAPACITY: usize = 32;

/// Outcome of the most recent landing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingEvent {
    pub shape: ShapeId,
    pub cleared_rows: u32,
    pub score_gained: u32,
}

/// One game from `start()` to game over
#[derive(Debug, Clone)]
pub struct Session<S = UniformShapes> {
    config: GameConfig,
    source: S,
    board: Board,
    active: Option<Piece>,
    phase: Phase,
    /// False while stopped, idle or over
    running: bool,
    gravity: IntervalTimer,
    seconds: IntervalTimer,
    queued: ArrayVec<Command, COMMAND_QUEUE_CAPACITY>,
    score: u32,
    lines: u32,
    elapsed_secs: u32,
    pieces_spawned: u32,
    last_event: Option<LandingEvent>,
}

impl Session<UniformShapes> {
    /// Session drawing shapes uniformly at random from `seed`
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_source(config, UniformShapes::new(seed))
    }
}

impl Default for Session<UniformShapes> {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}

impl<S: ShapeSource> Session<S> {
    /// Session drawing shapes from `source`.
    ///
    /// The config is used as given; call [`GameConfig::validate`] first when
    /// it comes from outside.
    pub fn with_source(config: GameConfig, source: S) -> Self {
        let board = Board::new(config.rows, config.cols);
        let gravity = IntervalTimer::new(config.tick_ms);
        Self {
            config,
            source,
            board,
            active: None,
            phase: Phase::Idle,
            running: false,
            gravity,
            seconds: IntervalTimer::new(SECOND_MS),
            queued: ArrayVec::new(),
            score: 0,
            lines: 0,
            elapsed_secs: 0,
            pieces_spawned: 0,
            last_event: None,
        }
    }

    /// Reset everything and enter `Spawning`.
    ///
    /// This is also the only way out of `GameOver`. The first piece appears
    /// on the next [`Session::tick`] or an explicit [`Session::spawn`].
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.queued.clear();
        self.score = 0;
        self.lines = 0;
        self.elapsed_secs = 0;
        self.pieces_spawned = 0;
        self.last_event = None;

        self.phase = Phase::Spawning;
        self.running = true;
        self.gravity.arm();
        self.seconds.arm();

        info!(
            "session started: {}x{} board, {} shapes, tick {}ms",
            self.board.rows(),
            self.board.cols(),
            self.config.shapes.len(),
            self.config.tick_ms
        );
    }

    /// Cancel both timers and freeze the current state.
    pub fn stop(&mut self) {
        self.gravity.cancel();
        self.seconds.cancel();
        self.queued.clear();
        if self.running {
            info!("session stopped at {}", format_elapsed(self.elapsed_secs));
        }
        self.running = false;
    }

    /// Continue a stopped session. Returns false if there is nothing to
    /// resume (never started, already running, or over).
    pub fn resume(&mut self) -> bool {
        if self.running || !self.in_play() {
            return false;
        }
        self.running = true;
        self.gravity.arm();
        self.seconds.arm();
        info!("session resumed");
        true
    }

    /// Stop a running session or resume a stopped one.
    pub fn toggle_pause(&mut self) -> bool {
        if self.running {
            self.stop();
            true
        } else {
            self.resume()
        }
    }

    /// Run the Spawning step now.
    ///
    /// Draws the next shape and places it at the spawn offset. If it does not
    /// fit the session is over and nothing else changes. Returns true when a
    /// piece was placed; false on game over or outside `Spawning`.
    pub fn spawn(&mut self) -> bool {
        if !self.running || self.phase != Phase::Spawning {
            return false;
        }

        let drawn = self.source.next_shape(self.config.shapes.len());
        let (id, shape) = self.config.shapes.resolve(drawn);
        let (row, col) = self.config.spawn_offset(shape);
        let piece = Piece::new(id, shape.clone(), row, col);

        if !fits(&self.board, &piece) {
            warn!("spawn of shape {} at ({row}, {col}) blocked", id.0);
            self.enter_game_over();
            return false;
        }

        debug!("spawned shape {} at ({row}, {col})", id.0);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Apply an input command to the active piece.
    ///
    /// Valid moves are committed immediately; invalid ones are dropped.
    /// Commands never land a piece, including `SoftDrop` against the floor.
    pub fn apply(&mut self, command: Command) -> bool {
        if !self.running || self.phase != Phase::Falling {
            trace!("{} ignored in phase {}", command.as_str(), self.phase.as_str());
            return false;
        }

        let applied = match command {
            Command::MoveLeft => self.try_shift(0, -1),
            Command::MoveRight => self.try_shift(0, 1),
            Command::SoftDrop => self.try_shift(1, 0),
            Command::Rotate => self.try_rotate(),
        };
        if !applied {
            trace!("{} rejected", command.as_str());
        }
        applied
    }

    /// Buffer a command for the next tick.
    ///
    /// Queued commands run in arrival order before that tick's gravity.
    /// Returns false if the session is stopped, not in play, or the queue is
    /// full.
    pub fn queue_command(&mut self, command: Command) -> bool {
        if !self.running || !self.in_play() {
            return false;
        }
        if self.queued.try_push(command).is_err() {
            trace!("command queue full, dropping {}", command.as_str());
            return false;
        }
        true
    }

    /// Advance the session by `delta_ms`.
    ///
    /// Order within one call: a pending spawn, queued commands, elapsed
    /// seconds, then one gravity step per completed interval. Returns true
    /// if anything observable changed.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        if !self.running || !self.in_play() {
            return false;
        }

        let mut changed = false;

        if self.phase == Phase::Spawning {
            changed = true;
            if !self.spawn() {
                return changed;
            }
        }

        let queued = std::mem::take(&mut self.queued);
        for command in queued {
            changed |= self.apply(command);
        }

        let secs = self.seconds.advance(delta_ms);
        if secs > 0 {
            self.elapsed_secs = self.elapsed_secs.saturating_add(secs);
            changed = true;
        }

        let steps = self.gravity.advance(delta_ms);
        for _ in 0..steps {
            if self.phase != Phase::Falling {
                break;
            }
            self.gravity_step();
            changed = true;
        }

        changed
    }

    fn try_shift(&mut self, dr: i32, dc: i32) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !can_place(&self.board, piece, piece.row + dr, piece.col + dc) {
            return false;
        }
        piece.row += dr;
        piece.col += dc;
        true
    }

    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let rotated = piece.rotated();
        if !fits(&self.board, &rotated) {
            return false;
        }
        *piece = rotated;
        true
    }

    /// Move down one row, or land if the row below is blocked.
    fn gravity_step(&mut self) {
        if !self.try_shift(1, 0) {
            self.land();
        }
    }

    fn land(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.merge_piece(&piece);
        let cleared = self.board.clear_full_rows();
        let gained = line_clear_score(cleared, self.config.points_per_line);
        self.score = self.score.saturating_add(gained);
        self.lines = self.lines.saturating_add(cleared as u32);

        debug!(
            "landed shape {} at ({}, {}), cleared {cleared}, score {}",
            piece.id.0, piece.row, piece.col, self.score
        );
        self.last_event = Some(LandingEvent {
            shape: piece.id,
            cleared_rows: cleared as u32,
            score_gained: gained,
        });

        self.phase = Phase::Spawning;
        self.spawn();
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.active = None;
        self.queued.clear();
        self.running = false;
        self.gravity.cancel();
        self.seconds.cancel();
        info!(
            "game over: score {}, lines {}, time {}",
            self.score,
            self.lines,
            format_elapsed(self.elapsed_secs)
        );
    }

    fn in_play(&self) -> bool {
        matches!(self.phase, Phase::Spawning | Phase::Falling)
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LandingEvent> {
        self.last_event.take()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Stopped while a game is in progress
    pub fn paused(&self) -> bool {
        !self.running && self.in_play()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for seeding positions.
    ///
    /// Writes are not validated against the active piece.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Write the merged render view into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());

        if let Some(piece) = &self.active {
            let tag = piece.id.tag();
            for (row, col) in piece.cells() {
                if self.board.is_inside(row, col) {
                    out.cells[row as usize * out.cols + col as usize] = tag;
                }
            }
        }

        out.active = self.active.as_ref().map(|p| p.id);
        out.phase = self.phase;
        out.paused = self.paused();
        out.score = self.score;
        out.lines = self.lines;
        out.elapsed_secs = self.elapsed_secs;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
