//! Read-only render projection of a session
//!
//! A [`Snapshot`] is the board with the active piece drawn on top, plus the
//! counters a presentation layer shows. It is derived data; nothing in the
//! session reads it back.

use crate::types::{format_elapsed, Phase, ShapeId, EMPTY};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major merged cells (board plus active piece)
    pub cells: Vec<u8>,
    pub active: Option<ShapeId>,
    pub phase: Phase,
    pub paused: bool,
    pub score: u32,
    pub lines: u32,
    pub elapsed_secs: u32,
    pub pieces_spawned: u32,
}

impl Snapshot {
    /// Blank snapshot of the given size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
            active: None,
            phase: Phase::Idle,
            paused: false,
            score: 0,
            lines: 0,
            elapsed_secs: 0,
            pieces_spawned: 0,
        }
    }

    /// Merged cell value; `EMPTY` outside the grid
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        if row >= self.rows || col >= self.cols {
            return EMPTY;
        }
        self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[u8] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        !self.paused && matches!(self.phase, Phase::Spawning | Phase::Falling)
    }

    /// Elapsed time as `mm:ss`
    pub fn elapsed_text(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
