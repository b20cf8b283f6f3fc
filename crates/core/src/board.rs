//! Board module - the fixed-size occupancy grid
//!
//! Cells are `u8` values stored row-major in a flat vector: `EMPTY` (0) for a
//! free cell, a shape tag (1..) for an occupied one. Coordinates are
//! `(row, col)` with row 0 at the top. Dimensions never change after
//! construction.

use crate::piece::Piece;
use crate::types::EMPTY;

/// Fixed-dimension occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<u8>,
}

impl Board {
    /// Create an empty board. Zero dimensions are clamped to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.is_inside(row, col) {
            return None;
        }
        Some((row as usize) * self.cols + (col as usize))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True iff `0 <= row < rows` and `0 <= col < cols`
    #[inline]
    pub fn is_inside(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// True if the cell is filled or lies outside the board.
    ///
    /// Out-of-range coordinates always read as blocked so they can never be
    /// placed on.
    #[inline]
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        match self.index(row, col) {
            Some(idx) => self.cells[idx] != EMPTY,
            None => true,
        }
    }

    /// Get the cell value, or `None` outside the board
    pub fn get(&self, row: i32, col: i32) -> Option<u8> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set a cell. Returns false (and changes nothing) outside the board.
    pub fn set(&mut self, row: i32, col: i32, value: u8) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Borrow one row of cells
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|&c| c != EMPTY))
    }

    /// Remove every full row, shift the rest down and refill the top with
    /// empty rows. Returns the number of rows removed.
    ///
    /// All full rows are removed in the same pass, so scan order has no
    /// effect on the result.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols;
        let mut write_row = self.rows;
        let mut cleared = 0;

        // Bottom-up two-pointer compaction.
        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(EMPTY);
        cleared
    }

    /// Write the piece's tag into every filled cell that lies on the board.
    ///
    /// Returns the number of cells written. Callers validate placement first;
    /// cells outside the board are skipped.
    pub fn merge_piece(&mut self, piece: &Piece) -> usize {
        let tag = piece.id.tag();
        let mut written = 0;
        for (row, col) in piece.cells() {
            if self.set(row, col, tag) {
                written += 1;
            }
        }
        written
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// Row-major cell slice
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}
