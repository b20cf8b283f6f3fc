//! Collision checks - pure placement predicates
//!
//! Only filled cells of a piece constrain placement. A placement is valid
//! when every filled cell lands inside the board on an empty cell.

use crate::board::Board;
use crate::piece::{Piece, Shape};

/// Whether `shape` fits on `board` with its top-left corner at `(row, col)`
pub fn shape_fits(board: &Board, shape: &Shape, row: i32, col: i32) -> bool {
    shape
        .filled_cells()
        .all(|(dr, dc)| !board.is_occupied(row + dr, col + dc))
}

/// Whether `piece`'s matrix fits at the candidate offset `(row, col)`.
///
/// The piece's own offset is ignored.
pub fn can_place(board: &Board, piece: &Piece, row: i32, col: i32) -> bool {
    shape_fits(board, &piece.shape, row, col)
}

/// Whether `piece` fits at its current offset
pub fn fits(board: &Board, piece: &Piece) -> bool {
    can_place(board, piece, piece.row, piece.col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeId;

    fn piece(rows: &[&[u8]]) -> Piece {
        Piece::new(ShapeId(0), Shape::from_rows(rows).unwrap(), 0, 0)
    }

    #[test]
    fn test_empty_matrix_cells_are_not_checked() {
        let mut board = Board::new(4, 4);
        // The hole of the piece sits over this occupied cell.
        board.set(0, 0, 1);
        let p = piece(&[&[0, 1], &[1, 1]]);
        assert!(can_place(&board, &p, 0, 0));

        board.set(0, 1, 1);
        assert!(!can_place(&board, &p, 0, 0));
    }

    #[test]
    fn test_out_of_bounds_rejected_on_every_side() {
        let board = Board::new(4, 4);
        let p = piece(&[&[1, 1], &[1, 1]]);
        assert!(can_place(&board, &p, 2, 2));
        assert!(!can_place(&board, &p, -1, 0));
        assert!(!can_place(&board, &p, 0, -1));
        assert!(!can_place(&board, &p, 3, 0));
        assert!(!can_place(&board, &p, 0, 3));
    }

    #[test]
    fn test_empty_column_may_hang_outside() {
        let board = Board::new(4, 4);
        // Left column is empty, so col = -1 is still a valid placement.
        let p = piece(&[&[0, 1], &[0, 1]]);
        assert!(can_place(&board, &p, 0, -1));
        assert!(!can_place(&board, &p, 0, -2));
    }

    #[test]
    fn test_fits_uses_piece_offset() {
        let board = Board::new(4, 4);
        let mut p = piece(&[&[1]]);
        p.row = 3;
        p.col = 3;
        assert!(fits(&board, &p));
        p.col = 4;
        assert!(!fits(&board, &p));
    }
}
