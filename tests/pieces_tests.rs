//! Shape, piece and collision tests

use blockfall::core::{can_place, fits, Board, Piece, Shape, ShapeSet};
use blockfall::types::ShapeId;

#[test]
fn test_four_rotations_restore_every_classic_shape() {
    for shape in ShapeSet::classic().iter() {
        let back = shape.rotated().rotated().rotated().rotated();
        assert_eq!(&back, shape);
    }
}

#[test]
fn test_rotation_is_clockwise() {
    // L-like shape:
    // X.
    // X.
    // XX
    let shape = Shape::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]).unwrap();
    let rotated = shape.rotated();
    assert_eq!((rotated.height(), rotated.width()), (2, 3));
    assert_eq!(rotated.to_rows(), vec![vec![1, 1, 1], vec![1, 0, 0]]);
}

#[test]
fn test_piece_transforms_leave_original_untouched() {
    let shape = Shape::from_rows(&[&[1, 1, 1, 1]]).unwrap();
    let piece = Piece::new(ShapeId(0), shape.clone(), 2, 3);

    let moved = piece.translated(1, -1);
    assert_eq!((moved.row, moved.col), (3, 2));
    assert_eq!(moved.shape, shape);

    let turned = piece.rotated();
    assert_eq!((turned.row, turned.col), (2, 3));
    assert_eq!(turned.shape.height(), 4);

    assert_eq!((piece.row, piece.col), (2, 3));
    assert_eq!(piece.shape, shape);
}

#[test]
fn test_can_place_on_clear_board() {
    let board = Board::new(20, 10);
    for shape in ShapeSet::classic().iter() {
        let piece = Piece::new(ShapeId(0), shape.clone(), 0, 0);
        assert!(can_place(&board, &piece, 0, 0));
        let max_row = (20 - shape.height()) as i32;
        let max_col = (10 - shape.width()) as i32;
        assert!(can_place(&board, &piece, max_row, max_col));
        assert!(!can_place(&board, &piece, max_row + 1, 0));
        assert!(!can_place(&board, &piece, 0, max_col + 1));
        assert!(!can_place(&board, &piece, -1, 0));
    }
}

#[test]
fn test_can_place_on_full_board() {
    let mut board = Board::new(20, 10);
    for row in 0..20 {
        for col in 0..10 {
            board.set(row, col, 1);
        }
    }
    for shape in ShapeSet::classic().iter() {
        let piece = Piece::new(ShapeId(0), shape.clone(), 0, 0);
        for row in 0..20 {
            for col in 0..10 {
                assert!(!can_place(&board, &piece, row, col));
            }
        }
    }
}

#[test]
fn test_empty_matrix_cells_may_overlap_blocks() {
    let mut board = Board::new(4, 4);
    board.set(0, 0, 1);
    // .X
    // XX
    let shape = Shape::from_rows(&[&[0, 1], &[1, 1]]).unwrap();
    let piece = Piece::new(ShapeId(0), shape, 0, 0);
    assert!(fits(&board, &piece));
    board.set(1, 0, 1);
    assert!(!fits(&board, &piece));
}

#[test]
fn test_invalid_shapes_rejected() {
    assert!(Shape::try_from(Vec::<Vec<u8>>::new()).is_err());
    assert!(Shape::try_from(vec![vec![1, 1], vec![1]]).is_err());
    assert!(Shape::try_from(vec![vec![0, 0]]).is_err());
    assert!(ShapeSet::new(Vec::new()).is_err());
}
