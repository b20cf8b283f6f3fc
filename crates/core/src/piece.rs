//! Piece module - shape matrices, the falling piece and the shape set
//!
//! A [`Shape`] is a small rectangular matrix of filled/empty flags. A
//! [`Piece`] pairs a shape with its [`ShapeId`] and the board offset of the
//! matrix's top-left corner. Moving a piece only changes the offset; rotating
//! only replaces the matrix.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::{ShapeId, MAX_SHAPES};

/// Reasons a matrix cannot be used as a shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows or no columns
    Empty,
    /// Row `row` has a different length than row 0
    Ragged { row: usize },
    /// Every cell is empty
    Blank,
    /// A shape set needs at least one shape
    NoShapes,
    /// More shapes than cell tags available
    TooManyShapes(usize),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "shape matrix has no cells"),
            ShapeError::Ragged { row } => {
                write!(f, "shape row {row} differs in length from row 0")
            }
            ShapeError::Blank => write!(f, "shape matrix has no filled cell"),
            ShapeError::NoShapes => write!(f, "shape set is empty"),
            ShapeError::TooManyShapes(n) => {
                write!(f, "shape set has {n} shapes (at most {MAX_SHAPES})")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Rectangular matrix of filled/empty flags
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Shape {
    height: usize,
    width: usize,
    /// Row-major flags
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from rows of 0/1 values (any non-zero counts as filled).
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let width = rows.first().map_or(0, |r| r.len());
        if rows.is_empty() || width == 0 {
            return Err(ShapeError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ShapeError::Ragged { row: i });
            }
            cells.extend(row.iter().map(|&v| v != 0));
        }

        if !cells.iter().any(|&c| c) {
            return Err(ShapeError::Blank);
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the matrix cell at `(row, col)` is filled
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Offsets `(row, col)` of filled cells, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| ((i / width) as i32, (i % width) as i32))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rotate 90° clockwise (transpose, then reverse the order of columns).
    ///
    /// `self` is unchanged. Four rotations give back the original matrix.
    pub fn rotated(&self) -> Shape {
        let (h, w) = (self.height, self.width);
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..w {
            for c in 0..h {
                cells.push(self.cells[(h - 1 - c) * w + r]);
            }
        }
        Shape {
            height: w,
            width: h,
            cells,
        }
    }

    /// Rows of 0/1 values
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Shape {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let borrowed: Vec<&[u8]> = rows.iter().map(Vec::as_slice).collect();
        Shape::from_rows(&borrowed)
    }
}

impl From<Shape> for Vec<Vec<u8>> {
    fn from(shape: Shape) -> Self {
        shape.to_rows()
    }
}

/// The currently falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: ShapeId,
    pub shape: Shape,
    /// Board row of the matrix's top row
    pub row: i32,
    /// Board column of the matrix's left column
    pub col: i32,
}

impl Piece {
    pub fn new(id: ShapeId, shape: Shape, row: i32, col: i32) -> Self {
        Self {
            id,
            shape,
            row,
            col,
        }
    }

    /// Same matrix, offset moved by `(dr, dc)`
    pub fn translated(&self, dr: i32, dc: i32) -> Piece {
        Piece {
            row: self.row + dr,
            col: self.col + dc,
            ..self.clone()
        }
    }

    /// Same offset, matrix rotated 90° clockwise
    pub fn rotated(&self) -> Piece {
        Piece {
            shape: self.shape.rotated(),
            ..self.clone()
        }
    }

    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dr, dc)| (self.row + dr, self.col + dc))
    }
}

/// Ordered, non-empty list of shapes addressed by [`ShapeId`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Shape>", into = "Vec<Shape>")]
pub struct ShapeSet {
    shapes: Vec<Shape>,
}

impl ShapeSet {
    pub fn new(shapes: Vec<Shape>) -> Result<Self, ShapeError> {
        if shapes.is_empty() {
            return Err(ShapeError::NoShapes);
        }
        if shapes.len() > MAX_SHAPES {
            return Err(ShapeError::TooManyShapes(shapes.len()));
        }
        Ok(Self { shapes })
    }

    /// The seven tetrominoes, in order I, O, T, S, Z, J, L.
    pub fn classic() -> Self {
        const CLASSIC: [&[&[u8]]; 7] = [
            &[&[1, 1, 1, 1]],
            &[&[1, 1], &[1, 1]],
            &[&[0, 1, 0], &[1, 1, 1]],
            &[&[0, 1, 1], &[1, 1, 0]],
            &[&[1, 1, 0], &[0, 1, 1]],
            &[&[1, 0, 0], &[1, 1, 1]],
            &[&[0, 0, 1], &[1, 1, 1]],
        ];

        let shapes = CLASSIC
            .iter()
            .filter_map(|rows| Shape::from_rows(rows).ok())
            .collect();
        Self { shapes }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }

    /// Map any id onto the set, wrapping out-of-range ids.
    pub fn resolve(&self, id: ShapeId) -> (ShapeId, &Shape) {
        let idx = id.index() % self.shapes.len();
        if idx != id.index() {
            warn!(
                "shape id {} out of range for {} shapes, using {}",
                id.0,
                self.shapes.len(),
                idx
            );
        }
        (ShapeId(idx as u8), &self.shapes[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}

impl Default for ShapeSet {
    fn default() -> Self {
        Self::classic()
    }
}

impl TryFrom<Vec<Shape>> for ShapeSet {
    type Error = ShapeError;

    fn try_from(shapes: Vec<Shape>) -> Result<Self, Self::Error> {
        ShapeSet::new(shapes)
    }
}

impl From<ShapeSet> for Vec<Shape> {
    fn from(set: ShapeSet) -> Self {
        set.shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_rows_rejects_bad_matrices() {
        assert_eq!(Shape::from_rows(&[]), Err(ShapeError::Empty));
        assert_eq!(Shape::from_rows(&[&[]]), Err(ShapeError::Empty));
        assert_eq!(
            Shape::from_rows(&[&[1, 1], &[1]]),
            Err(ShapeError::Ragged { row: 1 })
        );
        assert_eq!(Shape::from_rows(&[&[0, 0]]), Err(ShapeError::Blank));
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
        let r = t.rotated();
        assert_eq!(r.to_rows(), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
        // Original untouched
        assert_eq!(t.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 1]]);
    }

    #[test]
    fn test_rotate_i_swaps_dimensions() {
        let i = Shape::from_rows(&[&[1, 1, 1, 1]]).unwrap();
        let r = i.rotated();
        assert_eq!((r.height(), r.width()), (4, 1));
    }

    #[test]
    fn test_filled_cells_skip_empty_flags() {
        let s = Shape::from_rows(&[&[0, 1], &[1, 0]]).unwrap();
        let cells: Vec<_> = s.filled_cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_classic_set() {
        let set = ShapeSet::classic();
        assert_eq!(set.len(), 7);
        assert!(set.iter().all(|s| s.filled_count() == 4));
    }

    #[test]
    fn test_resolve_wraps() {
        let set = ShapeSet::classic();
        let (id, shape) = set.resolve(ShapeId(9));
        assert_eq!(id, ShapeId(2));
        assert_eq!(shape, set.get(ShapeId(2)).unwrap());
    }

    #[test]
    fn test_shape_set_limits() {
        assert_eq!(ShapeSet::new(Vec::new()), Err(ShapeError::NoShapes));
        let one = Shape::from_rows(&[&[1]]).unwrap();
        let too_many = vec![one; MAX_SHAPES + 1];
        assert_eq!(
            ShapeSet::new(too_many),
            Err(ShapeError::TooManyShapes(MAX_SHAPES + 1))
        );
    }
}
