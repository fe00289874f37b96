use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Dimensions of a grid as (rows, cols).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// A (row, col) cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular grid of color codes.
///
/// Immutable once constructed; equality is by cell values. Serializes as a
/// plain nested array so task files and result documents stay readable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    rows: Vec<Vec<u8>>,
}

impl Grid {
    /// Build a grid, rejecting ragged rows.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: r.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// The degenerate 0×0 grid.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build a grid of the given shape from a cell function.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> u8) -> Self {
        Self {
            rows: (0..rows)
                .map(|r| (0..cols).map(|c| f(r, c)).collect())
                .collect(),
        }
    }

    /// A grid filled with a single color.
    pub fn filled(rows: usize, cols: usize, color: u8) -> Self {
        Self::from_fn(rows, cols, |_, _| color)
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.height(), self.width())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell_count(&self) -> usize {
        self.shape().cell_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[u8]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterate cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &v)| (Position::new(r, c), v))
        })
    }

    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }

    pub fn rotate_180(&self) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .rev()
                .map(|row| row.iter().rev().copied().collect())
                .collect(),
        }
    }

    pub fn rotate_90_clockwise(&self) -> Self {
        let (h, w) = (self.height(), self.width());
        Self::from_fn(w, h, |r, c| self.rows[h - 1 - c][r])
    }

    /// Left-right mirror.
    pub fn flip_horizontal(&self) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().rev().copied().collect())
                .collect(),
        }
    }

    /// Top-bottom mirror.
    pub fn flip_vertical(&self) -> Self {
        Self {
            rows: self.rows.iter().rev().cloned().collect(),
        }
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.width(), self.height(), |r, c| self.rows[c][r])
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "[{}]", line.join(" "))?;
        }
        Ok(())
    }
}
