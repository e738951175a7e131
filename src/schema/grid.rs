//! Fixed-size colour grids.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Colour;

/// Side length of a seed grid.
pub const SEED_SIZE: usize = 20;

/// Side length of grown patterns and targets.
pub const GROWN_SIZE: usize = 60;

/// Row-major 2-D grid of colours.
///
/// Grids are values: every generator, mutator and reader returns a fresh
/// grid, and nothing hands out aliases to another grid's storage.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "GridRepr", try_from = "GridRepr")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Colour>,
}

impl Grid {
    /// All-empty grid.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Colour::Empty)
    }

    /// Grid with every cell set to `colour`.
    pub fn filled(rows: usize, cols: usize, colour: Colour) -> Self {
        Self {
            rows,
            cols,
            cells: vec![colour; rows * cols],
        }
    }

    /// Build a grid by evaluating `f(row, col)` in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Colour) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                cells.push(f(i, j));
            }
        }
        Self { rows, cols, cells }
    }

    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Colour>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "ragged grid rows: expected {} columns",
            cols
        );
        Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Colour at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Colour {
        self.cells[self.idx(row, col)]
    }

    /// Set the colour at (row, col). Used while building a grid.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, colour: Colour) {
        let idx = self.idx(row, col);
        self.cells[idx] = colour;
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Colour] {
        &self.cells
    }

    /// Iterate `(row, col, colour)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Colour)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(k, &c)| (k / cols, k % cols, c))
    }

    /// Number of cells with the given colour.
    pub fn count(&self, colour: Colour) -> usize {
        self.cells.iter().filter(|&&c| c == colour).count()
    }

    /// Panic unless the grid is `rows` x `cols`.
    pub fn assert_shape(&self, rows: usize, cols: usize) {
        assert_eq!(
            self.shape(),
            (rows, cols),
            "expected a {}x{} grid, got {}x{}",
            rows,
            cols,
            self.rows,
            self.cols
        );
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({}x{})", self.rows, self.cols)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// On-disk grid layout: explicit shape plus nested state ids.
#[derive(Serialize, Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Colour>>,
}

impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        let cells = grid
            .cells
            .chunks(grid.cols.max(1))
            .map(<[Colour]>::to_vec)
            .collect();
        Self {
            rows: grid.rows,
            cols: grid.cols,
            cells,
        }
    }
}

impl TryFrom<GridRepr> for Grid {
    type Error = String;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        if repr.cells.len() != repr.rows {
            return Err(format!(
                "grid declares {} rows but has {}",
                repr.rows,
                repr.cells.len()
            ));
        }
        if let Some(bad) = repr.cells.iter().find(|r| r.len() != repr.cols) {
            return Err(format!(
                "grid declares {} columns but a row has {}",
                repr.cols,
                bad.len()
            ));
        }
        Ok(Self {
            rows: repr.rows,
            cols: repr.cols,
            cells: repr.cells.into_iter().flatten().collect(),
        })
    }
}
