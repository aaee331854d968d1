//! Row-major rectangular cell grid.

use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::color::Color;

/// A rectangular, mutable collection of [`Cell`]s addressed by (row, col),
/// stored row-major in one flat vector. Every row has the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a rows × cols grid of default cells. Zero dimensions are
    /// allowed and yield an empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.rows && col < self.cols {
            Some(&mut self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Reallocates to the new dimensions with default cells. No-op when the
    /// dimensions already match, so it is safe to call every frame.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if rows == self.rows && cols == self.cols {
            return;
        }
        self.rows = rows;
        self.cols = cols;
        self.cells.clear();
        self.cells.resize(rows * cols, Cell::default());
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn fill_background(&mut self, color: Color) {
        for cell in &mut self.cells {
            cell.background.set(color);
        }
    }

    pub fn fill_foreground(&mut self, color: Color) {
        for cell in &mut self.cells {
            cell.foreground.set(color);
        }
    }

    pub fn fill_symbol(&mut self, symbol: char) {
        for cell in &mut self.cells {
            cell.symbol = symbol;
        }
    }

    /// Inverts foreground and background of every cell.
    pub fn invert_colors(&mut self) {
        for cell in &mut self.cells {
            cell.invert();
        }
    }

    /// Uniformly brightens (positive) or darkens (negative) every cell.
    pub fn adjust_brightness(&mut self, increment: f64) {
        for cell in &mut self.cells {
            cell.foreground.adjust(increment);
            cell.background.adjust(increment);
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &mut self.cells[row * self.cols + col]
    }
}
