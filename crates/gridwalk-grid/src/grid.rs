#![forbid(unsafe_code)]

//! The dense walkable/blocked matrix.
//!
//! Storage is row-major (`row * cols + col`), matching how every derived
//! structure in the engine (visited masks, back-pointer tables) indexes
//! cells. Dimensions are fixed for the lifetime of a grid; editing happens
//! through [`crate::GridModel`], which owns the start/goal invariants.

use crate::cell::Cell;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Walkable.
    #[default]
    Open,
    /// Blocked.
    Wall,
}

/// A rectangular matrix of [`CellState`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: u16,
    cols: u16,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell open.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Open; rows as usize * cols as usize],
        }
    }

    /// Build a grid from row-major states, as collaborators describe them.
    ///
    /// Returns `None` when the state count does not match `rows * cols`.
    #[must_use]
    pub fn from_states(rows: u16, cols: u16, cells: Vec<CellState>) -> Option<Self> {
        if cells.len() != rows as usize * cols as usize {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// Total cell count.
    #[inline]
    #[must_use]
    pub const fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Check whether a coordinate lies on the grid.
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major index of an in-bounds cell.
    ///
    /// Callers use this to size and address dense per-cell tables.
    #[inline]
    #[must_use]
    pub const fn index_of(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols as usize + cell.col as usize
    }

    /// State of a cell, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        if self.in_bounds(cell) {
            Some(self.cells[self.index_of(cell)])
        } else {
            None
        }
    }

    /// Whether a cell is an in-bounds wall.
    #[inline]
    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        matches!(self.state(cell), Some(CellState::Wall))
    }

    /// Set the state of an in-bounds cell. Out-of-bounds writes are ignored.
    pub(crate) fn set(&mut self, cell: Cell, state: CellState) {
        if self.in_bounds(cell) {
            let idx = self.index_of(cell);
            self.cells[idx] = state;
        }
    }

    /// Iterate all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| {
                let cell = Cell::new(row, col);
                (cell, self.cells[self.index_of(cell)])
            })
        })
    }
}
