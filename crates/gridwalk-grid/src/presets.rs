#![forbid(unsafe_code)]

//! Compiled-in example grids.
//!
//! Each preset is an ASCII map: `.` open, `#` wall, `S` start, `G` goal
//! (both on open cells). Maps are parsed on demand; the tables are small
//! enough that caching would buy nothing.

use crate::cell::Cell;
use crate::editor::GridModel;
use crate::grid::{CellState, Grid};

/// A named example grid.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Stable identifier, e.g. `"maze"`.
    pub id: &'static str,
    /// Display name, e.g. `"Maze"`.
    pub name: &'static str,
    map: &'static [&'static str],
}

/// The preset library, in display order.
pub const PRESETS: [Preset; 4] = [
    Preset {
        id: "simple",
        name: "Simple 5x5 Grid",
        map: &[
            "S....", //
            ".##..", //
            "...#.", //
            ".#...", //
            "....G",
        ],
    },
    Preset {
        id: "maze",
        name: "Maze",
        map: &[
            "S#.....", //
            ".#.###.", //
            ".....#.", //
            ".###.#.", //
            "...#...", //
            "##.###.", //
            "......G",
        ],
    },
    Preset {
        id: "open",
        name: "Open Field",
        map: &[
            "S....", //
            ".....", //
            ".....", //
            ".....", //
            "....G",
        ],
    },
    Preset {
        id: "obstacle",
        name: "Central Obstacle",
        map: &[
            "S....", //
            ".###.", //
            ".###.", //
            ".###.", //
            "....G",
        ],
    },
];

impl Preset {
    /// Look up a preset by id.
    #[must_use]
    pub fn by_id(id: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|preset| preset.id == id)
    }

    /// Parse the map into a fresh [`GridModel`].
    #[must_use]
    pub fn model(&self) -> GridModel {
        let rows = self.map.len() as u16;
        let cols = self.map[0].len() as u16;
        let mut grid = Grid::new(rows, cols);
        let mut start = None;
        let mut goal = None;

        for (row, line) in self.map.iter().enumerate() {
            assert_eq!(line.len(), cols as usize, "ragged preset map {:?}", self.id);
            for (col, ch) in line.bytes().enumerate() {
                let cell = Cell::new(row as u16, col as u16);
                match ch {
                    b'.' => {}
                    b'#' => grid.set(cell, CellState::Wall),
                    b'S' => start = Some(cell),
                    b'G' => goal = Some(cell),
                    other => panic!("bad preset char {:?} in {:?}", other as char, self.id),
                }
            }
        }

        let start = start.unwrap_or_else(|| panic!("preset {:?} has no start", self.id));
        let goal = goal.unwrap_or_else(|| panic!("preset {:?} has no goal", self.id));
        GridModel::new(grid, start, goal)
    }
}
