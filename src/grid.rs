//! The occupancy matrix. Row 0 is the top; discs settle from the bottom row
//! upward.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{Cell, ConfigError, GridError, PlayerId};
use crate::config::GameConfig;

/// Serializable grid contents for snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    pub config: GameConfig,
    /// Row-major cells, `rows * columns` long.
    pub cells: Vec<Cell>,
}

/// Row-major cell matrix with bounds-checked access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    config: GameConfig,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid for a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Grid {
            config,
            cells: vec![Cell::Empty; config.cells()],
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn columns(&self) -> usize {
        self.config.columns
    }

    pub fn run_length(&self) -> usize {
        self.config.run_length
    }

    pub fn is_valid_row(&self, row: usize) -> bool {
        row < self.config.rows
    }

    pub fn is_valid_column(&self, column: usize) -> bool {
        column < self.config.columns
    }

    /// Signed bounds test used by directional scans.
    pub(crate) fn contains(&self, row: isize, column: isize) -> bool {
        row >= 0 && column >= 0 && self.is_valid_row(row as usize) && self.is_valid_column(column as usize)
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Result<usize, GridError> {
        if self.is_valid_row(row) && self.is_valid_column(column) {
            Ok(row * self.config.columns + column)
        } else {
            Err(GridError::OutOfBounds)
        }
    }

    /// Owner of the cell at (`row`, `column`).
    pub fn get(&self, row: usize, column: usize) -> Result<Cell, GridError> {
        let idx = self.index(row, column)?;
        Ok(self.cells[idx])
    }

    /// Whether the cell at (`row`, `column`) holds a disc.
    pub fn is_occupied(&self, row: usize, column: usize) -> Result<bool, GridError> {
        Ok(!self.get(row, column)?.is_empty())
    }

    /// Drop a disc for `owner` into `column`.
    ///
    /// Returns `Ok(false)` without touching the grid when the column has no
    /// empty cell.
    pub fn place(&mut self, owner: PlayerId, column: usize) -> Result<bool, GridError> {
        if !self.is_valid_column(column) {
            return Err(GridError::OutOfBounds);
        }
        for row in (0..self.config.rows).rev() {
            let idx = self.index(row, column)?;
            if self.cells[idx].is_empty() {
                self.cells[idx] = owner.cell();
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Number of discs in `column`, counted from the bottom.
    pub fn column_height(&self, column: usize) -> Result<usize, GridError> {
        if !self.is_valid_column(column) {
            return Err(GridError::OutOfBounds);
        }
        let mut row = 0;
        while row < self.config.rows && self.get(row, column)?.is_empty() {
            row += 1;
        }
        Ok(self.config.rows - row)
    }

    pub fn is_column_full(&self, column: usize) -> Result<bool, GridError> {
        self.is_occupied(0, column)
    }

    /// True once every cell of the top row is taken. Columns fill bottom-up,
    /// so this means no column has room left.
    pub fn is_full(&self) -> bool {
        self.cells[..self.config.columns].iter().all(|c| !c.is_empty())
    }

    /// Columns that can still take a disc, left to right.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.config.columns).filter(move |&c| self.cells[c].is_empty())
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> Result<&[Cell], GridError> {
        if !self.is_valid_row(row) {
            return Err(GridError::OutOfBounds);
        }
        let start = row * self.config.columns;
        Ok(&self.cells[start..start + self.config.columns])
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = Cell::Empty);
    }
}

impl Default for Grid {
    fn default() -> Self {
        let config = GameConfig::default();
        Grid {
            config,
            cells: vec![Cell::Empty; config.cells()],
        }
    }
}

impl From<&Grid> for GridState {
    fn from(g: &Grid) -> Self {
        GridState {
            config: g.config,
            cells: g.cells.clone(),
        }
    }
}

impl TryFrom<GridState> for Grid {
    type Error = ConfigError;

    fn try_from(state: GridState) -> Result<Self, Self::Error> {
        state.config.validate()?;
        let expected = state.config.cells();
        if state.cells.len() != expected {
            return Err(ConfigError::CellCount {
                expected,
                found: state.cells.len(),
            });
        }
        Ok(Grid {
            config: state.config,
            cells: state.cells,
        })
    }
}
