//! Common types for Connect Four: cell owners, player identities, outcomes
//! and the errors returned by grid and configuration operations.

/// Owner tag of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, or `None` when empty.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(PlayerId::One),
            Cell::Player2 => Some(PlayerId::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Identity of one of the two contestants.
///
/// The number `0` is reserved for "no player" (a draw) and therefore has no
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The opponent.
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Cell tag written for this player's discs.
    pub fn cell(self) -> Cell {
        match self {
            PlayerId::One => Cell::Player1,
            PlayerId::Two => Cell::Player2,
        }
    }

    /// Player number as shown to users: `1` or `2`.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Result of evaluating the grid after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// No terminal condition; play continues.
    InProgress,
    /// The grid is full.
    Draw,
    /// The given player completed a run.
    Winner(PlayerId),
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A row or column index lies outside the grid.
    OutOfBounds,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds => write!(f, "The current move is outside the game board"),
        }
    }
}

impl core::error::Error for GridError {}

/// Errors returned when building a grid or engine from configuration data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns outside `1..=MAX_DIMENSION`.
    InvalidDimensions { rows: usize, columns: usize },
    /// Run length below 2 or longer than any line on the grid.
    InvalidRunLength { run_length: usize },
    /// Players handed to the engine in the wrong slots.
    PlayerOrder,
    /// Snapshot cell count does not match its configuration.
    CellCount { expected: usize, found: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidDimensions { rows, columns } => {
                write!(f, "Invalid grid dimensions: {}x{}", rows, columns)
            }
            ConfigError::InvalidRunLength { run_length } => {
                write!(f, "Invalid run length: {}", run_length)
            }
            ConfigError::PlayerOrder => {
                write!(f, "Engine expects player 1 first and player 2 second")
            }
            ConfigError::CellCount { expected, found } => {
                write!(f, "Expected {} cells, found {}", expected, found)
            }
        }
    }
}

impl core::error::Error for ConfigError {}
