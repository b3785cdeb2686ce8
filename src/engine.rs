use crate::{
    common::{ConfigError, GridError, Outcome, PlayerId},
    config::GameConfig,
    grid::{Grid, GridState},
    moves::Move,
    player::Player,
    win,
};

/// Serializable overall engine state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub grid: GridState,
    pub players: [Player; 2],
    pub current: PlayerId,
    pub last_move: Option<Move>,
    pub last_outcome: Option<Outcome>,
}

/// Turn sequencing and outcome evaluation over an owned grid.
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    players: [Player; 2],
    current: PlayerId,
    // Anchor for win detection; overwritten by every successful placement.
    last_move: Option<Move>,
    // Outcome already reported for `last_move`, so wins are credited once.
    last_outcome: Option<Outcome>,
}

impl Engine {
    /// Create an engine with an empty grid. `first` must be player 1 and
    /// `second` player 2; player 1 moves first.
    pub fn new(config: GameConfig, first: Player, second: Player) -> Result<Self, ConfigError> {
        if first.id() != PlayerId::One || second.id() != PlayerId::Two {
            return Err(ConfigError::PlayerOrder);
        }
        Ok(Self {
            grid: Grid::new(config)?,
            players: [first, second],
            current: PlayerId::One,
            last_move: None,
            last_outcome: None,
        })
    }

    /// Immutable reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.slot()]
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// The last successfully placed move, if any since the last reset.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Drop the current player's disc.
    ///
    /// `Ok(true)` records the move and passes the turn. `Ok(false)` means
    /// the column was full; nothing changes. Out-of-range columns fail with
    /// [`GridError::OutOfBounds`], also without changing anything.
    pub fn submit_move(&mut self, mv: Move) -> Result<bool, GridError> {
        let mover = self.current;
        if !self.grid.place(mover, mv.column())? {
            log::debug!("player {} rejected: column {} is full", mover.number(), mv.column());
            return Ok(false);
        }
        log::debug!("player {} dropped into column {}", mover.number(), mv.column());
        self.last_move = Some(mv);
        self.last_outcome = None;
        self.current = mover.other();
        Ok(true)
    }

    /// Evaluate the grid after the last successful move.
    ///
    /// A full grid is a draw even if the final disc also completed a run.
    /// Otherwise a run through the last disc makes the player who placed it
    /// the winner and credits them a win. Repeated calls for the same move
    /// return the same outcome without crediting again.
    pub fn evaluate_outcome(&mut self) -> Outcome {
        if let Some(outcome) = self.last_outcome {
            return outcome;
        }
        let outcome = if self.grid.is_full() {
            Outcome::Draw
        } else if self.last_move_wins() {
            let mover = self.current.other();
            self.players[mover.slot()].record_win();
            Outcome::Winner(mover)
        } else {
            Outcome::InProgress
        };
        if self.last_move.is_some() {
            self.last_outcome = Some(outcome);
        }
        outcome
    }

    fn last_move_wins(&self) -> bool {
        let Some(mv) = self.last_move else {
            return false;
        };
        // The anchor column is valid: it just accepted a disc.
        match win::landing_row(&self.grid, mv.column()) {
            Ok(Some(row)) => win::is_winning_cell(&self.grid, row, mv.column()).unwrap_or(false),
            _ => false,
        }
    }

    /// Rounds won by player 1 and player 2.
    pub fn score(&self) -> (u32, u32) {
        (self.players[0].wins(), self.players[1].wins())
    }

    /// Clear the grid for a new round. Scores and the turn order carry over.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.last_move = None;
        self.last_outcome = None;
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> EngineState {
        EngineState {
            grid: GridState::from(&self.grid),
            players: self.players,
            current: self.current,
            last_move: self.last_move,
            last_outcome: self.last_outcome,
        }
    }

    /// Restore an engine from a previously saved state.
    pub fn from_state(state: EngineState) -> Result<Self, ConfigError> {
        let [first, second] = state.players;
        if first.id() != PlayerId::One || second.id() != PlayerId::Two {
            return Err(ConfigError::PlayerOrder);
        }
        Ok(Self {
            grid: Grid::try_from(state.grid)?,
            players: state.players,
            current: state.current,
            last_move: state.last_move,
            last_outcome: state.last_outcome,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            players: [Player::first(), Player::second()],
            current: PlayerId::One,
            last_move: None,
            last_outcome: None,
        }
    }
}
