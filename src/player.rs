use crate::common::PlayerId;

/// A contestant: identity plus the number of rounds won this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    wins: u32,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self { id, wins: 0 }
    }

    /// Player 1, who moves first in a fresh session.
    pub fn first() -> Self {
        Self::new(PlayerId::One)
    }

    pub fn second() -> Self {
        Self::new(PlayerId::Two)
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// `1` or `2`.
    pub fn number(&self) -> u8 {
        self.id.number()
    }

    /// Rounds won so far.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    // Only the engine's outcome path credits wins.
    pub(crate) fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }
}
