use crate::{
    common::{Outcome, PlayerId},
    engine::Engine,
};
use rand::rngs::SmallRng;

/// Interface implemented by the different ways of choosing moves.
pub trait Strategy {
    /// Choose a column for the player whose turn it is. The column is not
    /// checked here; the engine rejects unusable ones.
    fn select_column(&mut self, rng: &mut SmallRng, engine: &Engine) -> usize;

    /// Inform the strategy of a successful move by either player.
    fn handle_move(&mut self, _player: PlayerId, _column: usize) {}

    /// Inform the strategy that its chosen column was discarded.
    fn handle_rejected(&mut self, _column: usize) {}

    /// Inform the strategy that the round has ended.
    fn handle_outcome(&mut self, _outcome: Outcome, _score: (u32, u32)) {}
}
