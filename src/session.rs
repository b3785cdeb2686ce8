use crate::{
    common::{ConfigError, GridError, Outcome, PlayerId},
    config::GameConfig,
    engine::Engine,
    moves::Move,
    player::Player,
    strategy::Strategy,
};
use rand::rngs::SmallRng;

/// One series of rounds between two players. Each session owns its engine,
/// so any number of sessions can run side by side.
pub struct Session {
    engine: Engine,
    rounds: u32,
    draws: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(Engine::new(config, Player::first(), Player::second())?))
    }

    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            rounds: 0,
            draws: 0,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Rounds finished so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn score(&self) -> (u32, u32) {
        self.engine.score()
    }

    /// Play moves until the round ends. Columns the grid rejects (out of
    /// range or full) are discarded and the same player chooses again.
    ///
    /// A grid that is already full (no [`Session::new_round`] since the last
    /// draw) yields [`Outcome::Draw`] at once; nothing is counted or credited.
    pub fn play_round(
        &mut self,
        first: &mut dyn Strategy,
        second: &mut dyn Strategy,
        rng: &mut SmallRng,
    ) -> Outcome {
        loop {
            if self.engine.grid().is_full() {
                log::warn!("no legal column left, call new_round before playing again");
                return Outcome::Draw;
            }
            let mover = self.engine.current_player().id();
            let column = match mover {
                PlayerId::One => first.select_column(rng, &self.engine),
                PlayerId::Two => second.select_column(rng, &self.engine),
            };
            match self.engine.submit_move(Move::new(column)) {
                Ok(true) => {}
                Ok(false) | Err(GridError::OutOfBounds) => {
                    log::debug!("discarding column {} from player {}", column, mover.number());
                    match mover {
                        PlayerId::One => first.handle_rejected(column),
                        PlayerId::Two => second.handle_rejected(column),
                    }
                    continue;
                }
            }
            first.handle_move(mover, column);
            second.handle_move(mover, column);

            let outcome = self.engine.evaluate_outcome();
            if outcome.is_over() {
                self.finish_round(outcome);
                let score = self.engine.score();
                first.handle_outcome(outcome, score);
                second.handle_outcome(outcome, score);
                return outcome;
            }
        }
    }

    fn finish_round(&mut self, outcome: Outcome) {
        self.rounds += 1;
        if outcome == Outcome::Draw {
            self.draws += 1;
        }
        let (p1, p2) = self.engine.score();
        match outcome {
            Outcome::Winner(id) => {
                log::info!("round {}: player {} wins ({} - {})", self.rounds, id.number(), p1, p2)
            }
            _ => log::info!("round {}: draw ({} - {})", self.rounds, p1, p2),
        }
    }

    /// Clear the grid for another round.
    pub fn new_round(&mut self) {
        self.engine.reset();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_engine(Engine::default())
    }
}
