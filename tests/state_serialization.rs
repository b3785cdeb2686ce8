use connectfour::{ConfigError, Engine, EngineState, GridState, Move, Outcome};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_engine(seed: u64) -> Engine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = Engine::default();
    for _ in 0..rng.random_range(0..30) {
        let column = rng.random_range(0..engine.columns());
        if engine.submit_move(Move::new(column)).unwrap() && engine.evaluate_outcome().is_over() {
            engine.reset();
        }
    }
    engine
}

proptest! {
    #[test]
    fn engine_state_roundtrip(seed in any::<u64>()) {
        let engine = random_engine(seed);
        let state = engine.state();
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: EngineState = bincode::deserialize(&bytes).unwrap();
        let restored = Engine::from_state(decoded).unwrap();
        prop_assert_eq!(engine.state(), restored.state());
    }
}

#[test]
fn test_restored_engine_continues_play() {
    let mut engine = Engine::default();
    for c in [0, 1, 0, 1, 0, 1] {
        engine.submit_move(Move::new(c)).unwrap();
        engine.evaluate_outcome();
    }
    let json = serde_json::to_string(&engine.state()).unwrap();
    let mut restored = Engine::from_state(serde_json::from_str(&json).unwrap()).unwrap();

    assert!(restored.submit_move(Move::new(0)).unwrap());
    assert_eq!(
        restored.evaluate_outcome(),
        Outcome::Winner(connectfour::PlayerId::One)
    );
}

#[test]
fn test_rejects_truncated_grid() {
    let mut state = Engine::default().state();
    state.grid.cells.pop();
    assert_eq!(
        Engine::from_state(state).unwrap_err(),
        ConfigError::CellCount {
            expected: 49,
            found: 48
        }
    );
}

#[test]
fn test_rejects_swapped_players() {
    let mut state = Engine::default().state();
    state.players.swap(0, 1);
    assert_eq!(Engine::from_state(state).unwrap_err(), ConfigError::PlayerOrder);
}

#[test]
fn test_grid_state_keeps_config() {
    let engine = Engine::default();
    let state = GridState::from(engine.grid());
    assert_eq!(state.config, engine.grid().config());
    assert_eq!(state.cells.len(), 49);
}
