use connectfour::{
    choose_column, AiStrategy, Engine, GameConfig, Grid, Outcome, PlayerId, Session, Strategy,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Replays a fixed list of columns, recording rejections.
struct Scripted {
    columns: Vec<usize>,
    next: usize,
    rejected: Vec<usize>,
}

impl Scripted {
    fn new(columns: &[usize]) -> Self {
        Self {
            columns: columns.to_vec(),
            next: 0,
            rejected: Vec::new(),
        }
    }
}

impl Strategy for Scripted {
    fn select_column(&mut self, _rng: &mut SmallRng, _engine: &Engine) -> usize {
        let column = self.columns[self.next];
        self.next += 1;
        column
    }

    fn handle_rejected(&mut self, column: usize) {
        self.rejected.push(column);
    }
}

#[test]
fn test_scripted_round_skips_rejected_input() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut session = Session::default();
    // player 1 tries an off-grid column once, then stacks column 0
    let mut p1 = Scripted::new(&[99, 0, 0, 0, 0]);
    let mut p2 = Scripted::new(&[1, 1, 1]);

    let outcome = session.play_round(&mut p1, &mut p2, &mut rng);
    assert_eq!(outcome, Outcome::Winner(PlayerId::One));
    assert_eq!(p1.rejected, vec![99]);
    assert!(p2.rejected.is_empty());
    assert_eq!(session.score(), (1, 0));
    assert_eq!(session.rounds_played(), 1);
}

/// Board-filling order with no run anywhere, player 1 moving first.
const DRAW_SEQUENCE: [usize; 49] = [
    0, 5, 6, 1, 6, 0, 5, 6, 0, 2, 1, 0, 6, 5, 3, 4, 0, 1, 1, 6, 6, 3, 5, 2, 1, 5, 4, 0, 4, 3, 6,
    2, 0, 3, 3, 3, 4, 4, 1, 3, 4, 1, 2, 4, 5, 2, 2, 5, 2,
];

fn draw_players() -> (Scripted, Scripted) {
    let p1: Vec<usize> = DRAW_SEQUENCE.iter().step_by(2).copied().collect();
    let p2: Vec<usize> = DRAW_SEQUENCE.iter().skip(1).step_by(2).copied().collect();
    (Scripted::new(&p1), Scripted::new(&p2))
}

#[test]
fn test_round_on_full_grid_returns_without_moves() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut session = Session::default();
    let (mut p1, mut p2) = draw_players();

    assert_eq!(session.play_round(&mut p1, &mut p2, &mut rng), Outcome::Draw);
    assert_eq!((session.rounds_played(), session.draws()), (1, 1));
    let before = session.engine().state();

    // no new_round: the scripts are exhausted, so any select_column would panic
    assert_eq!(session.play_round(&mut p1, &mut p2, &mut rng), Outcome::Draw);
    let mut a1 = AiStrategy::new();
    let mut a2 = AiStrategy::new();
    assert_eq!(session.play_round(&mut a1, &mut a2, &mut rng), Outcome::Draw);

    assert_eq!((session.rounds_played(), session.draws()), (1, 1));
    assert_eq!(session.score(), (0, 0));
    assert_eq!(session.engine().state(), before);

    session.new_round();
    let outcome = session.play_round(&mut a1, &mut a2, &mut rng);
    assert!(outcome.is_over());
    assert_eq!(session.rounds_played(), 2);
}

#[test]
fn test_session_from_full_engine_does_not_hang() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut engine = Engine::default();
    for &c in DRAW_SEQUENCE.iter() {
        assert!(engine.submit_move(connectfour::Move::new(c)).unwrap());
    }
    let mut session = Session::with_engine(engine);
    let mut p1 = AiStrategy::new();
    let mut p2 = AiStrategy::new();
    assert_eq!(session.play_round(&mut p1, &mut p2, &mut rng), Outcome::Draw);
    assert_eq!(session.rounds_played(), 0);
}

#[test]
fn test_ai_sessions_finish() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut session = Session::new(GameConfig::default()).unwrap();
    let mut p1 = AiStrategy::new();
    let mut p2 = AiStrategy::new();
    for _ in 0..10 {
        session.new_round();
        let outcome = session.play_round(&mut p1, &mut p2, &mut rng);
        assert!(outcome.is_over());
    }
    let (w1, w2) = session.score();
    assert_eq!(w1 + w2 + session.draws(), 10);
    assert_eq!(session.rounds_played(), 10);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let run = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::default();
        let mut p1 = AiStrategy::new();
        let mut p2 = AiStrategy::new();
        session.play_round(&mut p1, &mut p2, &mut rng);
        session.engine().state()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn test_sessions_are_independent() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut a = Session::default();
    let b = Session::default();
    let mut p1 = AiStrategy::new();
    let mut p2 = AiStrategy::new();
    a.play_round(&mut p1, &mut p2, &mut rng);
    assert_eq!(a.rounds_played(), 1);
    assert_eq!(b.rounds_played(), 0);
    assert_eq!(b.engine().grid(), &Grid::default());
}

#[test]
fn test_ai_takes_win_then_blocks() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut grid = Grid::default();
    for _ in 0..3 {
        grid.place(PlayerId::Two, 5).unwrap();
    }
    // player 2 threatens column 5; player 1 must block
    assert_eq!(choose_column(&grid, PlayerId::One, &mut rng), Some(5));
    // player 2 takes the win
    assert_eq!(choose_column(&grid, PlayerId::Two, &mut rng), Some(5));

    for c in 0..3 {
        grid.place(PlayerId::One, c).unwrap();
    }
    // own win beats blocking
    assert_eq!(choose_column(&grid, PlayerId::One, &mut rng), Some(3));
}

#[test]
fn test_ai_only_picks_legal_columns() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut grid = Grid::new(GameConfig::new(4, 4, 4).unwrap()).unwrap();
    let owners = [PlayerId::One, PlayerId::Two];
    for c in 0..3 {
        for r in 0..4 {
            grid.place(owners[(c + r) % 2], c).unwrap();
        }
    }
    for _ in 0..20 {
        assert_eq!(choose_column(&grid, PlayerId::One, &mut rng), Some(3));
    }
    grid.place(PlayerId::One, 3).unwrap();
    grid.place(PlayerId::Two, 3).unwrap();
    grid.place(PlayerId::One, 3).unwrap();
    grid.place(PlayerId::Two, 3).unwrap();
    assert_eq!(choose_column(&grid, PlayerId::One, &mut rng), None);
}
