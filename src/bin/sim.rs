#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use connectfour::{AiStrategy, GameConfig, Session};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[cfg(feature = "std")]
struct SessionReport {
    index: usize,
    score: (u32, u32),
    draws: u32,
}

/// Play `rounds` AI-vs-AI rounds in a fresh session.
#[cfg(feature = "std")]
fn run_session(index: usize, seed: u64, rounds: u32) -> anyhow::Result<SessionReport> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new(GameConfig::default())?;
    let mut p1 = AiStrategy::new();
    let mut p2 = AiStrategy::new();
    for _ in 0..rounds {
        session.new_round();
        session.play_round(&mut p1, &mut p2, &mut rng);
    }
    Ok(SessionReport {
        index,
        score: session.score(),
        draws: session.draws(),
    })
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    connectfour::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <seed> <sessions> <rounds>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let sessions: usize = args[2].parse()?;
    let rounds: u32 = args[3].parse()?;

    let handles: Vec<_> = (0..sessions)
        .map(|i| {
            let session_seed = seed.wrapping_add(i as u64);
            tokio::task::spawn_blocking(move || run_session(i, session_seed, rounds))
        })
        .collect();

    let mut reports = Vec::with_capacity(sessions);
    for handle in handles {
        reports.push(handle.await??);
    }

    let totals = reports.iter().fold((0u32, 0u32, 0u32), |acc, r| {
        (acc.0 + r.score.0, acc.1 + r.score.1, acc.2 + r.draws)
    });
    let result = json!({
        "sessions": reports.iter().map(|r| json!({
            "session": r.index,
            "player1": r.score.0,
            "player2": r.score.1,
            "draws": r.draws,
        })).collect::<Vec<_>>(),
        "totals": {"player1": totals.0, "player2": totals.1, "draws": totals.2},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
