#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use connectfour::{
    confirm, init_logging, outcome_message, print_view, AiStrategy, CliStrategy, GameConfig,
    Session, Strategy,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// TOML file with `rows`, `columns` and `run_length`.
    #[arg(long, global = true, default_value = "connectfour.toml")]
    config: PathBuf,
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two humans sharing this terminal.
    Local,
    /// Play against the computer.
    Versus {
        #[arg(long, help = "Let the computer take player 1")]
        ai_first: bool,
    },
    /// Watch the computer play itself.
    Watch {
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Print a config file with every key at its default.
    Config,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    if let Commands::Config = cli.command {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }

    let config = GameConfig::load_or_default(&cli.config)?;
    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut session = Session::new(config)?;

    match cli.command {
        Commands::Local => {
            let mut p1 = CliStrategy::new();
            let mut p2 = CliStrategy::new();
            play_interactive(&mut session, &mut p1, &mut p2, &mut rng)?;
        }
        Commands::Versus { ai_first } => {
            let mut human = CliStrategy::new();
            let mut ai = AiStrategy::new();
            if ai_first {
                play_interactive(&mut session, &mut ai, &mut human, &mut rng)?;
            } else {
                play_interactive(&mut session, &mut human, &mut ai, &mut rng)?;
            }
        }
        Commands::Watch { rounds } => {
            let mut p1 = AiStrategy::new();
            let mut p2 = AiStrategy::new();
            for _ in 0..rounds {
                session.new_round();
                let outcome = session.play_round(&mut p1, &mut p2, &mut rng);
                print_view(session.engine());
                println!("{}", outcome_message(outcome));
            }
            let (w1, w2) = session.score();
            println!("Final score: {} - {} ({} draws)", w1, w2, session.draws());
        }
        Commands::Config => {}
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play_interactive(
    session: &mut Session,
    first: &mut dyn Strategy,
    second: &mut dyn Strategy,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    loop {
        session.new_round();
        let outcome = session.play_round(first, second, rng);
        print_view(session.engine());
        println!("{}", outcome_message(outcome));
        if !confirm("Play again?")? {
            break;
        }
    }
    let (w1, w2) = session.score();
    println!("Final score: {} - {}", w1, w2);
    Ok(())
}
