#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    ai,
    common::{Cell, Outcome, PlayerId},
    engine::Engine,
    grid::Grid,
    strategy::Strategy,
};
use rand::rngs::SmallRng;

/// Human player reading 1-based column numbers from stdin.
pub struct CliStrategy;

impl CliStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Disc colour shown for a player.
pub fn colour(player: PlayerId) -> &'static str {
    match player {
        PlayerId::One => "red",
        PlayerId::Two => "black",
    }
}

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Player1 => 'R',
        Cell::Player2 => 'B',
    }
}

/// Parse a 1-based column. Range is not checked; `None` only for text that
/// is not a positive number.
pub fn parse_column(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// Render the grid as text, one line per row, with column numbers on top.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for c in 0..grid.columns() {
        out.push_str(&std::format!("{:>3}", c + 1));
    }
    out.push('\n');
    for r in 0..grid.rows() {
        for &cell in grid.row(r).unwrap_or(&[]) {
            out.push_str(&std::format!("{:>3}", cell_char(cell)));
        }
        out.push('\n');
    }
    out
}

/// Print the grid, score and whose turn it is.
pub fn print_view(engine: &Engine) {
    std::print!("{}", render_grid(engine.grid()));
    let (p1, p2) = engine.score();
    let current = engine.current_player().id();
    std::println!("Score: {} - {}", p1, p2);
    std::println!("Current turn: Player {} ({})", current.number(), colour(current));
}

/// Message shown when a round ends.
pub fn outcome_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(id) => std::format!("Game Over, Player {} wins.", id.number()),
        Outcome::Draw => String::from("Game Over, Draw."),
        Outcome::InProgress => String::from("Game in progress."),
    }
}

/// Ask a yes/no question; anything but `y`/`yes` (or end of input) is no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    std::print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

impl Strategy for CliStrategy {
    fn select_column(&mut self, rng: &mut SmallRng, engine: &Engine) -> usize {
        let player = engine.current_player().id();
        let suggestion = ai::choose_column(engine.grid(), player, rng).unwrap_or(0);
        print_view(engine);
        loop {
            std::print!("Choose a column [{}]: ", suggestion + 1);
            let _ = io::stdout().flush();
            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                // end of input: play the suggestion so the round can finish
                Ok(0) | Err(_) => {
                    std::println!();
                    return suggestion;
                }
                Ok(_) => {}
            }
            if line.trim().is_empty() {
                return suggestion;
            }
            match parse_column(&line) {
                Some(column) => return column,
                None => std::println!("Invalid column"),
            }
        }
    }

    fn handle_rejected(&mut self, column: usize) {
        std::println!("Column {} is not available", column + 1);
    }
}
