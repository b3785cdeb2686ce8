//! Column selection for computer players.

use alloc::vec::Vec;

use crate::{common::PlayerId, engine::Engine, grid::Grid, strategy::Strategy, win};
use rand::{rngs::SmallRng, Rng};

/// Whether dropping a disc for `player` into `column` completes a run.
pub fn wins_with(grid: &Grid, player: PlayerId, column: usize) -> bool {
    let mut probe = grid.clone();
    if !matches!(probe.place(player, column), Ok(true)) {
        return false;
    }
    match win::landing_row(&probe, column) {
        Ok(Some(row)) => win::is_winning_cell(&probe, row, column).unwrap_or(false),
        _ => false,
    }
}

/// Pick a column for `player`: an immediate win, else a block of the
/// opponent's immediate win, else a random legal column weighted toward the
/// centre. Returns `None` only when the grid is full.
pub fn choose_column<R: Rng>(grid: &Grid, player: PlayerId, rng: &mut R) -> Option<usize> {
    let legal: Vec<usize> = grid.legal_columns().collect();
    if legal.is_empty() {
        return None;
    }
    if let Some(&c) = legal.iter().find(|&&c| wins_with(grid, player, c)) {
        return Some(c);
    }
    if let Some(&c) = legal.iter().find(|&&c| wins_with(grid, player.other(), c)) {
        return Some(c);
    }

    // weight = columns - 2 * distance to centre (always >= 1)
    let columns = grid.columns();
    let weights: Vec<usize> = legal
        .iter()
        .map(|&c| columns - (2 * c + 1).abs_diff(columns))
        .collect();
    let total: usize = weights.iter().sum();
    let mut pick = rng.random_range(0..total);
    for (&c, &w) in legal.iter().zip(&weights) {
        if pick < w {
            return Some(c);
        }
        pick -= w;
    }
    legal.last().copied()
}

/// Computer player using [`choose_column`].
pub struct AiStrategy;

impl AiStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for AiStrategy {
    fn select_column(&mut self, rng: &mut SmallRng, engine: &Engine) -> usize {
        let player = engine.current_player().id();
        // A full grid is never asked for a move; column 0 would be rejected anyway.
        choose_column(engine.grid(), player, rng).unwrap_or(0)
    }
}
