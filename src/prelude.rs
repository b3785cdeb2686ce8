//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiStrategy, Engine, GameConfig, GridError, Move, Outcome, Player, PlayerId, Session, Strategy,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_view, CliStrategy};
