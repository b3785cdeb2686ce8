#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod common;
mod config;
mod engine;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod moves;
mod player;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod session;
mod strategy;
pub mod win;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use moves::*;
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use session::*;
pub use strategy::*;
