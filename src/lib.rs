#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
pub mod fleet;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::{place_fleet, random_grid, random_placement};
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging_with_default;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
