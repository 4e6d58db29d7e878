#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod events;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod ship;
mod shot;
#[cfg(feature = "std")]
mod snapshot;
mod targeting;

pub use board::*;
pub use common::*;
pub use config::*;
pub use events::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
pub use placement::*;
pub use player::*;
pub use ship::*;
pub use shot::fire;
#[cfg(feature = "std")]
pub use snapshot::Snapshot;
pub use targeting::*;
