#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod console;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod sim;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::{parse_coordinate, run_session, Console, SessionOutcome};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
