#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod coordinate;
mod deploy;
mod direction;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod ship;

pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use deploy::*;
pub use direction::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
