//! Schema module - Colours, grids, targets, configuration and checkpoints.

mod checkpoint;
mod colour;
mod config;
mod grid;
mod target;

pub use checkpoint::*;
pub use colour::*;
pub use config::*;
pub use grid::*;
pub use target::*;
