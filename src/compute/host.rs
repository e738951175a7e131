//! Host simulator interface.
//!
//! The host owns a toroidal canvas addressed by signed `(x, y)` coordinates,
//! with `x` horizontal and `y` vertical, centred on the origin. Everything
//! in this crate talks to it through an explicit `&mut impl Host` handle.

use crate::schema::{Colour, ColourError, Palette};

/// Operations consumed from a cellular-automaton host.
pub trait Host {
    /// Start a fresh, all-empty `width` x `height` torus running `rule`.
    fn new_universe(&mut self, rule: &str, width: usize, height: usize) -> Result<(), HostError>;

    /// Set the RGB colour of each state.
    fn set_palette(&mut self, palette: &Palette) -> Result<(), HostError>;

    /// Write a cell's colour.
    fn write_cell(&mut self, x: i64, y: i64, colour: Colour) -> Result<(), HostError>;

    /// Advance the simulation. Blocks until done.
    fn advance(&mut self, steps: u64) -> Result<(), HostError>;

    /// Read a cell's colour.
    fn read_cell(&self, x: i64, y: i64) -> Result<Colour, HostError>;

    /// Display a status message.
    fn show(&mut self, message: &str) -> Result<(), HostError>;
}

/// Errors reported by a host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("No universe: call new_universe first")]
    NoUniverse,
    #[error("Unsupported rule: {0}")]
    UnsupportedRule(String),
    #[error("Invalid torus size {width}x{height}")]
    InvalidSize { width: usize, height: usize },
    #[error("Host returned an invalid cell state: {0}")]
    InvalidState(#[from] ColourError),
    #[error("Host backend failed: {0}")]
    Backend(String),
}
