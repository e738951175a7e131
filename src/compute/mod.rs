//! Compute module - Seed generation, mutation, scoring and host transfer.

mod evolution;
mod host;
mod scoring;
mod seed;
mod torus;
mod transfer;

pub use evolution::*;
pub use host::*;
pub use scoring::*;
pub use seed::*;
pub use torus::*;
pub use transfer::*;
