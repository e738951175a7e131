//! Immigration seeds - evolve two-colour seeds toward target patterns.
//!
//! A seed is a random 20x20 grid of red, blue and empty cells. It is
//! written into the centre of a 60x60 torus running the Immigration rule
//! (two-colour Life), grown for a fixed number of steps, read back as a
//! 60x60 grid and scored against one of five fixed target patterns.
//!
//! # Architecture
//!
//! - `schema`: Colours, grids, target patterns, configuration, checkpoints
//! - `compute`: Seed generation and mutation, scoring, the host interface,
//!   an in-process torus host, grid transfer and a hill-climbing trainer
//!
//! # Example
//!
//! ```rust,no_run
//! use immigration_seeds::{
//!     compute::{GrowSettings, SeedRng, TorusHost, grow, score},
//!     schema::Target,
//! };
//!
//! let mut rng = SeedRng::new(42);
//! let seed = rng.generate_seed(0.15, 0.15);
//!
//! let mut host = TorusHost::new();
//! let growth = grow(&mut host, &seed, &GrowSettings::default()).unwrap();
//!
//! let s = score(&growth.grown, &Target::Stripes2.grid());
//! println!("score = {s}");
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Host, SeedRng, TorusHost, Trainer, grow, score};
pub use schema::{Checkpoint, Colour, ExperimentConfig, Grid, Target};
