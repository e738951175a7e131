//! Best-result checkpoints: (score, seed, grown pattern).

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GROWN_SIZE, Grid, SEED_SIZE};

/// Top result of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Score of `grown` against the training target.
    pub score: f64,
    /// 20x20 seed that was written to the host.
    pub seed: Grid,
    /// 60x60 window read back after growing.
    pub grown: Grid,
}

impl Checkpoint {
    /// Load a checkpoint from a JSON file and check the grid shapes.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CheckpointError> {
        let content = fs::read_to_string(path)?;
        let checkpoint: Checkpoint = serde_json::from_str(&content)?;
        checkpoint.check_shapes()?;
        Ok(checkpoint)
    }

    /// Write the checkpoint as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CheckpointError> {
        self.check_shapes()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        log::info!(
            "Saved checkpoint (score {:.3}) to {}",
            self.score,
            path.as_ref().display()
        );
        Ok(())
    }

    fn check_shapes(&self) -> Result<(), CheckpointError> {
        for (field, grid, size) in [
            ("seed", &self.seed, SEED_SIZE),
            ("grown", &self.grown, GROWN_SIZE),
        ] {
            if grid.shape() != (size, size) {
                return Err(CheckpointError::Shape {
                    field,
                    expected: (size, size),
                    found: grid.shape(),
                });
            }
        }
        Ok(())
    }
}

/// Errors reading or writing checkpoint files.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("Checkpoint I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Checkpoint is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Checkpoint {field} grid is {found:?}, expected {expected:?}")]
    Shape {
        field: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
}
