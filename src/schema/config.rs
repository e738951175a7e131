//! Experiment configuration.

use serde::{Deserialize, Serialize};

use super::{GROWN_SIZE, Target};

fn default_rule() -> String {
    "Immigration".to_string()
}
fn default_torus() -> (usize, usize) {
    (GROWN_SIZE, GROWN_SIZE)
}
fn default_prob_colour() -> f64 {
    // Life prefers a live density around 0.3, split between the colours.
    0.15
}
fn default_prob_mutation() -> f64 {
    0.01
}
fn default_steps() -> u64 {
    80
}
fn default_generations() -> usize {
    100
}

/// Top-level configuration for a seed evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Host rule name.
    #[serde(default = "default_rule")]
    pub rule: String,
    /// Torus size (width, height) on the host.
    #[serde(default = "default_torus")]
    pub torus: (usize, usize),
    /// Per-cell probability of a red seed cell.
    #[serde(default = "default_prob_colour")]
    pub prob_red: f64,
    /// Per-cell probability of a blue seed cell.
    #[serde(default = "default_prob_colour")]
    pub prob_blue: f64,
    /// Per-cell probability that mutation changes a cell.
    #[serde(default = "default_prob_mutation")]
    pub prob_mutation: f64,
    /// Host steps between writing the seed and reading it back.
    #[serde(default = "default_steps")]
    pub steps: u64,
    /// Pattern the grown seed is scored against.
    #[serde(default)]
    pub target: Target,
    /// Number of mutate/grow/score iterations.
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            rule: default_rule(),
            torus: default_torus(),
            prob_red: default_prob_colour(),
            prob_blue: default_prob_colour(),
            prob_mutation: default_prob_mutation(),
            steps: default_steps(),
            target: Target::default(),
            generations: default_generations(),
            random_seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Validate configuration parameters.
    ///
    /// Probabilities outside [0, 1] are accepted: they only bias the draws,
    /// so they are logged rather than rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rule.trim().is_empty() {
            return Err(ConfigError::EmptyRule);
        }
        let (width, height) = self.torus;
        if width < GROWN_SIZE || height < GROWN_SIZE {
            return Err(ConfigError::TorusTooSmall { width, height });
        }
        for (name, p) in [
            ("prob_red", self.prob_red),
            ("prob_blue", self.prob_blue),
            ("prob_mutation", self.prob_mutation),
        ] {
            if !p.is_finite() {
                return Err(ConfigError::NonFiniteProbability(name));
            }
            if !(0.0..=1.0).contains(&p) {
                log::warn!("{} = {} is outside [0, 1]", name, p);
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Rule name must be non-empty")]
    EmptyRule,
    #[error("Torus {width}x{height} cannot hold the 60x60 read-back window")]
    TorusTooSmall { width: usize, height: usize },
    #[error("Probability {0} must be finite")]
    NonFiniteProbability(&'static str),
}
