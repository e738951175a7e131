//! Hill-climbing trainer: mutate the best seed, grow it, keep improvements.

use std::time::Instant;

use crate::schema::{Checkpoint, ConfigError, ExperimentConfig, Grid};

use super::{GrowSettings, GrowthTally, Host, HostError, SeedRng, grow, score};

/// Progress reported after each generation.
#[derive(Debug, Clone)]
pub struct TrainerProgress {
    /// Generation just finished (0 is the random starting seed).
    pub generation: usize,
    /// Score of the candidate grown this generation.
    pub candidate_score: f64,
    /// Best score so far.
    pub best_score: f64,
    /// Whether the candidate replaced the best seed.
    pub accepted: bool,
}

/// Final result of a training run.
#[derive(Debug, Clone)]
pub struct TrainerResult {
    /// Best seed, its grown pattern and score.
    pub best: Checkpoint,
    /// Growth totals over every grow in the run.
    pub tally: GrowthTally,
    /// Best score after each generation.
    pub history: Vec<f64>,
    /// Number of accepted mutations.
    pub accepted: usize,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
}

/// Errors that stop a training run.
#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Host failed: {0}")]
    Host(#[from] HostError),
}

/// Trainer that runs the seed search against a host.
pub struct Trainer {
    config: ExperimentConfig,
    settings: GrowSettings,
    target: Grid,
    rng: SeedRng,
}

impl Trainer {
    /// Create a trainer after validating the configuration.
    pub fn new(config: ExperimentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.random_seed.unwrap_or_else(rand::random);
        Ok(Self {
            settings: GrowSettings::from(&config),
            target: config.target.grid(),
            rng: SeedRng::new(seed),
            config,
        })
    }

    /// Target grid the trainer scores against.
    pub fn target(&self) -> &Grid {
        &self.target
    }

    /// Run without progress reporting.
    pub fn run<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<TrainerResult, TrainerError> {
        self.run_with_callback(host, |_| {})
    }

    /// Run, calling `on_progress` after every generation.
    pub fn run_with_callback<H, F>(
        &mut self,
        host: &mut H,
        mut on_progress: F,
    ) -> Result<TrainerResult, TrainerError>
    where
        H: Host + ?Sized,
        F: FnMut(&TrainerProgress),
    {
        let start = Instant::now();
        let mut tally = GrowthTally::default();
        let mut history = Vec::with_capacity(self.config.generations + 1);
        let mut accepted = 0;

        log::info!(
            "Training against {:?} for {} generations",
            self.config.target,
            self.config.generations
        );

        let seed = self
            .rng
            .generate_seed(self.config.prob_red, self.config.prob_blue);
        let growth = grow(host, &seed, &self.settings)?;
        tally.record(&growth.stats);
        let mut best = Checkpoint {
            score: score(&growth.grown, &self.target),
            seed,
            grown: growth.grown,
        };
        history.push(best.score);
        on_progress(&TrainerProgress {
            generation: 0,
            candidate_score: best.score,
            best_score: best.score,
            accepted: true,
        });

        for generation in 1..=self.config.generations {
            let child = self.rng.mutate(&best.seed, self.config.prob_mutation);
            let growth = grow(host, &child, &self.settings)?;
            tally.record(&growth.stats);
            let child_score = score(&growth.grown, &self.target);

            let improved = child_score >= best.score;
            if improved {
                best = Checkpoint {
                    score: child_score,
                    seed: child,
                    grown: growth.grown,
                };
                accepted += 1;
            }
            history.push(best.score);

            log::debug!(
                "Generation {}: candidate {:.3}, best {:.3}",
                generation,
                child_score,
                best.score
            );
            on_progress(&TrainerProgress {
                generation,
                candidate_score: child_score,
                best_score: best.score,
                accepted: improved,
            });
        }

        let elapsed_seconds = start.elapsed().as_secs_f64();
        log::info!(
            "Training finished: best score {:.3}, {} accepted, {:.2}s",
            best.score,
            accepted,
            elapsed_seconds
        );

        Ok(TrainerResult {
            best,
            tally,
            history,
            accepted,
            elapsed_seconds,
        })
    }
}
