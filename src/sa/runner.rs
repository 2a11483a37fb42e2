//! SA execution loop.

use super::config::AnnealConfig;
use super::types::SaState;
use crate::error::InvalidInputError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best state observed, an independent snapshot.
    pub best: S,

    /// Energy of the best state.
    pub best_energy: f64,

    /// Energy of the state the run started from.
    pub initial_energy: f64,

    /// Total number of steps taken.
    pub steps: usize,

    /// Number of steps that replaced the candidate with a restart.
    pub restarts: usize,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted candidates that raised the current energy.
    pub improving_moves: usize,

    /// Temperature at the last step taken.
    pub final_temperature: f64,

    /// Initial energy followed by every best-energy update.
    pub best_history: Vec<f64>,

    /// Best energy sampled every `history_interval` steps.
    pub energy_history: Vec<f64>,
}

/// Creates the per-run generator. `None` draws a seed from the OS.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

/// Executes simulated annealing over any [`SaState`].
pub struct Annealer;

impl Annealer {
    /// Runs the search with a generator seeded from `config.seed`.
    pub fn run<S: SaState>(initial: S, config: &AnnealConfig) -> Result<AnnealResult<S>, S::Error> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(initial, config, &mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<S: SaState, R: Rng>(
        initial: S,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<S>, S::Error> {
        config.validate()?;
        if config.restart_probability > 0.0 && !S::SUPPORTS_RESTART {
            return Err(InvalidInputError::new(
                "restart_probability > 0 requires a state that supports restarts",
            )
            .into());
        }

        let initial_energy = initial.energy();
        let mut current = initial;
        let mut current_energy = initial_energy;
        let mut best = current.clone();
        let mut best_energy = current_energy;

        let mut steps = 0usize;
        let mut since_restart = 0usize;
        let mut restarts = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut temperature = config.cooling.temperature(0, config.max_time);

        let mut best_history = vec![best_energy];
        let mut energy_history = vec![best_energy];

        debug!(
            target: "u_pairing::sa",
            max_time = config.max_time,
            max_energy = config.max_energy,
            restart_probability = config.restart_probability,
            initial_energy,
            "annealing started"
        );

        while steps < config.max_time && current_energy < config.max_energy {
            let restart = config.restart_probability > 0.0
                && rng.random::<f64>() < config.restart_probability;

            let candidate = if restart {
                since_restart = 0;
                restarts += 1;
                debug!(target: "u_pairing::sa", step = steps, "restart");
                current.shuffle(rng)?
            } else {
                let mut next = current.clone();
                next.neighbor(rng)?;
                next
            };

            let candidate_energy = candidate.energy();
            temperature = config.cooling.temperature(since_restart, config.max_time);

            let probability =
                config
                    .acceptance
                    .probability(current_energy, candidate_energy, temperature);
            let accept = probability > rng.random::<f64>();

            // Best tracking looks at every candidate, accepted or not.
            if candidate_energy > best_energy {
                best = candidate.clone();
                best_energy = candidate_energy;
                best_history.push(best_energy);
                debug!(target: "u_pairing::sa", step = steps, best_energy, "new best");
            }

            if accept {
                if candidate_energy > current_energy {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                current = candidate;
                current_energy = candidate_energy;
            }

            since_restart += 1;
            steps += 1;

            if steps.is_multiple_of(config.history_interval) {
                energy_history.push(best_energy);
            }
        }

        if energy_history
            .last()
            .is_none_or(|&last| (last - best_energy).abs() > 1e-15)
        {
            energy_history.push(best_energy);
        }

        info!(
            target: "u_pairing::sa",
            steps,
            restarts,
            accepted_moves,
            improving_moves,
            initial_energy,
            best_energy,
            "annealing finished"
        );

        Ok(AnnealResult {
            best,
            best_energy,
            initial_energy,
            steps,
            restarts,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            best_history,
            energy_history,
        })
    }
}
