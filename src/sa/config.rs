//! Annealer configuration, cooling schedules and acceptance rules.

use crate::error::InvalidInputError;

/// Cooling schedule mapping the step count since the last restart to a
/// temperature.
///
/// Built-in schedules start at `T = 1` and decrease towards 0.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy)]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_k = alpha^k`.
    ///
    /// Typical `alpha`: 0.95–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_k = 1 - k / max_time`, floored at 0.
    Linear,

    /// Lundy-Mees cooling in closed form: `T_k = 1 / (1 + beta * k)`.
    LundyMees {
        /// Cooling parameter, positive.
        beta: f64,
    },

    /// Caller-supplied schedule.
    Custom(fn(usize) -> f64),
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.98 }
    }
}

impl CoolingSchedule {
    /// Temperature after `step` steps since the last restart.
    pub fn temperature(&self, step: usize, max_time: usize) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => alpha.powf(step as f64),
            CoolingSchedule::Linear => {
                if max_time == 0 {
                    0.0
                } else {
                    (1.0 - step as f64 / max_time as f64).max(0.0)
                }
            }
            CoolingSchedule::LundyMees { beta } => 1.0 / (1.0 + beta * step as f64),
            CoolingSchedule::Custom(f) => f(step),
        }
    }
}

/// Rule deciding the probability of moving to a candidate state.
///
/// Energies follow the higher-is-better convention. Every rule is clamped
/// into `[0, 1]`; a NaN probability counts as 0.
#[derive(Debug, Clone, Copy, Default)]
pub enum Acceptance {
    /// Always take an improvement; otherwise
    /// `exp((candidate - current) * (1 - T))`.
    #[default]
    Exponential,

    /// Metropolis criterion: `exp((candidate - current) / T)`, 0 at `T <= 0`.
    Metropolis,

    /// Only strict improvements are accepted.
    Greedy,

    /// Caller-supplied rule: `(current, candidate, temperature) -> p`.
    Custom(fn(f64, f64, f64) -> f64),
}

impl Acceptance {
    /// Probability of accepting `candidate` over `current` at `temperature`.
    pub fn probability(&self, current: f64, candidate: f64, temperature: f64) -> f64 {
        let p = match *self {
            Acceptance::Exponential => {
                if candidate > current {
                    1.0
                } else {
                    ((candidate - current) * (1.0 - temperature)).exp()
                }
            }
            Acceptance::Metropolis => {
                if candidate > current {
                    1.0
                } else if temperature > 0.0 {
                    ((candidate - current) / temperature).exp()
                } else {
                    0.0
                }
            }
            Acceptance::Greedy => {
                if candidate > current {
                    1.0
                } else {
                    0.0
                }
            }
            Acceptance::Custom(f) => f(current, candidate, temperature),
        };
        if p.is_nan() {
            0.0
        } else {
            p.clamp(0.0, 1.0)
        }
    }
}

/// Configuration for the [`Annealer`](super::Annealer).
///
/// # Examples
///
/// ```
/// use u_pairing::sa::{Acceptance, AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::default()
///     .with_max_time(5000)
///     .with_max_energy(0.0)
///     .with_restart_probability(0.01)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 })
///     .with_acceptance(Acceptance::Exponential)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Step budget. 0 returns the initial state untouched.
    pub max_time: usize,

    /// Stop as soon as the current energy reaches this value.
    pub max_energy: f64,

    /// Chance per step of replacing the candidate with a fully
    /// randomized state.
    pub restart_probability: f64,

    /// Cooling schedule, indexed by steps since the last restart.
    pub cooling: CoolingSchedule,

    /// Acceptance rule.
    pub acceptance: Acceptance,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Best energy is sampled into the history every this many steps.
    pub history_interval: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_time: 1000,
            max_energy: f64::INFINITY,
            restart_probability: 0.0,
            cooling: CoolingSchedule::default(),
            acceptance: Acceptance::default(),
            seed: None,
            history_interval: 100,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_time(mut self, n: usize) -> Self {
        self.max_time = n;
        self
    }

    pub fn with_max_energy(mut self, e: f64) -> Self {
        self.max_energy = e;
        self
    }

    pub fn with_restart_probability(mut self, p: f64) -> Self {
        self.restart_probability = p;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.max_energy.is_nan() {
            return Err(InvalidInputError::new("max_energy must not be NaN"));
        }
        if !(0.0..=1.0).contains(&self.restart_probability) {
            return Err(InvalidInputError::new(format!(
                "restart_probability must be in [0, 1], got {}",
                self.restart_probability
            )));
        }
        if self.history_interval == 0 {
            return Err(InvalidInputError::new("history_interval must be positive"));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 || alpha.is_nan() {
                    return Err(InvalidInputError::new(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if beta <= 0.0 || !beta.is_finite() {
                    return Err(InvalidInputError::new(format!(
                        "lundy-mees beta must be positive, got {beta}"
                    )));
                }
            }
            CoolingSchedule::Linear | CoolingSchedule::Custom(_) => {}
        }
        Ok(())
    }
}
