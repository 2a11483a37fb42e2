//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Energy-reducing candidates are accepted with a
//! probability that shrinks as the temperature falls, allowing the search
//! to escape local optima. Optional restarts replace the candidate with a
//! fully randomized state.
//!
//! Energy follows the higher-is-better convention throughout.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;
mod types;

pub use config::{Acceptance, AnnealConfig, CoolingSchedule};
pub(crate) use runner::create_rng;
pub use runner::{AnnealResult, Annealer};
pub use types::SaState;
