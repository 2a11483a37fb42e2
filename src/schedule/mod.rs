//! Debate round scheduling.
//!
//! Pairs teams into matches and seats judges on them, scoring each
//! schedule with penalty weights for same-school pairings, conflicted
//! judges and uneven win records.
//!
//! # Key Types
//!
//! - [`Team`], [`Judge`], [`Match`]: the round's entities
//! - [`Penalties`]: the three named weights
//! - [`ScheduleState`]: a searchable schedule implementing
//!   [`SaState`](crate::sa::SaState)
//! - [`Move`]: the closed set of elementary, self-inverse edits
//!
//! # Energy
//!
//! Summed over matches, starting from 0:
//!
//! - `-teamsSameSchool` when both teams share a school
//! - `-judgeSameSchool` per judge per team side sharing the judge's school
//! - `-((1 + differentWinLoss)^gap + 1)` when the win counts differ by `gap`
//!
//! # Examples
//!
//! ```
//! use u_pairing::sa::AnnealConfig;
//! use u_pairing::schedule::{plan_round, Judge, Penalties, Team};
//!
//! let teams = vec![
//!     Team::new("A", "X"),
//!     Team::new("B", "X"),
//!     Team::new("C", "Y"),
//!     Team::new("D", "Y"),
//! ];
//! let judges = vec![Judge::new("J1", "Z")];
//! let config = AnnealConfig::default().with_max_energy(0.0).with_seed(42);
//!
//! let result = plan_round(teams, judges, Penalties::new(10.0, 5.0, 1.0), &config).unwrap();
//! assert_eq!(result.best_energy, 0.0);
//! ```

mod moves;
mod state;
mod types;

pub use moves::Move;
pub use state::{Permutation, ScheduleState};
pub use types::{Judge, Match, MatchRecord, Penalties, Team};

use crate::error::InvalidInputError;
use crate::sa::{create_rng, AnnealConfig, AnnealResult, Annealer};

/// Builds a random schedule for one round and anneals it.
///
/// Construction and search share a single generator seeded from
/// `config.seed`.
pub fn plan_round(
    teams: Vec<Team>,
    judges: Vec<Judge>,
    penalties: Penalties,
    config: &AnnealConfig,
) -> Result<AnnealResult<ScheduleState>, InvalidInputError> {
    config.validate()?;
    let mut rng = create_rng(config.seed);
    let initial = ScheduleState::random_schedule(teams, judges, penalties, &mut rng)?;
    Annealer::run_with_rng(initial, config, &mut rng)
}
