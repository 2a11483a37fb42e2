//! Core trait for Simulated Annealing.

use crate::error::InvalidInputError;
use rand::Rng;

/// A searchable state for the [`Annealer`](super::Annealer).
///
/// The state is a single mutable configuration. The annealer clones it to
/// derive candidates, asks the clone to move to a neighboring
/// configuration, and snapshots it with [`Clone`] whenever a new best is
/// seen. `Clone` must therefore produce an independent deep copy.
///
/// # Maximization
///
/// Energy is a fitness: higher is better. For cost minimization, negate
/// the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_pairing::error::InvalidInputError;
/// use u_pairing::sa::SaState;
///
/// #[derive(Clone)]
/// struct Peak(i64);
///
/// impl SaState for Peak {
///     type Error = InvalidInputError;
///
///     fn energy(&self) -> f64 {
///         -((self.0 - 7) as f64).abs()
///     }
///
///     fn neighbor<R: Rng>(&mut self, rng: &mut R) -> Result<(), Self::Error> {
///         self.0 += if rng.random_bool(0.5) { 1 } else { -1 };
///         Ok(())
///     }
/// }
/// ```
pub trait SaState: Clone {
    /// Error raised by moves or restarts. Propagated out of the run as-is.
    type Error: std::error::Error + From<InvalidInputError>;

    /// Whether [`shuffle`](SaState::shuffle) is implemented.
    ///
    /// The annealer refuses a positive restart probability for states
    /// that leave this `false`.
    const SUPPORTS_RESTART: bool = false;

    /// Fitness of the current configuration. Higher is better.
    ///
    /// Must be a pure function of the configuration.
    fn energy(&self) -> f64;

    /// Mutates the state into an adjacent configuration.
    fn neighbor<R: Rng>(&mut self, rng: &mut R) -> Result<(), Self::Error>;

    /// Builds an independently randomized configuration satisfying the same
    /// structural constraints as `self`.
    fn shuffle<R: Rng>(&self, _rng: &mut R) -> Result<Self, Self::Error> {
        Err(InvalidInputError::new("state does not support restarts").into())
    }
}
