//! Win-count standings across produced rounds.
//!
//! Rounds are fed back as rendered [`MatchRecord`](crate::schedule::MatchRecord)s
//! with winners recorded out-of-band. The aggregated counts become the
//! `wins` of next round's teams and drive the win-gap penalty.

mod tally;

pub use tally::{tally, Standings};
