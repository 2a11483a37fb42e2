//! Debate tournament pairing by simulated annealing.
//!
//! Assigns opponents and judge panels for one round of a debate
//! tournament:
//!
//! - **Simulated Annealing (SA)**: a generic search driver over any state
//!   implementing [`sa::SaState`], with pluggable cooling schedules and
//!   acceptance rules, optional restarts, and clone-on-improve best
//!   tracking.
//! - **Schedule**: the round model. Teams, judges and matches scored by
//!   penalty weights, with a neighbor step that runs a greedy
//!   best-of-four-moves local search inside each annealing step.
//! - **Standings**: win counts aggregated from produced rounds, fed back
//!   into the next round's teams.
//!
//! # Architecture
//!
//! The crate performs no I/O. Parsing tournament descriptions, rendering
//! schedules over HTTP and recording winners belong to the caller; the
//! `serde` feature derives (de)serialization on the data model to support
//! that. Logging goes through `tracing`; no subscriber is installed here.

pub mod error;
pub mod sa;
pub mod schedule;
pub mod standings;
