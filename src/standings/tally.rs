//! Standings aggregation.

use crate::error::{IncompleteRoundError, StandingsError, UnknownWinnerError};
use crate::schedule::{MatchRecord, Team};
use std::collections::BTreeMap;
use tracing::debug;

/// Wins per team name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standings {
    wins: BTreeMap<String, u32>,
}

impl Standings {
    /// Wins recorded for `team`, `None` if the team never played.
    pub fn wins(&self, team: &str) -> Option<u32> {
        self.wins.get(team).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.wins.iter().map(|(name, &w)| (name.as_str(), w))
    }

    pub fn len(&self) -> usize {
        self.wins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    /// Writes the aggregated counts into `teams`. Teams without any
    /// recorded match are reset to 0.
    pub fn apply(&self, teams: &mut [Team]) {
        for team in teams {
            team.wins = self.wins(&team.name).unwrap_or(0);
        }
    }
}

/// Aggregates winners over `rounds`, in order.
///
/// Every team seen in a match gets an entry, starting at 0.
///
/// # Errors
///
/// - [`IncompleteRoundError`] when a match has no recorded winner
/// - [`UnknownWinnerError`] when the winner names neither team
pub fn tally(rounds: &[Vec<MatchRecord>]) -> Result<Standings, StandingsError> {
    let mut standings = Standings::default();

    for (round, records) in rounds.iter().enumerate() {
        for (index, record) in records.iter().enumerate() {
            standings.wins.entry(record.team_a.clone()).or_insert(0);
            standings.wins.entry(record.team_b.clone()).or_insert(0);

            let winner = record.winner.as_deref().ok_or_else(|| {
                IncompleteRoundError::new(round, index, &record.team_a, &record.team_b)
            })?;
            if winner != record.team_a && winner != record.team_b {
                return Err(UnknownWinnerError::new(
                    round,
                    index,
                    winner,
                    &record.team_a,
                    &record.team_b,
                )
                .into());
            }
            if let Some(wins) = standings.wins.get_mut(winner) {
                *wins += 1;
            }
        }
    }

    debug!(
        target: "u_pairing::standings",
        rounds = rounds.len(),
        teams = standings.len(),
        "standings tallied"
    );

    Ok(standings)
}
