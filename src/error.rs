//! Error types.
//!
//! Input problems are reported with [`InvalidInputError`] before any search
//! step runs. Standings aggregation reports [`IncompleteRoundError`] and
//! [`UnknownWinnerError`], both wrapped in [`StandingsError`].

use std::fmt;

/// Malformed input: odd team count, bad penalty weight, invalid
/// annealer configuration, or a state lacking a required capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidInputError {
    reason: String,
}

impl InvalidInputError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: {}", self.reason)
    }
}

impl std::error::Error for InvalidInputError {}

/// A match in a recorded round has no winner yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncompleteRoundError {
    round: usize,
    match_index: usize,
    team_a: String,
    team_b: String,
}

impl IncompleteRoundError {
    pub fn new(
        round: usize,
        match_index: usize,
        team_a: impl Into<String>,
        team_b: impl Into<String>,
    ) -> Self {
        Self {
            round,
            match_index,
            team_a: team_a.into(),
            team_b: team_b.into(),
        }
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn match_index(&self) -> usize {
        self.match_index
    }

    pub fn team_a(&self) -> &str {
        &self.team_a
    }

    pub fn team_b(&self) -> &str {
        &self.team_b
    }
}

impl fmt::Display for IncompleteRoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round {} match {} ({} vs {}) has no recorded winner",
            self.round, self.match_index, self.team_a, self.team_b
        )
    }
}

impl std::error::Error for IncompleteRoundError {}

/// A recorded winner names neither team of its match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownWinnerError {
    round: usize,
    match_index: usize,
    winner: String,
    team_a: String,
    team_b: String,
}

impl UnknownWinnerError {
    pub fn new(
        round: usize,
        match_index: usize,
        winner: impl Into<String>,
        team_a: impl Into<String>,
        team_b: impl Into<String>,
    ) -> Self {
        Self {
            round,
            match_index,
            winner: winner.into(),
            team_a: team_a.into(),
            team_b: team_b.into(),
        }
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn match_index(&self) -> usize {
        self.match_index
    }

    pub fn winner(&self) -> &str {
        &self.winner
    }

    /// The two valid candidates for this match.
    pub fn candidates(&self) -> (&str, &str) {
        (&self.team_a, &self.team_b)
    }
}

impl fmt::Display for UnknownWinnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round {} match {}: winner '{}' is neither '{}' nor '{}'",
            self.round, self.match_index, self.winner, self.team_a, self.team_b
        )
    }
}

impl std::error::Error for UnknownWinnerError {}

/// Failure while aggregating standings across rounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StandingsError {
    Incomplete(IncompleteRoundError),
    UnknownWinner(UnknownWinnerError),
}

impl fmt::Display for StandingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandingsError::Incomplete(e) => fmt::Display::fmt(e, f),
            StandingsError::UnknownWinner(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for StandingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StandingsError::Incomplete(e) => Some(e),
            StandingsError::UnknownWinner(e) => Some(e),
        }
    }
}

impl From<IncompleteRoundError> for StandingsError {
    fn from(e: IncompleteRoundError) -> Self {
        StandingsError::Incomplete(e)
    }
}

impl From<UnknownWinnerError> for StandingsError {
    fn from(e: UnknownWinnerError) -> Self {
        StandingsError::UnknownWinner(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_winner_names_candidates() {
        let err = UnknownWinnerError::new(2, 0, "Zeta", "Alpha", "Beta");
        let msg = err.to_string();
        assert!(msg.contains("Zeta"));
        assert!(msg.contains("Alpha"));
        assert!(msg.contains("Beta"));
        assert_eq!(err.candidates(), ("Alpha", "Beta"));
    }

    #[test]
    fn test_standings_error_source() {
        use std::error::Error;
        let err: StandingsError = IncompleteRoundError::new(0, 3, "A", "B").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("no recorded winner"));
    }
}
