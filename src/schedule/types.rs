//! Tournament entities and penalty weights.

use crate::error::InvalidInputError;

/// A debate team entered in the current round.
///
/// Identity is by `name` within a round: equality and hashing ignore
/// every other field.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub name: String,
    pub school: String,
    /// Member names, in roster order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<String>,
    /// Wins accumulated over previous rounds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wins: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, school: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            school: school.into(),
            members: Vec::new(),
            wins: 0,
        }
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_wins(mut self, wins: u32) -> Self {
        self.wins = wins;
        self
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Team {}

impl std::hash::Hash for Team {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A judge available for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Judge {
    pub name: String,
    pub school: String,
}

impl Judge {
    pub fn new(name: impl Into<String>, school: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            school: school.into(),
        }
    }
}

/// Penalty weights subtracted from the schedule energy.
///
/// Fixed for the lifetime of one search run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Penalties {
    /// Subtracted when both teams of a match come from the same school.
    pub teams_same_school: f64,
    /// Subtracted per judge, per team side sharing the judge's school.
    pub judge_same_school: f64,
    /// Base of the exponential win-gap penalty, `(1 + w)^gap + 1`.
    pub different_win_loss: f64,
}

impl Penalties {
    pub const TEAMS_SAME_SCHOOL: &'static str = "teamsSameSchool";
    pub const JUDGE_SAME_SCHOOL: &'static str = "judgeSameSchool";
    pub const DIFFERENT_WIN_LOSS: &'static str = "differentWinLoss";

    pub fn new(teams_same_school: f64, judge_same_school: f64, different_win_loss: f64) -> Self {
        Self {
            teams_same_school,
            judge_same_school,
            different_win_loss,
        }
    }

    /// Parses named weights as they arrive from a tournament description.
    ///
    /// Unknown names are ignored. A missing or non-numeric weight is an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_pairing::schedule::Penalties;
    ///
    /// let p = Penalties::from_named([
    ///     ("teamsSameSchool", "10"),
    ///     ("judgeSameSchool", "5"),
    ///     ("differentWinLoss", "1"),
    /// ])
    /// .unwrap();
    /// assert_eq!(p.teams_same_school, 10.0);
    /// ```
    pub fn from_named<I, K, V>(pairs: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut teams = None;
        let mut judge = None;
        let mut win_loss = None;

        for (name, value) in pairs {
            let slot = match name.as_ref() {
                Self::TEAMS_SAME_SCHOOL => &mut teams,
                Self::JUDGE_SAME_SCHOOL => &mut judge,
                Self::DIFFERENT_WIN_LOSS => &mut win_loss,
                _ => continue,
            };
            let raw = value.as_ref().trim();
            let parsed = raw.parse::<f64>().map_err(|_| {
                InvalidInputError::new(format!(
                    "penalty '{}' is not numeric: '{raw}'",
                    name.as_ref()
                ))
            })?;
            *slot = Some(parsed);
        }

        let require = |value: Option<f64>, name: &str| {
            value.ok_or_else(|| InvalidInputError::new(format!("missing penalty '{name}'")))
        };

        let penalties = Self::new(
            require(teams, Self::TEAMS_SAME_SCHOOL)?,
            require(judge, Self::JUDGE_SAME_SCHOOL)?,
            require(win_loss, Self::DIFFERENT_WIN_LOSS)?,
        );
        penalties.validate()?;
        Ok(penalties)
    }

    /// All weights must be finite.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        for (name, value) in [
            (Self::TEAMS_SAME_SCHOOL, self.teams_same_school),
            (Self::JUDGE_SAME_SCHOOL, self.judge_same_school),
            (Self::DIFFERENT_WIN_LOSS, self.different_win_loss),
        ] {
            if !value.is_finite() {
                return Err(InvalidInputError::new(format!(
                    "penalty '{name}' must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Two teams and the judges seated for them.
///
/// A match with an empty panel is valid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    pub team_a: Team,
    pub team_b: Team,
    pub judges: Vec<Judge>,
}

impl Match {
    pub fn new(team_a: Team, team_b: Team) -> Self {
        Self {
            team_a,
            team_b,
            judges: Vec::new(),
        }
    }

    pub fn with_judges(mut self, judges: Vec<Judge>) -> Self {
        self.judges = judges;
        self
    }

    /// Energy contribution of this match. Never positive for non-negative
    /// weights.
    pub fn energy(&self, penalties: &Penalties) -> f64 {
        let mut energy = 0.0;

        if self.team_a.school == self.team_b.school {
            energy -= penalties.teams_same_school;
        }

        // Counted once per side: a judge from the school of two
        // same-school teams is penalized twice.
        for judge in &self.judges {
            if judge.school == self.team_a.school {
                energy -= penalties.judge_same_school;
            }
            if judge.school == self.team_b.school {
                energy -= penalties.judge_same_school;
            }
        }

        let gap = self.team_a.wins.abs_diff(self.team_b.wins);
        if gap > 0 {
            let exponent = i32::try_from(gap).unwrap_or(i32::MAX);
            energy -= (1.0 + penalties.different_win_loss).powi(exponent);
            energy -= 1.0;
        }

        energy
    }

    /// Renders the match for output. The winner is left unset.
    pub fn record(&self) -> MatchRecord {
        MatchRecord {
            team_a: self.team_a.name.clone(),
            team_b: self.team_b.name.clone(),
            judges: self
                .judges
                .iter()
                .map(|j| j.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            winner: None,
        }
    }
}

/// Output row for one match of a produced round.
///
/// `winner` is filled in out-of-band once the debate is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchRecord {
    pub team_a: String,
    pub team_b: String,
    /// Judge names joined with `", "`.
    pub judges: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub winner: Option<String>,
}

impl MatchRecord {
    pub fn with_winner(mut self, winner: impl Into<String>) -> Self {
        self.winner = Some(winner.into());
        self
    }
}
