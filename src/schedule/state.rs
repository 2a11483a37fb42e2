//! Searchable schedule for one round.

use super::moves::Move;
use super::types::{Judge, Match, MatchRecord, Penalties, Team};
use crate::error::InvalidInputError;
use crate::sa::SaState;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Outcome of one greedy best-of-moves step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Permutation {
    /// The move that was kept.
    pub applied: Move,
    /// Index of the first match picked.
    pub first: usize,
    /// Index of the second match picked.
    pub second: usize,
    /// Total energy after the move.
    pub energy: f64,
}

/// Pairings and judge panels for one round, plus the penalty weights used
/// to score them.
///
/// Every team appears in exactly one match and judge panels differ in
/// size by at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    matches: Vec<Match>,
    penalties: Penalties,
}

impl ScheduleState {
    /// Builds a random schedule.
    ///
    /// Teams and judges are shuffled independently, teams are paired off
    /// two at a time, and judges are dealt round-robin over the matches in
    /// order, so earlier matches may hold one judge more than later ones.
    ///
    /// # Errors
    ///
    /// Fails when there are no teams, an odd number of teams, two teams
    /// sharing a name, or a non-finite penalty weight.
    pub fn random_schedule<R: Rng>(
        mut teams: Vec<Team>,
        mut judges: Vec<Judge>,
        penalties: Penalties,
        rng: &mut R,
    ) -> Result<Self, InvalidInputError> {
        penalties.validate()?;
        validate_teams(&teams)?;

        teams.shuffle(rng);
        judges.shuffle(rng);

        let mut matches = Vec::with_capacity(teams.len() / 2);
        let mut pending = teams.into_iter();
        while let (Some(a), Some(b)) = (pending.next(), pending.next()) {
            matches.push(Match::new(a, b));
        }

        let match_count = matches.len();
        let judge_count = judges.len();
        for (k, judge) in judges.into_iter().enumerate() {
            matches[k % match_count].judges.push(judge);
        }

        debug!(
            target: "u_pairing::schedule",
            matches = match_count,
            judges = judge_count,
            "random schedule built"
        );

        Ok(Self { matches, penalties })
    }

    /// Wraps an explicit pairing.
    ///
    /// # Errors
    ///
    /// Fails when there are no matches, two teams share a name, panel
    /// sizes differ by more than one, or a penalty weight is not finite.
    pub fn from_matches(matches: Vec<Match>, penalties: Penalties) -> Result<Self, InvalidInputError> {
        penalties.validate()?;
        let teams: Vec<Team> = matches
            .iter()
            .flat_map(|m| [m.team_a.clone(), m.team_b.clone()])
            .collect();
        validate_teams(&teams)?;

        let smallest = matches.iter().map(|m| m.judges.len()).min().unwrap_or(0);
        let largest = matches.iter().map(|m| m.judges.len()).max().unwrap_or(0);
        if largest - smallest > 1 {
            return Err(InvalidInputError::new(format!(
                "judge panels must differ by at most one, got sizes {smallest} to {largest}"
            )));
        }

        Ok(Self { matches, penalties })
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn penalties(&self) -> &Penalties {
        &self.penalties
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.matches.iter().flat_map(|m| [&m.team_a, &m.team_b])
    }

    pub fn judges(&self) -> impl Iterator<Item = &Judge> {
        self.matches.iter().flat_map(|m| m.judges.iter())
    }

    /// Energy contributed by the match at `index`.
    pub fn match_energy(&self, index: usize) -> Option<f64> {
        self.matches.get(index).map(|m| m.energy(&self.penalties))
    }

    /// Applies `mv` between matches `first` and `second`.
    ///
    /// Applying the same move again restores the schedule.
    pub fn apply_move(&mut self, mv: Move, first: usize, second: usize) -> Result<(), InvalidInputError> {
        let len = self.matches.len();
        if first >= len || second >= len {
            return Err(InvalidInputError::new(format!(
                "match index out of range: ({first}, {second}) with {len} matches"
            )));
        }
        mv.apply(&mut self.matches, first, second);
        Ok(())
    }

    /// Picks two matches at random (possibly the same one), scores each
    /// move by applying and reverting it, and keeps the best.
    ///
    /// Ties go to a uniformly random candidate. Returns `None` for an
    /// empty schedule.
    pub fn find_best_permutation<R: Rng>(&mut self, rng: &mut R) -> Option<Permutation> {
        let len = self.matches.len();
        if len == 0 {
            return None;
        }
        let first = rng.random_range(0..len);
        let second = rng.random_range(0..len);

        let mut order = Move::ALL;
        order.shuffle(rng);

        let mut best: Option<(Move, f64)> = None;
        for mv in order {
            mv.apply(&mut self.matches, first, second);
            let energy = self.energy();
            mv.apply(&mut self.matches, first, second);

            if best.is_none_or(|(_, e)| energy > e) {
                best = Some((mv, energy));
            }
        }

        let (applied, energy) = best?;
        applied.apply(&mut self.matches, first, second);
        Some(Permutation {
            applied,
            first,
            second,
            energy,
        })
    }

    /// Renders every match for output, winners unset.
    pub fn records(&self) -> Vec<MatchRecord> {
        self.matches.iter().map(Match::record).collect()
    }
}

impl SaState for ScheduleState {
    type Error = InvalidInputError;
    const SUPPORTS_RESTART: bool = true;

    fn energy(&self) -> f64 {
        self.matches
            .iter()
            .fold(0.0, |total, m| total + m.energy(&self.penalties))
    }

    fn neighbor<R: Rng>(&mut self, rng: &mut R) -> Result<(), Self::Error> {
        self.find_best_permutation(rng);
        Ok(())
    }

    /// Re-deals the same teams and judges into an unrelated random
    /// schedule.
    fn shuffle<R: Rng>(&self, rng: &mut R) -> Result<Self, Self::Error> {
        let teams = self.teams().cloned().collect();
        let judges = self.judges().cloned().collect();
        Self::random_schedule(teams, judges, self.penalties, rng)
    }
}

fn validate_teams(teams: &[Team]) -> Result<(), InvalidInputError> {
    if teams.is_empty() {
        return Err(InvalidInputError::new("at least two teams are required"));
    }
    if teams.len() % 2 != 0 {
        return Err(InvalidInputError::new(format!(
            "team count must be even, got {}",
            teams.len()
        )));
    }
    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if !seen.insert(team.name.as_str()) {
            return Err(InvalidInputError::new(format!(
                "duplicate team name '{}'",
                team.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn teams(n: usize) -> Vec<Team> {
        (0..n)
            .map(|i| Team::new(format!("T{i}"), format!("S{}", i % 3)).with_wins((i % 4) as u32))
            .collect()
    }

    fn judges(n: usize) -> Vec<Judge> {
        (0..n)
            .map(|i| Judge::new(format!("J{i}"), format!("S{}", i % 3)))
            .collect()
    }

    fn penalties() -> Penalties {
        Penalties::new(10.0, 5.0, 1.0)
    }

    #[test]
    fn test_random_schedule_pairs_every_team_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = ScheduleState::random_schedule(teams(10), judges(7), penalties(), &mut rng).unwrap();
        assert_eq!(state.matches().len(), 5);

        let mut names: Vec<&str> = state.teams().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
        assert_eq!(state.judges().count(), 7);
    }

    #[test]
    fn test_round_robin_judges() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = ScheduleState::random_schedule(teams(8), judges(6), penalties(), &mut rng).unwrap();
        let sizes: Vec<usize> = state.matches().iter().map(|m| m.judges.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1, 1]);
    }

    #[test]
    fn test_fewer_judges_than_matches() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = ScheduleState::random_schedule(teams(8), judges(0), penalties(), &mut rng).unwrap();
        assert!(state.matches().iter().all(|m| m.judges.is_empty()));
    }

    #[test]
    fn test_odd_team_count_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = ScheduleState::random_schedule(teams(5), judges(2), penalties(), &mut rng).unwrap_err();
        assert!(err.reason().contains("even"));
    }

    #[test]
    fn test_no_teams_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(ScheduleState::random_schedule(Vec::new(), judges(2), penalties(), &mut rng).is_err());
    }

    #[test]
    fn test_duplicate_team_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let t = vec![Team::new("A", "X"), Team::new("A", "Y")];
        let err = ScheduleState::random_schedule(t, Vec::new(), penalties(), &mut rng).unwrap_err();
        assert!(err.reason().contains("duplicate"));
    }

    #[test]
    fn test_bad_penalty_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Penalties::new(f64::NAN, 5.0, 1.0);
        assert!(ScheduleState::random_schedule(teams(4), judges(1), p, &mut rng).is_err());
    }

    #[test]
    fn test_from_matches_rejects_unbalanced_panels() {
        let matches = vec![
            Match::new(Team::new("A", "X"), Team::new("B", "Y"))
                .with_judges(vec![Judge::new("J1", "Z"), Judge::new("J2", "Z")]),
            Match::new(Team::new("C", "X"), Team::new("D", "Y")),
        ];
        assert!(ScheduleState::from_matches(matches, penalties()).is_err());
    }

    #[test]
    fn test_energy_sums_matches() {
        let mut rng = StdRng::seed_from_u64(9);
        let state = ScheduleState::random_schedule(teams(12), judges(9), penalties(), &mut rng).unwrap();
        let total: f64 = (0..state.matches().len())
            .map(|i| state.match_energy(i).unwrap())
            .sum();
        assert!((state.energy() - total).abs() < 1e-9);
        assert!(state.match_energy(99).is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = ScheduleState::random_schedule(teams(10), judges(5), penalties(), &mut rng).unwrap();
        let before = original.energy();
        let mut copy = original.clone();
        for _ in 0..50 {
            copy.neighbor(&mut rng).unwrap();
        }
        assert_eq!(original.energy(), before);
    }

    #[test]
    fn test_apply_move_twice_restores_energy() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = ScheduleState::random_schedule(teams(10), judges(8), penalties(), &mut rng).unwrap();
        let before = state.energy();
        let snapshot = state.clone();
        for mv in Move::ALL {
            for (i, j) in [(0, 3), (4, 1), (2, 2)] {
                state.apply_move(mv, i, j).unwrap();
                state.apply_move(mv, i, j).unwrap();
                assert_eq!(state.energy().to_bits(), before.to_bits());
                assert_eq!(state, snapshot);
            }
        }
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = ScheduleState::random_schedule(teams(4), judges(1), penalties(), &mut rng).unwrap();
        assert!(state.apply_move(Move::SwapPanels, 0, 2).is_err());
    }

    #[test]
    fn test_best_permutation_never_worse_than_any_move() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut state = ScheduleState::random_schedule(teams(12), judges(10), penalties(), &mut rng).unwrap();
        for _ in 0..100 {
            let before = state.clone();
            let step = state.find_best_permutation(&mut rng).unwrap();
            assert!((state.energy() - step.energy).abs() < 1e-9);
            for mv in Move::ALL {
                let mut trial = before.clone();
                trial.apply_move(mv, step.first, step.second).unwrap();
                assert!(trial.energy() <= step.energy + 1e-9);
            }
        }
    }

    #[test]
    fn test_tie_break_is_randomized() {
        // A clean schedule: every move scores the same, so the kept move
        // should vary across draws.
        let matches = vec![
            Match::new(Team::new("A", "P"), Team::new("B", "Q")).with_judges(vec![Judge::new("J1", "Z")]),
            Match::new(Team::new("C", "R"), Team::new("D", "S")).with_judges(vec![Judge::new("J2", "Z")]),
        ];
        let mut state = ScheduleState::from_matches(matches, penalties()).unwrap();
        let mut rng = StdRng::seed_from_u64(23);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let step = state.find_best_permutation(&mut rng).unwrap();
            if step.first != step.second {
                seen.insert(step.applied);
            }
        }
        assert_eq!(seen.len(), Move::ALL.len());
    }

    #[test]
    fn test_shuffle_keeps_entities() {
        let mut rng = StdRng::seed_from_u64(31);
        let state = ScheduleState::random_schedule(teams(10), judges(4), penalties(), &mut rng).unwrap();
        let reshuffled = state.shuffle(&mut rng).unwrap();

        let mut a: Vec<&str> = state.teams().map(|t| t.name.as_str()).collect();
        let mut b: Vec<&str> = reshuffled.teams().map(|t| t.name.as_str()).collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert_eq!(reshuffled.judges().count(), 4);
        assert_eq!(reshuffled.penalties(), state.penalties());
    }

    #[test]
    fn test_records() {
        let matches = vec![Match::new(Team::new("A", "X"), Team::new("B", "Y"))
            .with_judges(vec![Judge::new("J1", "Z"), Judge::new("J2", "Z")])];
        let state = ScheduleState::from_matches(matches, penalties()).unwrap();
        let records = state.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].judges, "J1, J2");
    }
}
