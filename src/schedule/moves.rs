//! Elementary schedule moves.
//!
//! Every move exchanges something between two matches and is its own
//! inverse: applying it twice to the same pair restores the schedule
//! exactly.

use super::types::Match;
use std::mem;

/// One of the four elementary edits between two matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Swap team A of the first match with team B of the second.
    CrossTeams,
    /// Swap team A of the first match with team A of the second.
    SwapLeadTeams,
    /// Swap the whole judge panels.
    SwapPanels,
    /// Swap the first judge of each panel.
    SwapFirstJudges,
}

impl Move {
    pub const ALL: [Move; 4] = [
        Move::CrossTeams,
        Move::SwapLeadTeams,
        Move::SwapPanels,
        Move::SwapFirstJudges,
    ];

    /// Applies the move to `matches[first]` and `matches[second]`.
    ///
    /// When `first == second` only [`Move::CrossTeams`] changes anything
    /// (it swaps the two sides of the match); the others are no-ops.
    /// [`Move::SwapFirstJudges`] is a no-op when either panel is empty.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub(crate) fn apply(self, matches: &mut [Match], first: usize, second: usize) {
        if first == second {
            if self == Move::CrossTeams {
                let m = &mut matches[first];
                mem::swap(&mut m.team_a, &mut m.team_b);
            }
            return;
        }

        let (a, b) = pair_mut(matches, first, second);
        match self {
            Move::CrossTeams => mem::swap(&mut a.team_a, &mut b.team_b),
            Move::SwapLeadTeams => mem::swap(&mut a.team_a, &mut b.team_a),
            Move::SwapPanels => mem::swap(&mut a.judges, &mut b.judges),
            Move::SwapFirstJudges => {
                if let (Some(ja), Some(jb)) = (a.judges.first_mut(), b.judges.first_mut()) {
                    mem::swap(ja, jb);
                }
            }
        }
    }
}

/// Two distinct mutable elements of a slice.
fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(first, second);
    if first < second {
        let (lo, hi) = items.split_at_mut(second);
        (&mut lo[first], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(first);
        (&mut hi[0], &mut lo[second])
    }
}
