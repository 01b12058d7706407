//! The water-pouring puzzle: three jugs of fixed capacity, no
//! measuring marks, and a target quantity for the first two jugs.
//!
//! The only move is pouring one jug into another until the source
//! empties or the destination fills. This is the domain layer behind
//! the [Problem]/[Estimate] contract; it owns all the pouring rules
//! and the engine never sees them.

use std::fmt;

use pathfind::{Estimate, Problem, SearchError, SearchResult};

const JUGS: usize = 3;

/// One configuration of the three jugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JugState(pub [u32; JUGS]);

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// Empty jug `from` into jug `to` until one of them hits its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pour {
    pub from: usize,
    pub to: usize,
}

impl fmt::Display for Pour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from, self.to)
    }
}

/// A puzzle instance: jug capacities, starting quantities, and the
/// amounts the first two jugs should end up holding.
#[derive(Debug, Clone)]
pub struct JugProblem {
    capacities: [u32; JUGS],
    initial: [u32; JUGS],
    target: (u32, u32),
}

impl JugProblem {
    pub fn new(capacities: [u32; JUGS], initial: [u32; JUGS], target: (u32, u32)) -> Self {
        JugProblem {
            capacities,
            initial,
            target,
        }
    }

    pub fn capacities(&self) -> [u32; JUGS] {
        self.capacities
    }

    pub fn target(&self) -> (u32, u32) {
        self.target
    }

    fn legal(&self, state: &JugState, pour: &Pour) -> bool {
        pour.from < JUGS
            && pour.to < JUGS
            && pour.from != pour.to
            && state.0[pour.from] > 0
            && state.0[pour.to] < self.capacities[pour.to]
    }
}

impl Default for JugProblem {
    /// The classic instance: capacities (8, 5, 3), all the water in the
    /// largest jug, and a 4/4 split wanted across the first two.
    fn default() -> Self {
        JugProblem::new([8, 5, 3], [8, 0, 0], (4, 4))
    }
}

impl Problem for JugProblem {
    type State = JugState;
    type Action = Pour;

    fn initial(&self) -> JugState {
        JugState(self.initial)
    }

    fn actions(&self, state: &JugState) -> Vec<Pour> {
        let mut pours = Vec::new();
        for from in 0..JUGS {
            for to in 0..JUGS {
                let pour = Pour { from, to };
                if self.legal(state, &pour) {
                    pours.push(pour);
                }
            }
        }
        pours
    }

    fn apply(&self, state: &JugState, action: &Pour) -> SearchResult<JugState> {
        if !self.legal(state, action) {
            return Err(SearchError::ContractViolation(format!(
                "pour {} is not legal from {}",
                action, state
            )));
        }

        let mut jugs = state.0;
        let amount = jugs[action.from].min(self.capacities[action.to] - jugs[action.to]);
        jugs[action.from] -= amount;
        jugs[action.to] += amount;
        Ok(JugState(jugs))
    }

    fn is_goal(&self, state: &JugState) -> bool {
        state.0[0] == self.target.0 && state.0[1] == self.target.1
    }
}

impl Estimate for JugProblem {
    /// How far the first two jugs are from their target quantities.
    fn estimate(&self, state: &JugState) -> u32 {
        distance(state.0[0], self.target.0) + distance(state.0[1], self.target.1)
    }
}

fn distance(a: u32, b: u32) -> u32 {
    if a > b {
        a - b
    } else {
        b - a
    }
}
