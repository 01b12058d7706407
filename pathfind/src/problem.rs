use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::Result;

/// Capability contract a state domain exposes to the search engine.
///
/// The engine is generic over this trait and never inspects states or
/// actions beyond equality, hashing and cloning. All four operations must
/// be deterministic and side-effect-free: the order of
/// [actions](Problem::actions) affects tie-breaking but not correctness.
pub trait Problem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone;

    /// The root configuration every run starts from.
    fn initial(&self) -> Self::State;

    /// All transitions that are legal out of `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply one action to a state.
    ///
    /// Fails with [SearchError::ContractViolation](crate::SearchError)
    /// when `action` is not one of `actions(state)`; the engine treats
    /// that as a fatal domain bug and aborts the run.
    fn apply(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Cost of taking `action` out of `state`. Unit by default.
    fn step_cost(&self, _state: &Self::State, _action: &Self::Action) -> u32 {
        1
    }
}

/// An interface for domains which can estimate remaining cost.
///
/// Required by the informed strategies. The estimate should never
/// exceed the true remaining cost for A* to return an optimal path;
/// that contract is on the implementor, not checked by the engine, and
/// breaking it degrades A* to sub-optimal-but-terminating behavior.
pub trait Estimate: Problem {
    fn estimate(&self, state: &Self::State) -> u32;
}
