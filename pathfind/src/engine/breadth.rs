use std::collections::VecDeque;
use std::default::Default;

use super::explored::VisitedRegistry;
use super::{Engine, Frontier};
use crate::errors::Result;
use crate::node::{Node, NodeId};
use crate::problem::Problem;
use crate::report::Report;

/// First-in-first-out frontier: level-order expansion.
#[derive(Debug)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Default for FifoFrontier {
    fn default() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<P> Frontier<P> for FifoFrontier
where
    P: Problem,
{
    fn push(&mut self, _problem: &P, _node: &Node<P::State, P::Action>, id: NodeId) {
        self.queue.push_back(id);
    }

    fn pop_best(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type BreadthSearcher<'p, P> =
    Engine<'p, P, FifoFrontier, VisitedRegistry<<P as Problem>::State>>;

pub fn build<P>(problem: &P) -> BreadthSearcher<P>
where
    P: Problem,
{
    Engine::new(problem)
}

/// Breadth-first search, where ties are resolved in the order the
/// domain generates its actions.
///
/// With unit step costs the returned path has the fewest edges of any
/// path to the goal.
pub fn bfs<P>(problem: &P) -> Result<Report<P::State>>
where
    P: Problem,
{
    build(problem).run()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::Arena;
    use crate::errors::SearchError;

    #[derive(Debug)]
    struct Nowhere;

    impl Problem for Nowhere {
        type State = u32;
        type Action = ();

        fn initial(&self) -> u32 {
            0
        }

        fn actions(&self, _: &u32) -> Vec<()> {
            Vec::new()
        }

        fn apply(&self, _: &u32, _: &()) -> Result<u32> {
            Err(SearchError::ContractViolation("no actions".to_string()))
        }

        fn is_goal(&self, _: &u32) -> bool {
            false
        }
    }

    #[test]
    fn pops_in_insertion_order() {
        let problem = Nowhere;
        let mut arena: Arena<u32, ()> = Arena::new();
        let mut frontier = FifoFrontier::default();

        let first = arena.root(10);
        let second = arena.child(20, first, (), 1);
        let third = arena.child(5, first, (), 1);

        frontier.push(&problem, arena.get(first), first);
        frontier.push(&problem, arena.get(second), second);
        frontier.push(&problem, arena.get(third), third);

        assert_eq!(Frontier::<Nowhere>::pop_best(&mut frontier), Some(first));
        assert_eq!(Frontier::<Nowhere>::pop_best(&mut frontier), Some(second));
        assert_eq!(Frontier::<Nowhere>::pop_best(&mut frontier), Some(third));
        assert!(Frontier::<Nowhere>::is_empty(&frontier));
    }
}
