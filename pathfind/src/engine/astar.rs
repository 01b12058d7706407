use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;

use super::explored::CostRegistry;
use super::{Engine, Frontier};
use crate::errors::Result;
use crate::node::{Node, NodeId};
use crate::problem::{Estimate, Problem};
use crate::report::Report;

/// Heap entry keyed by estimated total cost.
///
/// Ties on the total break towards the lower path cost, then towards
/// insertion order; once a goal pops, its path cost is optimal
/// provided the estimate never overestimates.
#[derive(Debug)]
struct Ranked {
    total: u32,
    path_cost: u32,
    seq: u64,
    id: NodeId,
}

impl Ranked {
    fn key(&self) -> (u32, u32, u64) {
        (self.total, self.path_cost, self.seq)
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key().eq(&other.key())
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key()).reverse()
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier ordered by cost spent plus cost the domain estimates
/// remains.
#[derive(Debug)]
pub struct AStarFrontier {
    queue: BinaryHeap<Ranked>,
    seq: u64,
}

impl Default for AStarFrontier {
    fn default() -> Self {
        AStarFrontier {
            queue: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<P> Frontier<P> for AStarFrontier
where
    P: Estimate,
{
    fn push(&mut self, problem: &P, node: &Node<P::State, P::Action>, id: NodeId) {
        self.seq += 1;
        self.queue.push(Ranked {
            total: node.path_cost + problem.estimate(&node.state),
            path_cost: node.path_cost,
            seq: self.seq,
            id,
        });
    }

    fn pop_best(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|ranked| ranked.id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type AStarSearcher<'p, P> = Engine<'p, P, AStarFrontier, CostRegistry<<P as Problem>::State>>;

pub fn build<P>(problem: &P) -> AStarSearcher<P>
where
    P: Estimate,
{
    Engine::new(problem)
}

/// A* search: cost-optimal when the domain's estimate is admissible.
pub fn astar<P>(problem: &P) -> Result<Report<P::State>>
where
    P: Estimate,
{
    build(problem).run()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::Arena;

    /// States estimate their own value.
    #[derive(Debug)]
    struct ByValue;

    impl Problem for ByValue {
        type State = u32;
        type Action = ();

        fn initial(&self) -> u32 {
            0
        }

        fn actions(&self, _: &u32) -> Vec<()> {
            Vec::new()
        }

        fn apply(&self, state: &u32, _: &()) -> Result<u32> {
            Ok(*state)
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == 0
        }
    }

    impl Estimate for ByValue {
        fn estimate(&self, state: &u32) -> u32 {
            *state
        }
    }

    #[test]
    fn pops_lowest_total_first() {
        let problem = ByValue;
        let mut arena: Arena<u32, ()> = Arena::new();
        let mut frontier = AStarFrontier::default();

        let root = arena.root(6);
        let cheap = arena.child(1, root, (), 2);
        let pricey = arena.child(1, root, (), 9);

        frontier.push(&problem, arena.get(root), root); // total 6
        frontier.push(&problem, arena.get(cheap), cheap); // total 3
        frontier.push(&problem, arena.get(pricey), pricey); // total 10

        assert_eq!(Frontier::<ByValue>::pop_best(&mut frontier), Some(cheap));
        assert_eq!(Frontier::<ByValue>::pop_best(&mut frontier), Some(root));
        assert_eq!(Frontier::<ByValue>::pop_best(&mut frontier), Some(pricey));
    }

    #[test]
    fn equal_totals_break_towards_lower_path_cost() {
        let problem = ByValue;
        let mut arena: Arena<u32, ()> = Arena::new();
        let mut frontier = AStarFrontier::default();

        let root = arena.root(0);
        // total 4 each: estimate 1 + cost 3 vs estimate 2 + cost 2.
        let deeper = arena.child(1, root, (), 3);
        let shallower = arena.child(2, root, (), 2);

        frontier.push(&problem, arena.get(deeper), deeper);
        frontier.push(&problem, arena.get(shallower), shallower);

        assert_eq!(Frontier::<ByValue>::pop_best(&mut frontier), Some(shallower));
        assert_eq!(Frontier::<ByValue>::pop_best(&mut frontier), Some(deeper));
    }

    #[test]
    fn full_ties_pop_in_insertion_order() {
        let problem = ByValue;
        let mut arena: Arena<u32, ()> = Arena::new();
        let mut frontier = AStarFrontier::default();

        let root = arena.root(0);
        let first = arena.child(2, root, (), 2);
        let second = arena.child(2, root, (), 2);

        frontier.push(&problem, arena.get(first), first);
        frontier.push(&problem, arena.get(second), second);

        assert_eq!(Frontier::<ByValue>::pop_best(&mut frontier), Some(first));
        assert_eq!(Frontier::<ByValue>::pop_best(&mut frontier), Some(second));
    }
}
