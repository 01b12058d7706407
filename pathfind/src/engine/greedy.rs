use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;

use super::explored::VisitedRegistry;
use super::{Engine, Frontier};
use crate::errors::Result;
use crate::node::{Node, NodeId};
use crate::problem::{Estimate, Problem};
use crate::report::Report;

/// Heap entry keyed by the domain's estimate, with an insertion
/// sequence number so equal estimates pop in insertion order rather
/// than by any incidental property of the states.
#[derive(Debug)]
struct Ranked {
    estimate: u32,
    seq: u64,
    id: NodeId,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        (self.estimate, self.seq).eq(&(other.estimate, other.seq))
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.estimate, self.seq)
            .cmp(&(other.estimate, other.seq))
            .reverse()
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier that always yields the node the domain estimates to be
/// closest to the goal, ignoring the cost spent reaching it.
#[derive(Debug)]
pub struct GreedyFrontier {
    queue: BinaryHeap<Ranked>,
    seq: u64,
}

impl Default for GreedyFrontier {
    fn default() -> Self {
        GreedyFrontier {
            queue: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<P> Frontier<P> for GreedyFrontier
where
    P: Estimate,
{
    fn push(&mut self, problem: &P, node: &Node<P::State, P::Action>, id: NodeId) {
        self.seq += 1;
        self.queue.push(Ranked {
            estimate: problem.estimate(&node.state),
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

pub type GreedySearcher<'p, P> =
    Engine<'p, P, GreedyFrontier, VisitedRegistry<<P as Problem>::State>>;

pub fn build<P>(problem: &P) -> GreedySearcher<P>
where
    P: Estimate,
{
    Engine::new(problem)
}

/// Greedy best-first search.
///
/// Fast when the estimate is informative, but the returned path carries
/// no optimality guarantee.
pub fn greedy<P>(problem: &P) -> Result<Report<P::State>>
where
    P: Estimate,
{
    build(problem).run()
}
