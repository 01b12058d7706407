//! Provides the building blocks for the search strategies.

use crate::errors::{Result, SearchError};
use crate::node::{Arena, Node, NodeId};
use crate::problem::Problem;
use crate::report::{Outcome, Report, Trace};

pub mod astar;
pub mod breadth;
pub mod explored;
pub mod greedy;

use self::explored::Explored;

/// Trait used to implement frontiers: ordered containers of nodes
/// which have been generated but not yet expanded.
///
/// The strategy lives entirely in the ordering: FIFO gives level-order
/// expansion, an estimate-keyed heap gives greedy best-first, and a
/// `(cost + estimate, cost)`-keyed heap gives A*. Pushing hands the
/// frontier the problem so keyed variants can compute their ordering
/// key at insertion time.
pub trait Frontier<P>
where
    P: Problem,
{
    /// Admit a freshly generated node.
    fn push(&mut self, problem: &P, node: &Node<P::State, P::Action>, id: NodeId);

    /// Remove and return the best pending node, per this frontier's order.
    fn pop_best(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Knobs a host can set on a run without touching the engine internals.
#[derive(Debug, Default, Clone)]
pub struct SearchOptions {
    /// Abort with [SearchError::BudgetExceeded] after this many expansions.
    pub limit: Option<usize>,
    /// Print a progress line to stderr every N pops.
    pub verbose: Option<usize>,
}

#[derive(Debug)]
struct Budget {
    current: usize,
    maximum: usize,
}

impl Budget {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current >= self.maximum {
            Err(SearchError::BudgetExceeded(self.current))
        } else {
            Ok(())
        }
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (F) and a generic explored registry (R) to
/// provide a single foundation for the three search strategies. A run
/// owns all of its state — arena, frontier, registry, trace — so
/// separate runs never interfere, and `run` consumes the engine so a
/// finished run cannot be resumed.
#[derive(Debug)]
pub struct Engine<'p, P, F, R>
where
    P: Problem,
    F: Frontier<P>,
    R: Explored<P::State>,
{
    problem: &'p P,
    arena: Arena<P::State, P::Action>,
    frontier: F,
    explored: R,
    trace: Trace<P::State>,
    options: SearchOptions,
    budget: Option<Budget>,
}

impl<'p, P, F, R> Engine<'p, P, F, R>
where
    P: Problem,
    F: Frontier<P> + Default,
    R: Explored<P::State>,
{
    pub fn new(problem: &'p P) -> Self {
        let mut arena = Arena::new();
        let mut frontier = F::default();

        let root = arena.root(problem.initial());
        frontier.push(problem, arena.get(root), root);

        Engine {
            problem,
            arena,
            frontier,
            explored: R::default(),
            trace: Trace::new(),
            options: SearchOptions::default(),
            budget: None,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.budget = options.limit.map(Budget::new);
        self.options = options;
        self
    }

    /// Run the search to completion.
    pub fn run(mut self) -> Result<Report<P::State>> {
        let mut n = 0;
        while let Some(id) = self.frontier.pop_best() {
            n += 1;

            if let Some(budget) = self.budget.as_mut() {
                budget.increment()?;
            }

            let (state, cost) = {
                let node = self.arena.get(id);
                (node.state.clone(), node.path_cost)
            };

            // Already finalized at a cost this candidate cannot beat.
            if self.explored.should_skip(&state, cost) {
                continue;
            }
            self.explored.mark(state.clone(), cost);

            if let Some(every) = self.options.verbose {
                if n % every == 0 {
                    eprintln!(
                        "F{} E{} ({:?} {}) {}",
                        self.frontier.len(),
                        self.explored.len(),
                        state,
                        cost,
                        n
                    );
                }
            }

            if self.problem.is_goal(&state) {
                return Ok(Report {
                    outcome: Outcome::Solved(self.arena.path_to(id)),
                    trace: self.trace,
                });
            }

            for action in self.problem.actions(&state) {
                let child = self.problem.apply(&state, &action)?;

                // Traced even when the registry will skip the child, so
                // the trace is the whole search tree.
                self.trace.record(state.clone(), child.clone());

                let child_cost = cost + self.problem.step_cost(&state, &action);
                let child_id = self.arena.child(child, id, action, child_cost);
                self.frontier.push(self.problem, self.arena.get(child_id), child_id);
            }
        }

        Ok(Report {
            outcome: Outcome::Exhausted,
            trace: self.trace,
        })
    }
}
