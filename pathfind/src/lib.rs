//! Generalized state-space search with interchangeable strategies.
//!
//! To run a search, implement at least the trait [Problem] for your
//! domain, which must provide an initial state, the legal transitions
//! out of a state, and a goal test. Domains that also implement
//! [Estimate] can use the informed strategies.
//!
//! Three strategies share one engine and differ only in how the
//! frontier orders pending nodes and how the explored registry treats
//! rediscovered states:
//!
//! - [bfs] expands level by level and finds a fewest-edges path.
//! - [greedy] chases the domain's estimate; fast, never optimal by
//!   construction.
//! - [astar] orders by cost-so-far plus estimate and is cost-optimal
//!   for admissible estimates.
//!
//! Every run also accumulates a [Trace] of expansion edges, which is
//! what a renderer needs to draw the search tree.

pub mod engine;
mod errors;
mod node;
mod problem;
mod report;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use node::{Arena, Node, NodeId};
pub use problem::{Estimate, Problem};
pub use report::{Outcome, Report, Trace};

pub use engine::astar::{astar, AStarFrontier, AStarSearcher};
pub use engine::breadth::{bfs, BreadthSearcher, FifoFrontier};
pub use engine::explored::{CostRegistry, Explored, VisitedRegistry};
pub use engine::greedy::{greedy, GreedyFrontier, GreedySearcher};
pub use engine::{Engine, Frontier, SearchOptions};
