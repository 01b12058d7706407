//! Search nodes, held in an arena and linked by index.
//!
//! Parent links are indices rather than owning references, so the node
//! tree is acyclic by construction and the whole run's bookkeeping is
//! freed in one go when the arena is dropped.

use std::ops::Index;

/// Stable identifier of a node within one run's [Arena].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One generated state, the action that produced it, and where it came from.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    pub state: S,
    pub parent: Option<NodeId>,
    pub action: Option<A>,
    pub path_cost: u32,
}

/// Owning store for every node generated during a run.
#[derive(Debug)]
pub struct Arena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Arena<S, A> {
    pub fn new() -> Self {
        Arena { nodes: Vec::new() }
    }

    /// Insert a root node with no parent and zero cost.
    pub fn root(&mut self, state: S) -> NodeId {
        self.insert(Node {
            state,
            parent: None,
            action: None,
            path_cost: 0,
        })
    }

    /// Insert a node produced by expanding `parent`.
    pub fn child(&mut self, state: S, parent: NodeId, action: A, path_cost: u32) -> NodeId {
        self.insert(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
        })
    }

    fn insert(&mut self, node: Node<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, A> Arena<S, A>
where
    S: Clone,
{
    /// Reconstruct the state sequence from the root to `id`.
    ///
    /// Walks the parent links back to the root and reverses, yielding
    /// initial-to-goal order. A root node yields a single-element path.
    pub fn path_to(&self, id: NodeId) -> Vec<S> {
        let mut states = Vec::new();
        let mut cursor = Some(id);
        while let Some(here) = cursor {
            let node = self.get(here);
            states.push(node.state.clone());
            cursor = node.parent;
        }
        states.reverse();
        states
    }
}

impl<S, A> Index<NodeId> for Arena<S, A> {
    type Output = Node<S, A>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id)
    }
}

impl<S, A> Default for Arena<S, A> {
    fn default() -> Self {
        Arena::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path_runs_from_root_to_leaf() {
        let mut arena: Arena<&str, char> = Arena::new();
        let root = arena.root("a");
        let b = arena.child("b", root, 'x', 1);
        let c = arena.child("c", b, 'y', 2);

        assert_eq!(arena.path_to(c), vec!["a", "b", "c"]);
        assert_eq!(arena.get(c).path_cost, 2);
    }

    #[test]
    fn root_path_is_a_single_state() {
        let mut arena: Arena<u32, ()> = Arena::new();
        let root = arena.root(7);

        assert_eq!(arena.path_to(root), vec![7]);
        assert_eq!(arena[root].parent, None);
    }
}
