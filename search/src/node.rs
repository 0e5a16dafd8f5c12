//! Search nodes and the node arena.
//!
//! Nodes live in a [`SearchTree`] arena indexed by `node_id`. Each node
//! stores its parent's id, set once at construction, so the implicit search
//! tree is acyclic even when the state graph has cycles. Frontiers hold
//! cheap [`NodeRef`] handles instead of nodes.

use crate::contract::Successor;

/// An immutable record of a reached state.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Arena index, assigned in creation order.
    pub node_id: u64,
    /// Parent node id (`None` for root).
    pub parent_id: Option<u64>,
    /// The state reached.
    pub state: S,
    /// The action that produced this node from its parent (`None` for root).
    pub action: Option<A>,
    /// Sum of step costs from the root.
    pub path_cost: u64,
    /// Heuristic estimate at this state (0 when the strategy uses none).
    pub h_cost: u64,
    /// Tree depth (root = 0).
    pub depth: u32,
}

impl<S, A> SearchNode<S, A> {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// The frontier handle for this node.
    #[must_use]
    pub fn to_ref(&self) -> NodeRef {
        NodeRef {
            node_id: self.node_id,
            path_cost: self.path_cost,
            h_cost: self.h_cost,
            depth: self.depth,
        }
    }
}

/// Frontier handle: a node id plus the costs evaluation functions read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef {
    pub node_id: u64,
    pub path_cost: u64,
    pub h_cost: u64,
    pub depth: u32,
}

impl NodeRef {
    /// `f = g + h` (saturating).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.path_cost.saturating_add(self.h_cost)
    }
}

/// Arena of every node created during one search run.
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A: Clone> SearchTree<S, A> {
    /// Create an arena holding only the root for `start`.
    #[must_use]
    pub fn with_root(start: S, h_cost: u64) -> Self {
        Self {
            nodes: vec![SearchNode {
                node_id: 0,
                parent_id: None,
                state: start,
                action: None,
                path_cost: 0,
                h_cost,
                depth: 0,
            }],
        }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &SearchNode<S, A> {
        &self.nodes[0]
    }

    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, node_id: u64) -> Option<&SearchNode<S, A>> {
        usize::try_from(node_id).ok().and_then(|i| self.nodes.get(i))
    }

    /// Create a child of `parent_id` from a successor triple.
    ///
    /// `path_cost = parent.path_cost + step_cost` (saturating).
    /// Returns `None` if `parent_id` is not in the arena.
    pub fn make_child(
        &mut self,
        parent_id: u64,
        successor: Successor<S, A>,
        h_cost: u64,
    ) -> Option<&SearchNode<S, A>> {
        let (path_cost, depth) = {
            let parent = self.get(parent_id)?;
            (
                parent.path_cost.saturating_add(successor.step_cost),
                parent.depth.saturating_add(1),
            )
        };
        let node_id = self.nodes.len() as u64;
        self.nodes.push(SearchNode {
            node_id,
            parent_id: Some(parent_id),
            state: successor.state,
            action: Some(successor.action),
            path_cost,
            h_cost,
            depth,
        });
        self.nodes.last()
    }

    /// Actions from the root to `node_id`, in root-to-goal order.
    ///
    /// Walks parent links until the root. The root (or an unknown id)
    /// yields the empty sequence.
    #[must_use]
    pub fn reconstruct_path(&self, node_id: u64) -> Vec<A> {
        let mut actions = Vec::new();
        let mut current = self.get(node_id);

        while let Some(node) = current {
            match (&node.action, node.parent_id) {
                (Some(action), Some(parent_id)) => {
                    actions.push(action.clone());
                    current = self.get(parent_id);
                }
                _ => break,
            }
        }

        actions.reverse();
        actions
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the arena is created with its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[SearchNode<S, A>] {
        &self.nodes
    }
}
