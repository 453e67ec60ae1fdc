//! Search tree nodes stored in an arena

use super::grid::{Action, Position};

/// Index of a node inside its [`SearchTree`]
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub state: Position,
    /// Path cost from the root
    pub cost: u64,
    pub parent: Option<NodeId>,
    /// Action that produced this node from its parent
    pub action: Option<Action>,
    pub depth: usize,
}

/// Owns every node generated by one search; parents are referenced by id.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self, state: Position) -> NodeId {
        self.push(Node {
            state,
            cost: 0,
            parent: None,
            action: None,
            depth: 0,
        })
    }

    pub fn child(&mut self, parent: NodeId, state: Position, action: Action, step_cost: u64) -> NodeId {
        let (cost, depth) = {
            let p = &self.nodes[parent];
            (p.cost + step_cost, p.depth + 1)
        };
        self.push(Node {
            state,
            cost,
            parent: Some(parent),
            action: Some(action),
            depth,
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// States and actions from the root down to `id`
    pub fn trace(&self, id: NodeId) -> (Vec<Position>, Vec<Action>) {
        let mut states = Vec::with_capacity(self.nodes[id].depth + 1);
        let mut actions = Vec::with_capacity(self.nodes[id].depth);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id];
            states.push(node.state);
            if let Some(action) = node.action {
                actions.push(action);
            }
            current = node.parent;
        }
        states.reverse();
        actions.reverse();
        (states, actions)
    }
}
