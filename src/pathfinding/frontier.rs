//! Frontier containers: stack, queue and priority queue

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use super::node::NodeId;

/// LIFO frontier for depth-first search
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<NodeId>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    pub fn remove(&mut self) -> Option<NodeId> {
        self.nodes.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// FIFO frontier for breadth-first search
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<NodeId>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: NodeId) {
        self.nodes.push_back(node);
    }

    pub fn remove(&mut self) -> Option<NodeId> {
        self.nodes.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Min-priority frontier. Equal priorities come out in insertion order.
#[derive(Debug, Default)]
pub struct PriorityQueueFrontier {
    heap: BinaryHeap<Reverse<(u64, u64, NodeId)>>,
    inserted: u64,
}

impl PriorityQueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: NodeId, priority: u64) {
        self.heap.push(Reverse((priority, self.inserted, node)));
        self.inserted += 1;
    }

    pub fn remove(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, node))| node)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
