use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// The open list. Nodes come out by ascending priority; nodes with equal
/// priority come out in the order they were generated, which makes a frontier
/// of equal priorities a FIFO queue.
#[derive(Debug)]
pub struct Frontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, NodeId)>>,
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
        }
    }

    pub fn push(&mut self, node_id: NodeId, priority: HeuristicValue) {
        let previous = self.queue.push(node_id, Reverse((priority, node_id)));
        debug_assert!(previous.is_none(), "Node pushed to the frontier twice");
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// All nodes in the order they would be popped.
    pub fn ordered(&self) -> Vec<NodeId> {
        let mut entries: Vec<(HeuristicValue, NodeId)> =
            self.queue.iter().map(|(_, priority)| priority.0).collect();
        entries.sort_unstable();
        entries.into_iter().map(|(_, node_id)| node_id).collect()
    }
}
