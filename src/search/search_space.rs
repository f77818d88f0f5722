use crate::search::{
    Board, Cost, HeuristicValue, Move, NodeId, Plan, SearchNode, SearchNodeStatus,
    SuccessorGenerator, NO_NODE,
};
use segvec::{Linear, SegVec};
use std::collections::HashMap;
use thiserror::Error;

/// Raised when the parent recorded for a node on the solution path does not
/// match the board obtained by undoing the node's move. This can only happen if
/// the search space bookkeeping is broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no closed node matches the parent of {board} (depth {depth}, cost {cost})")]
pub struct ReconstructionError {
    pub board: Board,
    pub depth: usize,
    pub cost: Cost,
}

/// A [`SearchSpace`] owns every node generated during a search, together with
/// the closed set. Nodes are never removed; a node leaving the frontier is
/// either closed or discarded.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
    closed: HashMap<Board, NodeId>,
    /// Closed nodes in the order they were closed
    closed_order: Vec<NodeId>,
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSpace {
    pub fn new() -> Self {
        Self {
            nodes: SegVec::new(),
            closed: HashMap::new(),
            closed_order: Vec::new(),
        }
    }

    fn next_node_id(&self) -> NodeId {
        NodeId::new(self.nodes.len())
    }

    pub fn insert_root(&mut self, board: Board, h: HeuristicValue, f: HeuristicValue) -> NodeId {
        debug_assert_eq!(self.nodes.len(), 0, "Root must be the first node");
        let node_id = self.next_node_id();
        self.nodes
            .push(SearchNode::new_without_parent(node_id, board, h, f));
        node_id
    }

    pub fn insert_node(
        &mut self,
        board: Board,
        parent_id: NodeId,
        transition: Move,
        h: HeuristicValue,
        f: HeuristicValue,
    ) -> NodeId {
        let node_id = self.next_node_id();
        let node = {
            let parent = self.get_node(parent_id);
            debug_assert_eq!(parent.get_status(), SearchNodeStatus::Closed);
            SearchNode::new_with_parent(node_id, board, parent, transition, h, f)
        };
        self.nodes.push(node);
        node_id
    }

    /// Commit a node to the closed set. Its board must not be closed yet.
    pub fn close(&mut self, node_id: NodeId) {
        let node = self.get_node_mut(node_id);
        node.close();
        let board = *node.get_board();
        let previous = self.closed.insert(board, node_id);
        debug_assert!(previous.is_none(), "Board {} closed twice", board);
        self.closed_order.push(node_id);
    }

    pub fn discard(&mut self, node_id: NodeId) {
        self.get_node_mut(node_id).discard();
    }

    pub fn is_closed(&self, board: &Board) -> bool {
        self.closed.contains_key(board)
    }

    /// Closed nodes, in the order they were closed.
    pub fn closed_nodes(&self) -> impl Iterator<Item = &SearchNode> {
        self.closed_order.iter().map(|&node_id| self.get_node(node_id))
    }

    pub fn closed_len(&self) -> usize {
        self.closed_order.len()
    }

    /// Total number of nodes ever inserted.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    /// Walk back from the goal node to the root. Each parent is verified
    /// against the board, depth, cost and blank cell obtained by undoing the
    /// move of its child.
    pub fn extract_plan(
        &self,
        goal_id: NodeId,
        generator: &dyn SuccessorGenerator,
    ) -> Result<Plan, ReconstructionError> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);

        while let Some(transition) = current_node.get_transition() {
            let board = generator.generate_predecessor(current_node.get_board(), transition);
            let depth = current_node.get_depth() - 1;
            let cost = current_node.get_g() - transition.cost();
            let error = ReconstructionError { board, depth, cost };

            let parent_id = current_node.get_parent_id();
            if parent_id == NO_NODE {
                return Err(error);
            }
            let parent = self.get_node(parent_id);
            let matches = parent.get_status() == SearchNodeStatus::Closed
                && self.closed.get(&board) == Some(&parent_id)
                && parent.get_depth() == depth
                && parent.get_g() == cost
                && parent.get_blank() == transition.destination();
            if !matches {
                return Err(error);
            }

            steps.push(*transition);
            current_node = parent;
        }

        steps.reverse();
        Ok(Plan::new(steps))
    }
}
