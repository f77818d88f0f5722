use crate::search::{Board, Cost, HeuristicValue, Move};

/// Index of a node in the [`crate::search::SearchSpace`] arena. Ids are handed
/// out in generation order, so comparing them compares generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// The parent of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Node is in the frontier
    Open,
    /// Node has been expanded or matched the goal
    Closed,
    /// Node was popped after its board had already been closed
    Discarded,
}

/// A [`SearchNode`] is a board together with the path information collected
/// while reaching it.
#[derive(Debug, Clone)]
pub struct SearchNode {
    node_id: NodeId,
    status: SearchNodeStatus,
    board: Board,
    /// Move that led to this node, `None` for the root
    transition: Option<Move>,
    /// Closed node this node was generated from
    parent_id: NodeId,
    /// Number of moves from the start board
    depth: usize,
    /// Sum of the moved tile values from the start board
    g: Cost,
    /// Heuristic estimate of the remaining cost
    h: HeuristicValue,
    /// Priority in the frontier, different depending on the search strategy
    f: HeuristicValue,
}

impl SearchNode {
    /// Create the root node of a search. For all other nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(
        node_id: NodeId,
        board: Board,
        h: HeuristicValue,
        f: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            board,
            transition: None,
            parent_id: NO_NODE,
            depth: 0,
            g: 0,
            h,
            f,
        }
    }

    /// Create a node generated by applying `transition` to `parent`.
    pub fn new_with_parent(
        node_id: NodeId,
        board: Board,
        parent: &SearchNode,
        transition: Move,
        h: HeuristicValue,
        f: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            board,
            transition: Some(transition),
            parent_id: parent.node_id,
            depth: parent.depth + 1,
            g: parent.g + transition.cost(),
            h,
            f,
        }
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn discard(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to discard it"
        );
        self.status = SearchNodeStatus::Discarded;
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_board(&self) -> &Board {
        &self.board
    }

    pub fn get_blank(&self) -> usize {
        self.board.blank()
    }

    pub fn get_transition(&self) -> Option<&Move> {
        self.transition.as_ref()
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }
}
