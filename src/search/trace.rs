//! Optional step-by-step trace of a search, written as human readable text.
//! The trace is a side channel: writing it never changes the course of the
//! search, and a failing writer only stops the trace.

use crate::search::{NodeId, SearchNode, SearchSpace, SearchStatistics, NO_NODE};
use itertools::Itertools;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// Receiver of the events produced by a search engine. All methods default to
/// doing nothing.
pub trait SearchTrace {
    /// Whether the engine should collect the frontier after every step for
    /// [`SearchTrace::frontier`]. Collecting it is expensive.
    fn wants_frontier(&self) -> bool {
        false
    }

    /// A node was taken from the frontier.
    fn generating(&mut self, _space: &SearchSpace, _node_id: NodeId) {}

    /// The popped node was expanded into `successors` new nodes.
    fn expanded(&mut self, _space: &SearchSpace, _successors: usize) {}

    /// The popped node was discarded as its board had already been closed.
    fn already_closed(&mut self, _space: &SearchSpace, _node_id: NodeId) {}

    /// The popped node matched the goal.
    fn goal_reached(&mut self, _space: &SearchSpace, _node_id: NodeId) {}

    /// The frontier in pop order.
    fn frontier(&mut self, _space: &SearchSpace, _frontier: &[NodeId]) {}

    /// The search terminated.
    fn finished(&mut self, _statistics: &SearchStatistics) {}
}

/// A trace that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl SearchTrace for NoTrace {}

/// A trace writing text lines to any [`Write`].
#[derive(Debug)]
pub struct TraceWriter<W: Write> {
    writer: W,
    failed: bool,
}

pub type TraceFile = TraceWriter<BufWriter<File>>;

impl TraceFile {
    /// Create a new trace file with a timestamped name inside `directory`.
    pub fn create(directory: &Path) -> io::Result<(Self, PathBuf)> {
        let path = directory.join(trace_file_name(SystemTime::now()));
        let file = File::create(&path)?;
        debug!(trace_file = %path.display(), "created trace file");
        Ok((Self::new(BufWriter::new(file)), path))
    }
}

impl<W: Write> TraceWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    /// Record the arguments of the run and the selected method.
    pub fn write_header(&mut self, arguments: &[String], method: &str) {
        let arguments = arguments.iter().map(|arg| format!("'{arg}'")).join(", ");
        self.write_line(format_args!("Command-Line Arguments : [{arguments}]"));
        self.write_line(format_args!("Method Selected : {method}"));
        self.write_line(format_args!("Running {method}"));
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: fmt::Arguments) {
        if self.failed {
            return;
        }
        if let Err(error) = writeln!(self.writer, "{line}") {
            warn!(%error, "failed to write trace, disabling it");
            self.failed = true;
        }
    }

    fn write_closed(&mut self, space: &SearchSpace) {
        let closed = space
            .closed_nodes()
            .map(|node| node.get_board().to_string())
            .join(", ");
        self.write_line(format_args!("\tClosed: [{closed}]"));
    }
}

impl<W: Write> SearchTrace for TraceWriter<W> {
    fn wants_frontier(&self) -> bool {
        !self.failed
    }

    fn generating(&mut self, space: &SearchSpace, node_id: NodeId) {
        let description = describe_node(space, space.get_node(node_id));
        self.write_line(format_args!("Generating successors to {description}:"));
    }

    fn expanded(&mut self, space: &SearchSpace, successors: usize) {
        self.write_line(format_args!("\t{successors} successors generated"));
        self.write_closed(space);
    }

    fn already_closed(&mut self, space: &SearchSpace, node_id: NodeId) {
        let board = space.get_node(node_id).get_board();
        self.write_line(format_args!(
            "\t{board} is already in closed so 0 successors"
        ));
        self.write_closed(space);
    }

    fn goal_reached(&mut self, space: &SearchSpace, node_id: NodeId) {
        let board = space.get_node(node_id).get_board();
        self.write_line(format_args!("\tGoal {board} reached"));
        self.write_closed(space);
    }

    fn frontier(&mut self, space: &SearchSpace, frontier: &[NodeId]) {
        self.write_line(format_args!("\tFringe: ["));
        for &node_id in frontier {
            let description = describe_node(space, space.get_node(node_id));
            self.write_line(format_args!("\t\t{description}"));
        }
        self.write_line(format_args!("\t]"));
    }

    fn finished(&mut self, statistics: &SearchStatistics) {
        self.write_line(format_args!("Nodes Popped: {}", statistics.popped_nodes()));
        self.write_line(format_args!(
            "Nodes Expanded: {}",
            statistics.expanded_nodes()
        ));
        self.write_line(format_args!(
            "Nodes Generated: {}",
            statistics.generated_nodes()
        ));
        self.write_line(format_args!(
            "Max Fringe Size: {}",
            statistics.max_frontier_size()
        ));
        if !self.failed {
            if let Err(error) = self.writer.flush() {
                warn!(%error, "failed to flush trace");
                self.failed = true;
            }
        }
    }
}

/// One line description of a node, as used in trace files.
pub fn describe_node(space: &SearchSpace, node: &SearchNode) -> String {
    let action = match node.get_transition() {
        Some(transition) => transition.to_string(),
        None => "Start".to_string(),
    };
    let parent = match node.get_parent_id() {
        NO_NODE => "None".to_string(),
        parent_id => space.get_node(parent_id).get_board().to_string(),
    };
    format!(
        "< state = {}, action = {{{}}}, d = {}, g(n) = {}, f(n) = {}, Parent = Pointer to {{{}}} >",
        node.get_board(),
        action,
        node.get_depth(),
        node.get_g(),
        node.get_f(),
        parent
    )
}

/// Name of a trace file created at `time`, e.g.
/// `trace-2024-03-01T17_05_09Z.txt`.
pub fn trace_file_name(time: SystemTime) -> String {
    let timestamp = humantime::format_rfc3339_seconds(time)
        .to_string()
        .replace(':', "_");
    format!("trace-{timestamp}.txt")
}
