use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes taken from the frontier
    popped_nodes: usize,
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of nodes generated, including the root
    generated_nodes: usize,
    /// Largest frontier observed
    max_frontier_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            popped_nodes: 0,
            expanded_nodes: 0,
            generated_nodes: 1,
            max_frontier_size: 1,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_popped_nodes(&mut self) {
        self.popped_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn register_frontier_size(&mut self, frontier_size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(frontier_size);
    }

    pub fn popped_nodes(&self) -> usize {
        self.popped_nodes
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn max_frontier_size(&self) -> usize {
        self.max_frontier_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            popped_nodes = self.popped_nodes,
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            max_frontier_size = self.max_frontier_size,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
