use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of cells expanded, over all rounds
    expanded_nodes: usize,
    /// Number of visited cells put back on the frontier (A*)
    reopened_nodes: usize,
    /// Number of rounds run by the iterative deepening engines
    rounds: usize,
    /// Size of the parent relation when the search stopped
    parent_relation_size: usize,
    /// Size of the visited set when the search stopped
    visited_cells: usize,
    /// Node count reported to the caller
    nodes: usize,
    /// Time when the search started
    search_start_time: std::time::Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: std::time::Instant,
}

/// Which bookkeeping structure the reported node count is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCount {
    ParentRelation,
    VisitedSet,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            reopened_nodes: 0,
            rounds: 0,
            parent_relation_size: 0,
            visited_cells: 0,
            nodes: 0,
            search_start_time: std::time::Instant::now(),
            last_log_time: std::time::Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_rounds(&mut self) {
        self.rounds += 1;
        self.log_if_needed();
    }

    /// Record the final sizes of the search structures and which of them is
    /// reported as the node count.
    pub fn record_termination(
        &mut self,
        parent_relation_size: usize,
        visited_cells: usize,
        count: NodeCount,
    ) {
        self.parent_relation_size = parent_relation_size;
        self.visited_cells = visited_cells;
        self.nodes = match count {
            NodeCount::ParentRelation => parent_relation_size,
            NodeCount::VisitedSet => visited_cells,
        };
    }

    /// Fold the statistics of one sub-search into these, summing every count.
    pub fn merge_leg(&mut self, leg: &SearchStatistics) {
        self.expanded_nodes += leg.expanded_nodes;
        self.reopened_nodes += leg.reopened_nodes;
        self.rounds += leg.rounds;
        self.parent_relation_size += leg.parent_relation_size;
        self.visited_cells += leg.visited_cells;
        self.nodes += leg.nodes;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn parent_relation_size(&self) -> usize {
        self.parent_relation_size
    }

    pub fn visited_cells(&self) -> usize {
        self.visited_cells
    }

    /// The node count reported to callers.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = std::time::Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            reopened_nodes = self.reopened_nodes,
            rounds = self.rounds,
            parent_relation_size = self.parent_relation_size,
            visited_cells = self.visited_cells,
            nodes = self.nodes
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn termination_selects_reported_count() {
        let mut statistics = SearchStatistics::new();
        statistics.record_termination(18, 15, NodeCount::ParentRelation);
        assert_eq!(statistics.nodes(), 18);
        statistics.record_termination(18, 15, NodeCount::VisitedSet);
        assert_eq!(statistics.nodes(), 15);
        assert_eq!(statistics.parent_relation_size(), 18);
        assert_eq!(statistics.visited_cells(), 15);
    }

    #[test]
    fn legs_are_summed() {
        let mut total = SearchStatistics::new();
        let mut leg = SearchStatistics::new();
        leg.increment_expanded_nodes();
        leg.increment_reopened_nodes();
        leg.record_termination(8, 6, NodeCount::ParentRelation);
        total.merge_leg(&leg);
        total.merge_leg(&leg);
        assert_eq!(total.nodes(), 16);
        assert_eq!(total.expanded_nodes(), 2);
        assert_eq!(total.reopened_nodes(), 2);
        assert_eq!(total.visited_cells(), 12);
    }
}
