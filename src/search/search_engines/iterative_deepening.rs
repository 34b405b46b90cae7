//! Depth-bounded depth first search, rerun with a growing bound.

use crate::search::{
    search_engines::{
        NodeCount, ParentRelation, SearchEngine, SearchObserver, SearchResult, SearchStatistics,
    },
    Cell, Direction, Goals, GridMap, Path,
};
use std::collections::HashSet;
use tracing::debug;

/// How a single bounded round ended.
#[derive(Debug)]
enum RoundOutcome {
    Found(Path),
    /// Some cell at the depth bound still had unvisited neighbours
    CutOff,
    /// Everything reachable was visited within the bound
    Exhausted,
}

/// A pending stack entry: the cell, the depth it may still descend, and the
/// move that pushed it.
type Frame = (Cell, usize, Option<(Cell, Direction)>);

#[derive(Debug)]
pub struct IterativeDeepening {
    initial_depth: usize,
}

impl IterativeDeepening {
    pub fn new(initial_depth: usize) -> Self {
        Self { initial_depth }
    }

    fn run_round(
        &self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        depth: usize,
        observer: &mut dyn SearchObserver,
        statistics: &mut SearchStatistics,
    ) -> (RoundOutcome, ParentRelation, HashSet<Cell>) {
        let mut stack: Vec<Frame> = vec![(start, depth, None)];
        let mut visited = HashSet::new();
        let mut parents = ParentRelation::new(start);
        let mut cut_off = false;

        while let Some((cell, remaining, via)) = stack.pop() {
            if !visited.insert(cell) {
                continue;
            }
            if let Some((predecessor, direction)) = via {
                parents.insert(cell, predecessor, direction);
            }
            statistics.increment_expanded_nodes();
            observer.on_expand(cell);

            if goals.contains(cell) {
                let path = parents.extract_path(cell);
                return (RoundOutcome::Found(path), parents, visited);
            }

            if remaining == 0 {
                if map.neighbours(cell).any(|(next, _)| !visited.contains(&next)) {
                    cut_off = true;
                }
                continue;
            }

            for (next, direction) in map.neighbours(cell).rev() {
                if !visited.contains(&next) {
                    stack.push((next, remaining - 1, Some((cell, direction))));
                }
            }
        }

        let outcome = if cut_off {
            RoundOutcome::CutOff
        } else {
            RoundOutcome::Exhausted
        };
        (outcome, parents, visited)
    }
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SearchEngine for IterativeDeepening {
    fn search(
        &mut self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        observer: &mut dyn SearchObserver,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut depth = self.initial_depth;

        loop {
            statistics.increment_rounds();
            let (outcome, parents, visited) =
                self.run_round(map, start, goals, depth, observer, &mut statistics);
            debug!(depth, visited = visited.len(), "finished deepening round");

            match outcome {
                RoundOutcome::Found(path) => {
                    observer.on_path_found(&path);
                    statistics.record_termination(
                        parents.len(),
                        visited.len(),
                        NodeCount::ParentRelation,
                    );
                    statistics.finalise_search();
                    return (SearchResult::Success(path), statistics);
                }
                RoundOutcome::Exhausted => {
                    statistics.record_termination(
                        parents.len(),
                        visited.len(),
                        NodeCount::VisitedSet,
                    );
                    statistics.finalise_search();
                    return (SearchResult::Unreachable, statistics);
                }
                RoundOutcome::CutOff => depth += 1,
            }
        }
    }
}
