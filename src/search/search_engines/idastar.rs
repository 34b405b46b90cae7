//! Iterative deepening A*: depth first rounds bounded by an f-value
//! threshold that rises to the smallest value pruned in the previous round.

use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    search_engines::{
        NodeCount, ParentRelation, SearchEngine, SearchObserver, SearchResult, SearchStatistics,
    },
    Cell, Goals, GridMap, Path,
};
use ordered_float::OrderedFloat;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug)]
enum RoundOutcome {
    Found(Path),
    /// Smallest f-value that exceeded the threshold, if any did
    Pruned(Option<HeuristicValue>),
}

#[derive(Debug)]
pub struct IdaStar {
    heuristic: Box<dyn Heuristic>,
}

impl IdaStar {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }

    fn run_round(
        &self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        threshold: HeuristicValue,
        observer: &mut dyn SearchObserver,
        statistics: &mut SearchStatistics,
    ) -> (RoundOutcome, ParentRelation, HashSet<Cell>) {
        let mut stack = vec![(start, OrderedFloat(0.))];
        let mut visited = HashSet::new();
        let mut parents = ParentRelation::new(start);
        let mut next_threshold: Option<HeuristicValue> = None;

        while let Some((cell, g_value)) = stack.pop() {
            if !visited.insert(cell) {
                continue;
            }
            statistics.increment_expanded_nodes();
            observer.on_expand(cell);

            let f_value = g_value + self.heuristic.evaluate(cell, goals);
            if goals.contains(cell) {
                let path = parents.extract_path(cell);
                return (RoundOutcome::Found(path), parents, visited);
            }
            if f_value > threshold {
                next_threshold = Some(next_threshold.map_or(f_value, |t| t.min(f_value)));
                continue;
            }

            // The latest push of a cell is popped first, so its parent wins
            for (next, direction) in map.neighbours(cell).rev() {
                if !visited.contains(&next) {
                    stack.push((next, g_value + self.heuristic.distance(cell, next)));
                    parents.insert(next, cell, direction);
                }
            }
        }

        (RoundOutcome::Pruned(next_threshold), parents, visited)
    }
}

impl SearchEngine for IdaStar {
    fn search(
        &mut self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        observer: &mut dyn SearchObserver,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut threshold = self.heuristic.evaluate(start, goals);

        loop {
            statistics.increment_rounds();
            let (outcome, parents, visited) =
                self.run_round(map, start, goals, threshold, observer, &mut statistics);
            debug!(threshold = threshold.0, visited = visited.len(), "finished IDA* round");

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
                RoundOutcome::Pruned(Some(next)) => threshold = next,
                RoundOutcome::Pruned(None) => {
                    statistics.record_termination(
                        parents.len(),
                        visited.len(),
                        NodeCount::VisitedSet,
                    );
                    statistics.finalise_search();
                    return (SearchResult::Unreachable, statistics);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{heuristics::HeuristicName, search_engines::NoObserver};
    use crate::test_utils::*;

    fn run(text: &str, heuristic: HeuristicName) -> (SearchResult, SearchStatistics) {
        let maze = load_maze(text);
        IdaStar::new(heuristic.create()).search(
            maze.map(),
            maze.start(),
            maze.goals(),
            &mut NoObserver,
        )
    }

    #[test]
    fn small_maze() {
        for heuristic in [
            HeuristicName::Manhattan,
            HeuristicName::Euclidean,
            HeuristicName::Chebyshev,
        ] {
            let (result, statistics) = run(SMALL_MAZE_TEXT, heuristic);
            let path = result.into_path().unwrap();
            assert_eq!(statistics.nodes(), 11, "{:?}", heuristic);
            assert_eq!(statistics.visited_cells(), 10, "{:?}", heuristic);
            assert_eq!(
                directions_of(&path),
                ["right", "right", "right", "right", "down", "right"]
            );
        }
    }

    #[test]
    fn medium_maze() {
        let (result, statistics) = run(MEDIUM_MAZE_TEXT, HeuristicName::Manhattan);
        let path = result.into_path().unwrap();
        assert_eq!(statistics.nodes(), 34);
        assert_eq!(statistics.visited_cells(), 32);
        assert_eq!(statistics.rounds(), 5);
        assert_eq!(
            directions_of(&path),
            [
                "up", "right", "right", "down", "right", "up", "right", "down", "right", "up",
                "up", "right", "right", "down", "down"
            ]
        );
    }

    #[test]
    fn large_maze() {
        let (result, statistics) = run(LARGE_MAZE_TEXT, HeuristicName::Manhattan);
        assert_eq!(statistics.nodes(), 133);
        assert_eq!(statistics.visited_cells(), 128);
        assert_eq!(statistics.rounds(), 32);
        assert_eq!(result.into_path().unwrap().terminal(), Cell::new(19, 19));
    }

    #[test]
    fn no_pruning_means_unreachable() {
        let (result, statistics) = run(BLOCKED_MAZE_TEXT, HeuristicName::Manhattan);
        assert_eq!(result, SearchResult::Unreachable);
        assert_eq!(statistics.nodes(), statistics.visited_cells());
        assert_eq!(statistics.nodes(), 16);
    }
}
