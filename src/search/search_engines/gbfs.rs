//! This module implements the greedy best-first search algorithm.

use crate::search::{
    heuristics::Heuristic,
    search_engines::{
        NodeCount, OpenList, ParentRelation, SearchEngine, SearchObserver, SearchResult,
        SearchStatistics,
    },
    Cell, Goals, GridMap,
};
use std::collections::HashSet;

/// Greedy best-first search, ordered purely by the heuristic estimate
#[derive(Debug)]
pub struct Gbfs {
    heuristic: Box<dyn Heuristic>,
}

impl Gbfs {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

impl SearchEngine for Gbfs {
    fn search(
        &mut self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        observer: &mut dyn SearchObserver,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut open_list = OpenList::new();
        let mut visited = HashSet::new();
        let mut parents = ParentRelation::new(start);

        open_list.push(start, self.heuristic.evaluate(start, goals));

        while let Some((cell, _)) = open_list.pop() {
            visited.insert(cell);
            statistics.increment_expanded_nodes();
            observer.on_expand(cell);

            if goals.contains(cell) {
                let path = parents.extract_path(cell);
                observer.on_path_found(&path);
                statistics.record_termination(
                    parents.len(),
                    visited.len(),
                    NodeCount::ParentRelation,
                );
                statistics.finalise_search();
                return (SearchResult::Success(path), statistics);
            }

            for (next, direction) in map.neighbours(cell) {
                if !visited.contains(&next) && !open_list.contains(next) {
                    open_list.push(next, self.heuristic.evaluate(next, goals));
                    parents.insert(next, cell, direction);
                }
            }
        }

        statistics.record_termination(parents.len(), visited.len(), NodeCount::ParentRelation);
        statistics.finalise_search();
        (SearchResult::Unreachable, statistics)
    }
}
