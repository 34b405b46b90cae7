//! Breadth first search

use crate::search::{
    search_engines::{
        NodeCount, ParentRelation, SearchEngine, SearchObserver, SearchResult, SearchStatistics,
    },
    Cell, Goals, GridMap,
};
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct Bfs {}

impl Bfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Bfs {
    fn search(
        &mut self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        observer: &mut dyn SearchObserver,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut queue = VecDeque::from([start]);
        let mut visited = HashSet::new();
        let mut parents = ParentRelation::new(start);

        while let Some(cell) = queue.pop_front() {
            if !visited.insert(cell) {
                continue;
            }
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
                // The first parent assigned is on a shortest path
                if !parents.contains(next) {
                    parents.insert(next, cell, direction);
                    queue.push_back(next);
                }
            }
        }

        statistics.record_termination(parents.len(), visited.len(), NodeCount::ParentRelation);
        statistics.finalise_search();
        (SearchResult::Unreachable, statistics)
    }
}
