//! Depth first search

use crate::search::{
    search_engines::{
        NodeCount, ParentRelation, SearchEngine, SearchObserver, SearchResult, SearchStatistics,
    },
    Cell, Goals, GridMap,
};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct Dfs {}

impl Dfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Dfs {
    fn search(
        &mut self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        observer: &mut dyn SearchObserver,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut stack = vec![start];
        // Cells currently on the stack, each is pushed at most once
        let mut on_stack = HashSet::from([start]);
        let mut visited = HashSet::new();
        let mut parents = ParentRelation::new(start);

        while let Some(cell) = stack.pop() {
            on_stack.remove(&cell);
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

            // Pushed in reverse so the highest priority neighbour is popped
            // first
            for (next, direction) in map.neighbours(cell).rev() {
                if !visited.contains(&next) && !on_stack.contains(&next) {
                    stack.push(next);
                    on_stack.insert(next);
                    parents.insert(next, cell, direction);
                }
            }
        }

        statistics.record_termination(parents.len(), visited.len(), NodeCount::ParentRelation);
        statistics.finalise_search();
        (SearchResult::Unreachable, statistics)
    }
}
