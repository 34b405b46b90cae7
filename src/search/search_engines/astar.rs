//! A* search with reopening of closed cells.

use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    search_engines::{
        NodeCount, OpenList, ParentRelation, SearchEngine, SearchObserver, SearchResult,
        SearchStatistics,
    },
    Cell, Goals, GridMap,
};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

#[derive(Debug)]
pub struct AStar {
    heuristic: Box<dyn Heuristic>,
}

impl AStar {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        observer: &mut dyn SearchObserver,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut open_list = OpenList::new();
        // f value of each cell when it was expanded
        let mut closed: HashMap<Cell, HeuristicValue> = HashMap::new();
        let mut parents = ParentRelation::with_root_cost(start, OrderedFloat(0.));

        open_list.push(start, self.heuristic.evaluate(start, goals));

        while let Some((cell, f_value)) = open_list.pop() {
            closed.insert(cell, f_value);
            statistics.increment_expanded_nodes();
            observer.on_expand(cell);

            if goals.contains(cell) {
                let path = parents.extract_path(cell);
                observer.on_path_found(&path);
                statistics.record_termination(
                    parents.len(),
                    closed.len(),
                    NodeCount::ParentRelation,
                );
                statistics.finalise_search();
                return (SearchResult::Success(path), statistics);
            }

            let g_value = parents
                .cost(cell)
                .expect("every queued cell has an accumulated cost");
            for (next, direction) in map.neighbours(cell) {
                let next_g = g_value + self.heuristic.distance(cell, next);
                let next_f = next_g + self.heuristic.evaluate(next, goals);

                if open_list.contains(next) {
                    if open_list.decrease_cost(next, next_f) {
                        parents.insert_with_cost(next, cell, direction, next_g);
                    }
                } else if let Some(&closed_f) = closed.get(&next) {
                    if next_f < closed_f {
                        closed.remove(&next);
                        open_list.push(next, next_f);
                        parents.insert_with_cost(next, cell, direction, next_g);
                        statistics.increment_reopened_nodes();
                    }
                } else {
                    open_list.push(next, next_f);
                    parents.insert_with_cost(next, cell, direction, next_g);
                }
            }
        }

        statistics.record_termination(parents.len(), closed.len(), NodeCount::ParentRelation);
        statistics.finalise_search();
        (SearchResult::Unreachable, statistics)
    }
}
