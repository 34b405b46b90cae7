//! Visit every goal by chaining A* searches, each time heading for whichever
//! remaining goal A* reaches first. The visiting order is greedy, not an
//! optimal tour.

use crate::search::{
    heuristics::Heuristic,
    search_engines::{
        observer::LegObserver, AStar, NodeCount, NoObserver, SearchEngine, SearchObserver,
        SearchResult, SearchStatistics,
    },
    Cell, Goals, GridMap, Path,
};
use tracing::debug;

#[derive(Debug)]
pub struct MultiGoalAStar {
    leg_engine: AStar,
}

impl MultiGoalAStar {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self {
            leg_engine: AStar::new(heuristic),
        }
    }

    /// A route from `start` through every goal, or `None` as soon as the
    /// remaining goals cannot be reached.
    pub fn solve_all(&mut self, map: &GridMap, start: Cell, goals: &Goals) -> Option<Path> {
        self.search(map, start, goals, &mut NoObserver).0.into_path()
    }
}

impl SearchEngine for MultiGoalAStar {
    fn search(
        &mut self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        observer: &mut dyn SearchObserver,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut remaining = goals.clone();
        let mut route = Path::trivial(start);
        let mut current = start;

        if remaining.is_empty() {
            statistics.record_termination(0, 0, NodeCount::ParentRelation);
        }

        let mut leg_observer = LegObserver::new(observer);
        while !remaining.is_empty() {
            let (result, leg_statistics) =
                self.leg_engine
                    .search(map, current, &remaining, &mut leg_observer);
            statistics.merge_leg(&leg_statistics);

            match result {
                SearchResult::Success(leg) => {
                    let reached = leg.terminal();
                    debug!(
                        from = %current,
                        reached = %reached,
                        leg_length = leg.len(),
                        remaining = remaining.len() - 1,
                        "finished leg"
                    );
                    remaining.remove(reached);
                    route.append(leg);
                    current = reached;
                }
                SearchResult::Unreachable => {
                    debug!(from = %current, remaining = remaining.len(), "goals unreachable");
                    statistics.finalise_search();
                    return (SearchResult::Unreachable, statistics);
                }
            }
        }

        observer.on_path_found(&route);
        statistics.finalise_search();
        (SearchResult::Success(route), statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        heuristics::HeuristicName,
        search_engines::{Bfs, RecordingObserver},
    };
    use crate::test_utils::*;

    fn planner() -> MultiGoalAStar {
        MultiGoalAStar::new(HeuristicName::Manhattan.create())
    }

    #[test]
    fn visits_every_goal() {
        let maze = load_maze(MULTI_GOAL_MAZE_TEXT);
        let (nodes, path) = planner().solve(maze.map(), maze.start(), maze.goals());
        let path = path.unwrap();
        assert_eq!(nodes, 42);
        assert_eq!(path.terminal(), Cell::new(0, 6));
        assert_eq!(
            directions_of(&path),
            [
                "down", "down", "down", "up", "right", "up", "up", "right", "right", "down",
                "down", "right", "right", "up", "up", "up", "up", "right"
            ]
        );
        let visited: Vec<Cell> = path.steps().iter().map(|step| step.cell).collect();
        assert!(maze.goals().iter().all(|goal| visited.contains(&goal)));
        assert_eq!(replay(maze.start(), &path.directions()), path.terminal());
    }

    #[test]
    fn stitched_length_is_sum_of_shortest_legs() {
        let maze = load_maze(MULTI_GOAL_MAZE_TEXT);
        let path = planner()
            .solve_all(maze.map(), maze.start(), maze.goals())
            .unwrap();

        // Goals in the order the planner reached them
        let order = [Cell::new(5, 0), Cell::new(4, 3), Cell::new(0, 6)];
        let mut from = maze.start();
        let mut total = 0;
        for goal in order {
            let (_, leg) = Bfs::new().solve(maze.map(), from, &Goals::single(goal));
            total += leg.unwrap().len();
            from = goal;
        }
        assert_eq!(total, 18);
        assert_eq!(path.len(), total);
    }

    #[test]
    fn leg_node_counts_are_summed() {
        let maze = load_maze(MULTI_GOAL_MAZE_TEXT);
        let mut remaining = maze.goals().clone();
        let mut from = maze.start();
        let mut counts = vec![];
        while !remaining.is_empty() {
            let mut leg_engine = AStar::new(HeuristicName::Manhattan.create());
            let (nodes, leg) = leg_engine.solve(maze.map(), from, &remaining);
            from = leg.unwrap().terminal();
            remaining.remove(from);
            counts.push(nodes);
        }
        assert_eq!(counts, [8, 14, 20]);
        let (nodes, _) = planner().solve(maze.map(), maze.start(), maze.goals());
        assert_eq!(nodes, counts.iter().sum::<usize>());
    }

    #[test]
    fn partially_unreachable_goals_give_none() {
        let maze = load_maze(PARTIAL_MULTI_GOAL_MAZE_TEXT);
        let (nodes, path) = planner().solve(maze.map(), maze.start(), maze.goals());
        assert_eq!(path, None);
        assert_eq!(nodes, 42);
    }

    #[test]
    fn medium_maze_visits_both_goals() {
        let maze = load_maze(MEDIUM_MAZE_TEXT);
        let (nodes, path) = planner().solve(maze.map(), maze.start(), maze.goals());
        let path = path.unwrap();
        assert_eq!(nodes, 39);
        assert_eq!(
            directions_of(&path),
            [
                "up", "right", "right", "right", "right", "right", "up", "right", "right", "down",
                "down", "up", "up", "right", "right", "right", "up", "up", "up"
            ]
        );
    }

    #[test]
    fn no_goals_is_a_trivial_route() {
        let map = GridMap::open(3, 3);
        let (nodes, path) = planner().solve(&map, Cell::new(1, 1), &Goals::new());
        assert_eq!(nodes, 0);
        assert_eq!(path, Some(Path::trivial(Cell::new(1, 1))));
    }

    #[test]
    fn observer_gets_one_stitched_path() {
        let maze = load_maze(MULTI_GOAL_MAZE_TEXT);
        let mut observer = RecordingObserver::new();
        let (result, statistics) =
            planner().search(maze.map(), maze.start(), maze.goals(), &mut observer);
        assert_eq!(observer.paths.len(), 1);
        assert_eq!(Some(&observer.paths[0]), result.path());
        assert_eq!(observer.expanded.len(), statistics.expanded_nodes());
    }
}
