use crate::search::{
    search_engines::{
        AStar, Bfs, Dfs, Gbfs, IdaStar, IterativeDeepening, MultiGoalAStar, NoObserver,
        SearchObserver, SearchStatistics,
    },
    Cell, Goals, GridMap, Path, SearchConfig,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A goal was reached along the given path
    Success(Path),
    /// No goal can be reached from the start cell
    Unreachable,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Success(path) => Some(path),
            SearchResult::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchResult::Success(path) => Some(path),
            SearchResult::Unreachable => None,
        }
    }
}

pub trait SearchEngine {
    /// Search `map` from `start` until any cell of `goals` is reached,
    /// reporting progress to `observer`.
    fn search(
        &mut self,
        map: &GridMap,
        start: Cell,
        goals: &Goals,
        observer: &mut dyn SearchObserver,
    ) -> (SearchResult, SearchStatistics);

    /// Search without an observer, returning the reported node count and the
    /// path if one was found.
    fn solve(&mut self, map: &GridMap, start: Cell, goals: &Goals) -> (usize, Option<Path>) {
        let (result, statistics) = self.search(map, start, goals, &mut NoObserver);
        (statistics.nodes(), result.into_path())
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngineName {
    #[clap(name = "DFS", alias = "dfs", help = "Depth first search.")]
    Dfs,
    #[clap(name = "BFS", alias = "bfs", help = "Breadth first search.")]
    Bfs,
    #[clap(name = "GBFS", alias = "gbfs", help = "Greedy best first search.")]
    Gbfs,
    #[clap(name = "AS", alias = "astar", help = "A* search.")]
    AStar,
    #[clap(
        name = "CUS1",
        alias = "ids",
        help = "Iterative deepening depth first search."
    )]
    IterativeDeepening,
    #[clap(name = "CUS2", alias = "idastar", help = "Iterative deepening A* search.")]
    IdaStar,
    #[clap(
        name = "ALL",
        alias = "all",
        help = "Visit every goal by chaining A* searches."
    )]
    MultiGoal,
}

impl SearchEngineName {
    /// The method code printed in search reports.
    pub fn code(&self) -> &'static str {
        match self {
            SearchEngineName::Dfs => "DFS",
            SearchEngineName::Bfs => "BFS",
            SearchEngineName::Gbfs => "GBFS",
            SearchEngineName::AStar => "AS",
            SearchEngineName::IterativeDeepening => "CUS1",
            SearchEngineName::IdaStar => "CUS2",
            SearchEngineName::MultiGoal => "ALL",
        }
    }

    pub fn create(&self, config: &SearchConfig) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Dfs => Box::new(Dfs::new()),
            SearchEngineName::Bfs => Box::new(Bfs::new()),
            SearchEngineName::Gbfs => Box::new(Gbfs::new(config.heuristic.create())),
            SearchEngineName::AStar => Box::new(AStar::new(config.heuristic.create())),
            SearchEngineName::IterativeDeepening => {
                Box::new(IterativeDeepening::new(config.ids_initial_depth))
            }
            SearchEngineName::IdaStar => Box::new(IdaStar::new(config.heuristic.create())),
            SearchEngineName::MultiGoal => {
                Box::new(MultiGoalAStar::new(config.heuristic.create()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::RecordingObserver;
    use crate::test_utils::*;
    use clap::ValueEnum;

    const ALL_ENGINES: [SearchEngineName; 6] = [
        SearchEngineName::Dfs,
        SearchEngineName::Bfs,
        SearchEngineName::Gbfs,
        SearchEngineName::AStar,
        SearchEngineName::IterativeDeepening,
        SearchEngineName::IdaStar,
    ];

    #[test]
    fn codes_and_aliases_parse() {
        for (text, name) in [
            ("DFS", SearchEngineName::Dfs),
            ("bfs", SearchEngineName::Bfs),
            ("AS", SearchEngineName::AStar),
            ("astar", SearchEngineName::AStar),
            ("CUS1", SearchEngineName::IterativeDeepening),
            ("idastar", SearchEngineName::IdaStar),
            ("ALL", SearchEngineName::MultiGoal),
        ] {
            assert_eq!(SearchEngineName::from_str(text, false), Ok(name));
        }
        assert!(SearchEngineName::from_str("XYZ", false).is_err());
        assert_eq!(SearchEngineName::IdaStar.code(), "CUS2");
    }

    #[test]
    fn two_by_two_scenario() {
        let map = GridMap::open(2, 2);
        let goals = Goals::single(Cell::new(1, 1));
        let expected_nodes = [4, 4, 4, 4, 3, 4];
        for (name, nodes) in ALL_ENGINES.into_iter().zip(expected_nodes) {
            let mut engine = name.create(&SearchConfig::default());
            let (count, path) = engine.solve(&map, Cell::new(0, 0), &goals);
            assert_eq!(count, nodes, "{:?}", name);
            assert_eq!(directions_of(&path.unwrap()), ["down", "right"], "{:?}", name);
        }
    }

    #[test]
    fn start_on_goal_gives_empty_path() {
        let maze = load_maze(ALREADY_AT_GOAL_MAZE_TEXT);
        for name in ALL_ENGINES {
            let mut engine = name.create(&SearchConfig::default());
            let (count, path) = engine.solve(maze.map(), maze.start(), maze.goals());
            let path = path.unwrap();
            assert!(path.is_empty(), "{:?}", name);
            assert_eq!(path.terminal(), maze.start());
            assert_eq!(count, 1, "{:?}", name);
        }
    }

    #[test]
    fn enclosed_goal_is_unreachable_for_every_engine() {
        let maze = load_maze(BLOCKED_MAZE_TEXT);
        for name in ALL_ENGINES {
            let mut engine = name.create(&SearchConfig::default());
            let (count, path) = engine.solve(maze.map(), maze.start(), maze.goals());
            assert_eq!(path, None, "{:?}", name);
            assert_eq!(count, 16, "{:?}", name);
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        let maze = load_maze(MEDIUM_MAZE_TEXT);
        for name in ALL_ENGINES {
            let mut engine = name.create(&SearchConfig::default());
            let first = engine.solve(maze.map(), maze.start(), maze.goals());
            let second = engine.solve(maze.map(), maze.start(), maze.goals());
            let fresh = name
                .create(&SearchConfig::default())
                .solve(maze.map(), maze.start(), maze.goals());
            assert_eq!(first, second, "{:?}", name);
            assert_eq!(first, fresh, "{:?}", name);
        }
    }

    #[test]
    fn returned_paths_replay_onto_their_terminal() {
        for text in [SMALL_MAZE_TEXT, MEDIUM_MAZE_TEXT, LARGE_MAZE_TEXT] {
            let maze = load_maze(text);
            for name in ALL_ENGINES {
                let mut engine = name.create(&SearchConfig::default());
                let (_, path) = engine.solve(maze.map(), maze.start(), maze.goals());
                let path = path.unwrap();
                assert_eq!(path.start(), maze.start());
                assert!(maze.goals().contains(path.terminal()));
                assert_eq!(replay(maze.start(), &path.directions()), path.terminal());
                assert_path_is_walkable(maze.map(), &path);
            }
        }
    }

    #[test]
    fn breadth_first_is_never_longer_than_depth_first() {
        for text in [SMALL_MAZE_TEXT, MEDIUM_MAZE_TEXT, LARGE_MAZE_TEXT] {
            let maze = load_maze(text);
            let config = SearchConfig::default();
            let (_, bfs) = SearchEngineName::Bfs.create(&config).solve(
                maze.map(),
                maze.start(),
                maze.goals(),
            );
            let (_, dfs) = SearchEngineName::Dfs.create(&config).solve(
                maze.map(),
                maze.start(),
                maze.goals(),
            );
            assert!(bfs.unwrap().len() <= dfs.unwrap().len());
        }
    }

    #[test]
    fn a_star_matches_breadth_first_length() {
        for text in [SMALL_MAZE_TEXT, MEDIUM_MAZE_TEXT, LARGE_MAZE_TEXT] {
            let maze = load_maze(text);
            let config = SearchConfig::default();
            let (_, bfs) = SearchEngineName::Bfs.create(&config).solve(
                maze.map(),
                maze.start(),
                maze.goals(),
            );
            let (_, astar) = SearchEngineName::AStar.create(&config).solve(
                maze.map(),
                maze.start(),
                maze.goals(),
            );
            assert_eq!(astar.unwrap().len(), bfs.unwrap().len());
        }
    }

    #[test]
    fn observer_sees_expansions_and_one_path() {
        let maze = load_maze(SMALL_MAZE_TEXT);
        for name in ALL_ENGINES {
            let mut observer = RecordingObserver::new();
            let mut engine = name.create(&SearchConfig::default());
            let (result, statistics) =
                engine.search(maze.map(), maze.start(), maze.goals(), &mut observer);
            assert_eq!(observer.expanded.len(), statistics.expanded_nodes(), "{:?}", name);
            assert_eq!(observer.expanded[0], maze.start());
            assert_eq!(observer.paths.len(), 1);
            assert_eq!(Some(&observer.paths[0]), result.path());
        }
    }
}
