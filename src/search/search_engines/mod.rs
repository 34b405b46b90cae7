mod astar;
mod bfs;
mod dfs;
mod gbfs;
mod idastar;
mod iterative_deepening;
mod multi_goal;
mod observer;
mod open_list;
mod search_engine;
mod search_space;
mod search_statistics;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use gbfs::Gbfs;
pub use idastar::IdaStar;
pub use iterative_deepening::IterativeDeepening;
pub use multi_goal::MultiGoalAStar;
pub use observer::{NoObserver, RecordingObserver, SearchObserver, TracingObserver};
pub use open_list::OpenList;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_space::{ParentEntry, ParentRelation};
pub use search_statistics::{NodeCount, SearchStatistics};
