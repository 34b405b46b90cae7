use crate::search::{search_engines::SearchEngineName, Path};
use std::fmt;

/// The plain-text summary of one search, as printed by the command line
/// front end:
///
/// ```text
/// maze.txt BFS
/// <Node (1, 5)> 17
/// ['right', 'right', 'right', 'right', 'down', 'right']
/// ```
///
/// or, when no goal can be reached,
///
/// ```text
/// maze.txt BFS
/// No goal is reachable; 16
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    file: &'a str,
    method: SearchEngineName,
    nodes: usize,
    path: Option<&'a Path>,
}

impl<'a> Report<'a> {
    pub fn new(file: &'a str, method: SearchEngineName, nodes: usize, path: Option<&'a Path>) -> Self {
        Self {
            file,
            method,
            nodes,
            path,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.file, self.method.code())?;
        match self.path {
            Some(path) => {
                writeln!(f, "<Node {}> {}", path.terminal(), self.nodes)?;
                if path.is_empty() {
                    write!(f, "Already at the goal")
                } else {
                    write!(f, "{}", path)
                }
            }
            None => write!(f, "No goal is reachable; {}", self.nodes),
        }
    }
}
