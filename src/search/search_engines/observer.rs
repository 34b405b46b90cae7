//! Hooks for watching a search as it runs, e.g. to animate it.

use crate::search::{Cell, Path};
use tracing::{debug, trace};

/// Receives search progress synchronously. The engine does not continue
/// until a call returns.
pub trait SearchObserver {
    /// Called once a cell has been taken off the frontier and marked visited.
    fn on_expand(&mut self, _cell: Cell) {}

    /// Called with the final route when a goal is reached.
    fn on_path_found(&mut self, _path: &Path) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_expand(&mut self, cell: Cell) {
        trace!(expanded = %cell);
    }

    fn on_path_found(&mut self, path: &Path) {
        debug!(path_length = path.len(), terminal = %path.terminal(), "path found");
    }
}

/// Keeps every event, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub expanded: Vec<Cell>,
    pub paths: Vec<Path>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_expand(&mut self, cell: Cell) {
        self.expanded.push(cell);
    }

    fn on_path_found(&mut self, path: &Path) {
        self.paths.push(path.clone());
    }
}

/// Passes expansions through to `inner` but holds back per-leg paths, so a
/// planner running several searches can report only the combined route.
#[derive(Debug)]
pub(crate) struct LegObserver<'a, O: ?Sized> {
    inner: &'a mut O,
}

impl<'a, O: SearchObserver + ?Sized> LegObserver<'a, O> {
    pub(crate) fn new(inner: &'a mut O) -> Self {
        Self { inner }
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for LegObserver<'_, O> {
    fn on_expand(&mut self, cell: Cell) {
        self.inner.on_expand(cell);
    }
}
