//! Cost-ordered frontier shared by the greedy and A* engines.

use crate::search::{heuristics::HeuristicValue, Cell};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// A priority queue of cells keyed by `(cost, insertion sequence)`, lowest
/// first. Among equal costs the earliest inserted cell wins. Lowering the
/// cost of a queued cell keeps its sequence number, so the selection is the
/// first minimum of an insertion-ordered scan.
#[derive(Debug)]
pub struct OpenList {
    queue: PriorityQueue<Cell, Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
}

impl OpenList {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    /// Queue `cell` with `cost` behind every cell already queued at that
    /// cost. A cell that is already queued is requeued with a fresh sequence.
    pub fn push(&mut self, cell: Cell, cost: HeuristicValue) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(cell, Reverse((cost, sequence)));
    }

    /// Lower the cost of a queued cell. Returns `false` if the cell is not
    /// queued or `cost` is not lower.
    pub fn decrease_cost(&mut self, cell: Cell, cost: HeuristicValue) -> bool {
        let Some(&Reverse((current, sequence))) = self.queue.get_priority(&cell) else {
            return false;
        };
        if cost >= current {
            return false;
        }
        self.queue.change_priority(&cell, Reverse((cost, sequence)));
        true
    }

    pub fn pop(&mut self) -> Option<(Cell, HeuristicValue)> {
        self.queue
            .pop()
            .map(|(cell, Reverse((cost, _)))| (cell, cost))
    }

    pub fn cost(&self, cell: Cell) -> Option<HeuristicValue> {
        self.queue
            .get_priority(&cell)
            .map(|Reverse((cost, _))| *cost)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.queue.get(&cell).is_some()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for OpenList {
    fn default() -> Self {
        Self::new()
    }
}
