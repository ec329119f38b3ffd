//! Deferred buffer mutations.
//!
//! Tasks represent reactions to a change notification that must not run
//! inside the notification itself: the widget forbids structural mutation
//! while a change is being dispatched. The session records at most one task
//! per notification and the host loop drains the queue on its next turn,
//! before any further input is delivered.

use std::collections::VecDeque;

/// A single deferred buffer mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTask {
    /// Insert the matching closer at `pos`, parking the caret before it so
    /// the pair hugs the caret
    InsertCloser { pos: usize, closer: char },
    /// Remove the duplicate closer at `pos` and leave the caret there,
    /// stepping it over the closer that was already present
    AbsorbCloser { pos: usize },
    /// Insert suggestion text at `pos`, selected backwards (caret at `pos`,
    /// anchor past the inserted text) so ordinary typing replaces it
    StageSuggestion { pos: usize, text: String },
}

/// FIFO queue of deferred tasks.
///
/// Tasks run in the order their notifications arrived and exactly once.
/// There is no cancellation; a scheduled task always runs unless the whole
/// queue is torn down with the session.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<EditTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task for the next drain
    pub fn schedule(&mut self, task: EditTask) {
        self.tasks.push_back(task);
    }

    /// Take the oldest pending task
    pub fn pop(&mut self) -> Option<EditTask> {
        self.tasks.pop_front()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop everything pending (session teardown)
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
