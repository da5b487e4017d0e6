//! Deferred UI actions
//!
//! Focus and select must wait until the current render pass has produced
//! the elements they target. A [`Scheduler`] decides when a queued
//! [`UiTask`] becomes due; the orchestrator applies due tasks to its
//! [`UiSurface`](crate::capability::UiSurface).

use crate::capability::Selector;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Focus,
    Select,
}

/// One deferred action against a named target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiTask {
    pub action: UiAction,
    pub target: Selector,
}

impl UiTask {
    pub fn focus(target: Selector) -> Self {
        Self { action: UiAction::Focus, target }
    }

    pub fn select(target: Selector) -> Self {
        Self { action: UiAction::Select, target }
    }
}

/// Timing policy for deferred UI tasks. Tasks cannot be cancelled.
pub trait Scheduler {
    /// Accept a task. Returns it back if it is due right away.
    fn defer(&mut self, task: UiTask) -> Option<UiTask>;

    /// Tasks that became due since the last call, in scheduling order
    fn take_due(&mut self) -> Vec<UiTask>;
}

/// Holds tasks until the host reports the render pass finished
#[derive(Debug, Default)]
pub struct NextTick {
    queue: VecDeque<UiTask>,
}

impl NextTick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Scheduler for NextTick {
    fn defer(&mut self, task: UiTask) -> Option<UiTask> {
        self.queue.push_back(task);
        None
    }

    fn take_due(&mut self) -> Vec<UiTask> {
        self.queue.drain(..).collect()
    }
}

/// Runs every task as soon as it is scheduled
#[derive(Debug, Default, Clone, Copy)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn defer(&mut self, task: UiTask) -> Option<UiTask> {
        Some(task)
    }

    fn take_due(&mut self) -> Vec<UiTask> {
        Vec::new()
    }
}
