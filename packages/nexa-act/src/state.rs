use crate::queue::ActQueue;
use crate::task::RendererTask;
use std::cell::{Cell, RefCell};

/// Scheduler state shared between act scopes and the renderer.
///
/// When `current()` is `Some`, the renderer is inside an act scope and must push
/// its tasks onto that queue instead of scheduling them with the host.
/// Single-threaded: plain `Cell`/`RefCell` mutation is enough.
#[derive(Default)]
pub struct ActQueueState {
    current: RefCell<Option<ActQueue>>,
    is_batching: Cell<bool>,
    did_suspend: Cell<bool>,
    pub(crate) is_flushing: Cell<bool>,
    pub(crate) depth: Cell<usize>,
}

impl ActQueueState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<ActQueue> {
        self.current.borrow().clone()
    }

    pub fn set_current(&self, queue: Option<ActQueue>) {
        *self.current.borrow_mut() = queue;
    }

    pub fn is_active(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Pushes `task` onto the active queue, or hands it back if no scope is active.
    pub fn enqueue(&self, task: RendererTask) -> Result<(), RendererTask> {
        match self.current() {
            Some(queue) => {
                queue.push(task);
                Ok(())
            }
            None => Err(task),
        }
    }

    /// Updates made while this is set should be coalesced by the renderer.
    pub fn is_batching(&self) -> bool {
        self.is_batching.get()
    }

    pub fn set_batching(&self, batching: bool) {
        self.is_batching.set(batching);
    }

    /// Host side channel: the task being run suspended on a pending value.
    pub fn mark_suspended(&self) {
        self.did_suspend.set(true);
    }

    pub fn did_suspend(&self) -> bool {
        self.did_suspend.get()
    }

    pub(crate) fn reset_suspended(&self) {
        self.did_suspend.set(false);
    }

    pub fn is_flushing(&self) -> bool {
        self.is_flushing.get()
    }

    /// Number of act scopes currently open.
    pub fn scope_depth(&self) -> usize {
        self.depth.get()
    }
}
