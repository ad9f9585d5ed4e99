pub mod local;
pub mod queue;
pub mod task;

use thiserror::Error;

/// The host scheduling primitives the act machinery and renderers consume.
/// This allows Nexa to run on generic executors (Tokio, Wasm, etc.) or strictly local ones.
pub trait Scheduler {
    /// Schedule a microtask (highest priority, runs before any macrotask).
    /// Used for Promise resolution, settle callbacks, etc.
    fn schedule_microtask(&self, task: Box<dyn FnOnce()>);

    /// Schedule a macrotask. It only runs once the microtask queue is empty.
    fn schedule_macrotask(&self, task: Box<dyn FnOnce()>);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// `block_on` was waiting on a future but no queued work could ever wake it.
    #[error("future is still pending but the scheduler has no more work")]
    Stalled,
}

pub use local::LocalScheduler;
pub use queue::TaskQueue;
