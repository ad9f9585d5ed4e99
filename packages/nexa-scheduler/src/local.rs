use crate::queue::TaskQueue;
use crate::task::create_waker;
use crate::{Scheduler, SchedulerError};
use std::future::Future;
use std::pin::pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};

/// Deterministic single-threaded event loop.
///
/// Microtasks always drain completely before the next macrotask is observed,
/// which is the ordering the act driver relies on.
#[derive(Default)]
pub struct LocalScheduler {
    microtasks: TaskQueue,
    macrotasks: TaskQueue,
}

impl LocalScheduler {
    pub fn new() -> Self {
        Self {
            microtasks: TaskQueue::new(),
            macrotasks: TaskQueue::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.microtasks.is_empty() && self.macrotasks.is_empty()
    }

    pub fn pending_microtasks(&self) -> usize {
        self.microtasks.len()
    }

    pub fn pending_macrotasks(&self) -> usize {
        self.macrotasks.len()
    }

    /// Drain the microtask queue, including microtasks scheduled by microtasks.
    pub fn run_microtasks(&self) -> usize {
        self.microtasks.drain()
    }

    /// One turn of the event loop: microtasks, one macrotask, microtasks again.
    /// Returns `true` if more work is pending afterwards.
    pub fn tick(&self) -> bool {
        self.run_microtasks();
        if let Some(task) = self.macrotasks.pop() {
            task();
            self.run_microtasks();
        }
        !self.is_idle()
    }

    /// Runs until both queues are empty. Returns the number of macrotasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut turns = 0;
        self.run_microtasks();
        while let Some(task) = self.macrotasks.pop() {
            task();
            self.run_microtasks();
            turns += 1;
        }
        tracing::trace!(turns, "LocalScheduler idle");
        turns
    }

    /// Runs a single unit of work, preferring microtasks.
    fn run_next(&self) -> bool {
        if let Some(task) = self.microtasks.pop() {
            task();
            true
        } else if let Some(task) = self.macrotasks.pop() {
            task();
            true
        } else {
            false
        }
    }

    /// Drives `future` to completion on this event loop.
    ///
    /// The future is polled again right after the unit of work that woke it,
    /// so it observes state exactly as that task left it.
    pub fn block_on<F: Future>(&self, future: F) -> Result<F::Output, SchedulerError> {
        let woken = Arc::new(AtomicBool::new(false));
        let waker = {
            let woken = woken.clone();
            create_waker(move || woken.store(true, Ordering::SeqCst))
        };
        let mut cx = Context::from_waker(&waker);
        let mut future = pin!(future);

        loop {
            if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
                return Ok(output);
            }
            while !woken.swap(false, Ordering::SeqCst) {
                if !self.run_next() {
                    tracing::warn!("block_on stalled: future pending on an idle scheduler");
                    return Err(SchedulerError::Stalled);
                }
            }
        }
    }
}

impl Scheduler for LocalScheduler {
    fn schedule_microtask(&self, task: Box<dyn FnOnce()>) {
        self.microtasks.push(task);
    }

    fn schedule_macrotask(&self, task: Box<dyn FnOnce()>) {
        self.macrotasks.push(task);
    }
}
