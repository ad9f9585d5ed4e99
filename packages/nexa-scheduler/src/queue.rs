use std::cell::RefCell;
use std::collections::VecDeque;

/// A simple FIFO queue for tasks.
/// Since LocalScheduler is single-threaded, we use RefCell<VecDeque>.
#[derive(Default)]
pub struct TaskQueue {
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
        }
    }

    pub fn push(&self, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(task);
    }

    pub fn pop(&self) -> Option<Box<dyn FnOnce()>> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Runs tasks until the queue is empty, including tasks pushed while draining.
    /// The borrow is released before each task runs so tasks may push re-entrantly.
    pub fn drain(&self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.pop() {
            task();
            ran += 1;
        }
        ran
    }
}
