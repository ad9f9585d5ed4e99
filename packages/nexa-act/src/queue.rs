use crate::task::RendererTask;
use std::cell::RefCell;
use std::rc::Rc;

/// Ordered queue of renderer tasks shared by every scope in one act chain.
///
/// Cloning the handle shares the queue. Slots are `Option` so the flusher can
/// move a task out while it runs without shifting the entries behind it.
#[derive(Clone, Default)]
pub struct ActQueue {
    slots: Rc<RefCell<Vec<Option<RendererTask>>>>,
}

impl ActQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, task: RendererTask) {
        self.slots.borrow_mut().push(Some(task));
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    /// Two handles refer to the same queue.
    pub fn ptr_eq(&self, other: &ActQueue) -> bool {
        Rc::ptr_eq(&self.slots, &other.slots)
    }

    pub(crate) fn take(&self, index: usize) -> Option<RendererTask> {
        self.slots.borrow_mut().get_mut(index).and_then(Option::take)
    }

    pub(crate) fn put(&self, index: usize, task: RendererTask) {
        if let Some(slot) = self.slots.borrow_mut().get_mut(index) {
            *slot = Some(task);
        }
    }

    /// Drops the first `count` slots.
    pub(crate) fn drop_front(&self, count: usize) {
        let mut slots = self.slots.borrow_mut();
        let count = count.min(slots.len());
        slots.drain(..count);
    }

    pub(crate) fn clear(&self) {
        self.slots.borrow_mut().clear();
    }
}

impl std::fmt::Debug for ActQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActQueue").field("len", &self.len()).finish()
    }
}
