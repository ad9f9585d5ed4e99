use crate::error::ActError;
use crate::queue::ActQueue;
use crate::state::ActQueueState;
use crate::task::Step;

/// Clears the flushing flag however `flush` exits.
struct FlushGuard<'a> {
    state: &'a ActQueueState,
}

impl Drop for FlushGuard<'_> {
    fn drop(&mut self) {
        self.state.is_flushing.set(false);
    }
}

/// Drains `queue` in order, starting at its head.
///
/// A task is re-run with its continuation in the same slot until it reports
/// `Step::Done`. If a continuation comes back suspended, the continuation is
/// left in place, finished slots are dropped and control returns to the caller
/// so pending microtasks can resolve. If a task fails, it and every slot before
/// it are dropped and the error is returned; later slots stay queued.
///
/// Calling `flush` while a flush is already running is a no-op.
pub fn flush(state: &ActQueueState, queue: &ActQueue) -> Result<(), ActError> {
    if state.is_flushing.get() {
        tracing::trace!("flush already in progress, skipping nested call");
        return Ok(());
    }
    state.is_flushing.set(true);
    let _guard = FlushGuard { state };

    let mut i = 0;
    // Tasks may push more work while running, so re-check the length each pass.
    while i < queue.len() {
        let Some(mut task) = queue.take(i) else {
            i += 1;
            continue;
        };

        loop {
            state.reset_suspended();
            tracing::trace!(index = i, "running renderer task");
            match task.run(false) {
                Ok(Step::Done) => break,
                Ok(Step::Continue { next, suspended }) => {
                    if suspended || state.did_suspend() {
                        tracing::debug!(index = i, "renderer task suspended, yielding");
                        queue.put(i, next);
                        queue.drop_front(i);
                        return Ok(());
                    }
                    task = next;
                }
                Err(err) => {
                    tracing::debug!(index = i, error = %err, "renderer task failed");
                    queue.drop_front(i + 1);
                    return Err(ActError::Task(err));
                }
            }
        }
        i += 1;
    }

    queue.clear();
    Ok(())
}
