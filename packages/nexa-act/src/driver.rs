use crate::environment::ActEnvironment;
use crate::flush::flush;
use crate::thenable::Settle;

/// Keeps flushing the active queue, one macrotask at a time, until a turn
/// finds it empty. Work queued by microtasks in between is picked up on the
/// next turn. Settles with `value` once the queue is empty, or with the first
/// flush error.
pub(crate) fn drain_async<T: 'static>(env: ActEnvironment, value: T, settle: Settle<T>) {
    let state = env.state();
    let Some(queue) = state.current() else {
        settle(Ok(value));
        return;
    };

    if queue.is_empty() {
        tracing::debug!("act queue drained");
        state.set_current(None);
        settle(Ok(value));
        return;
    }

    tracing::debug!(pending = queue.len(), "draining asynchronously scheduled act work");
    match flush(state, &queue) {
        Ok(()) => {
            let next = env.clone();
            env.scheduler()
                .schedule_macrotask(Box::new(move || drain_async(next, value, settle)));
        }
        Err(err) => settle(Err(err)),
    }
}
