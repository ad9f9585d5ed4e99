use crate::driver::drain_async;
use crate::environment::ActEnvironment;
use crate::error::ActError;
use crate::flush::flush;
use crate::queue::ActQueue;
use crate::thenable::{Awaitable, Promise, Settle, Thenable};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::panic::Location;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

/// Activation record for one `act` call.
struct ActScope {
    prev_queue: Option<ActQueue>,
    prev_depth: usize,
}

impl ActScope {
    fn pop(&self, env: &ActEnvironment) {
        let state = env.state();
        env.diagnostics()
            .check_pop_depth(self.prev_depth, state.scope_depth());
        state.depth.set(self.prev_depth);
        // The outermost queue stays installed until the driver sees it empty.
        if let Some(prev) = &self.prev_queue {
            state.set_current(Some(prev.clone()));
        }
    }
}

impl ActEnvironment {
    /// Runs `body` inside an act scope.
    ///
    /// Renderer work queued while the scope is open lands in the shared act
    /// queue. When the outermost scope's body settles, the queue is flushed and
    /// then re-checked every macrotask until empty; only then does the returned
    /// promise resolve. Nested scopes resolve without flushing.
    ///
    /// Fails synchronously in production mode or if `body` itself returns `Err`.
    #[track_caller]
    pub fn act<T, F>(&self, body: F) -> Result<ActPromise<T>, ActError>
    where
        T: 'static,
        F: FnOnce() -> Result<Awaitable<T>, ActError>,
    {
        if !self.config().is_development() {
            return Err(ActError::Unsupported);
        }
        let location = Location::caller().to_string();

        let state = self.state();
        let prev_batching = state.is_batching();
        let scope = ActScope {
            prev_queue: state.current(),
            prev_depth: state.scope_depth(),
        };
        state.depth.set(scope.prev_depth + 1);
        let queue = scope.prev_queue.clone().unwrap_or_default();
        state.set_current(Some(queue.clone()));
        state.set_batching(true);
        tracing::debug!(depth = scope.prev_depth, %location, "entering act scope");

        let result = body();
        // Batching follows the call stack, not the scope's async lifetime.
        state.set_batching(prev_batching);

        let inner: Box<dyn Thenable<T>> = match result {
            Ok(Awaitable::Resolved(value)) => Box::new(Promise::resolved(self.scheduler(), value)),
            Ok(Awaitable::Pending(thenable)) => thenable,
            Err(err) => {
                tracing::debug!(error = %err, "act body failed synchronously");
                scope.pop(self);
                return Err(err);
            }
        };

        let awaited = Rc::new(Cell::new(false));
        self.warn_if_not_awaited(awaited.clone(), location);

        let env = self.clone();
        let start = move |settle: Settle<T>| {
            inner.then(Box::new(move |result: Result<T, ActError>| {
                scope.pop(&env);
                match result {
                    Ok(value) if scope.prev_depth == 0 => {
                        tracing::debug!("leaving outermost act scope, flushing");
                        if let Err(err) = flush(env.state(), &queue) {
                            settle(Err(err));
                            return;
                        }
                        let next = env.clone();
                        env.scheduler().schedule_macrotask(Box::new(move || {
                            drain_async(next, value, settle)
                        }));
                    }
                    Ok(value) => settle(Ok(value)),
                    Err(err) => settle(Err(err)),
                }
            }));
        };

        Ok(ActPromise {
            start: Some(Box::new(start)),
            awaited,
            outcome: None,
        })
    }

    /// Two microtask hops: enough for a promise returned (not awaited) from an
    /// async helper to be awaited by its caller.
    fn warn_if_not_awaited(&self, awaited: Rc<Cell<bool>>, location: String) {
        let env = self.clone();
        self.scheduler().schedule_microtask(Box::new(move || {
            let scheduler = env.scheduler();
            scheduler.schedule_microtask(Box::new(move || {
                if !awaited.get() {
                    env.diagnostics().missing_await(&location);
                }
            }));
        }));
    }
}

struct Outcome<T> {
    result: Option<Result<T, ActError>>,
    waker: Option<Waker>,
}

/// Result of [`ActEnvironment::act`].
///
/// Nothing is flushed until a continuation is attached, either with
/// [`Thenable::then`] or by awaiting it.
pub struct ActPromise<T> {
    start: Option<Box<dyn FnOnce(Settle<T>)>>,
    awaited: Rc<Cell<bool>>,
    outcome: Option<Rc<RefCell<Outcome<T>>>>,
}

impl<T> ActPromise<T> {
    fn subscribe(&mut self, settle: Settle<T>) {
        self.awaited.set(true);
        if let Some(start) = self.start.take() {
            start(settle);
        }
    }
}

impl<T: 'static> Thenable<T> for ActPromise<T> {
    fn then(mut self: Box<Self>, settle: Settle<T>) {
        self.subscribe(settle);
    }
}

impl<T: 'static> Future for ActPromise<T> {
    type Output = Result<T, ActError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.outcome.is_none() {
            let outcome = Rc::new(RefCell::new(Outcome {
                result: None,
                waker: None,
            }));
            this.outcome = Some(outcome.clone());
            this.subscribe(Box::new(move |result: Result<T, ActError>| {
                let waker = {
                    let mut slot = outcome.borrow_mut();
                    slot.result = Some(result);
                    slot.waker.take()
                };
                if let Some(waker) = waker {
                    waker.wake();
                }
            }));
        }
        let Some(outcome) = this.outcome.as_ref() else {
            return Poll::Pending;
        };

        let mut slot = outcome.borrow_mut();
        match slot.result.take() {
            Some(result) => Poll::Ready(result),
            None => {
                slot.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}
