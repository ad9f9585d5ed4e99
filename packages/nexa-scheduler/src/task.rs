use futures::task::{ArcWake, waker};
use std::sync::Arc;
use std::task::Waker;

/// Waker that forwards `wake()` to a callback.
/// `Waker` must be `Send + Sync` even though LocalScheduler is not, so the
/// callback usually just flips an atomic flag that the event loop polls.
struct CallbackWaker {
    wake_fn: Box<dyn Fn() + Send + Sync>,
}

impl ArcWake for CallbackWaker {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        (arc_self.wake_fn)();
    }
}

pub fn create_waker(f: impl Fn() + Send + Sync + 'static) -> Waker {
    let callback = CallbackWaker {
        wake_fn: Box::new(f),
    };
    waker(Arc::new(callback))
}
