use crate::error::BoxError;
use std::fmt;

/// What a renderer task reports after one invocation.
#[derive(Debug)]
pub enum Step {
    /// The task finished; it is never invoked again.
    Done,
    /// Work remains. `next` replaces the task in its queue slot.
    /// `suspended` means the task is waiting on a value that has not resolved yet.
    Continue { next: RendererTask, suspended: bool },
}

impl Step {
    pub fn continue_with(next: RendererTask) -> Self {
        Step::Continue {
            next,
            suspended: false,
        }
    }

    pub fn suspend_with(next: RendererTask) -> Self {
        Step::Continue {
            next,
            suspended: true,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }
}

type TaskFn = dyn FnOnce(bool) -> Result<Step, BoxError>;

/// Opaque unit of renderer work. Invoked with a "did time out" flag.
pub struct RendererTask {
    callback: Box<TaskFn>,
}

impl RendererTask {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(bool) -> Result<Step, BoxError> + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    pub fn run(self, did_timeout: bool) -> Result<Step, BoxError> {
        (self.callback)(did_timeout)
    }
}

impl fmt::Debug for RendererTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RendererTask(..)")
    }
}
