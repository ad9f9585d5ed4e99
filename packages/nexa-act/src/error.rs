use thiserror::Error;

/// Error payload carried by body and task failures.
pub type BoxError = Box<dyn std::error::Error + 'static>;

/// Errors surfaced by [`ActEnvironment::act`](crate::ActEnvironment::act) and the queue flusher.
#[derive(Debug, Error)]
pub enum ActError {
    /// `act` was called while the environment is in production mode.
    #[error("act(...) is not supported in production builds.")]
    Unsupported,

    /// The scope body failed, either synchronously or through its awaitable.
    #[error("act scope body failed: {0}")]
    Body(#[source] BoxError),

    /// A renderer task returned an error while the queue was being flushed.
    /// The failing task is dropped; tasks after it stay queued.
    #[error("renderer task failed: {0}")]
    Task(#[source] BoxError),
}

impl ActError {
    pub fn body(err: impl Into<BoxError>) -> Self {
        ActError::Body(err.into())
    }

    pub fn task(err: impl Into<BoxError>) -> Self {
        ActError::Task(err.into())
    }

    /// Short stable label (snake_case) for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ActError::Unsupported => "act_unsupported",
            ActError::Body(_) => "act_body_failed",
            ActError::Task(_) => "act_task_failed",
        }
    }
}
