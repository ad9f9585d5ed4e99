//! Act scopes for the Nexa runtime.
//!
//! Test code wraps a body of work in [`ActEnvironment::act`]. While the scope is
//! open, renderer tasks are collected in a shared [`ActQueue`] instead of being
//! handed to the host scheduler. When the outermost scope's body settles, the
//! queue is flushed, then re-checked on every macrotask until nothing is left,
//! and only then does the returned [`ActPromise`] resolve.
//!
//! ```ignore
//! let scheduler = Rc::new(LocalScheduler::new());
//! let env = ActEnvironment::new(scheduler.clone());
//! let value = scheduler.block_on(env.act(|| {
//!     env.schedule_renderer_task(RendererTask::new(|_| Ok(Step::Done)));
//!     Ok(Awaitable::resolved(1))
//! })?)??;
//! ```

pub mod config;
pub mod diagnostics;
mod driver;
pub mod environment;
pub mod error;
pub mod flush;
mod host;
pub mod queue;
pub mod scope;
pub mod state;
pub mod task;
pub mod thenable;

pub use config::{ActConfig, BuildMode};
pub use diagnostics::{Diagnostic, DiagnosticLog, DiagnosticSink, TracingSink};
pub use environment::{ActEnvironment, ActEnvironmentBuilder};
pub use error::{ActError, BoxError};
pub use flush::flush;
pub use queue::ActQueue;
pub use scope::ActPromise;
pub use state::ActQueueState;
pub use task::{RendererTask, Step};
pub use thenable::{Awaitable, Promise, Resolver, Settle, Thenable};
