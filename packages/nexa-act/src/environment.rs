use crate::config::ActConfig;
use crate::diagnostics::{DiagnosticSink, Diagnostics, TracingSink};
use crate::state::ActQueueState;
use nexa_scheduler::Scheduler;
use std::rc::Rc;

/// Owns everything one chain of act scopes shares: the host scheduler, the
/// active queue state and the diagnostic channel.
///
/// Cheap to clone; clones refer to the same environment.
#[derive(Clone)]
pub struct ActEnvironment {
    inner: Rc<Inner>,
}

struct Inner {
    config: ActConfig,
    scheduler: Rc<dyn Scheduler>,
    state: ActQueueState,
    diagnostics: Diagnostics,
}

impl ActEnvironment {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self::builder(scheduler).build()
    }

    pub fn builder(scheduler: Rc<dyn Scheduler>) -> ActEnvironmentBuilder {
        ActEnvironmentBuilder {
            scheduler,
            config: ActConfig::default(),
            sink: Rc::new(TracingSink),
        }
    }

    pub fn config(&self) -> &ActConfig {
        &self.inner.config
    }

    pub fn state(&self) -> &ActQueueState {
        &self.inner.state
    }

    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        self.inner.scheduler.clone()
    }

    pub(crate) fn diagnostics(&self) -> &Diagnostics {
        &self.inner.diagnostics
    }
}

pub struct ActEnvironmentBuilder {
    scheduler: Rc<dyn Scheduler>,
    config: ActConfig,
    sink: Rc<dyn DiagnosticSink>,
}

impl ActEnvironmentBuilder {
    pub fn config(mut self, config: ActConfig) -> Self {
        self.config = config;
        self
    }

    pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    pub fn build(self) -> ActEnvironment {
        tracing::debug!(mode = ?self.config.build_mode, "creating act environment");
        ActEnvironment {
            inner: Rc::new(Inner {
                config: self.config,
                scheduler: self.scheduler,
                state: ActQueueState::new(),
                diagnostics: Diagnostics::new(self.sink),
            }),
        }
    }
}
