#![allow(dead_code)]

use nexa_act::{
    ActConfig, ActEnvironment, ActError, ActPromise, DiagnosticLog, RendererTask, Step, Thenable,
};
use nexa_scheduler::LocalScheduler;
use std::cell::RefCell;
use std::rc::Rc;

pub type Log = Rc<RefCell<Vec<String>>>;

pub struct Harness {
    pub scheduler: Rc<LocalScheduler>,
    pub env: ActEnvironment,
    pub diagnostics: DiagnosticLog,
    pub log: Log,
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn harness() -> Harness {
    init_tracing();
    let scheduler = Rc::new(LocalScheduler::new());
    let diagnostics = DiagnosticLog::new();
    let env = ActEnvironment::builder(scheduler.clone())
        .config(ActConfig::development())
        .diagnostics(diagnostics.clone())
        .build();
    Harness {
        scheduler,
        env,
        diagnostics,
        log: Rc::new(RefCell::new(Vec::new())),
    }
}

pub fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// Task that logs `name` and finishes.
pub fn record(log: &Log, name: &str) -> RendererTask {
    let log = log.clone();
    let name = name.to_string();
    RendererTask::new(move |_| {
        log.borrow_mut().push(name);
        Ok(Step::Done)
    })
}

/// Task that logs `name` and fails with `message`.
pub fn failing(log: &Log, name: &str, message: &'static str) -> RendererTask {
    let log = log.clone();
    let name = name.to_string();
    RendererTask::new(move |_| {
        log.borrow_mut().push(name);
        Err(message.into())
    })
}

/// Attaches a continuation that stores the outcome.
pub fn capture<T: 'static>(promise: ActPromise<T>) -> Rc<RefCell<Option<Result<T, ActError>>>> {
    let slot = Rc::new(RefCell::new(None));
    let target = slot.clone();
    Box::new(promise).then(Box::new(move |result: Result<T, ActError>| {
        *target.borrow_mut() = Some(result);
    }));
    slot
}
