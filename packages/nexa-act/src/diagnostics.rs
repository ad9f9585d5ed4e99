//! Advisory diagnostics for misused act scopes.
//!
//! Nothing here changes control flow: a diagnostic is reported to the
//! environment's [`DiagnosticSink`] and execution carries on.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An act scope's promise had no continuation attached in time.
    MissingAwait { location: String },
    /// A scope was popped while scopes it did not open were still open.
    OverlappingScopes {
        entered_depth: usize,
        current_depth: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingAwait { location } => write!(
                f,
                "`act` has to be awaited to apply all state updates. \
                 You called `act()` without await at {location}"
            ),
            Diagnostic::OverlappingScopes { .. } => f.write_str(
                "You seem to have overlapping act() calls, this is not supported. \
                 Be sure to await previous act() calls before making a new one.",
            ),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Default sink: logs through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::error!("{}", diagnostic);
    }
}

/// Sink that keeps every diagnostic in memory. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticLog {
    entries: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn count_missing_await(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|d| matches!(d, Diagnostic::MissingAwait { .. }))
            .count()
    }

    pub fn count_overlapping(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|d| matches!(d, Diagnostic::OverlappingScopes { .. }))
            .count()
    }

    pub fn export_json(&self) -> String {
        serde_json::to_string(&*self.entries.borrow()).unwrap_or_default()
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.entries.borrow_mut().push(diagnostic.clone());
    }
}

pub(crate) struct Diagnostics {
    sink: Rc<dyn DiagnosticSink>,
    warned_no_await: Cell<bool>,
}

impl Diagnostics {
    pub(crate) fn new(sink: Rc<dyn DiagnosticSink>) -> Self {
        Self {
            sink,
            warned_no_await: Cell::new(false),
        }
    }

    /// Reports a missing await, only the first time per environment.
    pub(crate) fn missing_await(&self, location: &str) {
        if self.warned_no_await.replace(true) {
            return;
        }
        self.sink.report(&Diagnostic::MissingAwait {
            location: location.to_string(),
        });
    }

    /// Pops are expected to happen one level below the current depth.
    pub(crate) fn check_pop_depth(&self, entered_depth: usize, current_depth: usize) {
        if current_depth.checked_sub(1) != Some(entered_depth) {
            self.sink.report(&Diagnostic::OverlappingScopes {
                entered_depth,
                current_depth,
            });
        }
    }
}
