//! Shared test collaborators.
//!
//! `DiagnosticsLog` is a sequential record of lifecycle invocations, and
//! `DiagnosticState` is a state that appends to it. Tests build an expected
//! sequence with the `enter`/`exit`/`update` helpers and compare for exact
//! sequence-and-value equality.

use std::cell::RefCell;
use std::rc::Rc;

use machinist::{StateHandler, StateId};

/// Which lifecycle callback fired.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Callback {
    Enter,
    Exit,
    Update,
}

/// One recorded lifecycle invocation. `dt` is present only for updates.
#[derive(Clone, PartialEq, Debug)]
pub struct LogEntry<T> {
    pub id: T,
    pub call: Callback,
    pub dt: Option<f32>,
}

/// Order-preserving record of lifecycle invocations. Clones share the same
/// underlying buffer, so every instrumented state appends to one sequence.
#[derive(Clone)]
pub struct DiagnosticsLog<T> {
    entries: Rc<RefCell<Vec<LogEntry<T>>>>,
}

impl<T: StateId> DiagnosticsLog<T> {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn record(&self, call: Callback, id: T) {
        self.entries.borrow_mut().push(LogEntry { id, call, dt: None });
    }

    pub fn record_update(&self, id: T, dt: f32) {
        self.entries.borrow_mut().push(LogEntry {
            id,
            call: Callback::Update,
            dt: Some(dt),
        });
    }

    pub fn entries(&self) -> Vec<LogEntry<T>> {
        self.entries.borrow().clone()
    }
}

pub fn enter<T>(id: T) -> LogEntry<T> {
    LogEntry {
        id,
        call: Callback::Enter,
        dt: None,
    }
}

pub fn exit<T>(id: T) -> LogEntry<T> {
    LogEntry {
        id,
        call: Callback::Exit,
        dt: None,
    }
}

pub fn update<T>(id: T, dt: f32) -> LogEntry<T> {
    LogEntry {
        id,
        call: Callback::Update,
        dt: Some(dt),
    }
}

/// A state that records every lifecycle call into a shared log.
pub struct DiagnosticState<T> {
    id: T,
    log: DiagnosticsLog<T>,
}

impl<T: StateId> DiagnosticState<T> {
    pub fn new(id: T, log: &DiagnosticsLog<T>) -> Self {
        Self {
            id,
            log: log.clone(),
        }
    }
}

impl<T: StateId> StateHandler<T> for DiagnosticState<T> {
    fn id(&self) -> T {
        self.id
    }

    fn enter(&mut self) {
        self.log.record(Callback::Enter, self.id);
    }

    fn exit(&mut self) {
        self.log.record(Callback::Exit, self.id);
    }

    fn update(&mut self, dt: f32) {
        self.log.record_update(self.id, dt);
    }
}
