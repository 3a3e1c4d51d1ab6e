//! Name-keyed callback registry.
//!
//! The registry cuts the boilerplate of wiring a full state set by hand:
//! callbacks are registered under string keys, and the registry assembles
//! one [`State`] per domain value by looking up each value's formatted key.
//! A key nobody registered simply leaves that slot empty (never an error),
//! so a host only provides the hooks it cares about.

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::core::{LifecycleFn, State, StateId, UpdateFn};

/// Assembles a complete state set from callbacks registered under formatted
/// string keys.
///
/// The registry holds three name patterns, one per callback kind. For every
/// domain value, in domain order, each pattern has its `{id}` placeholder
/// replaced with the value's [`name`](StateId::name) and the resulting key
/// is looked up among the registered callbacks. The defaults are
/// `"enter_{id}"`, `"exit_{id}"` and `"update_{id}"`, so for an identifier
/// named `Off` the registry looks for `"enter_Off"`, `"exit_Off"` and
/// `"update_Off"`.
///
/// Registering the same key twice keeps the later callback.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use machinist::{StateMachine, StateRegistry, state_id};
///
/// state_id! {
///     enum LampState {
///         Off,
///         On,
///     }
/// }
///
/// struct Lamp {
///     watts: u32,
/// }
///
/// let lamp = Rc::new(RefCell::new(Lamp { watts: 0 }));
///
/// let on = Rc::clone(&lamp);
/// let off = Rc::clone(&lamp);
/// let registry = StateRegistry::new()
///     .on_enter("enter_On", move || on.borrow_mut().watts = 60)
///     .on_enter("enter_Off", move || off.borrow_mut().watts = 0);
///
/// // No exit or update keys registered: those slots stay empty.
/// let mut machine = StateMachine::from_registry(registry, LampState::Off).unwrap();
/// machine.change_state(LampState::On);
///
/// assert_eq!(lamp.borrow().watts, 60);
/// ```
pub struct StateRegistry<T: StateId> {
    enter_pattern: String,
    exit_pattern: String,
    update_pattern: String,
    enter_fns: HashMap<String, LifecycleFn>,
    exit_fns: HashMap<String, LifecycleFn>,
    update_fns: HashMap<String, UpdateFn>,
    _marker: PhantomData<T>,
}

impl<T: StateId> StateRegistry<T> {
    /// Create a registry with the default key patterns `"enter_{id}"`,
    /// `"exit_{id}"` and `"update_{id}"`.
    pub fn new() -> Self {
        Self::with_patterns("enter_{id}", "exit_{id}", "update_{id}")
    }

    /// Create a registry with caller-supplied key patterns. Each pattern
    /// should contain a single `{id}` placeholder; a pattern without one
    /// resolves to the same key for every domain value.
    pub fn with_patterns(
        enter_pattern: impl Into<String>,
        exit_pattern: impl Into<String>,
        update_pattern: impl Into<String>,
    ) -> Self {
        Self {
            enter_pattern: enter_pattern.into(),
            exit_pattern: exit_pattern.into(),
            update_pattern: update_pattern.into(),
            enter_fns: HashMap::new(),
            exit_fns: HashMap::new(),
            update_fns: HashMap::new(),
            _marker: PhantomData,
        }
    }

    /// Register an enter callback under `key`.
    pub fn on_enter(mut self, key: impl Into<String>, f: impl FnMut() + 'static) -> Self {
        self.enter_fns.insert(key.into(), Box::new(f));
        self
    }

    /// Register an exit callback under `key`.
    pub fn on_exit(mut self, key: impl Into<String>, f: impl FnMut() + 'static) -> Self {
        self.exit_fns.insert(key.into(), Box::new(f));
        self
    }

    /// Register an update callback under `key`.
    pub fn on_update(mut self, key: impl Into<String>, f: impl FnMut(f32) + 'static) -> Self {
        self.update_fns.insert(key.into(), Box::new(f));
        self
    }

    /// Assemble one state per domain value, in domain order, consuming the
    /// registry. Keys that match no domain value are dropped with a warning,
    /// since they are most likely typos.
    pub fn into_states(mut self) -> Vec<State<T>> {
        let states = T::variants()
            .iter()
            .map(|v| {
                let enter = self
                    .enter_fns
                    .remove(&format_key(&self.enter_pattern, v.name()));
                let exit = self
                    .exit_fns
                    .remove(&format_key(&self.exit_pattern, v.name()));
                let update = self
                    .update_fns
                    .remove(&format_key(&self.update_pattern, v.name()));
                State::from_parts(*v, enter, exit, update)
            })
            .collect();

        for key in self
            .enter_fns
            .keys()
            .chain(self.exit_fns.keys())
            .chain(self.update_fns.keys())
        {
            log::warn!("registered callback {key:?} matches no state id");
        }

        states
    }
}

impl<T: StateId> Default for StateRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn format_key(pattern: &str, name: &str) -> String {
    pattern.replace("{id}", name)
}
