//! The state machine engine.

use std::collections::HashMap;

use crate::core::{State, StateHandler, StateId};
use crate::machine::error::MachineError;
use crate::registry::StateRegistry;

/// A state machine over the closed identifier domain `T`.
///
/// The machine owns one state per domain value and guarantees exactly one of
/// them is active at any instant. Construction validates that the supplied
/// states exactly cover the domain, then immediately enters the initial
/// state; afterwards the caller drives the machine with [`update`] once per
/// tick and [`change_state`] on external triggers.
///
/// `S` defaults to the closure-backed [`State`], but any
/// [`StateHandler`] implementation works, which is how tests instrument
/// lifecycle calls.
///
/// The machine is single-threaded by design: callbacks run synchronously on
/// the calling thread, and there is no internal locking. Drive one machine
/// from one consistent tick source.
///
/// [`update`]: StateMachine::update
/// [`change_state`]: StateMachine::change_state
///
/// # Example
///
/// ```rust
/// use machinist::{State, StateMachine, state_id};
///
/// state_id! {
///     enum LampState {
///         Off,
///         On,
///     }
/// }
///
/// let states = vec![
///     State::new(LampState::Off).on_enter(|| println!("dark")),
///     State::new(LampState::On).on_enter(|| println!("light")),
/// ];
///
/// // Prints "dark": the initial state is entered immediately.
/// let mut machine = StateMachine::new(states, LampState::Off).unwrap();
///
/// machine.update(0.016);
/// machine.change_state(LampState::On); // prints "light"
/// ```
pub struct StateMachine<T: StateId, S: StateHandler<T> = State<T>> {
    states: HashMap<T, S>,
    current: T,
}

impl<T: StateId, S: StateHandler<T>> StateMachine<T, S> {
    /// Build a machine from `states` and enter `initial` immediately.
    ///
    /// The supplied states must contain exactly one entry per domain value.
    /// Fails with [`MachineError::MissingStates`] when any value is absent
    /// (all missing values are named, in domain order) and with
    /// [`MachineError::DuplicateStates`] when any value appears more than
    /// once. Missing values are reported first when both problems exist.
    pub fn new(states: Vec<S>, initial: T) -> Result<Self, MachineError> {
        let supplied: Vec<T> = states.iter().map(|s| s.id()).collect();

        let missing = missing_ids::<T>(&supplied);
        if !missing.is_empty() {
            return Err(MachineError::MissingStates(join_names(&missing)));
        }

        // With no ids missing, the supplied count can only differ from the
        // domain size by containing duplicates.
        if supplied.len() != T::variants().len() {
            let duplicates = duplicate_ids::<T>(&supplied);
            return Err(MachineError::DuplicateStates(join_names(&duplicates)));
        }

        let mut map = HashMap::with_capacity(states.len());
        for state in states {
            map.insert(state.id(), state);
        }

        let mut machine = Self {
            states: map,
            current: initial,
        };
        log::debug!("state machine starting in {}", initial.name());
        machine.active_mut().enter();
        Ok(machine)
    }

    /// The identifier of the active state.
    pub fn current(&self) -> T {
        self.current
    }

    /// Transition to `desired`: exit the active state, then enter the new
    /// one. Requesting the already-active state is a no-op; a state is
    /// never exited and re-entered into itself.
    ///
    /// Callback failures propagate unmodified, and no rollback is attempted:
    /// a panic inside the old state's exit callback unwinds out of this call
    /// with `current` still pointing at the old, partially-exited state.
    ///
    /// # Panics
    ///
    /// Panics if no state is registered for `desired`. Coverage is enforced
    /// at construction, so this is only reachable when a hand-written
    /// [`StateId::variants`] disagrees with the values actually in use.
    pub fn change_state(&mut self, desired: T) {
        if desired == self.current {
            return;
        }

        log::debug!("{} -> {}", self.current.name(), desired.name());
        self.active_mut().exit();
        self.current = desired;
        self.active_mut().enter();
    }

    /// Drive the active state's update callback with the elapsed time since
    /// the previous tick, in seconds. No other state is touched.
    pub fn update(&mut self, dt: f32) {
        log::trace!("update {} ({dt}s)", self.current.name());
        self.active_mut().update(dt);
    }

    fn active_mut(&mut self) -> &mut S {
        let id = self.current;
        match self.states.get_mut(&id) {
            Some(state) => state,
            None => panic!("no state registered for {}", id.name()),
        }
    }
}

impl<T: StateId, S: StateHandler<T>> std::fmt::Debug for StateMachine<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<T: StateId> StateMachine<T, State<T>> {
    /// Build a machine from the states assembled by `registry`, then enter
    /// `initial` immediately.
    ///
    /// The registry produces exactly one state per domain value, so this
    /// construction path cannot fail the coverage checks; the `Result` is
    /// kept so both paths share one signature shape.
    pub fn from_registry(registry: StateRegistry<T>, initial: T) -> Result<Self, MachineError> {
        Self::new(registry.into_states(), initial)
    }
}

/// Domain values absent from `supplied`, in domain order.
fn missing_ids<T: StateId>(supplied: &[T]) -> Vec<T> {
    T::variants()
        .iter()
        .copied()
        .filter(|v| !supplied.contains(v))
        .collect()
}

/// Remove one occurrence of each domain value from `supplied`; whatever is
/// left over was supplied more than once. Order follows the supplied
/// collection, and an id supplied three times is reported twice.
fn duplicate_ids<T: StateId>(supplied: &[T]) -> Vec<T> {
    let mut extras = supplied.to_vec();
    for v in T::variants() {
        if let Some(found) = extras.iter().position(|id| id == v) {
            extras.remove(found);
        }
    }
    extras
}

fn join_names<T: StateId>(ids: &[T]) -> String {
    ids.iter()
        .map(|id| id.name())
        .collect::<Vec<_>>()
        .join(", ")
}
