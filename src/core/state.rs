//! Closure-backed states.
//!
//! [`State`] is the workhorse implementation of
//! [`StateHandler`](super::handler::StateHandler): an identifier bound to up
//! to three optional callbacks. Slots left empty are simply skipped when the
//! machine drives the state, so a state with no callbacks is legal and inert.

use super::handler::StateHandler;
use super::id::StateId;

/// Boxed enter/exit callback. Runs on whichever thread drives the machine.
pub type LifecycleFn = Box<dyn FnMut()>;

/// Boxed update callback. Receives the elapsed time since the previous tick,
/// in seconds.
pub type UpdateFn = Box<dyn FnMut(f32)>;

/// An immutable binding of an identifier to optional lifecycle callbacks.
///
/// Built with a consuming fluent API; any subset of the three slots may be
/// filled. Invoking an empty slot is a no-op, never an error.
///
/// Callbacks are `FnMut` closures, so they can mutate captured host state
/// (typically through an `Rc<RefCell<..>>` handle to the owning object). The
/// state holds the callbacks but does not own the host.
///
/// # Example
///
/// ```rust
/// use machinist::{State, StateId};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum LampState {
///     On,
///     Off,
/// }
///
/// impl StateId for LampState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::On => "On",
///             Self::Off => "Off",
///         }
///     }
///
///     fn variants() -> &'static [Self] {
///         &[Self::On, Self::Off]
///     }
/// }
///
/// let on = State::new(LampState::On)
///     .on_enter(|| println!("light!"))
///     .on_update(|dt| println!("burning for another {dt}s"));
///
/// // No exit callback: exiting `on` will be a no-op.
/// let off = State::new(LampState::Off);
/// ```
pub struct State<T: StateId> {
    id: T,
    on_enter: Option<LifecycleFn>,
    on_exit: Option<LifecycleFn>,
    on_update: Option<UpdateFn>,
}

impl<T: StateId> State<T> {
    /// Create a state for `id` with every callback slot empty.
    pub fn new(id: T) -> Self {
        Self {
            id,
            on_enter: None,
            on_exit: None,
            on_update: None,
        }
    }

    /// Assemble a state from pre-boxed callback slots.
    pub(crate) fn from_parts(
        id: T,
        on_enter: Option<LifecycleFn>,
        on_exit: Option<LifecycleFn>,
        on_update: Option<UpdateFn>,
    ) -> Self {
        Self {
            id,
            on_enter,
            on_exit,
            on_update,
        }
    }

    /// Bind the enter callback.
    pub fn on_enter(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Bind the exit callback.
    pub fn on_exit(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_exit = Some(Box::new(f));
        self
    }

    /// Bind the update callback.
    pub fn on_update(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }
}

impl<T: StateId> StateHandler<T> for State<T> {
    fn id(&self) -> T {
        self.id
    }

    fn enter(&mut self) {
        if let Some(f) = self.on_enter.as_mut() {
            f();
        }
    }

    fn exit(&mut self) {
        if let Some(f) = self.on_exit.as_mut() {
            f();
        }
    }

    fn update(&mut self, dt: f32) {
        if let Some(f) = self.on_update.as_mut() {
            f(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum SingleId {
        Single,
    }

    impl StateId for SingleId {
        fn name(&self) -> &'static str {
            "Single"
        }

        fn variants() -> &'static [Self] {
            &[Self::Single]
        }
    }

    #[test]
    fn enter_invokes_bound_callback() {
        let entered = Rc::new(Cell::new(false));
        let flag = Rc::clone(&entered);
        let mut state = State::new(SingleId::Single).on_enter(move || flag.set(true));

        state.enter();

        assert!(entered.get());
    }

    #[test]
    fn exit_invokes_bound_callback() {
        let exited = Rc::new(Cell::new(false));
        let flag = Rc::clone(&exited);
        let mut state = State::new(SingleId::Single).on_exit(move || flag.set(true));

        state.exit();

        assert!(exited.get());
    }

    #[test]
    fn update_invokes_bound_callback_with_elapsed_time() {
        let reported = Rc::new(Cell::new(0.0f32));
        let slot = Rc::clone(&reported);
        let mut state = State::new(SingleId::Single).on_update(move |dt| slot.set(dt));

        state.update(1.1);

        assert_eq!(reported.get(), 1.1);
    }

    #[test]
    fn empty_slots_are_tolerated() {
        let mut state = State::new(SingleId::Single);

        state.enter();
        state.update(0.0);
        state.exit();
    }

    #[test]
    fn partially_bound_state_skips_empty_slots() {
        let entered = Rc::new(Cell::new(0u32));
        let count = Rc::clone(&entered);
        let mut state = State::new(SingleId::Single).on_enter(move || count.set(count.get() + 1));

        state.enter();
        state.exit();
        state.update(0.25);

        assert_eq!(entered.get(), 1);
    }

    #[test]
    fn callbacks_may_mutate_captured_host_state() {
        let ticks = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&ticks);
        let mut state = State::new(SingleId::Single).on_update(move |_| {
            counter.set(counter.get() + 1);
        });

        state.update(0.016);
        state.update(0.016);
        state.update(0.016);

        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn id_reports_the_bound_identifier() {
        let state = State::new(SingleId::Single);
        assert_eq!(state.id(), SingleId::Single);
    }
}
