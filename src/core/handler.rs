//! Lifecycle seam between the machine and its states.

use super::id::StateId;

/// Per-state lifecycle hooks driven by a [`StateMachine`](crate::StateMachine).
///
/// The machine calls `enter` when a state becomes active, `exit` when it
/// stops being active, and `update` once per tick while it is active. All
/// three default to no-ops, so an implementor only overrides the hooks it
/// cares about.
///
/// The closure-backed [`State`](crate::State) covers most uses; implement
/// this trait directly when a state wants to be its own type, for example to
/// carry per-state data or to instrument lifecycle calls in tests.
pub trait StateHandler<T: StateId> {
    /// The identifier this state is registered under.
    fn id(&self) -> T;

    /// Called when the machine makes this state the active one.
    fn enter(&mut self) {}

    /// Called when the machine deactivates this state.
    fn exit(&mut self) {}

    /// Called once per tick while this state is active. `dt` is the time
    /// elapsed since the previous tick, in seconds.
    fn update(&mut self, _dt: f32) {}
}
