//! Identifier trait for state machine domains.
//!
//! A state machine is keyed by a closed, finite set of identifier values,
//! conceptually an enum. The `StateId` trait is what the machine needs from
//! that enum: value semantics, a stable display name, and an enumeration of
//! every value in the domain.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine identifier domains.
///
/// Implementors are expected to be fieldless enums; the
/// [`state_id!`](crate::state_id) macro generates a conforming enum together
/// with this impl. The machine relies on `variants()` being the complete
/// domain: the construction-time coverage and duplicate checks are computed
/// against it, and transitions look states up by these values.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: identifiers are small values used as map keys
/// - `Debug`: identifiers appear in diagnostics
///
/// # Example
///
/// ```rust
/// use machinist::StateId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl StateId for DoorState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn variants() -> &'static [Self] {
///         &[Self::Open, Self::Closed]
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// assert_eq!(DoorState::variants().len(), 2);
/// ```
pub trait StateId: Copy + Eq + Hash + Debug + 'static {
    /// Get the identifier's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &'static str;

    /// Enumerate every value of the domain, in declaration order.
    ///
    /// This order is the canonical domain order: validation errors list
    /// missing identifiers in it, and the registry binds states in it.
    fn variants() -> &'static [Self];
}
