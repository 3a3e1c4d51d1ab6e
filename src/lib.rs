//! Machinist: a lightweight enum-keyed state machine for update loops
//!
//! Machinist drives per-object behavior from a real-time update loop. A host
//! object owns one [`StateMachine`] keyed by a closed identifier domain (an
//! enum implementing [`StateId`]); the machine guarantees exactly one state
//! is active at a time and sequences enter/exit/update callbacks as the
//! active state changes.
//!
//! # Core Concepts
//!
//! - **Identifier domain**: a fieldless enum implementing [`StateId`],
//!   usually via the [`state_id!`] macro
//! - **States**: closure-backed [`State`] values, or any type implementing
//!   [`StateHandler`]
//! - **Coverage**: construction fails unless the supplied states cover the
//!   domain exactly, with no value missing or duplicated
//! - **Registry**: [`StateRegistry`] assembles a full state set from
//!   callbacks registered under formatted string keys
//!
//! # Example
//!
//! ```rust
//! use machinist::{State, StateMachine, state_id};
//!
//! state_id! {
//!     enum GuardState {
//!         Patrolling,
//!         Chasing,
//!     }
//! }
//!
//! let states = vec![
//!     State::new(GuardState::Patrolling)
//!         .on_enter(|| println!("back to the route"))
//!         .on_update(|dt| println!("patrolled for {dt}s")),
//!     State::new(GuardState::Chasing)
//!         .on_enter(|| println!("hey, you!")),
//! ];
//!
//! let mut machine = StateMachine::new(states, GuardState::Patrolling).unwrap();
//!
//! // Once per frame:
//! machine.update(0.016);
//!
//! // On an external trigger:
//! machine.change_state(GuardState::Chasing);
//! ```
//!
//! The machine is synchronous and single-threaded: callbacks run to
//! completion on the calling thread, and one machine must be driven from one
//! consistent tick source.

pub mod core;
pub mod machine;
pub mod macros;
pub mod registry;

// Re-export commonly used types
pub use self::core::{State, StateHandler, StateId};
pub use self::machine::{MachineError, StateMachine};
pub use self::registry::StateRegistry;
