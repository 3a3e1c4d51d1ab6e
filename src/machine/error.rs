//! Construction errors for state machines.

use thiserror::Error;

/// Errors that can occur when constructing a state machine.
///
/// Both variants are fatal: no partial machine is returned, and there is no
/// retry path. The payload is the comma-joined list of offending identifier
/// names, ready to surface to the caller.
#[derive(Debug, Error)]
pub enum MachineError {
    /// One or more domain values have no corresponding state. Names are
    /// listed in domain order.
    #[error("Not enough states passed in. Missing states: {0}")]
    MissingStates(String),

    /// One or more domain values appear in more than one supplied state.
    /// Names are listed in the order the duplicates were discovered.
    #[error("Duplicate states passed in. Duplicate states: {0}")]
    DuplicateStates(String),
}
