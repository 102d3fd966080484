//! Generic state machine trait for lifecycle management.

use super::errors::DomainError;

/// Trait for types that follow a state machine pattern.
///
/// Implementors define which transitions are legal; `transition_to`
/// gives a uniform checked entry point on top of that.
pub trait StateMachine: Sized + Clone + PartialEq {
    /// Checks whether a transition to the target state is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all states reachable from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Attempts the transition, returning the new state or an error.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError>;

    /// Whether this state has no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
