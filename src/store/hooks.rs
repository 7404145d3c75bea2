//! Mutation subscribers
//!
//! Lets the view layer react to committed changes without polling the store.

use super::error::StoreError;
use super::mutation::Mutation;
use super::StoreState;

/// Observer notified by `NodeGraphStore::commit`
pub trait MutationSubscriber {
    /// Called after a mutation has been applied
    fn after_mutation(&mut self, mutation: &Mutation, state: &StoreState);

    /// Called when a mutation was rejected and the state left unchanged
    fn on_rejected(&mut self, _mutation: &Mutation, _error: &StoreError) {
        // Default: no special handling
    }
}
