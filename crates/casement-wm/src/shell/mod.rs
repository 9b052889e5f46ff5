//! The `Shell` coordinates the registry, the interaction state machine,
//! the reply reconciler and the outgoing command queue.

mod operations;
mod pointer;
mod reconcile;
mod types;


pub use reconcile::ReconcileOutcome;
pub use types::*;
