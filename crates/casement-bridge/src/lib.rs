//! Transport bridge between the shell and the compositor backend.
//!
//! Once per refresh tick the bridge swaps the shell's command queue for an
//! empty one, sends the batch, and reconciles the reply. At most one call
//! is ever in flight; a failed call drops its batch.

mod bridge;
pub mod transport;


pub use bridge::{Bridge, BridgeStats, Exchange, Exchanged, TickOutcome};
pub use transport::{ScriptedTransport, TcpTransport, Transport};
