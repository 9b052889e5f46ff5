//! Request/reply transports to the backend.

mod scripted;
mod tcp;

use async_trait::async_trait;
use casement_common::TransportError;

pub use scripted::ScriptedTransport;
pub use tcp::TcpTransport;

/// One request/reply exchange with the backend.
///
/// `request` is a serialized command batch. The reply is the raw reply
/// text: `[]` or a JSON array of segments.
#[async_trait]
pub trait Transport: Send {
    async fn call(&mut self, request: String) -> Result<String, TransportError>;
}
