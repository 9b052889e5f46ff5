pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{CasementError, ConfigError, ProtocolError, TransportError};
pub use events::{EventBus, ShellEvent};
pub use id::new_correlation_id;
pub use types::{Bounds, Point, WindowId};

pub type Result<T> = std::result::Result<T, CasementError>;
