use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure of a single bridge call. The pending batch is dropped.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("backend connect failed: {0}")]
    Connect(String),

    #[error("backend io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend closed the connection")]
    Closed,

    #[error("no reply scripted")]
    Exhausted,
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed reply: {0}")]
    MalformedReply(String),

    #[error("reply is not a segment array")]
    NotAnArray,

    #[error("failed to encode batch: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CasementError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
