use async_trait::async_trait;
use casement_common::TransportError;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

use super::Transport;

/// Newline-delimited JSON over one persistent TCP stream.
///
/// Each call writes the request as a single line and reads a single reply
/// line. A broken stream fails the current call and is reopened on the
/// next one.
pub struct TcpTransport {
    addr: String,
    stream: Option<BufReader<TcpStream>>,
}

impl TcpTransport {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            stream: None,
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    async fn connect(&self) -> Result<BufReader<TcpStream>, TransportError> {
        let stream = TcpStream::connect(&self.addr)
            .await
            .map_err(|e| TransportError::Connect(format!("{}: {e}", self.addr)))?;
        stream.set_nodelay(true)?;
        info!(backend = %self.addr, "connected to backend");
        Ok(BufReader::new(stream))
    }
}

async fn round_trip(
    stream: &mut BufReader<TcpStream>,
    request: &str,
) -> Result<String, TransportError> {
    let writer = stream.get_mut();
    writer.write_all(request.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    let mut line = String::new();
    if stream.read_line(&mut line).await? == 0 {
        return Err(TransportError::Closed);
    }
    Ok(line.trim_end().to_string())
}

#[async_trait]
impl Transport for TcpTransport {
    async fn call(&mut self, request: String) -> Result<String, TransportError> {
        let mut stream = match self.stream.take() {
            Some(stream) => stream,
            None => self.connect().await?,
        };

        match round_trip(&mut stream, &request).await {
            Ok(reply) => {
                debug!(bytes = reply.len(), "backend reply");
                self.stream = Some(stream);
                Ok(reply)
            }
            Err(e) => {
                warn!(backend = %self.addr, error = %e, "backend stream broken, will reconnect");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    /// Backend that answers each request line with `reply`, for at most
    /// `per_connection` requests before hanging up.
    async fn spawn_backend(reply: &'static str, per_connection: usize) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    return;
                };
                let mut socket = BufReader::new(socket);
                for _ in 0..per_connection {
                    let mut line = String::new();
                    if socket.read_line(&mut line).await.unwrap_or(0) == 0 {
                        break;
                    }
                    let out = format!("{reply}\n");
                    if socket.get_mut().write_all(out.as_bytes()).await.is_err() {
                        break;
                    }
                }
            }
        });
        addr
    }

    #[tokio::test]
    async fn round_trip_over_persistent_stream() {
        let addr = spawn_backend("[]", usize::MAX).await;
        let mut transport = TcpTransport::new(addr);
        assert!(!transport.is_connected());
        assert_eq!(transport.call("[{\"t\":\"browser_start\"}]".into()).await.unwrap(), "[]");
        assert!(transport.is_connected());
        assert_eq!(transport.call("[]".into()).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn closed_stream_fails_once_then_reconnects() {
        let addr = spawn_backend("[]", 1).await;
        let mut transport = TcpTransport::new(addr);
        assert!(transport.call("[]".into()).await.is_ok());
        // Server hung up after one reply.
        assert!(transport.call("[]".into()).await.is_err());
        assert!(!transport.is_connected());
        assert!(transport.call("[]".into()).await.is_ok());
    }

    #[tokio::test]
    async fn unreachable_backend_is_connect_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);
        let mut transport = TcpTransport::new(addr);
        let err = transport.call("[]".into()).await.unwrap_err();
        assert!(matches!(err, TransportError::Connect(_)));
    }
}
