use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use casement_common::{new_correlation_id, TransportError};
use casement_wm::protocol::{decode_reply, encode_batch, is_no_update, NO_UPDATE};
use casement_wm::{ReconcileOutcome, Shell};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn, Instrument, Span};

use crate::transport::Transport;

/// Counters since the bridge was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeStats {
    /// Completed ticks, successful or not.
    pub ticks: u64,
    /// Calls that failed and dropped their batch.
    pub failures: u64,
    /// Replies that could not be parsed.
    pub parse_faults: u64,
    pub segments_applied: u64,
    pub commands_sent: u64,
}

/// How one tick ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The backend had nothing new.
    NoUpdate,
    /// Segments reconciled into the shell.
    Applied(usize),
    /// The backend requested a reload and the shell was reset.
    Reloaded,
    /// The call failed; its batch was dropped.
    Failed,
    /// The reply was malformed and ignored.
    ParseFault,
}

/// A batch taken from the shell, ready to send.
#[derive(Debug)]
pub struct Exchange {
    pub request: String,
    pub commands: usize,
    span: Span,
}

/// Result of sending an [`Exchange`].
#[derive(Debug)]
pub struct Exchanged {
    pub commands: usize,
    pub result: Result<String, TransportError>,
    span: Span,
}

/// Drives request/reply ticks between a [`Shell`] and a [`Transport`].
///
/// A tick runs in three phases so a caller can keep feeding input to the
/// shell while a call is outstanding: [`Bridge::begin`] takes the batch,
/// [`Bridge::exchange`] performs the call without touching the shell, and
/// [`Bridge::complete`] reconciles the reply. [`Bridge::tick`] runs all
/// three back to back.
pub struct Bridge<T> {
    transport: Arc<Mutex<T>>,
    stats: BridgeStats,
}

impl<T: Transport + 'static> Bridge<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(Mutex::new(transport)),
            stats: BridgeStats::default(),
        }
    }

    pub fn stats(&self) -> BridgeStats {
        self.stats
    }

    /// Run `f` against the transport, e.g. to inspect a scripted one.
    pub async fn with_transport<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut transport = self.transport.lock().await;
        f(&mut transport)
    }

    /// Swap the shell's queue for an empty one and serialize the batch.
    /// Commands generated from here on belong to the next tick.
    pub fn begin(&mut self, shell: &mut Shell) -> Exchange {
        let cid = new_correlation_id();
        let span = tracing::debug_span!("tick", tick = %cid);
        let _enter = span.enter();

        let batch = shell.take_batch();
        let request = encode_batch(&batch).unwrap_or_else(|e| {
            error!(error = %e, dropped = batch.len(), "failed to encode batch");
            NO_UPDATE.to_string()
        });
        if !batch.is_empty() {
            debug!(commands = batch.len(), "sending batch");
        }
        self.stats.commands_sent += batch.len() as u64;

        drop(_enter);
        Exchange {
            request,
            commands: batch.len(),
            span,
        }
    }

    /// Send one batch. The returned future owns everything it needs, so
    /// it can be polled while the shell keeps handling input.
    pub fn exchange(&self, exchange: Exchange) -> impl Future<Output = Exchanged> + Send + 'static {
        let transport = Arc::clone(&self.transport);
        let Exchange {
            request,
            commands,
            span,
        } = exchange;
        let call_span = span.clone();

        async move {
            let result = transport.lock().await.call(request).await;
            Exchanged {
                commands,
                result,
                span,
            }
        }
        .instrument(call_span)
    }

    /// Apply a reply to the shell. Failures and malformed replies are
    /// logged and counted; they never propagate.
    pub fn complete(&mut self, shell: &mut Shell, exchanged: Exchanged) -> TickOutcome {
        let _enter = exchanged.span.enter();
        self.stats.ticks += 1;

        let reply = match exchanged.result {
            Ok(reply) => reply,
            Err(e) => {
                self.stats.failures += 1;
                warn!(error = %e, dropped = exchanged.commands, "bridge call failed, batch dropped");
                return TickOutcome::Failed;
            }
        };

        if is_no_update(&reply) {
            return TickOutcome::NoUpdate;
        }

        let segments = match decode_reply(&reply) {
            Ok(segments) => segments,
            Err(e) => {
                self.stats.parse_faults += 1;
                error!(error = %e, "unparseable backend reply");
                return TickOutcome::ParseFault;
            }
        };

        match shell.apply_segments(segments) {
            ReconcileOutcome::Applied(n) => {
                self.stats.segments_applied += n as u64;
                debug!(segments = n, "reply applied");
                TickOutcome::Applied(n)
            }
            ReconcileOutcome::Reloaded => TickOutcome::Reloaded,
        }
    }

    /// One full tick: begin, exchange, complete.
    pub async fn tick(&mut self, shell: &mut Shell) -> TickOutcome {
        let exchange = self.begin(shell);
        let exchanged = self.exchange(exchange).await;
        self.complete(shell, exchanged)
    }

    /// Tick until `shutdown` resolves, waiting `interval` after each tick
    /// completes.
    pub async fn run(
        &mut self,
        shell: &mut Shell,
        interval: Duration,
        shutdown: impl Future<Output = ()>,
    ) -> BridgeStats {
        tokio::pin!(shutdown);
        info!(?interval, "bridge loop started");

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = self.tick(shell) => {}
            }
            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        info!(stats = ?self.stats, "bridge loop stopped");
        self.stats
    }
}
