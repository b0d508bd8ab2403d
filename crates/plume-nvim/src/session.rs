//! Channel-backed editor session.
//!
//! The wire to the editor process is a single ordered stream, so all
//! callers funnel through one worker task that owns the transport and
//! finishes each round-trip before starting the next. Callers get their
//! answers back through oneshot channels.

use futures::future::BoxFuture;
use plume_core::NvimError;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::api::NvimApi;

/// The raw request/response pipe to the editor process.
///
/// Implementations speak whatever RPC the editor embedding uses; the
/// session guarantees at most one outstanding call.
pub trait NvimTransport: Send + 'static {
    /// Evaluate a VimL expression.
    fn eval(&mut self, expression: &str) -> BoxFuture<'_, Result<Value, NvimError>>;

    /// Run an ex command.
    fn command(&mut self, command: &str) -> BoxFuture<'_, Result<(), NvimError>>;
}

/// Request types for the session worker.
enum NvimRequest {
    Eval {
        expression: String,
        resp: oneshot::Sender<Result<Value, NvimError>>,
    },
    Command {
        command: String,
        resp: oneshot::Sender<Result<(), NvimError>>,
    },
    Shutdown,
}

/// Handle to a running editor session.
///
/// Cloneable and cheap to share; dropping the last handle shuts the worker
/// down. Requests are served strictly in dispatch order.
#[derive(Clone)]
pub struct NvimSession {
    tx: mpsc::UnboundedSender<NvimRequest>,
}

impl NvimSession {
    /// Spawn the worker task over the given transport.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T: NvimTransport>(mut transport: T) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            tracing::debug!("Editor session worker started");

            while let Some(request) = rx.recv().await {
                match request {
                    NvimRequest::Eval { expression, resp } => {
                        let result = transport.eval(&expression).await;
                        let _ = resp.send(result);
                    }
                    NvimRequest::Command { command, resp } => {
                        let result = transport.command(&command).await;
                        let _ = resp.send(result);
                    }
                    NvimRequest::Shutdown => {
                        tracing::debug!("Editor session worker shutting down");
                        break;
                    }
                }
            }
        });

        Self { tx }
    }

    /// Ask the worker to stop. In-flight requests finish first.
    pub fn shutdown(&self) {
        let _ = self.tx.send(NvimRequest::Shutdown);
    }
}

impl NvimApi for NvimSession {
    fn eval(&self, expression: &str) -> BoxFuture<'static, Result<Value, NvimError>> {
        let tx = self.tx.clone();
        let expression = expression.to_string();

        Box::pin(async move {
            let (resp_tx, resp_rx) = oneshot::channel();
            tx.send(NvimRequest::Eval {
                expression,
                resp: resp_tx,
            })
            .map_err(|_| NvimError::Unavailable)?;

            resp_rx
                .await
                .map_err(|e| NvimError::Channel(e.to_string()))?
        })
    }

    fn command(&self, command: &str) -> BoxFuture<'static, Result<(), NvimError>> {
        let tx = self.tx.clone();
        let command = command.to_string();

        Box::pin(async move {
            let (resp_tx, resp_rx) = oneshot::channel();
            tx.send(NvimRequest::Command {
                command,
                resp: resp_tx,
            })
            .map_err(|_| NvimError::Unavailable)?;

            resp_rx
                .await
                .map_err(|e| NvimError::Channel(e.to_string()))?
        })
    }
}
