//! Shared utilities for use cases.
//!
//! Cancellation checks and a cancellable wrapper for model calls, tool
//! dispatch and retry backoff.

use orchestra_domain::AgentExecutionError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Error reported when the surrounding round is cancelled.
pub(crate) fn aborted() -> AgentExecutionError {
    AgentExecutionError::request_aborted("Request was aborted")
}

/// Check if cancellation has been requested.
///
/// Returns a `requestAborted` error if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), AgentExecutionError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(aborted());
    }
    Ok(())
}

/// Drive `future` to completion unless the token fires first.
///
/// On cancellation the future is dropped, abandoning any outstanding work.
pub(crate) async fn cancellable<F: Future>(
    token: &Option<CancellationToken>,
    future: F,
) -> Result<F::Output, AgentExecutionError> {
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(aborted()),
            output = future => Ok(output),
        },
        None => Ok(future.await),
    }
}
