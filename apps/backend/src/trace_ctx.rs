//! Task-local trace id for the request being served.
//!
//! `TraceSpan` scopes every handler future with the request's trace id so
//! that `AppError::error_response` can stamp problem details and the
//! `x-trace-id` header without threading the id through handler signatures.

use tokio::task_local;

/// Value reported when no request scope is active.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current task, or [`UNKNOWN_TRACE_ID`] outside a request.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
