//! Startup/shutdown of the storage engine around the server's run.

use std::future::Future;
use std::panic::{resume_unwind, AssertUnwindSafe};

use futures_util::FutureExt;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::infra::state::StateBuilder;
use crate::state::app_state::AppState;

/// Build the state (pool + schema), run `serve` with it, then close the pool.
///
/// The pool is closed once `serve` finishes, whether it returned `Ok`,
/// returned `Err` or panicked. The result of `serve` is returned unchanged
/// and a panic is resumed after shutdown. A failed bootstrap returns before
/// `serve` is called.
pub async fn with_lifespan<T, F, Fut>(builder: StateBuilder, serve: F) -> Result<T, AppError>
where
    F: FnOnce(AppState) -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut state = builder.build().await?;
    info!(db = state.db().is_some(), "lifespan=startup");

    let outcome = AssertUnwindSafe(serve(state.clone())).catch_unwind().await;

    shutdown(&mut state).await;
    match outcome {
        Ok(result) => result,
        Err(panic) => {
            error!("lifespan=serve panicked");
            resume_unwind(panic)
        }
    }
}

/// Close the pool held by `state`, if any. Later calls are no-ops.
pub async fn shutdown(state: &mut AppState) {
    let Some(db) = state.take_db() else {
        return;
    };
    match db.close().await {
        Ok(()) => info!("lifespan=shutdown pool=closed"),
        Err(e) => warn!(error = %e, "lifespan=shutdown pool close failed"),
    }
}
