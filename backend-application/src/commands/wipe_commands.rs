use anyhow::anyhow;
use chrono::Utc;
use tracing::{error, info};

use crate::{AppError, AppState};

/// Clear the wipe scope and start a new epoch stamped with the current
/// server time. Destructive and not undoable; the HTTP layer gates this
/// behind the API key. On failure the previous epoch and its counters are
/// untouched.
pub async fn start_new_wipe(state: &AppState) -> Result<i64, AppError> {
    let started_at = Utc::now().timestamp();
    if let Err(err) = state.stats_repo.start_new_wipe(started_at).await {
        error!("wipe reset failed: {:#}", err);
        return Err(AppError::Internal(anyhow!("wipe reset failed")));
    }
    state.metrics.record_wipe_reset();
    info!(started_at, "started new wipe epoch");
    Ok(started_at)
}
