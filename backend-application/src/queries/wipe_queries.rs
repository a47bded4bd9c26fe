use tracing::error;

use crate::{AppError, AppState};

/// Start of the currently active wipe epoch, 0 before the first wipe.
pub async fn wipe_started_at(state: &AppState) -> Result<i64, AppError> {
    let started_at = state.stats_repo.wipe_started_at().await.map_err(|err| {
        error!("failed to read wipe state: {}", err);
        AppError::Internal(err)
    })?;
    Ok(started_at)
}
