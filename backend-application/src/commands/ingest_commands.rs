use anyhow::anyhow;
use tracing::error;

use backend_domain::SnapshotBatch;

use crate::{AppError, AppState};

/// Apply one snapshot batch.
///
/// The repository runs the whole batch as a single transaction, so an error
/// here means nothing was written. Deltas are trusted to represent
/// not-yet-counted activity: a caller that retries an already-committed
/// batch will double-count. Guarding against that would take a per-batch
/// dedup token, which the exporter does not send.
///
/// Failures surface as an undifferentiated "ingest failed" with no partial
/// counts; the underlying cause only goes to the log.
pub async fn ingest_snapshot(state: &AppState, batch: SnapshotBatch) -> Result<u64, AppError> {
    match state.stats_repo.ingest_batch(&batch).await {
        Ok(processed) => {
            state.metrics.record_ingest(processed as usize);
            Ok(processed)
        }
        Err(err) => {
            error!("ingest batch failed: {:#}", err);
            state.metrics.record_ingest_error();
            Err(AppError::Internal(anyhow!("ingest failed")))
        }
    }
}
