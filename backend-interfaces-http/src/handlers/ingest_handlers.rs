use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use backend_application::commands::ingest_commands;
use backend_application::AppState;
use backend_domain::SnapshotBatch;

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(Serialize)]
pub struct IngestResponse {
    ok: bool,
    players: u64,
}

pub async fn ingest_snapshot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(batch): Json<SnapshotBatch>,
) -> Result<Json<IngestResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }

    let players = ingest_commands::ingest_snapshot(&state, batch).await?;
    Ok(Json(IngestResponse { ok: true, players }))
}
