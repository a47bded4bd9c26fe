use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use backend_application::commands::wipe_commands;
use backend_application::queries::wipe_queries;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(Serialize)]
pub struct WipeStatus {
    ok: bool,
    wipe_started: i64,
}

pub async fn health(State(state): State<AppState>) -> Result<Json<WipeStatus>, HttpError> {
    let wipe_started = wipe_queries::wipe_started_at(&state).await?;
    Ok(Json(WipeStatus {
        ok: true,
        wipe_started,
    }))
}

pub async fn start_wipe(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<WipeStatus>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }

    let wipe_started = wipe_commands::start_new_wipe(&state).await?;
    Ok(Json(WipeStatus {
        ok: true,
        wipe_started,
    }))
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render_prometheus()
}
