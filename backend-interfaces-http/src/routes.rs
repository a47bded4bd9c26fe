use axum::Router;

use backend_application::AppState;

use crate::handlers::{ingest_handlers, ops_handlers, query_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/ingest",
            axum::routing::post(ingest_handlers::ingest_snapshot),
        )
        .route("/keys", axum::routing::get(query_handlers::list_keys))
        .route(
            "/leaderboard/:key",
            axum::routing::get(query_handlers::leaderboard),
        )
        .route(
            "/players/search",
            axum::routing::get(query_handlers::search_players),
        )
        .route(
            "/players/:user_id/stats",
            axum::routing::get(query_handlers::player_stats),
        )
        .route("/health", axum::routing::get(ops_handlers::health))
        .route(
            "/admin/wipe/start",
            axum::routing::post(ops_handlers::start_wipe),
        )
        .route(
            "/metrics",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
