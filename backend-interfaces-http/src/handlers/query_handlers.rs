use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use backend_application::queries::{key_queries, leaderboard_queries, player_queries};
use backend_application::AppState;
use backend_domain::{BoardQuery, LeaderboardRow, Player, PlayerProfile, ScopedQuery, SearchQuery};

use crate::error::HttpError;

#[derive(Serialize)]
pub struct KeysResponse {
    keys: Vec<String>,
}

pub async fn list_keys(
    State(state): State<AppState>,
    Query(query): Query<ScopedQuery>,
) -> Result<Json<KeysResponse>, HttpError> {
    let keys = key_queries::list_keys(&state, query).await?;
    Ok(Json(KeysResponse { keys }))
}

pub async fn leaderboard(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<Vec<LeaderboardRow>>, HttpError> {
    let rows = leaderboard_queries::leaderboard(&state, &key, query).await?;
    Ok(Json(rows))
}

pub async fn search_players(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Player>>, HttpError> {
    let players = player_queries::search_players(&state, query).await?;
    Ok(Json(players))
}

pub async fn player_stats(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<PlayerProfile>, HttpError> {
    match player_queries::get_player(&state, user_id).await? {
        Some(profile) => Ok(Json(profile)),
        None => Err(HttpError::NotFound),
    }
}
