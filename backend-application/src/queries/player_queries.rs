use tracing::error;

use backend_domain::{Player, PlayerProfile, SearchQuery};

use crate::queries::params::clamp_limit;
use crate::{AppError, AppState};

const DEFAULT_SEARCH_LIMIT: u32 = 20;
const MAX_SEARCH_LIMIT: u32 = 100;

/// Full profile lookup. `Ok(None)` means the player has never been seen.
pub async fn get_player(state: &AppState, user_id: i64) -> Result<Option<PlayerProfile>, AppError> {
    let profile = state.stats_repo.get_player(user_id).await.map_err(|err| {
        error!("failed to fetch player {}: {}", user_id, err);
        AppError::Internal(err)
    })?;
    Ok(profile)
}

pub async fn search_players(
    state: &AppState,
    query: SearchQuery,
) -> Result<Vec<Player>, AppError> {
    let limit = clamp_limit(query.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);
    let needle = query.q.unwrap_or_default();
    let players = state
        .stats_repo
        .search_players(&needle, limit)
        .await
        .map_err(|err| {
            error!("player search failed: {}", err);
            AppError::Internal(err)
        })?;
    Ok(players)
}
