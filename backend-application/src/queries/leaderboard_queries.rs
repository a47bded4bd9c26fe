use tracing::error;

use backend_domain::{BoardQuery, LeaderboardRow};

use crate::queries::params::{clamp_limit, parse_scope};
use crate::{AppError, AppState};

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 500;

pub async fn leaderboard(
    state: &AppState,
    key: &str,
    query: BoardQuery,
) -> Result<Vec<LeaderboardRow>, AppError> {
    let scope = parse_scope(query.scope.as_deref())?;
    let limit = clamp_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let rows = state
        .stats_repo
        .leaderboard(key, scope, limit)
        .await
        .map_err(|err| {
            error!("failed to fetch leaderboard for '{}': {}", key, err);
            AppError::Internal(err)
        })?;
    Ok(rows)
}
