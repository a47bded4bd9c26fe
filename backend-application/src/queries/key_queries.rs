use tracing::error;

use backend_domain::ScopedQuery;

use crate::queries::params::parse_scope;
use crate::{AppError, AppState};

pub async fn list_keys(state: &AppState, query: ScopedQuery) -> Result<Vec<String>, AppError> {
    let scope = parse_scope(query.scope.as_deref())?;
    let keys = state.stats_repo.list_keys(scope).await.map_err(|err| {
        error!("failed to list counter keys: {}", err);
        AppError::Internal(err)
    })?;
    Ok(keys)
}
