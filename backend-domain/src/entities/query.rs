// Read-side query parameter shapes

use serde::Deserialize;

/// `?scope=` selector shared by key listing. Defaults to the wipe scope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopedQuery {
    pub scope: Option<String>,
}

/// Leaderboard parameters: `?scope=&limit=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardQuery {
    pub scope: Option<String>,
    pub limit: Option<u32>,
}

/// Player search parameters: `?q=&limit=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<u32>,
}
