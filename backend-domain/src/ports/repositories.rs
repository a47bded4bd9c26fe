use async_trait::async_trait;

use crate::entities::{LeaderboardRow, Player, PlayerProfile, SnapshotBatch};
use crate::value_objects::Scope;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// Apply one snapshot batch as a single unit of work, in submission
    /// order. Returns the number of player entries processed; on error the
    /// whole batch rolls back and nothing is visible.
    async fn ingest_batch(&self, batch: &SnapshotBatch) -> anyhow::Result<u64>;

    async fn list_keys(&self, scope: Scope) -> anyhow::Result<Vec<String>>;
    async fn leaderboard(
        &self,
        key: &str,
        scope: Scope,
        limit: u32,
    ) -> anyhow::Result<Vec<LeaderboardRow>>;
    async fn get_player(&self, user_id: i64) -> anyhow::Result<Option<PlayerProfile>>;
    async fn search_players(&self, query: &str, limit: u32) -> anyhow::Result<Vec<Player>>;

    /// Start of the currently active wipe epoch, 0 before the first wipe.
    async fn wipe_started_at(&self) -> anyhow::Result<i64>;

    /// Clear every wipe-scoped counter and stamp the new epoch start, as one
    /// transaction. Not undoable.
    async fn start_new_wipe(&self, started_at: i64) -> anyhow::Result<()>;

    async fn ping(&self) -> anyhow::Result<()>;
}
