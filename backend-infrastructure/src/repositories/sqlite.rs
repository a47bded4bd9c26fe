//! SQLite-backed stats repository.
//!
//! The connection lives behind an async mutex: concurrent batches serialize
//! at the storage boundary while each one stays individually transactional.
//! WAL mode, enforced foreign keys, and a busy timeout are configured on
//! open.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;
use tracing::info;

use backend_domain::{
    LeaderboardRow, Player, PlayerProfile, Scope, SnapshotBatch, StatsRepository,
};

use super::{queries, schema};

pub struct SqliteStatsRepository {
    conn: Mutex<Connection>,
}

impl SqliteStatsRepository {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        configure(&conn)?;
        info!("opened stats database at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database, used by tests.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        configure(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn ensure_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute_batch(schema::SCHEMA)?;
        Ok(())
    }

    async fn ingest_batch(&self, batch: &SnapshotBatch) -> Result<u64> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let mut processed = 0u64;
        for snapshot in &batch.players {
            queries::apply_player_snapshot(&tx, snapshot, batch.server_unix_time)?;
            processed += 1;
        }
        tx.commit()?;
        Ok(processed)
    }

    async fn list_keys(&self, scope: Scope) -> Result<Vec<String>> {
        let conn = self.conn.lock().await;
        Ok(queries::list_keys(&conn, scope)?)
    }

    async fn leaderboard(
        &self,
        key: &str,
        scope: Scope,
        limit: u32,
    ) -> Result<Vec<LeaderboardRow>> {
        let conn = self.conn.lock().await;
        Ok(queries::leaderboard(&conn, key, scope, limit)?)
    }

    async fn get_player(&self, user_id: i64) -> Result<Option<PlayerProfile>> {
        let conn = self.conn.lock().await;
        Ok(queries::get_player(&conn, user_id)?)
    }

    async fn search_players(&self, query: &str, limit: u32) -> Result<Vec<Player>> {
        let conn = self.conn.lock().await;
        Ok(queries::search_players(&conn, query, limit)?)
    }

    async fn wipe_started_at(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        Ok(queries::wipe_started_at(&conn)?)
    }

    async fn start_new_wipe(&self, started_at: i64) -> Result<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        queries::start_new_wipe(&tx, started_at)?;
        tx.commit()?;
        info!(started_at, "wipe epoch reset");
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    use backend_domain::PlayerSnapshot;
    use rand::Rng;

    use super::*;

    fn repo() -> SqliteStatsRepository {
        let repo = SqliteStatsRepository::open_memory().expect("open");
        let conn = repo.conn.try_lock().expect("lock");
        conn.execute_batch(schema::SCHEMA).expect("schema");
        drop(conn);
        repo
    }

    fn snapshot(user_id: i64, name: &str, key: &str, delta: f64) -> PlayerSnapshot {
        PlayerSnapshot {
            user_id,
            last_name: Some(name.to_string()),
            k: HashMap::from([(key.to_string(), delta)]),
            highest_range_kill_m: None,
        }
    }

    #[tokio::test]
    async fn ingest_batch_counts_processed_entries() {
        let repo = repo();
        let batch = SnapshotBatch {
            server_unix_time: 1000,
            players: vec![
                snapshot(1, "A", "kills", 2.0),
                snapshot(2, "B", "kills", 1.0),
            ],
        };
        assert_eq!(repo.ingest_batch(&batch).await.expect("ingest"), 2);
        let board = repo
            .leaderboard("kills", Scope::Wipe, 10)
            .await
            .expect("board");
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].user_id, 1);
    }

    #[tokio::test]
    async fn failed_batch_rolls_back_every_entry() {
        let repo = repo();
        let oversized_key = "k".repeat(65);
        let batch = SnapshotBatch {
            server_unix_time: 1000,
            players: vec![
                snapshot(1, "A", "kills", 1.0),
                snapshot(2, "B", "kills", 1.0),
                snapshot(3, "C", &oversized_key, 1.0),
                snapshot(4, "D", "kills", 1.0),
                snapshot(5, "E", "kills", 1.0),
            ],
        };

        assert!(repo.ingest_batch(&batch).await.is_err());

        // No partial writes: not even the entries before the failure
        for uid in 1..=5 {
            assert!(repo.get_player(uid).await.expect("get").is_none());
        }
        assert!(repo.list_keys(Scope::Wipe).await.expect("keys").is_empty());
    }

    #[tokio::test]
    async fn replaying_a_batch_double_counts() {
        // The engine trusts the caller; replay protection is out of scope
        let repo = repo();
        let batch = SnapshotBatch {
            server_unix_time: 1000,
            players: vec![snapshot(1, "A", "kills", 2.0)],
        };
        repo.ingest_batch(&batch).await.expect("first");
        repo.ingest_batch(&batch).await.expect("replay");
        let board = repo
            .leaderboard("kills", Scope::Lifetime, 1)
            .await
            .expect("board");
        assert_eq!(board[0].value, 4.0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_adds_do_not_lose_updates() {
        const WRITERS: usize = 50;

        let repo = Arc::new(repo());
        let mut handles = Vec::with_capacity(WRITERS);
        for _ in 0..WRITERS {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let jitter = rand::thread_rng().gen_range(0..500u64);
                tokio::time::sleep(Duration::from_micros(jitter)).await;
                let batch = SnapshotBatch {
                    server_unix_time: 1000,
                    players: vec![snapshot(77, "Racer", "kills", 1.0)],
                };
                repo.ingest_batch(&batch).await.expect("ingest");
            }));
        }
        for handle in handles {
            handle.await.expect("join");
        }

        for scope in [Scope::Lifetime, Scope::Wipe] {
            let board = repo.leaderboard("kills", scope, 1).await.expect("board");
            assert_eq!(board[0].value, WRITERS as f64);
        }
    }

    #[tokio::test]
    async fn wipe_reset_is_atomic_and_scoped() {
        let repo = repo();
        let batch = SnapshotBatch {
            server_unix_time: 1000,
            players: vec![snapshot(1, "A", "kills", 3.0)],
        };
        repo.ingest_batch(&batch).await.expect("ingest");

        repo.start_new_wipe(2000).await.expect("wipe");
        assert_eq!(repo.wipe_started_at().await.expect("started"), 2000);
        assert!(repo
            .leaderboard("kills", Scope::Wipe, 10)
            .await
            .expect("board")
            .is_empty());
        assert_eq!(
            repo.leaderboard("kills", Scope::Lifetime, 10)
                .await
                .expect("board")[0]
                .value,
            3.0
        );
    }

    #[test]
    fn file_backed_database_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("stats.db");

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        rt.block_on(async {
            let repo = SqliteStatsRepository::open(&path).expect("open");
            repo.ensure_schema().await.expect("schema");
            let batch = SnapshotBatch {
                server_unix_time: 1000,
                players: vec![snapshot(1, "Keeper", "kills", 1.0)],
            };
            repo.ingest_batch(&batch).await.expect("ingest");
        });

        rt.block_on(async {
            let repo = SqliteStatsRepository::open(&path).expect("reopen");
            repo.ensure_schema().await.expect("schema");
            let profile = repo.get_player(1).await.expect("get").expect("exists");
            assert_eq!(profile.display_name, "Keeper");
        });
    }
}
