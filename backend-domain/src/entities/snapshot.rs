// Snapshot batch entities
// The periodic payload the game-server exporter posts

use std::collections::HashMap;

use serde::Deserialize;

/// One player's slice of a snapshot batch. `k` maps counter key to the
/// delta accumulated since the exporter's previous flush; the range-kill
/// field is a candidate maximum, not a delta.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSnapshot {
    pub user_id: i64,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub k: HashMap<String, f64>,
    #[serde(default)]
    pub highest_range_kill_m: Option<f64>,
}

/// A full exporter flush. `server_unix_time` stamps `last_seen` for every
/// player mentioned in the batch.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotBatch {
    pub server_unix_time: i64,
    #[serde(default)]
    pub players: Vec<PlayerSnapshot>,
}
