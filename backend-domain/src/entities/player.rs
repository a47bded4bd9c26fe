// Player entity
// Identity and read-side projections over accumulated counters

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A stored player. `user_id` is the externally assigned SteamID; this
/// system never generates one. The display name serializes as `last_name`,
/// the field name the exporter plugin and the frontend both use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub user_id: i64,
    #[serde(rename = "last_name")]
    pub display_name: String,
    pub last_seen: i64,
}

/// One leaderboard entry: a counter value joined to its owner's name.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub user_id: i64,
    #[serde(rename = "last_name")]
    pub display_name: String,
    pub value: f64,
}

/// Full projection of a single player: identity plus every lifetime
/// counter, with the range-kill record broken out as a convenience field
/// (0.0 when the player has none).
#[derive(Debug, Clone, Serialize)]
pub struct PlayerProfile {
    pub user_id: i64,
    #[serde(rename = "last_name")]
    pub display_name: String,
    pub last_seen: i64,
    pub counters: HashMap<String, f64>,
    pub highest_range_kill_m: f64,
}
