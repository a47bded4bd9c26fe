//! Query functions over the stats schema.
//!
//! Every merge is a single conflict-resolving statement evaluated against
//! the stored value at commit time, never a read-modify-write pair, so
//! concurrent batches cannot lose updates on a shared row.

use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension};

use backend_domain::{
    fallback_name, submitted_name_candidate, LeaderboardRow, MergeStrategy, Player, PlayerProfile,
    PlayerSnapshot, Scope, HIGHEST_RANGE_KILL_KEY,
};

/// Upsert a player from a snapshot mention.
///
/// A proper submitted name replaces the stored one; an empty or id-only
/// submission leaves it alone. `last_seen` only ever moves forward, so late
/// or duplicate batches cannot regress it.
pub fn upsert_player(
    conn: &Connection,
    user_id: i64,
    submitted_name: &str,
    observed_at: i64,
) -> rusqlite::Result<()> {
    let candidate = submitted_name_candidate(submitted_name, user_id);
    let initial = candidate.clone().unwrap_or_else(|| fallback_name(user_id));
    conn.execute(
        "INSERT INTO players (user_id, display_name, last_seen)
         VALUES (?1, ?2, MAX(?3, 0))
         ON CONFLICT(user_id) DO UPDATE SET
             display_name = COALESCE(?4, players.display_name),
             last_seen = MAX(players.last_seen, ?3)",
        params![user_id, initial, observed_at, candidate],
    )?;
    Ok(())
}

/// Merge one counter value into one scope row.
///
/// Deltas are trusted to represent not-yet-counted activity; replaying a
/// batch double-counts. Deduplication would need a per-batch token, which
/// lives outside this engine.
pub fn merge_counter(
    conn: &Connection,
    user_id: i64,
    scope: Scope,
    key: &str,
    value: f64,
    strategy: MergeStrategy,
) -> rusqlite::Result<()> {
    let sql = match strategy {
        MergeStrategy::Add => {
            "INSERT INTO counters (user_id, scope, key, value) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(user_id, scope, key) DO UPDATE SET value = counters.value + excluded.value"
        }
        MergeStrategy::Max => {
            "INSERT INTO counters (user_id, scope, key, value) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(user_id, scope, key) DO UPDATE SET value = MAX(counters.value, excluded.value)"
        }
    };
    conn.execute(sql, params![user_id, scope.as_str(), key, value])?;
    Ok(())
}

/// Additive-merge a whole delta map into one scope. No-op when empty.
pub fn add_counters(
    conn: &Connection,
    user_id: i64,
    scope: Scope,
    deltas: &HashMap<String, f64>,
) -> rusqlite::Result<()> {
    for (key, delta) in deltas {
        merge_counter(conn, user_id, scope, key, *delta, MergeStrategy::Add)?;
    }
    Ok(())
}

/// Maximum-merge a single candidate into one scope. No-op when absent.
/// Non-positive candidates are still written when no prior row exists;
/// filtering them is the caller's concern.
pub fn set_max_counter(
    conn: &Connection,
    user_id: i64,
    scope: Scope,
    key: &str,
    candidate: Option<f64>,
) -> rusqlite::Result<()> {
    match candidate {
        Some(value) => merge_counter(conn, user_id, scope, key, value, MergeStrategy::Max),
        None => Ok(()),
    }
}

/// Apply one player's slice of a batch: identity first (counter rows carry
/// a foreign key on the player), then both scopes of every counter.
pub fn apply_player_snapshot(
    conn: &Connection,
    snapshot: &PlayerSnapshot,
    observed_at: i64,
) -> rusqlite::Result<()> {
    let submitted = snapshot.last_name.as_deref().unwrap_or("");
    upsert_player(conn, snapshot.user_id, submitted, observed_at)?;

    if !snapshot.k.is_empty() {
        for scope in [Scope::Lifetime, Scope::Wipe] {
            add_counters(conn, snapshot.user_id, scope, &snapshot.k)?;
        }
    }

    if let Some(range) = snapshot.highest_range_kill_m {
        if range > 0.0 {
            for scope in [Scope::Lifetime, Scope::Wipe] {
                set_max_counter(conn, snapshot.user_id, scope, HIGHEST_RANGE_KILL_KEY, Some(range))?;
            }
        }
    }
    Ok(())
}

/// Distinct counter keys ever written in a scope. Unordered.
pub fn list_keys(conn: &Connection, scope: Scope) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT key FROM counters WHERE scope = ?1")?;
    let keys = stmt
        .query_map([scope.as_str()], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(keys)
}

/// Counter rows for one key in one scope, joined to the owner's name,
/// best value first. Players with no row for the key are absent.
pub fn leaderboard(
    conn: &Connection,
    key: &str,
    scope: Scope,
    limit: u32,
) -> rusqlite::Result<Vec<LeaderboardRow>> {
    let mut stmt = conn.prepare(
        "SELECT c.user_id, p.display_name, c.value
         FROM counters c
         JOIN players p ON p.user_id = c.user_id
         WHERE c.scope = ?1 AND c.key = ?2
         ORDER BY c.value DESC
         LIMIT ?3",
    )?;
    let rows = stmt
        .query_map(params![scope.as_str(), key, limit], |row| {
            Ok(LeaderboardRow {
                user_id: row.get(0)?,
                display_name: row.get(1)?,
                value: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Full profile for one player: identity plus every lifetime counter.
/// `None` if the player has never appeared in a batch.
pub fn get_player(conn: &Connection, user_id: i64) -> rusqlite::Result<Option<PlayerProfile>> {
    let player = conn
        .query_row(
            "SELECT user_id, display_name, last_seen FROM players WHERE user_id = ?1",
            [user_id],
            |row| {
                Ok(Player {
                    user_id: row.get(0)?,
                    display_name: row.get(1)?,
                    last_seen: row.get(2)?,
                })
            },
        )
        .optional()?;

    let Some(player) = player else {
        return Ok(None);
    };

    let mut stmt =
        conn.prepare("SELECT key, value FROM counters WHERE user_id = ?1 AND scope = ?2")?;
    let counters = stmt
        .query_map(params![user_id, Scope::Lifetime.as_str()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?
        .collect::<rusqlite::Result<HashMap<String, f64>>>()?;

    let highest_range_kill_m = counters.get(HIGHEST_RANGE_KILL_KEY).copied().unwrap_or(0.0);
    Ok(Some(PlayerProfile {
        user_id: player.user_id,
        display_name: player.display_name,
        last_seen: player.last_seen,
        counters,
        highest_range_kill_m,
    }))
}

/// Case-insensitive substring search over display names, most recently
/// seen first.
pub fn search_players(conn: &Connection, query: &str, limit: u32) -> rusqlite::Result<Vec<Player>> {
    let pattern = format!("%{}%", query.to_lowercase());
    let mut stmt = conn.prepare(
        "SELECT user_id, display_name, last_seen
         FROM players
         WHERE LOWER(display_name) LIKE ?1
         ORDER BY last_seen DESC
         LIMIT ?2",
    )?;
    let players = stmt
        .query_map(params![pattern, limit], |row| {
            Ok(Player {
                user_id: row.get(0)?,
                display_name: row.get(1)?,
                last_seen: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(players)
}

/// Start of the current wipe epoch, 0 before the first wipe.
pub fn wipe_started_at(conn: &Connection) -> rusqlite::Result<i64> {
    let started = conn
        .query_row("SELECT started_at FROM wipe_state WHERE id = 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(started.unwrap_or(0))
}

/// Clear the wipe scope and stamp the new epoch start. Callers wrap this in
/// a transaction so the clear and the stamp commit together.
pub fn start_new_wipe(conn: &Connection, started_at: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM counters WHERE scope = ?1", [Scope::Wipe.as_str()])?;
    conn.execute(
        "INSERT INTO wipe_state (id, started_at) VALUES (1, ?1)
         ON CONFLICT(id) DO UPDATE SET started_at = excluded.started_at",
        [started_at],
    )?;
    Ok(())
}
