//! SQL schema for the stats store.
//!
//! One scope-tagged counter table holds both accumulators; wipe resets
//! delete the `wipe` rows en masse and leave `lifetime` untouched.
//! `wipe_state` is a singleton row, pinned by its CHECK.

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS players (
    user_id INTEGER PRIMARY KEY,
    display_name TEXT NOT NULL CHECK (length(display_name) BETWEEN 1 AND 64),
    last_seen INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS counters (
    user_id INTEGER NOT NULL REFERENCES players(user_id) ON DELETE CASCADE,
    scope TEXT NOT NULL CHECK (scope IN ('lifetime', 'wipe')),
    key TEXT NOT NULL CHECK (length(key) BETWEEN 1 AND 64),
    value REAL NOT NULL DEFAULT 0.0,
    PRIMARY KEY (user_id, scope, key)
);

CREATE INDEX IF NOT EXISTS idx_counters_board ON counters(scope, key, value);

CREATE TABLE IF NOT EXISTS wipe_state (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    started_at INTEGER NOT NULL DEFAULT 0
);
"#;
