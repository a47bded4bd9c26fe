// Merge strategy value object

/// How a submitted value merges into an existing accumulator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// value += delta
    Add,
    /// value = max(value, candidate)
    Max,
}

/// Counter key tracking the longest-distance kill, maintained via
/// [`MergeStrategy::Max`] in both scopes.
pub const HIGHEST_RANGE_KILL_KEY: &str = "highest_range_kill.m";
