pub mod queries;
pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStatsRepository;
