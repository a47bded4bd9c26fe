pub mod model;
pub mod player;
pub mod query;
pub mod snapshot;

pub use model::*;
pub use player::*;
pub use query::*;
pub use snapshot::*;
