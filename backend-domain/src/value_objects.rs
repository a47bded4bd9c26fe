// Domain value objects
pub mod merge;
pub mod scope;

pub use merge::*;
pub use scope::*;
