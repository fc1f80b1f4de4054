//! Heroes, classes, parties, and equipment rules.

pub mod equipment;
pub mod types;

pub use equipment::*;
pub use types::*;
