pub mod group;
pub mod time;

pub use group::{group_and_select, MatchDay};
pub use time::{normalize, LocalZone, TimestampParseError};
