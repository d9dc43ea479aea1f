pub mod matches;
pub mod players;
pub mod stats;
