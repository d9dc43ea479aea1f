pub mod common;
pub mod matches;
pub mod player;
pub mod stats;
