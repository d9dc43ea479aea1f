pub mod match_result;
pub mod matches;
pub mod player;

pub use match_result::MatchResult;
pub use matches::Match;
pub use player::Player;
