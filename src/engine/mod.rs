//! The match engine and its action surface.

pub mod actions;
pub mod match_engine;

pub use actions::MatchAction;
pub use match_engine::{
    MatchEngine, SessionResult, COLLECTION_COMPLETE_STATUS, GAME_OVER_MARKER,
};
