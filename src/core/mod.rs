//! Core session types: rules, state, RNG, errors.
//!
//! These are the building blocks the engine operates on. Hosts configure a
//! session via `MatchRules` and own a `MatchState` value per session.

pub mod error;
pub mod rng;
pub mod rules;
pub mod state;

pub use error::{MatchError, MatchResult};
pub use rng::{MatchRng, MatchRngState, POWER_BONUS_MAX};
pub use rules::MatchRules;
pub use state::{FightRecord, MatchPhase, MatchState};
