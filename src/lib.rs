//! # creature-match
//!
//! A collect-and-battle match engine: a player owns a roster of creatures,
//! draws random opponents, and resolves fights by comparing attack plus a
//! uniform random bonus. Wins grow the roster, losses burn lives, and a
//! session ends in defeat (no lives) or completion (no opponents left).
//!
//! ## Design Principles
//!
//! 1. **One engine, many variants**: every game variant is a `MatchRules`
//!    configuration of a single `MatchEngine` (heal-on-win, fair-fight
//!    type matching, auto-redraw on skip, lives cap).
//!
//! 2. **Explicit state**: no process-wide session singleton. A host owns a
//!    `MatchState` value per session and passes it to every operation; the
//!    whole value serializes, RNG position included.
//!
//! 3. **Deterministic by construction**: seeded ChaCha8 RNG, id-ordered
//!    candidate sets, fixed bonus roll order. Same seed, same session.
//!
//! 4. **Terminal means terminal**: once a session is `GameOver` or
//!    `Complete`, further draws and fights are rejected with an error
//!    instead of silently tolerated.
//!
//! ## Modules
//!
//! - `core`: rules, state, phases, RNG, errors
//! - `creatures`: creature definitions, type lines, dataset registry
//! - `engine`: the match engine and its action surface
//! - `session`: snapshot codec for per-session persistence

pub mod core;
pub mod creatures;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    FightRecord, MatchError, MatchPhase, MatchResult, MatchRng, MatchRngState, MatchRules,
    MatchState, POWER_BONUS_MAX,
};

pub use crate::creatures::{normalize_image_url, Creature, CreatureId, CreatureRegistry, TypeLine};

pub use crate::engine::{
    MatchAction, MatchEngine, SessionResult, COLLECTION_COMPLETE_STATUS, GAME_OVER_MARKER,
};
