//! Match session state.
//!
//! `MatchState` is an explicit value: the engine takes it by `&mut` and a
//! hosting layer owns one per interactive session. There is no process-wide
//! singleton. The whole value (RNG position included) serializes, so a host
//! can park a session and pick it up later.
//!
//! ## Phases
//!
//! ```text
//! Idle --draw--> Pending --fight(win)--------> Idle
//!                        --fight(loss, >0)---> Idle
//!                        --fight(loss, ==0)--> GameOver
//!                        --skip--------------> Idle (or Pending via auto-redraw)
//! Idle --draw(no candidates)--> Complete
//! ```
//!
//! `GameOver` and `Complete` are terminal: the engine rejects further
//! draws, fights, and skips once either is entered.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::rng::MatchRng;
use crate::creatures::CreatureId;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No opponent drawn; the player may draw one.
    Idle,
    /// An opponent awaits a fight or skip decision.
    Pending,
    /// Lives reached zero. Terminal.
    GameOver,
    /// No eligible opponent remains. Terminal.
    Complete,
}

impl MatchPhase {
    /// Check whether the session accepts further draws and fights.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchPhase::GameOver | MatchPhase::Complete)
    }
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchPhase::Idle => "Idle",
            MatchPhase::Pending => "Pending",
            MatchPhase::GameOver => "GameOver",
            MatchPhase::Complete => "Complete",
        };
        write!(f, "{name}")
    }
}

/// One resolved fight, kept for history/replay display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightRecord {
    /// The player's fighter.
    pub fighter: CreatureId,

    /// The drawn opponent.
    pub opponent: CreatureId,

    /// Fighter attack plus rolled bonus.
    pub fighter_power: i64,

    /// Opponent attack plus rolled bonus.
    pub opponent_power: i64,

    /// Whether the player won (ties favor the player).
    pub won: bool,

    /// Lives remaining after the fight resolved.
    pub lives_after: u8,
}

/// Full state of one match session.
///
/// Uses `im` persistent data structures for the append-only roster and
/// history, so snapshot-keeping hosts clone cheaply.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Creatures the player owns, in acquisition order. Append-only.
    roster: Vector<CreatureId>,

    /// The roster member currently designated to battle.
    pub active_fighter: CreatureId,

    /// The drawn opponent awaiting a fight or skip decision.
    pub pending_opponent: Option<CreatureId>,

    /// Remaining permitted losses before game-over.
    pub lives: u8,

    /// Session lifecycle phase.
    pub phase: MatchPhase,

    /// Current announcement (opponent appeared, skip note, completion).
    pub status: String,

    /// Result line of the most recent fight, empty right after a draw.
    pub last_outcome: String,

    /// Every resolved fight, oldest first.
    history: Vector<FightRecord>,

    /// Deterministic RNG; position travels with the snapshot.
    pub rng: MatchRng,
}

impl MatchState {
    /// Create a session state from an already-resolved seed roster.
    ///
    /// The first seed creature starts as the active fighter.
    /// Panics if the roster is empty or lives are zero; `MatchEngine`
    /// validates the rules before calling this.
    #[must_use]
    pub fn new(seed_roster: Vec<CreatureId>, lives: u8, seed: u64) -> Self {
        assert!(!seed_roster.is_empty(), "Roster must start with at least one creature");
        assert!(lives >= 1, "Session must start with at least one life");

        let active_fighter = seed_roster[0];

        Self {
            roster: seed_roster.into_iter().collect(),
            active_fighter,
            pending_opponent: None,
            lives,
            phase: MatchPhase::Idle,
            status: String::new(),
            last_outcome: String::new(),
            history: Vector::new(),
            rng: MatchRng::new(seed),
        }
    }

    // === Roster ===

    /// The player's roster, in acquisition order.
    #[must_use]
    pub fn roster(&self) -> &Vector<CreatureId> {
        &self.roster
    }

    /// Number of creatures owned.
    #[must_use]
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Check roster membership.
    #[must_use]
    pub fn in_roster(&self, id: CreatureId) -> bool {
        self.roster.contains(&id)
    }

    /// Append a won creature. The roster never shrinks.
    pub(crate) fn add_to_roster(&mut self, id: CreatureId) {
        self.roster.push_back(id);
    }

    // === History ===

    /// Every resolved fight, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<FightRecord> {
        &self.history
    }

    pub(crate) fn record_fight(&mut self, record: FightRecord) {
        self.history.push_back(record);
    }
}
