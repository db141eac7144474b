//! The action surface offered to a presentation layer.
//!
//! A host renders controls from `MatchEngine::legal_actions` and feeds the
//! chosen action back through `MatchEngine::apply`. The engine validates
//! phases either way, so a stale or hostile caller cannot corrupt a
//! session.

use serde::{Deserialize, Serialize};

use crate::creatures::CreatureId;

/// One player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchAction {
    /// Draw a random eligible opponent.
    FindOpponent,
    /// Resolve a fight against the pending opponent.
    Fight,
    /// Decline the pending opponent.
    Skip,
    /// Make this roster member the active fighter.
    SelectFighter(CreatureId),
}
