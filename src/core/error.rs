//! Error types for match operations.
//!
//! Expected gameplay outcomes are not errors: losing a fight, running out of
//! lives, and exhausting the opponent pool are all reported through
//! `MatchState`. Errors cover misuse of the engine (operations in the wrong
//! phase, unknown fighters) and bad external input (datasets, snapshots).

use std::{error, fmt};

use super::state::MatchPhase;

/// Errors that can occur during match operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Operation not allowed in the current phase, e.g. resolving a fight
    /// with no pending opponent or drawing after the session ended.
    PhaseMismatch {
        required: MatchPhase,
        actual: MatchPhase,
    },
    /// Fighter selection named a creature the player does not own.
    NotInRoster { name: String },
    /// A seed creature named by the rules is missing from the dataset.
    /// Fatal at session creation: initial state cannot be established.
    SeedCreatureMissing { name: String },
    /// Dataset contains two creatures with the same name.
    DuplicateCreature { name: String },
    /// Dataset JSON could not be parsed.
    DatasetParse { detail: String },
    /// Session snapshot bytes could not be decoded.
    SnapshotCodec { detail: String },
}

/// Result type alias for match operations.
pub type MatchResult<T> = Result<T, MatchError>;

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::PhaseMismatch { required, actual } => {
                write!(f, "operation requires the {required} phase (session is {actual})")
            }
            MatchError::NotInRoster { name } => {
                write!(f, "no creature named '{name}' in the roster")
            }
            MatchError::SeedCreatureMissing { name } => {
                write!(f, "seed creature '{name}' is not in the dataset")
            }
            MatchError::DuplicateCreature { name } => {
                write!(f, "creature name '{name}' is already registered")
            }
            MatchError::DatasetParse { detail } => {
                write!(f, "invalid creature dataset: {detail}")
            }
            MatchError::SnapshotCodec { detail } => {
                write!(f, "invalid session snapshot: {detail}")
            }
        }
    }
}

impl error::Error for MatchError {}

impl From<serde_json::Error> for MatchError {
    fn from(value: serde_json::Error) -> Self {
        Self::DatasetParse {
            detail: value.to_string(),
        }
    }
}

impl From<bincode::Error> for MatchError {
    fn from(value: bincode::Error) -> Self {
        Self::SnapshotCodec {
            detail: value.to_string(),
        }
    }
}
