//! Session snapshot codec.
//!
//! Hosts persist one `MatchState` per interactive session. The codec turns
//! a state into opaque bytes and back; where those bytes live (cookie,
//! key-value store, file) is the host's concern. The RNG position is part
//! of the snapshot, so a restored session continues the same random
//! sequence.

use crate::core::error::MatchResult;
use crate::core::state::MatchState;

/// Encode a session state to snapshot bytes.
pub fn encode(state: &MatchState) -> MatchResult<Vec<u8>> {
    Ok(bincode::serialize(state)?)
}

/// Decode a session state from snapshot bytes.
///
/// Fails with `SnapshotCodec` on corrupt or truncated input.
pub fn decode(bytes: &[u8]) -> MatchResult<MatchState> {
    Ok(bincode::deserialize(bytes)?)
}
