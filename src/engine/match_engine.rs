//! The match engine: draw, fight, skip, fighter selection.
//!
//! One engine serves every rule variant; behavior differences live entirely
//! in `MatchRules`. The engine owns the rules and the creature registry and
//! mutates an explicit `MatchState` passed to each operation.
//!
//! ## Determinism
//!
//! Operations draw randomness only from the state's own RNG. Candidate sets
//! are materialized in id order and fight bonuses are rolled fighter-first,
//! so a session replayed from the same seed (or restored from a snapshot)
//! takes the same path.

use log::{debug, info};

use super::actions::MatchAction;
use crate::core::error::{MatchError, MatchResult};
use crate::core::rules::MatchRules;
use crate::core::state::{FightRecord, MatchPhase, MatchState};
use crate::creatures::{Creature, CreatureId, CreatureRegistry};

/// Appended to the outcome message when the last life is lost.
pub const GAME_OVER_MARKER: &str = "Game over!";

/// Status announcement once no eligible opponent remains.
pub const COLLECTION_COMPLETE_STATUS: &str = "No challengers remain. Collection complete!";

/// How a finished session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionResult {
    /// Lives reached zero.
    Defeated,
    /// Every eligible opponent was collected.
    Completed,
}

/// The match engine.
///
/// ## Example
///
/// ```
/// use creature_match::core::MatchRules;
/// use creature_match::creatures::CreatureRegistry;
/// use creature_match::engine::MatchEngine;
///
/// let mut registry = CreatureRegistry::new();
/// registry.register_auto("Pikachu", "Electric", 35, 55);
/// registry.register_auto("Bulbasaur", "Grass/Poison", 45, 49);
///
/// let engine = MatchEngine::new(MatchRules::new(), registry);
/// let mut state = engine.new_session(42).unwrap();
///
/// let drawn = engine.draw_opponent(&mut state).unwrap();
/// assert!(drawn.is_some());
/// ```
#[derive(Clone)]
pub struct MatchEngine {
    rules: MatchRules,
    creatures: CreatureRegistry,
}

impl MatchEngine {
    /// Create an engine from rules and a loaded creature registry.
    #[must_use]
    pub fn new(rules: MatchRules, creatures: CreatureRegistry) -> Self {
        Self { rules, creatures }
    }

    /// The rule configuration.
    #[must_use]
    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// The creature registry.
    #[must_use]
    pub fn creatures(&self) -> &CreatureRegistry {
        &self.creatures
    }

    /// Start a session: resolve the rules' seed roster against the dataset
    /// and build the initial state.
    ///
    /// Fails with `SeedCreatureMissing` if any seed name has no dataset row,
    /// and with `DuplicateCreature` if two seed names resolve to the same
    /// creature.
    pub fn new_session(&self, seed: u64) -> MatchResult<MatchState> {
        let mut roster = Vec::with_capacity(self.rules.seed_roster.len());
        for name in &self.rules.seed_roster {
            let creature = self
                .creatures
                .by_name(name)
                .ok_or_else(|| MatchError::SeedCreatureMissing { name: name.clone() })?;
            if roster.contains(&creature.id) {
                return Err(MatchError::DuplicateCreature { name: name.clone() });
            }
            roster.push(creature.id);
        }

        info!(
            "session: starting with {} seed creatures, {} lives, seed {}",
            roster.len(),
            self.rules.starting_lives,
            seed
        );

        Ok(MatchState::new(roster, self.rules.starting_lives, seed))
    }

    /// Materialize the eligible opponent set: not in the roster, and sharing
    /// a type tag with the active fighter when the rules enforce it.
    ///
    /// Ordered by id so a seeded draw replays identically.
    #[must_use]
    pub fn eligible_opponents(&self, state: &MatchState) -> Vec<CreatureId> {
        self.eligible_matching(state, |_| true)
    }

    /// Eligible opponents with a host-supplied predicate layered on the
    /// rules' own filters.
    pub fn eligible_matching<F>(&self, state: &MatchState, extra: F) -> Vec<CreatureId>
    where
        F: Fn(&Creature) -> bool,
    {
        let fighter = self.creatures.get_unchecked(state.active_fighter);

        let mut candidates: Vec<CreatureId> = self
            .creatures
            .find(|c| {
                !state.in_roster(c.id)
                    && (!self.rules.enforce_type_match || c.types.shares_tag(&fighter.types))
                    && extra(c)
            })
            .map(|c| c.id)
            .collect();

        candidates.sort();
        candidates
    }

    /// Draw a random opponent from the eligible set.
    ///
    /// Requires the `Idle` phase. An empty candidate set is a terminal
    /// success, not an error: the session moves to `Complete` and
    /// `Ok(None)` is returned. Otherwise the session moves to `Pending`
    /// with the drawn creature announced in the status line.
    pub fn draw_opponent(&self, state: &mut MatchState) -> MatchResult<Option<CreatureId>> {
        self.draw_opponent_with(state, |_| true)
    }

    /// Draw with an extra eligibility predicate layered on the rules' own
    /// filters, for hosts with custom matchmaking.
    pub fn draw_opponent_with<F>(
        &self,
        state: &mut MatchState,
        extra: F,
    ) -> MatchResult<Option<CreatureId>>
    where
        F: Fn(&Creature) -> bool,
    {
        self.require_phase(state, MatchPhase::Idle)?;

        let candidates = self.eligible_matching(state, extra);
        debug!("draw: {} eligible candidates", candidates.len());

        if candidates.is_empty() {
            state.pending_opponent = None;
            state.phase = MatchPhase::Complete;
            state.status = COLLECTION_COMPLETE_STATUS.to_string();
            info!("session: collection complete after {} fights", state.history().len());
            return Ok(None);
        }

        let drawn = *state
            .rng
            .choose(&candidates)
            .expect("candidate set is non-empty");
        let name = &self.creatures.get_unchecked(drawn).name;

        state.pending_opponent = Some(drawn);
        state.phase = MatchPhase::Pending;
        state.status = format!("{name} appears!");
        state.last_outcome.clear();

        Ok(Some(drawn))
    }

    /// Resolve the fight against the pending opponent.
    ///
    /// Requires the `Pending` phase. Power is attack plus an independent
    /// uniform bonus per side, fighter's roll first; ties favor the player.
    /// A win appends the opponent to the roster (and heals one life up to
    /// the cap in heal-on-win variants). A loss burns a life; at zero the
    /// session moves to `GameOver` and the outcome message carries
    /// [`GAME_OVER_MARKER`]. The pending opponent is cleared either way -
    /// a fight is one-shot.
    pub fn resolve_fight(&self, state: &mut MatchState) -> MatchResult<FightRecord> {
        self.require_phase(state, MatchPhase::Pending)?;

        let opponent_id = state
            .pending_opponent
            .expect("Pending phase implies a pending opponent");
        let fighter = self.creatures.get_unchecked(state.active_fighter);
        let opponent = self.creatures.get_unchecked(opponent_id);

        let fighter_power = fighter.attack + state.rng.bonus();
        let opponent_power = opponent.attack + state.rng.bonus();
        let won = fighter_power >= opponent_power;

        debug!(
            "fight: {} ({fighter_power}) vs {} ({opponent_power})",
            fighter.name, opponent.name
        );

        if won {
            state.add_to_roster(opponent_id);
            if self.rules.heal_on_win && state.lives < self.rules.lives_cap {
                state.lives += 1;
            }
            state.last_outcome = format!("You win! Power: {fighter_power} vs {opponent_power}");
            state.phase = MatchPhase::Idle;
        } else {
            state.lives -= 1;
            state.last_outcome = format!("You lose! Power: {fighter_power} vs {opponent_power}");
            if state.lives == 0 {
                state.last_outcome.push_str(&format!(" {GAME_OVER_MARKER}"));
                state.phase = MatchPhase::GameOver;
                info!("session: out of lives after {} fights", state.history().len() + 1);
            } else {
                state.phase = MatchPhase::Idle;
            }
        }

        state.pending_opponent = None;

        let record = FightRecord {
            fighter: state.active_fighter,
            opponent: opponent_id,
            fighter_power,
            opponent_power,
            won,
            lives_after: state.lives,
        };
        state.record_fight(record.clone());

        Ok(record)
    }

    /// Decline the pending opponent.
    ///
    /// Requires the `Pending` phase. Never touches roster or lives. In
    /// auto-redraw variants the next opponent is drawn immediately and
    /// returned; `Ok(None)` then means the pool ran dry and the session is
    /// `Complete`.
    pub fn skip(&self, state: &mut MatchState) -> MatchResult<Option<CreatureId>> {
        self.require_phase(state, MatchPhase::Pending)?;

        let skipped = state
            .pending_opponent
            .expect("Pending phase implies a pending opponent");
        let name = &self.creatures.get_unchecked(skipped).name;
        debug!("skip: declined {name}");

        state.pending_opponent = None;
        state.phase = MatchPhase::Idle;
        state.status = format!("Skipped {name}.");

        if self.rules.auto_redraw_on_skip {
            return self.draw_opponent(state);
        }

        Ok(None)
    }

    /// Make the named roster member the active fighter.
    ///
    /// Name matching ignores case. Permitted in any phase - selection
    /// mutates no fight state. Fails with `NotInRoster` for names the
    /// player does not own (including names absent from the dataset).
    pub fn select_fighter(&self, state: &mut MatchState, name: &str) -> MatchResult<CreatureId> {
        let creature = self
            .creatures
            .by_name(name)
            .ok_or_else(|| MatchError::NotInRoster { name: name.to_string() })?;

        self.select_fighter_by_id(state, creature.id)
    }

    fn select_fighter_by_id(&self, state: &mut MatchState, id: CreatureId) -> MatchResult<CreatureId> {
        if !state.in_roster(id) {
            let name = self
                .creatures
                .get(id)
                .map_or_else(|| id.to_string(), |c| c.name.clone());
            return Err(MatchError::NotInRoster { name });
        }

        state.active_fighter = id;
        Ok(id)
    }

    /// Enumerate the actions valid in the current phase, so a presentation
    /// layer can withhold controls. Terminal phases offer nothing.
    #[must_use]
    pub fn legal_actions(&self, state: &MatchState) -> Vec<MatchAction> {
        let mut actions = match state.phase {
            MatchPhase::Idle => vec![MatchAction::FindOpponent],
            MatchPhase::Pending => vec![MatchAction::Fight, MatchAction::Skip],
            MatchPhase::GameOver | MatchPhase::Complete => return vec![],
        };

        for id in state.roster() {
            actions.push(MatchAction::SelectFighter(*id));
        }

        actions
    }

    /// Dispatch one action to the operation it names.
    pub fn apply(&self, state: &mut MatchState, action: &MatchAction) -> MatchResult<()> {
        match action {
            MatchAction::FindOpponent => self.draw_opponent(state).map(|_| ()),
            MatchAction::Fight => self.resolve_fight(state).map(|_| ()),
            MatchAction::Skip => self.skip(state).map(|_| ()),
            MatchAction::SelectFighter(id) => self.select_fighter_by_id(state, *id).map(|_| ()),
        }
    }

    /// Check if the session is over.
    ///
    /// Returns `Some(result)` for the two terminal phases, `None` while
    /// play continues.
    #[must_use]
    pub fn is_terminal(&self, state: &MatchState) -> Option<SessionResult> {
        match state.phase {
            MatchPhase::GameOver => Some(SessionResult::Defeated),
            MatchPhase::Complete => Some(SessionResult::Completed),
            MatchPhase::Idle | MatchPhase::Pending => None,
        }
    }

    fn require_phase(&self, state: &MatchState, required: MatchPhase) -> MatchResult<()> {
        if state.phase == required {
            Ok(())
        } else {
            Err(MatchError::PhaseMismatch {
                required,
                actual: state.phase,
            })
        }
    }
}
