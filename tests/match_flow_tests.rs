//! Full session flow tests.
//!
//! These drive the engine the way a hosting layer would: create a session,
//! draw, fight, skip, and persist snapshots, checking the state machine at
//! every step.

use creature_match::core::{MatchError, MatchPhase, MatchRules};
use creature_match::creatures::CreatureRegistry;
use creature_match::engine::{MatchEngine, SessionResult, GAME_OVER_MARKER};
use creature_match::session;

/// The standard test dataset, loaded through the JSON wire form.
fn dex() -> CreatureRegistry {
    let json = r#"[
        {"name": "Pikachu", "type": "Electric", "hp": 35, "attack": 55,
         "image_url": "https:https://img.example/25.png"},
        {"name": "Bulbasaur", "type": "Grass/Poison", "hp": 45, "attack": 49},
        {"name": "Charmander", "type": "Fire", "hp": 39, "attack": 52},
        {"name": "Squirtle", "type": "Water", "hp": 44, "attack": 48},
        {"name": "Oddish", "type": "Grass/Poison", "hp": 45, "attack": 50}
    ]"#;
    CreatureRegistry::from_json_str(json).expect("test dataset is valid")
}

/// A two-creature dataset where the only opponent always loses:
/// 55 + bonus >= 10 + bonus for every bonus pair.
fn guaranteed_win_dex() -> CreatureRegistry {
    let mut registry = CreatureRegistry::new();
    registry.register_auto("Pikachu", "Electric", 35, 55);
    registry.register_auto("Magikarp", "Water", 20, 10);
    registry
}

/// A two-creature dataset where the only opponent always wins:
/// 99 + bonus > 55 + bonus for every bonus pair.
fn guaranteed_loss_dex() -> CreatureRegistry {
    let mut registry = CreatureRegistry::new();
    registry.register_auto("Pikachu", "Electric", 35, 55);
    registry.register_auto("Onix", "Rock/Ground", 160, 99);
    registry
}

/// Find a seed whose first session fight produces exactly the given power
/// pair. Sessions are deterministic per seed, so probing is exact.
fn seed_with_powers(
    engine: &MatchEngine,
    fighter_power: i64,
    opponent_power: i64,
) -> u64 {
    (0u64..100_000)
        .find(|&seed| {
            let mut state = engine.new_session(seed).expect("session starts");
            engine.draw_opponent(&mut state).expect("draw succeeds");
            let record = engine.resolve_fight(&mut state).expect("fight resolves");
            record.fighter_power == fighter_power && record.opponent_power == opponent_power
        })
        .expect("some seed produces the wanted rolls")
}

// =============================================================================
// Winning
// =============================================================================

/// Pikachu (attack 55) rolls to 60, Bulbasaur (attack 49) rolls to 55.
/// The player wins, collects Bulbasaur, and lives stay at the cap.
#[test]
fn test_win_collects_opponent_at_full_lives() {
    let mut registry = CreatureRegistry::new();
    registry.register_auto("Pikachu", "Electric", 35, 55);
    registry.register_auto("Bulbasaur", "Grass/Poison", 45, 49);
    let engine = MatchEngine::new(MatchRules::new().heal_on_win(true), registry);

    let seed = seed_with_powers(&engine, 60, 55);

    let mut state = engine.new_session(seed).unwrap();
    let drawn = engine.draw_opponent(&mut state).unwrap().unwrap();
    let record = engine.resolve_fight(&mut state).unwrap();

    assert!(record.won);
    assert_eq!(record.fighter_power, 60);
    assert_eq!(record.opponent_power, 55);

    let names: Vec<_> = state
        .roster()
        .iter()
        .map(|&id| engine.creatures().get_unchecked(id).name.as_str())
        .collect();
    assert_eq!(names, vec!["Pikachu", "Bulbasaur"]);
    assert_eq!(drawn, record.opponent);

    // Already at the cap - heal-on-win must not push lives past it
    assert_eq!(state.lives, 3);
    assert_eq!(state.last_outcome, "You win! Power: 60 vs 55");
}

/// A tie favors the player.
#[test]
fn test_tie_favors_player() {
    let mut registry = CreatureRegistry::new();
    registry.register_auto("Pikachu", "Electric", 35, 55);
    registry.register_auto("Haunter", "Ghost/Poison", 45, 50);
    let engine = MatchEngine::new(MatchRules::new(), registry);

    let seed = seed_with_powers(&engine, 57, 57);

    let mut state = engine.new_session(seed).unwrap();
    engine.draw_opponent(&mut state).unwrap();
    let record = engine.resolve_fight(&mut state).unwrap();

    assert!(record.won);
    assert_eq!(state.roster_len(), 2);
    assert_eq!(state.lives, 3);
}

/// Wins never decrease lives, across a whole winning run.
#[test]
fn test_wins_never_cost_lives() {
    let engine = MatchEngine::new(MatchRules::new(), guaranteed_win_dex());
    let mut state = engine.new_session(11).unwrap();

    engine.draw_opponent(&mut state).unwrap();
    let record = engine.resolve_fight(&mut state).unwrap();

    assert!(record.won);
    assert_eq!(state.lives, 3);

    // Pool exhausted: next draw completes the collection
    assert_eq!(engine.draw_opponent(&mut state).unwrap(), None);
    assert_eq!(engine.is_terminal(&state), Some(SessionResult::Completed));
}

// =============================================================================
// Losing
// =============================================================================

/// A loss burns exactly one life and leaves the roster alone.
#[test]
fn test_loss_burns_one_life() {
    let engine = MatchEngine::new(MatchRules::new(), guaranteed_loss_dex());
    let mut state = engine.new_session(3).unwrap();

    engine.draw_opponent(&mut state).unwrap();
    let record = engine.resolve_fight(&mut state).unwrap();

    assert!(!record.won);
    assert_eq!(state.lives, 2);
    assert_eq!(record.lives_after, 2);
    assert_eq!(state.roster_len(), 1);
    assert_eq!(state.phase, MatchPhase::Idle);
    assert!(state.last_outcome.starts_with("You lose!"));
    assert!(!state.last_outcome.contains(GAME_OVER_MARKER));
}

/// One life left, a losing roll: the session ends with the game-over
/// marker and every further operation is rejected.
#[test]
fn test_last_loss_is_game_over() {
    let rules = MatchRules::new().starting_lives(1);
    let engine = MatchEngine::new(rules, guaranteed_loss_dex());
    let mut state = engine.new_session(5).unwrap();

    engine.draw_opponent(&mut state).unwrap();
    let record = engine.resolve_fight(&mut state).unwrap();

    assert!(!record.won);
    assert_eq!(state.lives, 0);
    assert_eq!(state.phase, MatchPhase::GameOver);
    assert!(state.last_outcome.contains(GAME_OVER_MARKER));
    assert_eq!(engine.is_terminal(&state), Some(SessionResult::Defeated));
    assert!(engine.legal_actions(&state).is_empty());

    // Terminal means terminal
    assert!(matches!(
        engine.draw_opponent(&mut state),
        Err(MatchError::PhaseMismatch { .. })
    ));
    assert!(matches!(
        engine.resolve_fight(&mut state),
        Err(MatchError::PhaseMismatch { .. })
    ));
    assert!(matches!(
        engine.skip(&mut state),
        Err(MatchError::PhaseMismatch { .. })
    ));
}

/// Three straight losses from full lives also end the session.
#[test]
fn test_three_losses_end_session() {
    let engine = MatchEngine::new(MatchRules::new(), guaranteed_loss_dex());
    let mut state = engine.new_session(8).unwrap();

    for expected_lives in [2, 1, 0] {
        engine.draw_opponent(&mut state).unwrap();
        engine.resolve_fight(&mut state).unwrap();
        assert_eq!(state.lives, expected_lives);
    }

    assert_eq!(state.phase, MatchPhase::GameOver);
    assert_eq!(state.history().len(), 3);
}

// =============================================================================
// Skipping
// =============================================================================

/// Skip clears the pending opponent and touches nothing else.
#[test]
fn test_skip_is_free() {
    let engine = MatchEngine::new(MatchRules::new(), dex());
    let mut state = engine.new_session(21).unwrap();

    engine.draw_opponent(&mut state).unwrap();
    let lives_before = state.lives;
    let roster_before = state.roster().clone();

    engine.skip(&mut state).unwrap();

    assert_eq!(state.pending_opponent, None);
    assert_eq!(state.lives, lives_before);
    assert_eq!(state.roster(), &roster_before);
    assert_eq!(state.history().len(), 0);
    assert_eq!(state.phase, MatchPhase::Idle);
}

/// Skip requires a pending opponent.
#[test]
fn test_skip_without_pending_rejected() {
    let engine = MatchEngine::new(MatchRules::new(), dex());
    let mut state = engine.new_session(21).unwrap();

    let err = engine.skip(&mut state).unwrap_err();
    assert_eq!(
        err,
        MatchError::PhaseMismatch {
            required: MatchPhase::Pending,
            actual: MatchPhase::Idle,
        }
    );
}

// =============================================================================
// Collection completion
// =============================================================================

/// Winning every fight eventually exhausts the pool; the session completes
/// and rejects further play.
#[test]
fn test_full_collection_completes() {
    let mut registry = CreatureRegistry::new();
    registry.register_auto("Pikachu", "Electric", 35, 90);
    registry.register_auto("Caterpie", "Bug", 45, 30);
    registry.register_auto("Weedle", "Bug/Poison", 40, 35);
    registry.register_auto("Rattata", "Normal", 30, 56);
    let engine = MatchEngine::new(MatchRules::new(), registry);

    let mut state = engine.new_session(13).unwrap();

    // Attack 90 beats every opponent regardless of rolls (max gap 10)
    while engine.draw_opponent(&mut state).unwrap().is_some() {
        let record = engine.resolve_fight(&mut state).unwrap();
        assert!(record.won);
    }

    assert_eq!(state.roster_len(), engine.creatures().len());
    assert_eq!(state.phase, MatchPhase::Complete);
    assert_eq!(engine.is_terminal(&state), Some(SessionResult::Completed));
    assert!(engine.resolve_fight(&mut state).is_err());
}

// =============================================================================
// Snapshots
// =============================================================================

/// A session snapshotted mid-stream resumes on the exact same path.
#[test]
fn test_snapshot_resumes_identically() {
    let engine = MatchEngine::new(MatchRules::new(), dex());
    let mut state = engine.new_session(99).unwrap();

    engine.draw_opponent(&mut state).unwrap();
    engine.skip(&mut state).unwrap();

    let bytes = session::encode(&state).unwrap();
    let mut restored = session::decode(&bytes).unwrap();

    // Same draw, same fight, from both copies
    let d1 = engine.draw_opponent(&mut state).unwrap();
    let d2 = engine.draw_opponent(&mut restored).unwrap();
    assert_eq!(d1, d2);

    let r1 = engine.resolve_fight(&mut state).unwrap();
    let r2 = engine.resolve_fight(&mut restored).unwrap();
    assert_eq!(r1, r2);

    assert_eq!(state.roster(), restored.roster());
    assert_eq!(state.lives, restored.lives);
    assert_eq!(state.last_outcome, restored.last_outcome);
}

// =============================================================================
// Dataset
// =============================================================================

/// The JSON loader repairs doubled scheme prefixes in image references.
#[test]
fn test_dataset_image_repair() {
    let registry = dex();

    let pikachu = registry.by_name("Pikachu").unwrap();
    assert_eq!(pikachu.image_url, "https://img.example/25.png");
}

/// Session creation fails fast when the dataset lacks a seed creature.
#[test]
fn test_missing_seed_creature_is_fatal() {
    let mut registry = CreatureRegistry::new();
    registry.register_auto("Bulbasaur", "Grass/Poison", 45, 49);
    let engine = MatchEngine::new(MatchRules::new(), registry);

    let err = engine.new_session(1).unwrap_err();
    assert_eq!(
        err,
        MatchError::SeedCreatureMissing {
            name: "Pikachu".to_string()
        }
    );
    assert!(err.to_string().contains("Pikachu"));
}
