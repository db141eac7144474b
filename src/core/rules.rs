//! Match rule configuration.
//!
//! The game exists in several near-identical variants; each is a point in
//! this option space, so hosts configure one engine instead of forking it:
//!
//! - `heal_on_win`: winning restores a life, up to `lives_cap`
//! - `enforce_type_match`: opponents must share a type tag with the active
//!   fighter ("fair fight")
//! - `auto_redraw_on_skip`: skipping immediately draws the next opponent
//!
//! The seed roster names the creatures the player starts with (one to
//! three); session creation fails if the dataset lacks any of them.

use serde::{Deserialize, Serialize};

/// Rule configuration for a match session.
///
/// Built with chained setters:
///
/// ```
/// use creature_match::core::MatchRules;
///
/// let rules = MatchRules::new()
///     .heal_on_win(true)
///     .auto_redraw_on_skip(true)
///     .seed_roster(["Pikachu"]);
///
/// assert!(rules.heal_on_win);
/// assert_eq!(rules.lives_cap, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// Winning a fight restores one life, never above `lives_cap`.
    pub heal_on_win: bool,

    /// Drawn opponents must share a type tag with the active fighter.
    pub enforce_type_match: bool,

    /// Skipping an opponent immediately draws the next one.
    pub auto_redraw_on_skip: bool,

    /// Upper bound on lives; healing never exceeds it.
    pub lives_cap: u8,

    /// Lives at session start.
    pub starting_lives: u8,

    /// Names of the creatures the player starts with (one to three).
    pub seed_roster: Vec<String>,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            heal_on_win: false,
            enforce_type_match: false,
            auto_redraw_on_skip: false,
            lives_cap: 3,
            starting_lives: 3,
            seed_roster: vec!["Pikachu".to_string()],
        }
    }
}

impl MatchRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn heal_on_win(mut self, heal: bool) -> Self {
        self.heal_on_win = heal;
        self
    }

    #[must_use]
    pub fn enforce_type_match(mut self, enforce: bool) -> Self {
        self.enforce_type_match = enforce;
        self
    }

    #[must_use]
    pub fn auto_redraw_on_skip(mut self, redraw: bool) -> Self {
        self.auto_redraw_on_skip = redraw;
        self
    }

    #[must_use]
    pub fn lives_cap(mut self, cap: u8) -> Self {
        assert!(cap >= 1, "Lives cap must be at least 1");
        self.lives_cap = cap;
        self
    }

    #[must_use]
    pub fn starting_lives(mut self, lives: u8) -> Self {
        assert!(lives >= 1, "Starting lives must be at least 1");
        self.starting_lives = lives;
        self
    }

    /// Set the seed roster names.
    ///
    /// Panics unless one to three names are given.
    #[must_use]
    pub fn seed_roster<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(
            (1..=3).contains(&names.len()),
            "Seed roster must hold 1-3 creatures"
        );
        self.seed_roster = names;
        self
    }
}
