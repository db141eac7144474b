//! Creature definitions - static reference data.
//!
//! A `Creature` holds the immutable properties of one dataset row: unique
//! name, type line, hit points, attack, image reference. Session-specific
//! facts (ownership, pending opponent) live in `MatchState`, which refers
//! back here by `CreatureId`.

use serde::{Deserialize, Serialize};

use super::typing::TypeLine;

/// Unique identifier for a creature definition.
///
/// Assigned by the registry at load time; the dataset's stable key is the
/// creature name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

impl CreatureId {
    /// Create a new creature ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Creature({})", self.0)
    }
}

/// Normalize a dataset image reference.
///
/// Some rows carry a doubled scheme (`https:https://...`); collapse it and
/// trim surrounding whitespace. Recovery is local - a malformed reference
/// is never an error.
#[must_use]
pub fn normalize_image_url(raw: &str) -> String {
    raw.trim().replace("https:https://", "https://")
}

/// Static creature definition.
///
/// ## Example
///
/// ```
/// use creature_match::creatures::{Creature, CreatureId};
///
/// let pikachu = Creature::new(CreatureId::new(0), "Pikachu", "Electric", 35, 55)
///     .with_image_url("https:https://img.example/pikachu.png");
///
/// assert_eq!(pikachu.attack, 55);
/// assert_eq!(pikachu.image_url, "https://img.example/pikachu.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Registry-assigned identifier.
    pub id: CreatureId,

    /// Unique name; the dataset's key.
    pub name: String,

    /// Category label, possibly composite ("Grass/Poison").
    pub types: TypeLine,

    /// Hit points.
    pub hp: i64,

    /// Attack value; the base of the fight power roll.
    pub attack: i64,

    /// Image reference, normalized.
    pub image_url: String,
}

impl Creature {
    /// Create a new creature definition.
    #[must_use]
    pub fn new(
        id: CreatureId,
        name: impl Into<String>,
        types: impl Into<TypeLine>,
        hp: i64,
        attack: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            types: types.into(),
            hp,
            attack,
            image_url: String::new(),
        }
    }

    /// Set the image reference (builder pattern). Normalizes on the way in.
    #[must_use]
    pub fn with_image_url(mut self, raw: impl AsRef<str>) -> Self {
        self.image_url = normalize_image_url(raw.as_ref());
        self
    }
}
