//! Creature registry for definition lookup.
//!
//! The `CreatureRegistry` stores the creature dataset for a game and
//! provides lookup by id and by name. Names are the dataset's unique key
//! and are matched case-insensitively, the way the source selects its
//! seed creature.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{Creature, CreatureId};
use super::typing::TypeLine;
use crate::core::error::{MatchError, MatchResult};

/// One dataset row as shipped on the wire.
#[derive(Deserialize)]
struct JsonCreature {
    name: String,
    #[serde(rename = "type")]
    type_line: String,
    hp: i64,
    attack: i64,
    #[serde(default)]
    image_url: String,
}

/// Registry of creature definitions.
///
/// ## Example
///
/// ```
/// use creature_match::creatures::CreatureRegistry;
///
/// let mut registry = CreatureRegistry::new();
/// let id = registry.register_auto("Pikachu", "Electric", 35, 55);
///
/// assert_eq!(registry.by_name("pikachu").unwrap().id, id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CreatureRegistry {
    creatures: FxHashMap<CreatureId, Creature>,
    by_name: FxHashMap<String, CreatureId>,
    next_id: u32,
}

impl CreatureRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON array of dataset rows.
    ///
    /// Expected row shape:
    /// `{"name": "Pikachu", "type": "Electric", "hp": 35, "attack": 55, "image_url": "..."}`
    ///
    /// Ids are assigned in row order. Duplicate names (case-insensitive) and
    /// malformed JSON are rejected; malformed image references are repaired,
    /// not rejected.
    pub fn from_json_str(json: &str) -> MatchResult<Self> {
        let rows: Vec<JsonCreature> = serde_json::from_str(json)?;

        let mut registry = Self::new();
        for row in rows {
            if registry.by_name.contains_key(&row.name.to_lowercase()) {
                return Err(MatchError::DuplicateCreature { name: row.name });
            }

            let id = CreatureId::new(registry.next_id);
            registry.next_id += 1;
            registry.register(
                Creature::new(id, row.name, TypeLine::parse(&row.type_line), row.hp, row.attack)
                    .with_image_url(&row.image_url),
            );
        }

        Ok(registry)
    }

    /// Register a creature definition.
    ///
    /// Panics if the id or the name (case-insensitive) is already taken.
    /// Dataset loading goes through `from_json_str`, which reports
    /// duplicates as errors instead.
    pub fn register(&mut self, creature: Creature) {
        if self.creatures.contains_key(&creature.id) {
            panic!("Creature with ID {:?} already registered", creature.id);
        }
        let name_key = creature.name.to_lowercase();
        if self.by_name.contains_key(&name_key) {
            panic!("Creature named '{}' already registered", creature.name);
        }

        self.by_name.insert(name_key, creature.id);
        self.creatures.insert(creature.id, creature);
    }

    /// Register a creature with an auto-assigned id.
    ///
    /// Returns the assigned id.
    pub fn register_auto(
        &mut self,
        name: impl Into<String>,
        types: impl Into<TypeLine>,
        hp: i64,
        attack: i64,
    ) -> CreatureId {
        let id = CreatureId::new(self.next_id);
        self.next_id += 1;

        self.register(Creature::new(id, name, types, hp, attack));
        id
    }

    /// Get a creature definition by id.
    #[must_use]
    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    /// Get a creature definition by id, panicking if not found.
    ///
    /// Use when you're certain the creature exists, e.g. for ids taken
    /// from a roster.
    #[must_use]
    pub fn get_unchecked(&self, id: CreatureId) -> &Creature {
        self.creatures.get(&id).expect("Creature not found in registry")
    }

    /// Look a creature up by name, ignoring case.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Creature> {
        let id = self.by_name.get(&name.to_lowercase())?;
        self.creatures.get(id)
    }

    /// Check if a creature id is registered.
    #[must_use]
    pub fn contains(&self, id: CreatureId) -> bool {
        self.creatures.contains_key(&id)
    }

    /// Get the number of registered creatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Iterate over all creature definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.values()
    }

    /// Find creatures matching a predicate (unordered).
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Creature>
    where
        F: Fn(&Creature) -> bool,
    {
        self.creatures.values().filter(move |c| predicate(c))
    }
}
