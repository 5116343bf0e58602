//! Character catalog.
//!
//! Characters come from an external agent catalog. Fetching it is the host's
//! job; this module turns the raw payload into the playable [`Character`] list
//! the engine draws from.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub mod error;

pub use error::CatalogError;

/// A named ability of a character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }
}

/// A guessable character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    /// Abilities in catalog order; slot 3 is the ultimate
    pub abilities: Vec<Ability>,
}

impl Character {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        description: impl Into<String>,
        abilities: Vec<Ability>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            description: description.into(),
            abilities,
        }
    }

    /// Ability at `slot`, if the catalog provided one.
    pub fn ability(&self, slot: usize) -> Option<&Ability> {
        self.abilities.get(slot)
    }
}

// Wire shapes of the public agent API.

#[derive(Deserialize)]
struct Envelope {
    data: Vec<RawAgent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAgent {
    uuid: String,
    display_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    full_portrait: Option<String>,
    #[serde(default)]
    role: Option<RawRole>,
    #[serde(default)]
    abilities: Vec<RawAbility>,
    #[serde(default)]
    is_playable_character: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRole {
    display_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAbility {
    display_name: String,
    #[serde(default)]
    description: String,
}

impl RawAgent {
    fn into_playable(self) -> Option<Character> {
        if !self.is_playable_character {
            return None;
        }
        if self.full_portrait.as_deref().map_or(true, str::is_empty) {
            debug!(agent = %self.display_name, "skipping agent without portrait");
            return None;
        }
        let Some(role) = self.role else {
            debug!(agent = %self.display_name, "skipping agent without role");
            return None;
        };

        Some(Character {
            id: self.uuid,
            name: self.display_name,
            role: role.display_name,
            description: self.description,
            abilities: self
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.display_name,
                    description: a.description,
                })
                .collect(),
        })
    }
}

/// Parse an agent API payload, keeping only playable characters.
///
/// ```rust
/// let payload = r#"{"data":[{
///     "uuid": "1", "displayName": "Sage", "description": "Healer",
///     "fullPortrait": "sage.png", "role": {"displayName": "Sentinel"},
///     "abilities": [], "isPlayableCharacter": true
/// }]}"#;
/// let characters = guesswork::catalog::parse_catalog(payload).unwrap();
/// assert_eq!(characters[0].role, "Sentinel");
/// ```
pub fn parse_catalog(json: &str) -> Result<Vec<Character>, CatalogError> {
    let envelope: Envelope = serde_json::from_str(json)?;
    let total = envelope.data.len();
    let characters: Vec<Character> = envelope
        .data
        .into_iter()
        .filter_map(RawAgent::into_playable)
        .collect();
    debug!(total, playable = characters.len(), "parsed catalog");
    Ok(characters)
}

/// An already-filtered pool of characters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Catalog {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        parse_catalog(json).map(Self::new)
    }

    /// Read a cached payload from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a cached payload, degrading to an empty catalog on any failure.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "catalog unavailable, using empty pool");
                Self::default()
            }
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Display names in alphabetical order, as shown in the guess list.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.characters.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Characters whose name contains `query`, case-insensitively.
    ///
    /// A blank query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&Character> {
        let needle = query.trim().to_lowercase();
        self.characters
            .iter()
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }
}
