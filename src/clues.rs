//! Clue generation.
//!
//! A character yields five fixed clues, revealed in order. Asking for a clue
//! past the last one returns the last one again.

use crate::catalog::Character;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct clues per character.
pub const MAX_CLUES: usize = 5;

/// Stand-in for an ability the catalog did not provide.
pub const UNKNOWN_ABILITY: &str = "Desconocida";

/// Description characters shown in the description clue.
pub const DESCRIPTION_EXCERPT_CHARS: usize = 100;

/// What a clue reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClueKind {
    Role,
    FirstAbility,
    SecondAbility,
    Description,
    Ultimate,
}

impl ClueKind {
    /// Kind of the `n`-th clue, 1-based, clamped into `1..=MAX_CLUES`.
    pub fn for_index(n: usize) -> Self {
        match n.clamp(1, MAX_CLUES) {
            1 => Self::Role,
            2 => Self::FirstAbility,
            3 => Self::SecondAbility,
            4 => Self::Description,
            _ => Self::Ultimate,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Role => "Rol",
            Self::FirstAbility => "Habilidad 1",
            Self::SecondAbility => "Habilidad 2",
            Self::Description => "Descripción",
            Self::Ultimate => "Habilidad definitiva",
        }
    }
}

/// A single revealed hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub kind: ClueKind,
    pub text: String,
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.text)
    }
}

fn ability_name(character: &Character, slot: usize) -> String {
    character
        .ability(slot)
        .map(|a| a.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_ABILITY)
        .to_string()
}

fn excerpt(description: &str) -> String {
    let mut text: String = description.chars().take(DESCRIPTION_EXCERPT_CHARS).collect();
    text.push_str("...");
    text
}

/// The `n`-th clue (1-based) for `character`.
///
/// `n` above [`MAX_CLUES`] yields the last clue; `n == 0` yields the first.
///
/// ```rust
/// use guesswork::catalog::{Ability, Character};
/// use guesswork::clues::clue;
///
/// let jett = Character::new("1", "Jett", "Duelist", "Wind", vec![Ability::new("Cloudburst")]);
/// assert_eq!(clue(&jett, 1).to_string(), "Rol: Duelist");
/// assert_eq!(clue(&jett, 3).text, "Desconocida");
/// assert_eq!(clue(&jett, 9), clue(&jett, 5));
/// ```
pub fn clue(character: &Character, n: usize) -> Clue {
    let kind = ClueKind::for_index(n);
    let text = match kind {
        ClueKind::Role => character.role.clone(),
        ClueKind::FirstAbility => ability_name(character, 0),
        ClueKind::SecondAbility => ability_name(character, 1),
        ClueKind::Description => excerpt(&character.description),
        ClueKind::Ultimate => ability_name(character, 3),
    };
    Clue { kind, text }
}

/// Rendered `n`-th clue.
pub fn clue_text(character: &Character, n: usize) -> String {
    clue(character, n).to_string()
}

/// The first `revealed` clues, in order.
pub fn revealed(character: &Character, revealed: usize) -> Vec<Clue> {
    (1..=revealed.min(MAX_CLUES))
        .map(|n| clue(character, n))
        .collect()
}
