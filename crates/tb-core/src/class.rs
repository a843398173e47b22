use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six playable character classes.
///
/// The declaration order is the class order used to break initiative ties:
/// `Vanguard` acts before `Alchemist`, and so on down to `Dreamthief`. This
/// order is fixed engine configuration, not per-actor state, which is why
/// the enum derives [`Ord`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// Front-line shield bearer.
    Vanguard,
    /// Brewer of volatile concoctions.
    Alchemist,
    /// Scribe of offensive glyphs.
    Runeweaver,
    /// Skirmisher striking from the flanks.
    Shadowfoot,
    /// Shaper of stone and terrain.
    Earthcaller,
    /// Manipulator of enemy minds.
    Dreamthief,
}

impl CharacterClass {
    /// All classes in tie-break order.
    pub const ALL: [CharacterClass; 6] = [
        CharacterClass::Vanguard,
        CharacterClass::Alchemist,
        CharacterClass::Runeweaver,
        CharacterClass::Shadowfoot,
        CharacterClass::Earthcaller,
        CharacterClass::Dreamthief,
    ];

    /// Position of this class in the tie-break order (0-based).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Try to parse a class from its lowercase name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vanguard" => Some(Self::Vanguard),
            "alchemist" => Some(Self::Alchemist),
            "runeweaver" => Some(Self::Runeweaver),
            "shadowfoot" => Some(Self::Shadowfoot),
            "earthcaller" => Some(Self::Earthcaller),
            "dreamthief" => Some(Self::Dreamthief),
            _ => None,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vanguard => write!(f, "vanguard"),
            Self::Alchemist => write!(f, "alchemist"),
            Self::Runeweaver => write!(f, "runeweaver"),
            Self::Shadowfoot => write!(f, "shadowfoot"),
            Self::Earthcaller => write!(f, "earthcaller"),
            Self::Dreamthief => write!(f, "dreamthief"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_order_is_declaration_order() {
        assert!(CharacterClass::Vanguard < CharacterClass::Alchemist);
        assert!(CharacterClass::Alchemist < CharacterClass::Runeweaver);
        assert!(CharacterClass::Earthcaller < CharacterClass::Dreamthief);
    }

    #[test]
    fn rank_matches_all_position() {
        for (i, class) in CharacterClass::ALL.iter().enumerate() {
            assert_eq!(class.rank() as usize, i);
        }
    }

    #[test]
    fn parse_round_trips_display() {
        for class in CharacterClass::ALL {
            assert_eq!(CharacterClass::parse(&class.to_string()), Some(class));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(CharacterClass::parse("berserker"), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&CharacterClass::Runeweaver).unwrap();
        assert_eq!(json, "\"runeweaver\"");
    }
}
