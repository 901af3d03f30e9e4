use serde::{Deserialize, Serialize};
use std::fmt;

/// Elemental card types
///
/// The palette is fixed: the renderer keys frame colors on it and the
/// catalog service filters on the exact type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Psychic,
    Fighting,
    Fairy,
    Normal,
    Grass,
    Metal,
    Water,
    Lightning,
    Darkness,
    Colorless,
    Fire,
}

impl CardKind {
    /// Get all card kind variants
    pub fn all() -> &'static [CardKind] {
        &[
            CardKind::Psychic,
            CardKind::Fighting,
            CardKind::Fairy,
            CardKind::Normal,
            CardKind::Grass,
            CardKind::Metal,
            CardKind::Water,
            CardKind::Lightning,
            CardKind::Darkness,
            CardKind::Colorless,
            CardKind::Fire,
        ]
    }

    /// Display color the renderer uses for this kind
    pub fn color(&self) -> &'static str {
        match self {
            CardKind::Psychic => "#f8a5c2",
            CardKind::Fighting => "#f0932b",
            CardKind::Fairy => "#c44569",
            CardKind::Normal => "#f6e58d",
            CardKind::Grass => "#badc58",
            CardKind::Metal => "#95afc0",
            CardKind::Water => "#3dc1d3",
            CardKind::Lightning => "#f9ca24",
            CardKind::Darkness => "#574b90",
            CardKind::Colorless => "#FFF",
            CardKind::Fire => "#eb4d4b",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Psychic => write!(f, "Psychic"),
            CardKind::Fighting => write!(f, "Fighting"),
            CardKind::Fairy => write!(f, "Fairy"),
            CardKind::Normal => write!(f, "Normal"),
            CardKind::Grass => write!(f, "Grass"),
            CardKind::Metal => write!(f, "Metal"),
            CardKind::Water => write!(f, "Water"),
            CardKind::Lightning => write!(f, "Lightning"),
            CardKind::Darkness => write!(f, "Darkness"),
            CardKind::Colorless => write!(f, "Colorless"),
            CardKind::Fire => write!(f, "Fire"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_a_color() {
        for kind in CardKind::all() {
            assert!(kind.color().starts_with('#'));
        }
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(CardKind::Lightning.to_string(), "Lightning");
        assert_eq!(CardKind::Colorless.to_string(), "Colorless");
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&CardKind::Psychic).unwrap();
        assert_eq!(json, "\"Psychic\"");
        let kind: CardKind = serde_json::from_str("\"Fire\"").unwrap();
        assert_eq!(kind, CardKind::Fire);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: Result<CardKind, _> = serde_json::from_str("\"Dragon\"");
        assert!(result.is_err());
    }
}
