use crate::types::CardKind;
use serde::{Deserialize, Serialize};

/// A single attack printed on a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    #[serde(default)]
    pub name: String,
    /// Damage as printed. Digits may be intermixed with other characters
    /// ("30+", "10x2"); stats derivation concatenates the digits.
    #[serde(default)]
    pub damage: String,
}

/// A weakness entry
///
/// Only the number of entries feeds stats derivation; the wire fields are
/// kept for completeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    #[serde(rename = "type", default)]
    pub kind: Option<CardKind>,
    #[serde(default)]
    pub value: Option<String>,
}

/// An externally sourced card record
///
/// Cards are immutable once decoded. Identity is the `id` field; every
/// membership decision in the collection goes by id equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub hp: f64,
    #[serde(rename = "type", default)]
    pub kind: Option<CardKind>,
    /// Absent on cards with no printed attacks; the distinction from an
    /// empty list matters to stats derivation.
    #[serde(default)]
    pub attacks: Option<Vec<Attack>>,
    #[serde(default)]
    pub weaknesses: Option<Vec<Weakness>>,
}

impl Card {
    /// Create a card with just an identity; every other field defaults
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Card {
            id: id.into(),
            name: name.into(),
            image_url: String::new(),
            hp: 0.0,
            kind: None,
            attacks: None,
            weaknesses: None,
        }
    }
}

/// Response envelope returned by every catalog endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardListResponse {
    pub cards: Vec<Card>,
}
