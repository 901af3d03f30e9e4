//! The catalog seam: where card records come from.
//!
//! The remote service exposes three views of the same catalog: everything,
//! filtered by name substring, and filtered by exact type. `CatalogSource`
//! abstracts those three queries so the session shell can run against the
//! browser HTTP client or an in-memory stand-in interchangeably.

use crate::CatalogError;
use async_trait::async_trait;
use card_core::Card;

/// Source of card records, filtered the way the catalog service filters
///
/// Futures are deliberately non-Send: the execution model is a
/// single-threaded event loop and no work crosses threads.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// The full catalog
    async fn all_cards(&self) -> Result<Vec<Card>, CatalogError>;

    /// Cards whose name contains `key` (an empty key matches every card)
    async fn cards_by_name(&self, key: &str) -> Result<Vec<Card>, CatalogError>;

    /// Cards whose type name equals `key` exactly (an empty key matches
    /// nothing)
    async fn cards_by_kind(&self, key: &str) -> Result<Vec<Card>, CatalogError>;
}

/// In-memory catalog implementing the service's filter contract
///
/// Used by tests and native demos in place of the remote service.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    cards: Vec<Card>,
}

impl MemoryCatalog {
    pub fn new(cards: Vec<Card>) -> Self {
        MemoryCatalog { cards }
    }
}

#[async_trait(?Send)]
impl CatalogSource for MemoryCatalog {
    async fn all_cards(&self) -> Result<Vec<Card>, CatalogError> {
        Ok(self.cards.clone())
    }

    async fn cards_by_name(&self, key: &str) -> Result<Vec<Card>, CatalogError> {
        let key = key.to_lowercase();
        Ok(self
            .cards
            .iter()
            .filter(|card| card.name.to_lowercase().contains(&key))
            .cloned()
            .collect())
    }

    async fn cards_by_kind(&self, key: &str) -> Result<Vec<Card>, CatalogError> {
        Ok(self
            .cards
            .iter()
            .filter(|card| card.kind.is_some_and(|kind| kind.to_string() == key))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_core::CardKind;

    fn sample() -> MemoryCatalog {
        let mut charmander = Card::new("4", "Charmander");
        charmander.kind = Some(CardKind::Fire);
        let mut squirtle = Card::new("7", "Squirtle");
        squirtle.kind = Some(CardKind::Water);
        let mut wartortle = Card::new("8", "Wartortle");
        wartortle.kind = Some(CardKind::Water);
        MemoryCatalog::new(vec![charmander, squirtle, wartortle])
    }

    #[tokio::test]
    async fn test_empty_name_key_matches_all() {
        let cards = sample().cards_by_name("").await.unwrap();
        assert_eq!(cards.len(), 3);
    }

    #[tokio::test]
    async fn test_name_match_is_case_insensitive_substring() {
        let cards = sample().cards_by_name("ORT").await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "8");
    }

    #[tokio::test]
    async fn test_kind_match_is_exact() {
        let cards = sample().cards_by_kind("Water").await.unwrap();
        assert_eq!(cards.len(), 2);

        let none = sample().cards_by_kind("Wat").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_empty_kind_key_matches_nothing() {
        let cards = sample().cards_by_kind("").await.unwrap();
        assert!(cards.is_empty());
    }
}
