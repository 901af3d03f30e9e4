//! Collection state: the owned and available card lists.
//!
//! A single immutable state record plus one pure reducer per event. The
//! relationship between owned cards, available cards and the current
//! search key only ever changes through `apply`, which keeps the
//! disjointness of the two lists independently testable.
//!
//! Two long-standing quirks are kept for compatibility (see DESIGN.md):
//! - adding a card never checks for a duplicate already in `owned`
//! - type-filtered search results are deduplicated against the
//!   name-filtered results only, so an owned card can reappear as a type
//!   match

use card_core::Card;

/// Events that drive the collection state machine
///
/// Each variant corresponds to one user intent or one data-source
/// callback; `CollectionState::apply` is the single entry point.
#[derive(Debug, Clone)]
pub enum CollectionEvent {
    /// The full catalog arrived at startup
    CatalogLoaded { cards: Vec<Card> },
    /// The user edited the search key
    SearchKeyChanged { key: String },
    /// Both filtered fetches for one search completed
    SearchResultsReady {
        /// Generation recorded when the search was issued
        generation: u64,
        by_name: Vec<Card>,
        by_kind: Vec<Card>,
    },
    /// The user picked a card from the available list
    CardAdded { card: Card },
    /// The user dropped a card from the collection
    CardRemoved { card: Card },
}

/// The collection state record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionState {
    owned: Vec<Card>,
    available: Vec<Card>,
    search_key: String,
    generation: u64,
}

impl CollectionState {
    /// Empty collection, empty search
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards the user has added to the collection
    pub fn owned(&self) -> &[Card] {
        &self.owned
    }

    /// Cards currently offered for addition
    pub fn available(&self) -> &[Card] {
        &self.available
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    /// Identifier of the most recent search request
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one event, producing the next state
    pub fn apply(&self, event: CollectionEvent) -> CollectionState {
        match event {
            CollectionEvent::CatalogLoaded { cards } => self.load_catalog(cards),
            CollectionEvent::SearchKeyChanged { key } => self.change_search_key(key),
            CollectionEvent::SearchResultsReady {
                generation,
                by_name,
                by_kind,
            } => self.apply_search_results(generation, by_name, by_kind),
            CollectionEvent::CardAdded { card } => self.add_card(card),
            CollectionEvent::CardRemoved { card } => self.remove_card(card),
        }
    }

    /// Replace the available list wholesale; owned is untouched
    fn load_catalog(&self, cards: Vec<Card>) -> CollectionState {
        log::debug!("catalog loaded: {} cards", cards.len());
        CollectionState {
            available: cards,
            ..self.clone()
        }
    }

    /// Record the new key and advance the generation counter
    ///
    /// The paired fetches are issued by the session shell; their results
    /// come back later as `SearchResultsReady` stamped with this
    /// generation.
    fn change_search_key(&self, key: String) -> CollectionState {
        CollectionState {
            search_key: key,
            generation: self.generation + 1,
            ..self.clone()
        }
    }

    /// Rebuild the available list from a completed search
    ///
    /// Name matches are kept unless already owned, then kind matches are
    /// appended unless already present among the name matches. Kind
    /// matches are not checked against owned (kept quirk). Results
    /// stamped with a superseded generation are dropped whole.
    fn apply_search_results(
        &self,
        generation: u64,
        by_name: Vec<Card>,
        by_kind: Vec<Card>,
    ) -> CollectionState {
        if generation != self.generation {
            log::debug!(
                "dropping stale search results (generation {generation}, current {})",
                self.generation
            );
            return self.clone();
        }

        let mut available: Vec<Card> = by_name
            .into_iter()
            .filter(|card| !self.owned.iter().any(|owned| owned.id == card.id))
            .collect();

        let name_ids: Vec<String> = available.iter().map(|card| card.id.clone()).collect();
        available.extend(
            by_kind
                .into_iter()
                .filter(|card| !name_ids.contains(&card.id)),
        );

        log::debug!(
            "search '{}' yielded {} available cards",
            self.search_key,
            available.len()
        );
        CollectionState {
            available,
            ..self.clone()
        }
    }

    /// Move a card from the available list into the collection
    ///
    /// The card is appended to owned unconditionally; adding the same
    /// card twice duplicates it there (kept quirk).
    fn add_card(&self, card: Card) -> CollectionState {
        let mut next = self.clone();
        next.available.retain(|c| c.id != card.id);
        next.owned.push(card);
        next
    }

    /// Move a card from the collection back to the available list
    ///
    /// The card is appended at the end, with no dedup against entries
    /// already present (kept quirk).
    fn remove_card(&self, card: Card) -> CollectionState {
        let mut next = self.clone();
        next.owned.retain(|c| c.id != card.id);
        next.available.push(card);
        next
    }
}
