//! The event-driven shell around the collection state
//!
//! All mutations happen in reaction to discrete events on one logical
//! thread; the only suspension points are the catalog fetches.

use crate::catalog::CatalogSource;
use crate::state::{CollectionEvent, CollectionState};
use crate::CatalogError;
use card_core::Card;

/// One user's collection session against a catalog source
///
/// Every state change funnels through `CollectionState::apply`; the shell
/// only sequences fetches and the error policy around them.
pub struct Session<S> {
    source: S,
    state: CollectionState,
}

impl<S: CatalogSource> Session<S> {
    pub fn new(source: S) -> Self {
        Session {
            source,
            state: CollectionState::new(),
        }
    }

    /// Current state, for rendering
    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    /// Fetch the full catalog into the available list
    ///
    /// Called once at startup. A network failure surfaces to the caller
    /// with the state unchanged.
    pub async fn load_catalog(&mut self) -> Result<(), CatalogError> {
        let cards = self.source.all_cards().await?;
        self.state = self.state.apply(CollectionEvent::CatalogLoaded { cards });
        Ok(())
    }

    /// Run one search: record the key, fetch both filtered lists, apply
    ///
    /// The two fetches are issued together and joined, so neither result
    /// applies until both complete. The results carry the generation
    /// recorded at issue time; a search superseded mid-flight is dropped
    /// by the reducer instead of overwriting newer results. An empty key
    /// still issues both fetches.
    pub async fn search(&mut self, key: &str) -> Result<(), CatalogError> {
        self.state = self.state.apply(CollectionEvent::SearchKeyChanged {
            key: key.to_string(),
        });
        let generation = self.state.generation();

        let (by_name, by_kind) = futures::join!(
            self.source.cards_by_name(key),
            self.source.cards_by_kind(key),
        );
        let by_name = degrade_malformed(by_name)?;
        let by_kind = degrade_malformed(by_kind)?;

        self.state = self.state.apply(CollectionEvent::SearchResultsReady {
            generation,
            by_name,
            by_kind,
        });
        Ok(())
    }

    /// Add a card from the available list to the collection
    pub fn add(&mut self, card: Card) {
        self.state = self.state.apply(CollectionEvent::CardAdded { card });
    }

    /// Remove a card from the collection
    pub fn remove(&mut self, card: Card) {
        self.state = self.state.apply(CollectionEvent::CardRemoved { card });
    }
}

/// Error policy for one fetch: malformed bodies degrade to an empty list,
/// network failures propagate
fn degrade_malformed(result: Result<Vec<Card>, CatalogError>) -> Result<Vec<Card>, CatalogError> {
    match result {
        Ok(cards) => Ok(cards),
        Err(error @ CatalogError::Malformed { .. }) => {
            log::warn!("{error}");
            Ok(Vec::new())
        }
        Err(error) => Err(error),
    }
}
