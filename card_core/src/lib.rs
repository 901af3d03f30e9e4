//! card_core - Card data model for the collection client
//!
//! This library provides:
//! - Card: an immutable, externally sourced card record
//! - Attack / Weakness: the card sub-records stats derivation reads
//! - CardKind: the fixed elemental palette with display colors
//! - CardListResponse: the JSON envelope returned by the catalog service

pub mod card;
pub mod types;

pub use card::{Attack, Card, CardListResponse, Weakness};
pub use types::CardKind;
