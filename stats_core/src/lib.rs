//! stats_core - Derived display statistics for card records
//!
//! This library provides:
//! - Stats: normalized presentation scores derived from a Card
//! - derive_stats: the total derivation function (pure, never fails)
//! - CardView: the flat value object the renderer consumes
//!
//! Stats are never stored; they are recomputed from the card record on
//! every render.
//!
//! # Quick Start
//!
//! ```rust
//! use card_core::Card;
//! use stats_core::{derive_stats, CardView};
//!
//! let card = Card::new("base1-58", "Pikachu");
//! let stats = derive_stats(&card);
//! assert_eq!(stats.strength, 0.0);
//!
//! // Or build the full render contract in one step
//! let view = CardView::of(&card);
//! assert_eq!(view.color, "#FFF");
//! ```

pub mod derive;
pub mod view;

pub use derive::{derive_stats, Stats};
pub use view::CardView;
