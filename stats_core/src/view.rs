//! Presentational data contract - the flat value object per rendered card
//!
//! Rendering itself (markup, icons, layout) lives outside this workspace;
//! the renderer consumes `CardView` values and emits collection events.

use crate::derive::{derive_stats, Stats};
use card_core::Card;
use serde::Serialize;

/// Frame color for cards without a printed type
const UNTYPED_COLOR: &str = "#FFF";

/// Everything the renderer needs for one card
///
/// Bars size from `stats.hp` / `stats.strength` / `stats.weakness`
/// (0..=100); the happiness row draws `stats.happiness` icons; the frame
/// is tinted with `color`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub color: &'static str,
    pub stats: Stats,
}

impl CardView {
    /// Build the view for one card, deriving stats on the fly
    pub fn of(card: &Card) -> Self {
        CardView {
            id: card.id.clone(),
            name: card.name.clone(),
            image_url: card.image_url.clone(),
            color: card.kind.map(|k| k.color()).unwrap_or(UNTYPED_COLOR),
            stats: derive_stats(card),
        }
    }
}
