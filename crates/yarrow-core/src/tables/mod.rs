//! Static catalogues: the eight trigrams, the 64 hexagrams and the 22 major
//! arcana.
//!
//! All data is literal and built once; there is no write path.

pub mod hexagram;
pub mod tarot;
pub mod trigram;

pub use hexagram::{HEXAGRAMS, Hexagram, HexagramEntry, lookup_hexagram};
pub use tarot::{MAJOR_ARCANA, TarotCard, TarotEntry, card_by_id};
pub use trigram::Trigram;
