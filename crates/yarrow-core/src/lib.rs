//! Core divination model for yarrow.
//!
//! Holds the two static catalogues (64 hexagrams, 22 major arcana), the
//! seed-driven stream that replaces true randomness, and the generator that
//! turns a seed or caller-supplied coin tosses / card draws into a fully
//! determined liuyao or tarot result.

pub mod cast;
pub mod error;
pub mod language;
pub mod method;
pub mod mode;
pub mod tables;

pub use cast::liuyao::{CoinToss, LiuyaoLine, LiuyaoResult, YaoType};
pub use cast::spread::{ManualDraw, SpreadPosition, TarotDraw, TarotResult};
pub use cast::stream::SeedStream;
pub use cast::{DivinationResult, RawInput, generate_from_raw, generate_from_seed};
pub use error::{CastError, CastResult};
pub use language::Language;
pub use method::Method;
pub use mode::Mode;
pub use tables::hexagram::{Hexagram, lookup_hexagram};
pub use tables::tarot::{TarotCard, card_by_id};
pub use tables::trigram::Trigram;
