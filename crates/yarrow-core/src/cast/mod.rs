//! The deterministic generator.
//!
//! A result is a pure function of either a seed string or the raw tosses and
//! draws a caller performed by hand. Nothing here reads the clock or the OS
//! RNG.

pub mod liuyao;
pub mod spread;
pub mod stream;

use serde::{Deserialize, Serialize};

use crate::error::{CastError, CastResult};
use crate::language::Language;
use crate::method::Method;

use self::liuyao::LiuyaoResult;
use self::spread::{ManualDraw, TarotResult};

/// A generated result, tagged by method on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DivinationResult {
    /// Six-line hexagram cast.
    Liuyao(LiuyaoResult),
    /// Three-card spread.
    Tarot(TarotResult),
}

impl DivinationResult {
    /// Method that produced the result.
    pub fn method(&self) -> Method {
        match self {
            Self::Liuyao(_) => Method::Liuyao,
            Self::Tarot(_) => Method::Tarot,
        }
    }
}

/// Inputs physically performed by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Coin triples, bottom line first.
    Tosses(Vec<[u8; 3]>),
    /// Card draws in past/present/future order.
    Draws(Vec<ManualDraw>),
}

impl RawInput {
    fn kind(&self) -> &'static str {
        match self {
            Self::Tosses(_) => "coin tosses",
            Self::Draws(_) => "card draws",
        }
    }
}

/// Generate a result from a seed.
pub fn generate_from_seed(method: Method, seed: &str, lang: Language) -> CastResult<DivinationResult> {
    match method {
        Method::Liuyao => liuyao::cast_from_seed(seed).map(DivinationResult::Liuyao),
        Method::Tarot => spread::spread_from_seed(seed, lang).map(DivinationResult::Tarot),
    }
}

/// Generate a result from caller-supplied tosses or draws.
pub fn generate_from_raw(
    method: Method,
    input: &RawInput,
    lang: Language,
) -> CastResult<DivinationResult> {
    match (method, input) {
        (Method::Liuyao, RawInput::Tosses(coins)) => {
            liuyao::cast_from_coins(coins).map(DivinationResult::Liuyao)
        }
        (Method::Tarot, RawInput::Draws(draws)) => {
            spread::spread_from_manual(draws, lang).map(DivinationResult::Tarot)
        }
        _ => Err(CastError::InputMismatch {
            method,
            input: input.kind(),
        }),
    }
}
