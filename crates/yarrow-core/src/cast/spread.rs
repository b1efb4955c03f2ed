//! Three-card past/present/future spread from the major arcana.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cast::stream::SeedStream;
use crate::error::{CastError, CastResult};
use crate::language::Language;
use crate::method::Method;
use crate::tables::tarot::{DECK_SIZE, TarotCard, entry_by_id};

/// Deck identifier stored with every spread.
pub const DECK_VERSION: &str = "major_22";

/// Spread type stored with every spread.
pub const SPREAD_TYPE: &str = "three_card";

/// A slot in the three-card spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadPosition {
    /// What led here.
    Past,
    /// Where things stand.
    Present,
    /// Where things are heading.
    Future,
}

impl SpreadPosition {
    /// Slots in draw order.
    pub const ALL: [Self; 3] = [Self::Past, Self::Present, Self::Future];

    /// Slot for a zero-based draw index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Present => "present",
            Self::Future => "future",
        }
    }

    /// Parse a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "past" => Some(Self::Past),
            "present" => Some(Self::Present),
            "future" => Some(Self::Future),
            _ => None,
        }
    }

    /// Localized label.
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Past, Language::Zh) => "过去",
            (Self::Present, Language::Zh) => "现在",
            (Self::Future, Language::Zh) => "未来",
            (Self::Past, Language::Ja) => "過去",
            (Self::Present, Language::Ja) => "現在",
            (Self::Future, Language::Ja) => "未来",
            (Self::Past, Language::En) => "Past",
            (Self::Present, Language::En) => "Present",
            (Self::Future, Language::En) => "Future",
        }
    }

    /// What the slot asks the reader to look at.
    pub fn guidance(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Past, Language::En) => "the root and background of the question",
            (Self::Present, Language::En) => "the current situation and challenge",
            (Self::Future, Language::En) => "the likely direction if nothing changes",
            (Self::Past, Language::Zh) => "问题的根源与背景",
            (Self::Present, Language::Zh) => "当前的处境与挑战",
            (Self::Future, Language::Zh) => "顺势发展的可能走向",
            (Self::Past, Language::Ja) => "問題の根源と背景",
            (Self::Present, Language::Ja) => "現在の状況と課題",
            (Self::Future, Language::Ja) => "このまま進んだ場合の方向性",
        }
    }
}

impl std::fmt::Display for SpreadPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card placed in a spread slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotDraw {
    /// The card drawn.
    pub card: TarotCard,
    /// Slot the card occupies.
    pub position: SpreadPosition,
    /// Localized slot label.
    pub position_label: String,
    /// Orientation.
    pub is_upright: bool,
    /// Keywords for the orientation, joined for display.
    pub meaning: String,
}

/// A caller-reported physical draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualDraw {
    /// Card id, 0-21.
    pub card_id: u8,
    /// Slot the caller placed it in.
    pub position: SpreadPosition,
    /// Orientation.
    pub is_upright: bool,
}

/// A complete three-card spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotResult {
    /// Always [`SPREAD_TYPE`].
    pub spread_type: String,
    /// Localized spread title.
    pub spread_name: String,
    /// Three draws in past/present/future order.
    pub cards: Vec<TarotDraw>,
    /// Always [`DECK_VERSION`].
    pub deck_version: String,
    /// Card ids in draw order.
    pub draw_sequence: Vec<u8>,
}

impl TarotResult {
    fn from_draws(cards: Vec<TarotDraw>, lang: Language) -> Self {
        let draw_sequence = cards.iter().map(|d| d.card.id).collect();
        Self {
            spread_type: SPREAD_TYPE.to_string(),
            spread_name: spread_title(lang),
            cards,
            deck_version: DECK_VERSION.to_string(),
            draw_sequence,
        }
    }

    /// One-line summary, e.g. "过去：愚者（正位） | …".
    pub fn describe(&self, lang: Language) -> String {
        describe_spread(&self.cards, lang)
    }
}

/// Spread title, e.g. "过去-现在-未来".
pub fn spread_title(lang: Language) -> String {
    SpreadPosition::ALL
        .iter()
        .map(|p| p.label(lang))
        .collect::<Vec<_>>()
        .join("-")
}

/// Orientation label.
pub fn orientation_label(is_upright: bool, lang: Language) -> &'static str {
    match (is_upright, lang) {
        (true, Language::Zh | Language::Ja) => "正位",
        (false, Language::Zh | Language::Ja) => "逆位",
        (true, Language::En) => "upright",
        (false, Language::En) => "reversed",
    }
}

/// Resolve a card into a slot, computing its meaning text.
pub fn draw_card(
    card_id: u8,
    position: SpreadPosition,
    is_upright: bool,
    lang: Language,
) -> CastResult<TarotDraw> {
    let entry = entry_by_id(card_id)?;
    Ok(TarotDraw {
        card: TarotCard::from(entry),
        position,
        position_label: position.label(lang).to_string(),
        is_upright,
        meaning: entry.meaning(is_upright, lang),
    })
}

/// Shuffle from a seed and deal the top three cards.
pub fn spread_from_seed(seed: &str, lang: Language) -> CastResult<TarotResult> {
    let mut stream = SeedStream::from_seed(seed);
    let mut deck: Vec<u8> = (0..DECK_SIZE).collect();
    for i in (1..deck.len()).rev() {
        let j = stream.below(i + 1);
        deck.swap(i, j);
    }

    let cards = SpreadPosition::ALL
        .iter()
        .zip(&deck)
        .map(|(position, id)| draw_card(*id, *position, stream.upright(), lang))
        .collect::<CastResult<Vec<_>>>()?;
    Ok(TarotResult::from_draws(cards, lang))
}

/// Check a single manual draw against its slot and earlier draws.
pub fn validate_manual_draw(index: usize, draw: &ManualDraw, earlier: &[u8]) -> CastResult<()> {
    entry_by_id(draw.card_id)?;
    let expected = SpreadPosition::from_index(index).ok_or(CastError::InvalidInputCount {
        method: Method::Tarot,
        expected: SpreadPosition::ALL.len(),
        actual: index + 1,
    })?;
    if draw.position != expected {
        return Err(CastError::PositionMismatch {
            index,
            expected: expected.to_string(),
            actual: draw.position.to_string(),
        });
    }
    if earlier.contains(&draw.card_id) {
        return Err(CastError::DuplicateCard(draw.card_id));
    }
    Ok(())
}

/// Build a spread from three caller-reported draws, in submission order.
pub fn spread_from_manual(draws: &[ManualDraw], lang: Language) -> CastResult<TarotResult> {
    if draws.len() != SpreadPosition::ALL.len() {
        return Err(CastError::InvalidInputCount {
            method: Method::Tarot,
            expected: SpreadPosition::ALL.len(),
            actual: draws.len(),
        });
    }

    let mut seen = Vec::with_capacity(draws.len());
    let mut cards = Vec::with_capacity(draws.len());
    for (index, draw) in draws.iter().enumerate() {
        validate_manual_draw(index, draw, &seen)?;
        seen.push(draw.card_id);
        cards.push(draw_card(draw.card_id, draw.position, draw.is_upright, lang)?);
    }
    Ok(TarotResult::from_draws(cards, lang))
}

/// Card ids not yet used in a partially drawn spread.
pub fn available_cards(drawn: &[u8]) -> Vec<u8> {
    let drawn: HashSet<u8> = drawn.iter().copied().collect();
    (0..DECK_SIZE).filter(|id| !drawn.contains(id)).collect()
}

/// Summarize draws as "slot：name（orientation）" joined by " | ".
pub fn describe_spread(cards: &[TarotDraw], lang: Language) -> String {
    cards
        .iter()
        .map(|d| {
            let label = d.position.label(lang);
            let orientation = orientation_label(d.is_upright, lang);
            match lang {
                Language::En => format!("{label}: {} ({orientation})", d.card.name_en),
                Language::Zh | Language::Ja => {
                    format!("{label}：{}（{orientation}）", d.card.name)
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn manual(card_id: u8, position: SpreadPosition, is_upright: bool) -> ManualDraw {
        ManualDraw {
            card_id,
            position,
            is_upright,
        }
    }

    #[test]
    fn golden_seed_abc() {
        let result = spread_from_seed("abc", Language::Zh).unwrap();
        assert_eq!(result.draw_sequence, vec![5, 19, 10]);
        assert!(result.cards.iter().all(|c| c.is_upright));
        let positions: Vec<_> = result.cards.iter().map(|c| c.position).collect();
        assert_eq!(positions, SpreadPosition::ALL.to_vec());
        assert_eq!(result.deck_version, "major_22");
        assert_eq!(result.spread_type, "three_card");
        assert_eq!(result.spread_name, "过去-现在-未来");
        assert_eq!(result.cards[1].position_label, "现在");
    }

    #[test]
    fn japanese_titles_use_japanese_forms() {
        assert_eq!(spread_title(Language::Ja), "過去-現在-未来");
        assert_eq!(spread_title(Language::En), "Past-Present-Future");
    }

    #[test]
    fn golden_seed_golden() {
        let result = spread_from_seed("golden", Language::En).unwrap();
        assert_eq!(result.draw_sequence, vec![4, 5, 15]);
        let orientations: Vec<bool> = result.cards.iter().map(|c| c.is_upright).collect();
        assert_eq!(orientations, vec![false, true, false]);
    }

    #[test]
    fn manual_spread_keeps_submission_order() {
        let draws = [
            manual(0, SpreadPosition::Past, true),
            manual(10, SpreadPosition::Present, false),
            manual(21, SpreadPosition::Future, true),
        ];
        let result = spread_from_manual(&draws, Language::Zh).unwrap();
        assert_eq!(result.draw_sequence, vec![0, 10, 21]);
        assert_eq!(result.cards[0].meaning, "新的开始、自由、冒险、天真、可能性");
        assert_eq!(result.cards[1].meaning, "厄运、抗拒改变、失控、停滞、坏运气");
        assert!(!result.cards[1].is_upright);
    }

    #[test]
    fn manual_spread_rejects_duplicates() {
        let draws = [
            manual(3, SpreadPosition::Past, true),
            manual(3, SpreadPosition::Present, true),
            manual(4, SpreadPosition::Future, true),
        ];
        assert_eq!(
            spread_from_manual(&draws, Language::Zh),
            Err(CastError::DuplicateCard(3))
        );
    }

    #[test]
    fn manual_spread_rejects_wrong_slot() {
        let draws = [
            manual(1, SpreadPosition::Present, true),
            manual(2, SpreadPosition::Past, true),
            manual(3, SpreadPosition::Future, true),
        ];
        let err = spread_from_manual(&draws, Language::Zh).unwrap_err();
        assert!(matches!(err, CastError::PositionMismatch { index: 0, .. }));
    }

    #[test]
    fn manual_spread_rejects_unknown_card_and_count() {
        let draws = [
            manual(30, SpreadPosition::Past, true),
            manual(2, SpreadPosition::Present, true),
            manual(3, SpreadPosition::Future, true),
        ];
        assert_eq!(
            spread_from_manual(&draws, Language::Zh),
            Err(CastError::CardNotFound(30))
        );
        assert!(matches!(
            spread_from_manual(&draws[1..], Language::Zh),
            Err(CastError::InvalidInputCount { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn available_cards_excludes_drawn() {
        let left = available_cards(&[0, 21]);
        assert_eq!(left.len(), 20);
        assert!(!left.contains(&0));
        assert!(left.contains(&1));
    }

    #[test]
    fn spread_description() {
        let draws = [
            manual(0, SpreadPosition::Past, true),
            manual(10, SpreadPosition::Present, false),
            manual(21, SpreadPosition::Future, true),
        ];
        let result = spread_from_manual(&draws, Language::Zh).unwrap();
        assert_eq!(
            result.describe(Language::Zh),
            "过去：愚者（正位） | 现在：命运之轮（逆位） | 未来：世界（正位）"
        );
        let en = spread_from_manual(&draws, Language::En).unwrap();
        assert!(en.describe(Language::En).starts_with("Past: The Fool (upright)"));
    }

    proptest! {
        #[test]
        fn seeded_spreads_are_deterministic_and_distinct(seed in ".*") {
            let a = spread_from_seed(&seed, Language::Zh).unwrap();
            let b = spread_from_seed(&seed, Language::Zh).unwrap();
            prop_assert_eq!(&a, &b);
            let unique: HashSet<u8> = a.draw_sequence.iter().copied().collect();
            prop_assert_eq!(unique.len(), 3);
        }
    }
}
