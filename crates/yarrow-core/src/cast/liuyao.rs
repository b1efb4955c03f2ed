//! Liuyao: six three-coin tosses into a primary and relating hexagram.
//!
//! Lines are numbered 1-6 from the bottom. A toss of three coins (2 for
//! tails, 3 for heads) sums to 6-9; sums 6 and 9 are "old" lines that change
//! polarity in the relating hexagram.

use serde::{Deserialize, Serialize};

use crate::cast::stream::SeedStream;
use crate::error::{CastError, CastResult};
use crate::language::Language;
use crate::method::Method;
use crate::tables::hexagram::{Hexagram, lookup_hexagram};

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// Classification of a line by its toss sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YaoType {
    /// Sum 6: yin, changing.
    OldYin,
    /// Sum 7: yang, stable.
    YoungYang,
    /// Sum 8: yin, stable.
    YoungYin,
    /// Sum 9: yang, changing.
    OldYang,
}

impl YaoType {
    /// Classify a toss sum. Only 6-9 are valid.
    pub fn from_sum(sum: u8) -> Option<Self> {
        match sum {
            6 => Some(Self::OldYin),
            7 => Some(Self::YoungYang),
            8 => Some(Self::YoungYin),
            9 => Some(Self::OldYang),
            _ => None,
        }
    }

    /// Whether the line is yang in the primary hexagram.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    /// Whether the line flips in the relating hexagram.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// Localized name.
    pub fn name(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::OldYin, Language::Zh) => "老阴",
            (Self::YoungYang, Language::Zh) => "少阳",
            (Self::YoungYin, Language::Zh) => "少阴",
            (Self::OldYang, Language::Zh) => "老阳",
            (Self::OldYin, Language::Ja) => "老陰",
            (Self::YoungYang, Language::Ja) => "少陽",
            (Self::YoungYin, Language::Ja) => "少陰",
            (Self::OldYang, Language::Ja) => "老陽",
            (Self::OldYin, Language::En) => "old yin",
            (Self::YoungYang, Language::En) => "young yang",
            (Self::YoungYin, Language::En) => "young yin",
            (Self::OldYang, Language::En) => "old yang",
        }
    }

    /// Line glyph; changing lines carry a marker.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::OldYin => "⚋×",
            Self::YoungYin => "⚋",
            Self::YoungYang => "⚊",
            Self::OldYang => "⚊○",
        }
    }
}

/// Three raw coin values and what they add up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinToss {
    coins: [u8; 3],
    sum: u8,
    yao_type: YaoType,
    is_changing: bool,
}

impl CoinToss {
    /// Build a toss from three coin values, each 2 or 3.
    pub fn from_coins(coins: [u8; 3]) -> CastResult<Self> {
        if let Some(bad) = coins.iter().find(|c| !matches!(c, 2 | 3)) {
            return Err(CastError::InvalidCoin(*bad));
        }
        let sum = coins.iter().sum();
        let yao_type = YaoType::from_sum(sum).ok_or(CastError::InvalidCoin(sum))?;
        Ok(Self {
            coins,
            sum,
            yao_type,
            is_changing: yao_type.is_changing(),
        })
    }

    /// Raw coin values.
    pub fn coins(&self) -> [u8; 3] {
        self.coins
    }

    /// Sum of the three coins, 6-9.
    pub fn sum(&self) -> u8 {
        self.sum
    }

    /// Line classification.
    pub fn yao_type(&self) -> YaoType {
        self.yao_type
    }

    /// Whether the line changes.
    pub fn is_changing(&self) -> bool {
        self.is_changing
    }
}

/// One line of a cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiuyaoLine {
    /// 1-6, counted from the bottom.
    pub position: u8,
    /// Line classification.
    pub yao_type: YaoType,
    /// Polarity in the primary hexagram.
    pub is_yang: bool,
    /// Whether the line flips.
    pub is_changing: bool,
    /// Polarity in the relating hexagram, for changing lines only.
    pub changed_yang: Option<bool>,
}

impl LiuyaoLine {
    fn from_toss(position: u8, toss: &CoinToss) -> Self {
        let is_yang = toss.yao_type.is_yang();
        Self {
            position,
            yao_type: toss.yao_type,
            is_yang,
            is_changing: toss.is_changing,
            changed_yang: toss.is_changing.then_some(!is_yang),
        }
    }
}

/// A complete liuyao cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiuyaoResult {
    /// Six lines, bottom first.
    pub lines: Vec<LiuyaoLine>,
    /// Positions of changing lines, ascending.
    pub changing_lines: Vec<u8>,
    /// Hexagram formed by the lines as cast.
    pub primary_hexagram: Hexagram,
    /// Hexagram after flipping changing lines; absent when none change.
    pub relating_hexagram: Option<Hexagram>,
    /// The six tosses the cast was built from.
    pub raw_tosses: Vec<CoinToss>,
}

impl LiuyaoResult {
    /// Whether any line changes.
    pub fn has_changes(&self) -> bool {
        !self.changing_lines.is_empty()
    }

    /// Changing-line summary in the given language.
    pub fn changing_description(&self, lang: Language) -> String {
        describe_changing_lines(&self.changing_lines, lang)
    }
}

/// Binary pattern of the lines' primary polarity, bottom first.
pub fn primary_binary(lines: &[LiuyaoLine]) -> String {
    lines
        .iter()
        .map(|l| if l.is_yang { '1' } else { '0' })
        .collect()
}

/// Binary pattern with every changing line flipped.
pub fn relating_binary(lines: &[LiuyaoLine]) -> String {
    lines
        .iter()
        .map(|l| match (l.is_yang, l.is_changing) {
            (true, false) | (false, true) => '1',
            _ => '0',
        })
        .collect()
}

/// Build a result from six tosses, bottom line first.
pub fn cast_from_tosses(tosses: &[CoinToss]) -> CastResult<LiuyaoResult> {
    if tosses.len() != LINE_COUNT {
        return Err(CastError::InvalidInputCount {
            method: Method::Liuyao,
            expected: LINE_COUNT,
            actual: tosses.len(),
        });
    }

    let lines: Vec<LiuyaoLine> = (1u8..)
        .zip(tosses)
        .map(|(position, toss)| LiuyaoLine::from_toss(position, toss))
        .collect();
    let changing_lines: Vec<u8> = lines
        .iter()
        .filter(|l| l.is_changing)
        .map(|l| l.position)
        .collect();

    let primary_hexagram = lookup_hexagram(&primary_binary(&lines))?;
    let relating_hexagram = if changing_lines.is_empty() {
        None
    } else {
        Some(lookup_hexagram(&relating_binary(&lines))?)
    };

    Ok(LiuyaoResult {
        lines,
        changing_lines,
        primary_hexagram,
        relating_hexagram,
        raw_tosses: tosses.to_vec(),
    })
}

/// Build a result from raw coin triples, bottom line first.
pub fn cast_from_coins(coins: &[[u8; 3]]) -> CastResult<LiuyaoResult> {
    let tosses = coins
        .iter()
        .map(|c| CoinToss::from_coins(*c))
        .collect::<CastResult<Vec<_>>>()?;
    cast_from_tosses(&tosses)
}

/// Cast six lines from a seed.
pub fn cast_from_seed(seed: &str) -> CastResult<LiuyaoResult> {
    let mut stream = SeedStream::from_seed(seed);
    let tosses = (0..LINE_COUNT)
        .map(|_| CoinToss::from_coins(stream.three_coins()))
        .collect::<CastResult<Vec<_>>>()?;
    cast_from_tosses(&tosses)
}

/// Traditional name of a line position, e.g. 初爻 or "1st line".
pub fn position_name(position: u8, lang: Language) -> String {
    match lang {
        Language::Zh | Language::Ja => {
            let ordinal = match position {
                1 => "初",
                2 => "二",
                3 => "三",
                4 => "四",
                5 => "五",
                6 => "上",
                _ => "?",
            };
            format!("{ordinal}爻")
        }
        Language::En => {
            let suffix = match position {
                1 => "st",
                2 => "nd",
                3 => "rd",
                _ => "th",
            };
            format!("{position}{suffix} line")
        }
    }
}

/// Summarize which lines change, e.g. "初爻、四爻动".
pub fn describe_changing_lines(changing: &[u8], lang: Language) -> String {
    if changing.is_empty() {
        return match lang {
            Language::Zh => "无动爻".to_string(),
            Language::En => "no changing lines".to_string(),
            Language::Ja => "動爻なし".to_string(),
        };
    }
    let names: Vec<String> = changing.iter().map(|p| position_name(*p, lang)).collect();
    let joined = names.join(lang.list_separator());
    match lang {
        Language::Zh => format!("{joined}动"),
        Language::En => format!("changing: {joined}"),
        Language::Ja => format!("{joined}が動く"),
    }
}
