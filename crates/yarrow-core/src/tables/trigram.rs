//! The eight trigrams and their 3-bit encodings.

use serde::{Deserialize, Serialize};

/// One of the eight three-line figures that stack into a hexagram.
///
/// Bits are read bottom line first: `1` is a yang line, `0` a yin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// Heaven, 111.
    Qian,
    /// Earth, 000.
    Kun,
    /// Thunder, 100.
    Zhen,
    /// Water, 010.
    Kan,
    /// Mountain, 001.
    Gen,
    /// Wind, 011.
    Xun,
    /// Fire, 101.
    Li,
    /// Lake, 110.
    Dui,
}

impl Trigram {
    /// All eight trigrams.
    pub const ALL: [Self; 8] = [
        Self::Qian,
        Self::Kun,
        Self::Zhen,
        Self::Kan,
        Self::Gen,
        Self::Xun,
        Self::Li,
        Self::Dui,
    ];

    /// Three-character binary pattern, bottom line first.
    pub fn binary(self) -> &'static str {
        match self {
            Self::Qian => "111",
            Self::Kun => "000",
            Self::Zhen => "100",
            Self::Kan => "010",
            Self::Gen => "001",
            Self::Xun => "011",
            Self::Li => "101",
            Self::Dui => "110",
        }
    }

    /// Pattern as a number, bottom line in the lowest bit.
    pub fn bits(self) -> u8 {
        self.binary()
            .bytes()
            .enumerate()
            .fold(0, |acc, (i, b)| if b == b'1' { acc | (1 << i) } else { acc })
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Xun => "巽",
            Self::Li => "离",
            Self::Dui => "兑",
        }
    }

    /// Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Qian => '☰',
            Self::Kun => '☷',
            Self::Zhen => '☳',
            Self::Kan => '☵',
            Self::Gen => '☶',
            Self::Xun => '☴',
            Self::Li => '☲',
            Self::Dui => '☱',
        }
    }

    /// Natural image the trigram stands for.
    pub fn nature(self) -> &'static str {
        match self {
            Self::Qian => "heaven",
            Self::Kun => "earth",
            Self::Zhen => "thunder",
            Self::Kan => "water",
            Self::Gen => "mountain",
            Self::Xun => "wind",
            Self::Li => "fire",
            Self::Dui => "lake",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
