//! The 64 hexagrams, indexed by their six-line binary pattern.
//!
//! A pattern is six `'0'`/`'1'` characters read bottom line first: the first
//! three characters are the lower trigram, the last three the upper.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{CastError, CastResult};
use crate::tables::trigram::Trigram;

/// A static hexagram table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexagramEntry {
    /// King Wen sequence number, 1-64.
    pub id: u8,
    /// Chinese name.
    pub name: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Upper and lower trigram symbols.
    pub symbol: &'static str,
    /// Short judgement text.
    pub description: &'static str,
    /// Upper trigram.
    pub upper: Trigram,
    /// Lower trigram.
    pub lower: Trigram,
}

impl HexagramEntry {
    /// Six-character binary pattern, bottom line first.
    pub fn binary(&self) -> String {
        format!("{}{}", self.lower.binary(), self.upper.binary())
    }

    /// Pattern as a number, bottom line in the lowest bit.
    pub fn bits(&self) -> u8 {
        self.lower.bits() | (self.upper.bits() << 3)
    }

    /// Owned copy suitable for embedding in results.
    pub fn to_hexagram(&self) -> Hexagram {
        Hexagram {
            id: self.id,
            name: self.name.to_string(),
            name_en: self.name_en.to_string(),
            symbol: self.symbol.to_string(),
            description: self.description.to_string(),
            upper_trigram: self.upper.name().to_string(),
            lower_trigram: self.lower.name().to_string(),
            binary: self.binary(),
        }
    }
}

/// A hexagram as carried by results and sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    /// King Wen sequence number, 1-64.
    pub id: u8,
    /// Chinese name.
    pub name: String,
    /// English name.
    pub name_en: String,
    /// Upper and lower trigram symbols.
    pub symbol: String,
    /// Short judgement text.
    pub description: String,
    /// Chinese name of the upper trigram.
    pub upper_trigram: String,
    /// Chinese name of the lower trigram.
    pub lower_trigram: String,
    /// Six-character binary pattern, bottom line first.
    pub binary: String,
}

/// All 64 hexagrams in King Wen order.
pub const HEXAGRAMS: &[HexagramEntry] = &[
    HexagramEntry {
        id: 1,
        name: "乾",
        name_en: "The Creative",
        symbol: "☰☰",
        description: "元亨利贞，刚健进取",
        upper: Trigram::Qian,
        lower: Trigram::Qian,
    },
    HexagramEntry {
        id: 2,
        name: "坤",
        name_en: "The Receptive",
        symbol: "☷☷",
        description: "厚德载物，包容承载",
        upper: Trigram::Kun,
        lower: Trigram::Kun,
    },
    HexagramEntry {
        id: 3,
        name: "屯",
        name_en: "Difficulty at the Beginning",
        symbol: "☵☳",
        description: "万物始生，艰难初创",
        upper: Trigram::Kan,
        lower: Trigram::Zhen,
    },
    HexagramEntry {
        id: 4,
        name: "蒙",
        name_en: "Youthful Folly",
        symbol: "☶☵",
        description: "启蒙教育，循序渐进",
        upper: Trigram::Gen,
        lower: Trigram::Kan,
    },
    HexagramEntry {
        id: 5,
        name: "需",
        name_en: "Waiting",
        symbol: "☵☰",
        description: "等待时机，蓄势待发",
        upper: Trigram::Kan,
        lower: Trigram::Qian,
    },
    HexagramEntry {
        id: 6,
        name: "讼",
        name_en: "Conflict",
        symbol: "☰☵",
        description: "争讼纷争，宜和为贵",
        upper: Trigram::Qian,
        lower: Trigram::Kan,
    },
    HexagramEntry {
        id: 7,
        name: "师",
        name_en: "The Army",
        symbol: "☷☵",
        description: "行师出征，纪律严明",
        upper: Trigram::Kun,
        lower: Trigram::Kan,
    },
    HexagramEntry {
        id: 8,
        name: "比",
        name_en: "Holding Together",
        symbol: "☵☷",
        description: "亲比辅助，和睦相处",
        upper: Trigram::Kan,
        lower: Trigram::Kun,
    },
    HexagramEntry {
        id: 9,
        name: "小畜",
        name_en: "Small Taming",
        symbol: "☴☰",
        description: "小有积蓄，密云不雨",
        upper: Trigram::Xun,
        lower: Trigram::Qian,
    },
    HexagramEntry {
        id: 10,
        name: "履",
        name_en: "Treading",
        symbol: "☰☱",
        description: "小心行事，履虎尾",
        upper: Trigram::Qian,
        lower: Trigram::Dui,
    },
    HexagramEntry {
        id: 11,
        name: "泰",
        name_en: "Peace",
        symbol: "☷☰",
        description: "天地交泰，通达亨通",
        upper: Trigram::Kun,
        lower: Trigram::Qian,
    },
    HexagramEntry {
        id: 12,
        name: "否",
        name_en: "Standstill",
        symbol: "☰☷",
        description: "天地不交，闭塞不通",
        upper: Trigram::Qian,
        lower: Trigram::Kun,
    },
    HexagramEntry {
        id: 13,
        name: "同人",
        name_en: "Fellowship",
        symbol: "☰☲",
        description: "志同道合，和睦共处",
        upper: Trigram::Qian,
        lower: Trigram::Li,
    },
    HexagramEntry {
        id: 14,
        name: "大有",
        name_en: "Great Possession",
        symbol: "☲☰",
        description: "大有所获，富有充盈",
        upper: Trigram::Li,
        lower: Trigram::Qian,
    },
    HexagramEntry {
        id: 15,
        name: "谦",
        name_en: "Modesty",
        symbol: "☷☶",
        description: "谦虚恭让，获益多多",
        upper: Trigram::Kun,
        lower: Trigram::Gen,
    },
    HexagramEntry {
        id: 16,
        name: "豫",
        name_en: "Enthusiasm",
        symbol: "☳☷",
        description: "欢乐愉悦，顺势而为",
        upper: Trigram::Zhen,
        lower: Trigram::Kun,
    },
    HexagramEntry {
        id: 17,
        name: "随",
        name_en: "Following",
        symbol: "☱☳",
        description: "随顺变通，灵活应对",
        upper: Trigram::Dui,
        lower: Trigram::Zhen,
    },
    HexagramEntry {
        id: 18,
        name: "蛊",
        name_en: "Work on the Decayed",
        symbol: "☶☴",
        description: "整顿弊病，革故鼎新",
        upper: Trigram::Gen,
        lower: Trigram::Xun,
    },
    HexagramEntry {
        id: 19,
        name: "临",
        name_en: "Approach",
        symbol: "☷☱",
        description: "居高临下，亲近民众",
        upper: Trigram::Kun,
        lower: Trigram::Dui,
    },
    HexagramEntry {
        id: 20,
        name: "观",
        name_en: "Contemplation",
        symbol: "☴☷",
        description: "观察审视，以身作则",
        upper: Trigram::Xun,
        lower: Trigram::Kun,
    },
    HexagramEntry {
        id: 21,
        name: "噬嗑",
        name_en: "Biting Through",
        symbol: "☲☳",
        description: "明断狱讼，赏罚分明",
        upper: Trigram::Li,
        lower: Trigram::Zhen,
    },
    HexagramEntry {
        id: 22,
        name: "贲",
        name_en: "Grace",
        symbol: "☶☲",
        description: "文饰修养，内外兼修",
        upper: Trigram::Gen,
        lower: Trigram::Li,
    },
    HexagramEntry {
        id: 23,
        name: "剥",
        name_en: "Splitting Apart",
        symbol: "☶☷",
        description: "剥落衰败，顺势而退",
        upper: Trigram::Gen,
        lower: Trigram::Kun,
    },
    HexagramEntry {
        id: 24,
        name: "复",
        name_en: "Return",
        symbol: "☷☳",
        description: "一阳来复，万象更新",
        upper: Trigram::Kun,
        lower: Trigram::Zhen,
    },
    HexagramEntry {
        id: 25,
        name: "无妄",
        name_en: "Innocence",
        symbol: "☰☳",
        description: "无妄之福，顺应天道",
        upper: Trigram::Qian,
        lower: Trigram::Zhen,
    },
    HexagramEntry {
        id: 26,
        name: "大畜",
        name_en: "Great Taming",
        symbol: "☶☰",
        description: "大有积蓄，厚积薄发",
        upper: Trigram::Gen,
        lower: Trigram::Qian,
    },
    HexagramEntry {
        id: 27,
        name: "颐",
        name_en: "Nourishment",
        symbol: "☶☳",
        description: "颐养正道，自食其力",
        upper: Trigram::Gen,
        lower: Trigram::Zhen,
    },
    HexagramEntry {
        id: 28,
        name: "大过",
        name_en: "Great Exceeding",
        symbol: "☱☴",
        description: "过犹不及，把握分寸",
        upper: Trigram::Dui,
        lower: Trigram::Xun,
    },
    HexagramEntry {
        id: 29,
        name: "坎",
        name_en: "The Abysmal",
        symbol: "☵☵",
        description: "重重险阻，坚持信念",
        upper: Trigram::Kan,
        lower: Trigram::Kan,
    },
    HexagramEntry {
        id: 30,
        name: "离",
        name_en: "The Clinging",
        symbol: "☲☲",
        description: "光明依附，柔顺中正",
        upper: Trigram::Li,
        lower: Trigram::Li,
    },
    HexagramEntry {
        id: 31,
        name: "咸",
        name_en: "Influence",
        symbol: "☱☶",
        description: "感应相通，真诚交流",
        upper: Trigram::Dui,
        lower: Trigram::Gen,
    },
    HexagramEntry {
        id: 32,
        name: "恒",
        name_en: "Duration",
        symbol: "☳☴",
        description: "恒久坚持，持之以恒",
        upper: Trigram::Zhen,
        lower: Trigram::Xun,
    },
    HexagramEntry {
        id: 33,
        name: "遁",
        name_en: "Retreat",
        symbol: "☰☶",
        description: "退避隐遁，明哲保身",
        upper: Trigram::Qian,
        lower: Trigram::Gen,
    },
    HexagramEntry {
        id: 34,
        name: "大壮",
        name_en: "Great Power",
        symbol: "☳☰",
        description: "刚健有力，适可而止",
        upper: Trigram::Zhen,
        lower: Trigram::Qian,
    },
    HexagramEntry {
        id: 35,
        name: "晋",
        name_en: "Progress",
        symbol: "☲☷",
        description: "日出地上，光明进取",
        upper: Trigram::Li,
        lower: Trigram::Kun,
    },
    HexagramEntry {
        id: 36,
        name: "明夷",
        name_en: "Darkening of the Light",
        symbol: "☷☲",
        description: "光明受损，韬光养晦",
        upper: Trigram::Kun,
        lower: Trigram::Li,
    },
    HexagramEntry {
        id: 37,
        name: "家人",
        name_en: "The Family",
        symbol: "☴☲",
        description: "家道正和，齐家治国",
        upper: Trigram::Xun,
        lower: Trigram::Li,
    },
    HexagramEntry {
        id: 38,
        name: "睽",
        name_en: "Opposition",
        symbol: "☲☱",
        description: "睽违背离，异中求同",
        upper: Trigram::Li,
        lower: Trigram::Dui,
    },
    HexagramEntry {
        id: 39,
        name: "蹇",
        name_en: "Obstruction",
        symbol: "☵☶",
        description: "艰难险阻，知难而退",
        upper: Trigram::Kan,
        lower: Trigram::Gen,
    },
    HexagramEntry {
        id: 40,
        name: "解",
        name_en: "Deliverance",
        symbol: "☳☵",
        description: "解除困难，雷雨交作",
        upper: Trigram::Zhen,
        lower: Trigram::Kan,
    },
    HexagramEntry {
        id: 41,
        name: "损",
        name_en: "Decrease",
        symbol: "☶☱",
        description: "损下益上，有所舍得",
        upper: Trigram::Gen,
        lower: Trigram::Dui,
    },
    HexagramEntry {
        id: 42,
        name: "益",
        name_en: "Increase",
        symbol: "☴☳",
        description: "损上益下，利民兴业",
        upper: Trigram::Xun,
        lower: Trigram::Zhen,
    },
    HexagramEntry {
        id: 43,
        name: "夬",
        name_en: "Breakthrough",
        symbol: "☱☰",
        description: "决断果敢，刚决柔",
        upper: Trigram::Dui,
        lower: Trigram::Qian,
    },
    HexagramEntry {
        id: 44,
        name: "姤",
        name_en: "Coming to Meet",
        symbol: "☰☴",
        description: "不期而遇，柔遇刚",
        upper: Trigram::Qian,
        lower: Trigram::Xun,
    },
    HexagramEntry {
        id: 45,
        name: "萃",
        name_en: "Gathering Together",
        symbol: "☱☷",
        description: "聚集汇合，择善而从",
        upper: Trigram::Dui,
        lower: Trigram::Kun,
    },
    HexagramEntry {
        id: 46,
        name: "升",
        name_en: "Pushing Upward",
        symbol: "☷☴",
        description: "积小成大，升进发展",
        upper: Trigram::Kun,
        lower: Trigram::Xun,
    },
    HexagramEntry {
        id: 47,
        name: "困",
        name_en: "Oppression",
        symbol: "☱☵",
        description: "困厄穷境，守正待时",
        upper: Trigram::Dui,
        lower: Trigram::Kan,
    },
    HexagramEntry {
        id: 48,
        name: "井",
        name_en: "The Well",
        symbol: "☵☴",
        description: "井养不穷，取之有道",
        upper: Trigram::Kan,
        lower: Trigram::Xun,
    },
    HexagramEntry {
        id: 49,
        name: "革",
        name_en: "Revolution",
        symbol: "☱☲",
        description: "革故鼎新，顺时而变",
        upper: Trigram::Dui,
        lower: Trigram::Li,
    },
    HexagramEntry {
        id: 50,
        name: "鼎",
        name_en: "The Cauldron",
        symbol: "☲☴",
        description: "鼎新革故，调和五味",
        upper: Trigram::Li,
        lower: Trigram::Xun,
    },
    HexagramEntry {
        id: 51,
        name: "震",
        name_en: "The Arousing",
        symbol: "☳☳",
        description: "雷声震动，慎言慎行",
        upper: Trigram::Zhen,
        lower: Trigram::Zhen,
    },
    HexagramEntry {
        id: 52,
        name: "艮",
        name_en: "Keeping Still",
        symbol: "☶☶",
        description: "止而后动，静定生慧",
        upper: Trigram::Gen,
        lower: Trigram::Gen,
    },
    HexagramEntry {
        id: 53,
        name: "渐",
        name_en: "Development",
        symbol: "☴☶",
        description: "循序渐进，稳步发展",
        upper: Trigram::Xun,
        lower: Trigram::Gen,
    },
    HexagramEntry {
        id: 54,
        name: "归妹",
        name_en: "The Marrying Maiden",
        symbol: "☳☱",
        description: "归妹出嫁，知行合一",
        upper: Trigram::Zhen,
        lower: Trigram::Dui,
    },
    HexagramEntry {
        id: 55,
        name: "丰",
        name_en: "Abundance",
        symbol: "☳☲",
        description: "丰盛光明，宜日中",
        upper: Trigram::Zhen,
        lower: Trigram::Li,
    },
    HexagramEntry {
        id: 56,
        name: "旅",
        name_en: "The Wanderer",
        symbol: "☲☶",
        description: "旅途漂泊，小心谨慎",
        upper: Trigram::Li,
        lower: Trigram::Gen,
    },
    HexagramEntry {
        id: 57,
        name: "巽",
        name_en: "The Gentle",
        symbol: "☴☴",
        description: "顺从柔和，谦逊入微",
        upper: Trigram::Xun,
        lower: Trigram::Xun,
    },
    HexagramEntry {
        id: 58,
        name: "兑",
        name_en: "The Joyous",
        symbol: "☱☱",
        description: "喜悦和乐，言语得当",
        upper: Trigram::Dui,
        lower: Trigram::Dui,
    },
    HexagramEntry {
        id: 59,
        name: "涣",
        name_en: "Dispersion",
        symbol: "☴☵",
        description: "涣散离析，济险脱困",
        upper: Trigram::Xun,
        lower: Trigram::Kan,
    },
    HexagramEntry {
        id: 60,
        name: "节",
        name_en: "Limitation",
        symbol: "☵☱",
        description: "节制有度，适可而止",
        upper: Trigram::Kan,
        lower: Trigram::Dui,
    },
    HexagramEntry {
        id: 61,
        name: "中孚",
        name_en: "Inner Truth",
        symbol: "☴☱",
        description: "诚信感动，真诚待人",
        upper: Trigram::Xun,
        lower: Trigram::Dui,
    },
    HexagramEntry {
        id: 62,
        name: "小过",
        name_en: "Small Exceeding",
        symbol: "☳☶",
        description: "小有过越，谨小慎微",
        upper: Trigram::Zhen,
        lower: Trigram::Gen,
    },
    HexagramEntry {
        id: 63,
        name: "既济",
        name_en: "After Completion",
        symbol: "☵☲",
        description: "事已成就，守成保业",
        upper: Trigram::Kan,
        lower: Trigram::Li,
    },
    HexagramEntry {
        id: 64,
        name: "未济",
        name_en: "Before Completion",
        symbol: "☲☵",
        description: "事未完成，继续努力",
        upper: Trigram::Li,
        lower: Trigram::Kan,
    },
];

static BY_BITS: LazyLock<[Option<&'static HexagramEntry>; 64]> = LazyLock::new(|| {
    let mut index = [None; 64];
    for entry in HEXAGRAMS {
        index[usize::from(entry.bits())] = Some(entry);
    }
    index
});

/// Parse a six-character `'0'`/`'1'` pattern into bits, bottom line lowest.
pub fn parse_binary(binary: &str) -> Option<u8> {
    if binary.len() != 6 {
        return None;
    }
    binary
        .bytes()
        .enumerate()
        .try_fold(0u8, |acc, (i, b)| match b {
            b'1' => Some(acc | (1 << i)),
            b'0' => Some(acc),
            _ => None,
        })
}

/// Table row for a bit pattern. Every value below 64 resolves.
pub fn entry_by_bits(bits: u8) -> Option<&'static HexagramEntry> {
    BY_BITS.get(usize::from(bits)).copied().flatten()
}

/// Look up the hexagram for a six-character binary pattern.
pub fn lookup_hexagram(binary: &str) -> CastResult<Hexagram> {
    parse_binary(binary)
        .and_then(entry_by_bits)
        .map(HexagramEntry::to_hexagram)
        .ok_or_else(|| CastError::HexagramNotFound(binary.to_string()))
}

/// Look up a hexagram by its King Wen number.
pub fn hexagram_by_id(id: u8) -> Option<&'static HexagramEntry> {
    HEXAGRAMS.iter().find(|h| h.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn table_has_64_unique_ids() {
        assert_eq!(HEXAGRAMS.len(), 64);
        let ids: HashSet<u8> = HEXAGRAMS.iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), 64);
        assert!(ids.iter().all(|id| (1..=64).contains(id)));
    }

    #[test]
    fn patterns_form_a_bijection() {
        let patterns: HashSet<String> = HEXAGRAMS.iter().map(HexagramEntry::binary).collect();
        assert_eq!(patterns.len(), 64);
    }

    #[test]
    fn known_hexagrams() {
        let qian = lookup_hexagram("111111").unwrap();
        assert_eq!(qian.id, 1);
        assert_eq!(qian.name, "乾");

        let kun = lookup_hexagram("000000").unwrap();
        assert_eq!(kun.id, 2);

        // Thunder over earth.
        let yu = lookup_hexagram("000100").unwrap();
        assert_eq!(yu.id, 16);
        assert_eq!(yu.name, "豫");
        assert_eq!(yu.upper_trigram, "震");
        assert_eq!(yu.lower_trigram, "坤");

        // Water over fire: after completion.
        let jiji = lookup_hexagram("101010").unwrap();
        assert_eq!(jiji.id, 63);
    }

    #[test]
    fn malformed_patterns_are_not_found() {
        for bad in ["", "11111", "1111111", "11x111", "２２２２２２"] {
            assert_eq!(
                lookup_hexagram(bad),
                Err(CastError::HexagramNotFound(bad.to_string()))
            );
        }
    }

    #[test]
    fn by_id() {
        assert_eq!(hexagram_by_id(64).map(|h| h.name), Some("未济"));
        assert!(hexagram_by_id(0).is_none());
    }

    proptest! {
        #[test]
        fn every_pattern_resolves(bits in 0u8..64) {
            let binary: String = (0..6)
                .map(|i| if bits & (1 << i) != 0 { '1' } else { '0' })
                .collect();
            let hex = lookup_hexagram(&binary).unwrap();
            prop_assert_eq!(hex.binary, binary);
        }
    }
}
