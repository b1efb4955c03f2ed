//! The 22 major arcana with keyword sets per orientation and language.

use serde::{Deserialize, Serialize};

use crate::error::{CastError, CastResult};
use crate::language::Language;

/// Number of cards in the deck.
pub const DECK_SIZE: u8 = 22;

/// Static keyword lists for one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keywords {
    /// Simplified Chinese.
    pub zh: [&'static str; 5],
    /// English.
    pub en: [&'static str; 5],
    /// Japanese.
    pub ja: [&'static str; 5],
}

impl Keywords {
    fn for_language(&self, lang: Language) -> &[&'static str; 5] {
        match lang {
            Language::Zh => &self.zh,
            Language::En => &self.en,
            Language::Ja => &self.ja,
        }
    }

    fn to_owned_set(self) -> KeywordSet {
        let own = |list: [&str; 5]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        KeywordSet {
            zh: own(self.zh),
            en: own(self.en),
            ja: own(self.ja),
        }
    }
}

/// A static deck row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TarotEntry {
    /// Card number, 0-21.
    pub id: u8,
    /// Chinese name.
    pub name: &'static str,
    /// Canonical English name.
    pub name_en: &'static str,
    /// Keywords when drawn upright.
    pub upright: Keywords,
    /// Keywords when drawn reversed.
    pub reversed: Keywords,
}

impl TarotEntry {
    /// Ordered keywords for an orientation.
    pub fn keywords(&self, is_upright: bool, lang: Language) -> &[&'static str] {
        let set = if is_upright { &self.upright } else { &self.reversed };
        set.for_language(lang)
    }

    /// Display name in the given language. Japanese falls back to Chinese.
    pub fn display_name(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.name_en,
            Language::Zh | Language::Ja => self.name,
        }
    }

    /// Keyword list joined into display text.
    pub fn meaning(&self, is_upright: bool, lang: Language) -> String {
        self.keywords(is_upright, lang).join(lang.list_separator())
    }
}

/// Keyword lists in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    /// Simplified Chinese.
    pub zh: Vec<String>,
    /// English.
    pub en: Vec<String>,
    /// Japanese.
    pub ja: Vec<String>,
}

/// A card as carried by results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotCard {
    /// Card number, 0-21.
    pub id: u8,
    /// Chinese name.
    pub name: String,
    /// Canonical English name.
    pub name_en: String,
    /// Ordered upright keywords.
    pub upright_keywords: KeywordSet,
    /// Ordered reversed keywords.
    pub reversed_keywords: KeywordSet,
}

impl From<&TarotEntry> for TarotCard {
    fn from(entry: &TarotEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.to_string(),
            name_en: entry.name_en.to_string(),
            upright_keywords: entry.upright.to_owned_set(),
            reversed_keywords: entry.reversed.to_owned_set(),
        }
    }
}

/// The major arcana, ordered by id.
pub const MAJOR_ARCANA: &[TarotEntry] = &[
    TarotEntry {
        id: 0,
        name: "愚者",
        name_en: "The Fool",
        upright: Keywords {
            zh: ["新的开始", "自由", "冒险", "天真", "可能性"],
            en: ["New beginnings", "Freedom", "Adventure", "Innocence", "Possibility"],
            ja: ["新たな始まり", "自由", "冒険", "無邪気", "可能性"],
        },
        reversed: Keywords {
            zh: ["鲁莽", "逃避", "缺乏计划", "不成熟", "冒进"],
            en: ["Recklessness", "Avoidance", "Lack of planning", "Immaturity", "Impulsive"],
            ja: ["無謀", "逃避", "計画性の欠如", "未熟", "衝動的"],
        },
    },
    TarotEntry {
        id: 1,
        name: "魔术师",
        name_en: "The Magician",
        upright: Keywords {
            zh: ["行动力", "创造", "资源整合", "意志力", "主动"],
            en: ["Action", "Creation", "Resourcefulness", "Willpower", "Initiative"],
            ja: ["行動力", "創造", "資源活用", "意志力", "主導"],
        },
        reversed: Keywords {
            zh: ["意志分散", "操控", "空想", "欺骗", "能力不足"],
            en: ["Scattered will", "Manipulation", "Fantasy", "Deception", "Lack of skill"],
            ja: ["意志散漫", "操作", "空想", "欺瞞", "能力不足"],
        },
    },
    TarotEntry {
        id: 2,
        name: "女祭司",
        name_en: "The High Priestess",
        upright: Keywords {
            zh: ["直觉", "潜意识", "内在智慧", "神秘", "等待"],
            en: ["Intuition", "Subconscious", "Inner wisdom", "Mystery", "Patience"],
            ja: ["直感", "潜在意識", "内なる知恵", "神秘", "待機"],
        },
        reversed: Keywords {
            zh: ["迟疑不决", "忽视内心", "表面", "秘密", "被动"],
            en: ["Hesitation", "Ignoring inner voice", "Superficial", "Secrets", "Passive"],
            ja: ["優柔不断", "内心を無視", "表面的", "秘密", "受動的"],
        },
    },
    TarotEntry {
        id: 3,
        name: "女皇",
        name_en: "The Empress",
        upright: Keywords {
            zh: ["丰盛", "滋养", "创造力", "自然", "母性"],
            en: ["Abundance", "Nurturing", "Creativity", "Nature", "Motherhood"],
            ja: ["豊かさ", "養育", "創造力", "自然", "母性"],
        },
        reversed: Keywords {
            zh: ["过度依赖", "创意枯竭", "停滞", "控制", "忽视自我"],
            en: ["Over-dependence", "Creative block", "Stagnation", "Control", "Self-neglect"],
            ja: ["過度の依存", "創造力の枯渇", "停滞", "支配", "自己無視"],
        },
    },
    TarotEntry {
        id: 4,
        name: "皇帝",
        name_en: "The Emperor",
        upright: Keywords {
            zh: ["权威", "秩序", "稳定", "领导力", "规则"],
            en: ["Authority", "Order", "Stability", "Leadership", "Structure"],
            ja: ["権威", "秩序", "安定", "リーダーシップ", "規則"],
        },
        reversed: Keywords {
            zh: ["控制过度", "刚愎自用", "暴政", "缺乏纪律", "僵化"],
            en: ["Over-control", "Stubbornness", "Tyranny", "Lack of discipline", "Rigidity"],
            ja: ["過度の支配", "頑固", "暴政", "規律の欠如", "硬直"],
        },
    },
    TarotEntry {
        id: 5,
        name: "教皇",
        name_en: "The Hierophant",
        upright: Keywords {
            zh: ["传统", "指导", "精神信仰", "教育", "智慧"],
            en: ["Tradition", "Guidance", "Spirituality", "Education", "Wisdom"],
            ja: ["伝統", "指導", "精神性", "教育", "知恵"],
        },
        reversed: Keywords {
            zh: ["打破常规", "个人信念", "反叛", "挑战权威", "自由"],
            en: ["Breaking rules", "Personal beliefs", "Rebellion", "Challenging authority", "Freedom"],
            ja: ["常識打破", "個人の信念", "反抗", "権威への挑戦", "自由"],
        },
    },
    TarotEntry {
        id: 6,
        name: "恋人",
        name_en: "The Lovers",
        upright: Keywords {
            zh: ["爱情", "选择", "和谐", "价值观", "关系"],
            en: ["Love", "Choice", "Harmony", "Values", "Relationships"],
            ja: ["愛", "選択", "調和", "価値観", "関係"],
        },
        reversed: Keywords {
            zh: ["摇摆不定", "关系失衡", "错误选择", "分离", "内心冲突"],
            en: ["Indecision", "Imbalanced relationship", "Wrong choice", "Separation", "Inner conflict"],
            ja: ["優柔不断", "関係の不均衡", "誤った選択", "別離", "内面の葛藤"],
        },
    },
    TarotEntry {
        id: 7,
        name: "战车",
        name_en: "The Chariot",
        upright: Keywords {
            zh: ["胜利", "决心", "掌控", "前进", "克服障碍"],
            en: ["Victory", "Determination", "Control", "Progress", "Overcoming obstacles"],
            ja: ["勝利", "決意", "統制", "前進", "障害克服"],
        },
        reversed: Keywords {
            zh: ["失控", "缺乏方向", "攻击性", "受阻", "自大"],
            en: ["Loss of control", "Lack of direction", "Aggression", "Obstacles", "Arrogance"],
            ja: ["制御不能", "方向性の欠如", "攻撃性", "妨害", "傲慢"],
        },
    },
    TarotEntry {
        id: 8,
        name: "力量",
        name_en: "Strength",
        upright: Keywords {
            zh: ["勇气", "耐心", "内在力量", "柔和", "自律"],
            en: ["Courage", "Patience", "Inner strength", "Gentleness", "Self-discipline"],
            ja: ["勇気", "忍耐", "内なる力", "優しさ", "自己規律"],
        },
        reversed: Keywords {
            zh: ["自我怀疑", "软弱", "失去信心", "粗暴", "控制不住"],
            en: ["Self-doubt", "Weakness", "Loss of confidence", "Harshness", "Lack of control"],
            ja: ["自己不信", "弱さ", "自信喪失", "粗暴", "自制の欠如"],
        },
    },
    TarotEntry {
        id: 9,
        name: "隐者",
        name_en: "The Hermit",
        upright: Keywords {
            zh: ["内省", "独处", "指引", "智慧", "寻找真理"],
            en: ["Introspection", "Solitude", "Guidance", "Wisdom", "Seeking truth"],
            ja: ["内省", "孤独", "導き", "知恵", "真理探求"],
        },
        reversed: Keywords {
            zh: ["孤立", "逃避", "偏执", "过度退缩", "拒绝帮助"],
            en: ["Isolation", "Avoidance", "Paranoia", "Withdrawal", "Refusing help"],
            ja: ["孤立", "逃避", "偏執", "過度の引きこもり", "助けを拒否"],
        },
    },
    TarotEntry {
        id: 10,
        name: "命运之轮",
        name_en: "Wheel of Fortune",
        upright: Keywords {
            zh: ["转机", "好运", "命运", "周期", "变化"],
            en: ["Turning point", "Good luck", "Destiny", "Cycles", "Change"],
            ja: ["転機", "幸運", "運命", "周期", "変化"],
        },
        reversed: Keywords {
            zh: ["厄运", "抗拒改变", "失控", "停滞", "坏运气"],
            en: ["Bad luck", "Resisting change", "Loss of control", "Stagnation", "Misfortune"],
            ja: ["不運", "変化への抵抗", "制御不能", "停滞", "不運"],
        },
    },
    TarotEntry {
        id: 11,
        name: "正义",
        name_en: "Justice",
        upright: Keywords {
            zh: ["公平", "真相", "因果", "平衡", "责任"],
            en: ["Fairness", "Truth", "Karma", "Balance", "Responsibility"],
            ja: ["公正", "真実", "因果", "バランス", "責任"],
        },
        reversed: Keywords {
            zh: ["不公正", "逃避责任", "偏见", "欺骗", "失衡"],
            en: ["Injustice", "Avoiding responsibility", "Bias", "Deception", "Imbalance"],
            ja: ["不公正", "責任回避", "偏見", "欺瞞", "不均衡"],
        },
    },
    TarotEntry {
        id: 12,
        name: "倒吊人",
        name_en: "The Hanged Man",
        upright: Keywords {
            zh: ["牺牲", "等待", "换位思考", "放下", "新视角"],
            en: ["Sacrifice", "Waiting", "New perspective", "Letting go", "Surrender"],
            ja: ["犠牲", "待機", "視点転換", "手放し", "新たな視点"],
        },
        reversed: Keywords {
            zh: ["拖延", "抗拒", "无意义的牺牲", "自私", "僵持"],
            en: ["Procrastination", "Resistance", "Pointless sacrifice", "Selfishness", "Stalemate"],
            ja: ["先延ばし", "抵抗", "無意味な犠牲", "利己的", "膠着"],
        },
    },
    TarotEntry {
        id: 13,
        name: "死神",
        name_en: "Death",
        upright: Keywords {
            zh: ["结束", "转变", "放下过去", "重生", "新开始"],
            en: ["Ending", "Transformation", "Letting go", "Rebirth", "New beginning"],
            ja: ["終わり", "変容", "過去を手放す", "再生", "新たな始まり"],
        },
        reversed: Keywords {
            zh: ["抗拒改变", "停滞", "无法放下", "恐惧", "拖延结束"],
            en: ["Resisting change", "Stagnation", "Unable to let go", "Fear", "Delayed ending"],
            ja: ["変化への抵抗", "停滞", "手放せない", "恐れ", "終わりの遅延"],
        },
    },
    TarotEntry {
        id: 14,
        name: "节制",
        name_en: "Temperance",
        upright: Keywords {
            zh: ["平衡", "耐心", "调和", "适度", "目标"],
            en: ["Balance", "Patience", "Harmony", "Moderation", "Purpose"],
            ja: ["バランス", "忍耐", "調和", "節度", "目的"],
        },
        reversed: Keywords {
            zh: ["失衡", "过度", "缺乏耐心", "极端", "冲突"],
            en: ["Imbalance", "Excess", "Impatience", "Extremes", "Conflict"],
            ja: ["不均衡", "過剰", "忍耐不足", "極端", "対立"],
        },
    },
    TarotEntry {
        id: 15,
        name: "恶魔",
        name_en: "The Devil",
        upright: Keywords {
            zh: ["束缚", "诱惑", "物质", "阴影面", "执念"],
            en: ["Bondage", "Temptation", "Materialism", "Shadow self", "Obsession"],
            ja: ["束縛", "誘惑", "物質主義", "影の側面", "執着"],
        },
        reversed: Keywords {
            zh: ["解脱", "打破束缚", "觉醒", "恢复自由", "放下"],
            en: ["Liberation", "Breaking free", "Awakening", "Reclaiming freedom", "Letting go"],
            ja: ["解放", "束縛を断つ", "覚醒", "自由の回復", "手放し"],
        },
    },
    TarotEntry {
        id: 16,
        name: "塔",
        name_en: "The Tower",
        upright: Keywords {
            zh: ["突变", "崩塌", "觉醒", "真相揭露", "解放"],
            en: ["Sudden change", "Collapse", "Awakening", "Truth revealed", "Liberation"],
            ja: ["激変", "崩壊", "覚醒", "真実の暴露", "解放"],
        },
        reversed: Keywords {
            zh: ["灾难延迟", "抗拒改变", "恐惧", "避免最坏", "内在转变"],
            en: ["Delayed disaster", "Resisting change", "Fear", "Avoiding worst", "Inner transformation"],
            ja: ["災害の遅延", "変化への抵抗", "恐れ", "最悪を避ける", "内面の変容"],
        },
    },
    TarotEntry {
        id: 17,
        name: "星星",
        name_en: "The Star",
        upright: Keywords {
            zh: ["希望", "信念", "平静", "灵感", "疗愈"],
            en: ["Hope", "Faith", "Serenity", "Inspiration", "Healing"],
            ja: ["希望", "信念", "平穏", "インスピレーション", "癒し"],
        },
        reversed: Keywords {
            zh: ["失望", "缺乏信心", "悲观", "脱离现实", "空虚"],
            en: ["Disappointment", "Lack of faith", "Pessimism", "Disconnection", "Emptiness"],
            ja: ["失望", "信念の欠如", "悲観", "現実離れ", "空虚"],
        },
    },
    TarotEntry {
        id: 18,
        name: "月亮",
        name_en: "The Moon",
        upright: Keywords {
            zh: ["直觉", "幻象", "不确定", "潜意识", "恐惧"],
            en: ["Intuition", "Illusion", "Uncertainty", "Subconscious", "Fear"],
            ja: ["直感", "幻想", "不確実", "潜在意識", "恐れ"],
        },
        reversed: Keywords {
            zh: ["混乱", "欺骗揭露", "焦虑释放", "清晰", "面对恐惧"],
            en: ["Confusion", "Deception revealed", "Anxiety released", "Clarity", "Facing fears"],
            ja: ["混乱", "欺瞞の暴露", "不安の解消", "明晰", "恐れに立ち向かう"],
        },
    },
    TarotEntry {
        id: 19,
        name: "太阳",
        name_en: "The Sun",
        upright: Keywords {
            zh: ["成功", "快乐", "活力", "清晰", "积极"],
            en: ["Success", "Joy", "Vitality", "Clarity", "Positivity"],
            ja: ["成功", "喜び", "活力", "明晰", "前向き"],
        },
        reversed: Keywords {
            zh: ["短暂低迷", "缺乏热情", "延迟成功", "自负", "倦怠"],
            en: ["Temporary setback", "Lack of enthusiasm", "Delayed success", "Ego", "Burnout"],
            ja: ["一時的な停滞", "情熱の欠如", "成功の遅延", "自負", "燃え尽き"],
        },
    },
    TarotEntry {
        id: 20,
        name: "审判",
        name_en: "Judgement",
        upright: Keywords {
            zh: ["觉醒", "重生", "反思", "召唤", "决断"],
            en: ["Awakening", "Rebirth", "Reflection", "Calling", "Decision"],
            ja: ["覚醒", "再生", "内省", "召命", "決断"],
        },
        reversed: Keywords {
            zh: ["自我怀疑", "拒绝改变", "无法原谅", "逃避", "错失机会"],
            en: ["Self-doubt", "Refusing change", "Unable to forgive", "Avoidance", "Missed opportunity"],
            ja: ["自己不信", "変化の拒否", "許せない", "逃避", "機会損失"],
        },
    },
    TarotEntry {
        id: 21,
        name: "世界",
        name_en: "The World",
        upright: Keywords {
            zh: ["完成", "整合", "成就", "圆满", "新旅程"],
            en: ["Completion", "Integration", "Achievement", "Fulfillment", "New journey"],
            ja: ["完成", "統合", "達成", "充実", "新たな旅"],
        },
        reversed: Keywords {
            zh: ["未完成", "停滞", "缺乏闭环", "延迟", "不圆满"],
            en: ["Incompletion", "Stagnation", "Lack of closure", "Delay", "Unfulfillment"],
            ja: ["未完成", "停滞", "完結の欠如", "遅延", "不完全"],
        },
    },
];

/// Static deck row for an id.
pub fn entry_by_id(id: u8) -> CastResult<&'static TarotEntry> {
    MAJOR_ARCANA
        .get(usize::from(id))
        .ok_or(CastError::CardNotFound(id))
}

/// Look up a card by id.
pub fn card_by_id(id: u8) -> CastResult<TarotCard> {
    entry_by_id(id).map(TarotCard::from)
}
