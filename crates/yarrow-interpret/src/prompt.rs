//! Prompt construction.
//!
//! The system prompt fixes tone and the JSON response shape. The user prompt
//! narrates the question and the structured cast in the session's language.

use yarrow_core::cast::liuyao::{LiuyaoResult, position_name};
use yarrow_core::cast::spread::{SpreadPosition, TarotResult, orientation_label};
use yarrow_core::{DivinationResult, Language, Mode};

const RESPONSE_SHAPE: &str = r#"{
  "summary": "...",
  "advice": "...",
  "timing": "...",
  "confidence": "low/medium/high",
  "reasoning_bullets": ["...", "...", "..."],
  "follow_up_questions": ["...", "..."],
  "ritual_ending": "..."
}"#;

const SYSTEM_ZH: &str = "你是一位温和而睿智的占卜解读者，根据占卜结果为提问者提供启发与建议。

【原则】
1. 避免绝对化的断言，多用“可能”“倾向于”“值得考虑”
2. 占卜是自我反思的工具，而非命运的判决
3. 体察提问者的情绪，给出切实可行的建议
4. 不承诺准确，强调启发而非预测

【风格】
简洁清晰，温暖而不油腻，使用现代中文。

【输出】
只返回一个有效的JSON对象，字段如下：
summary 一句话结论（15-25字）；advice 可执行的建议（30-50字）；timing 时机提示（10-20字）；
confidence 取 low/medium/high；reasoning_bullets 3-5条要点，每条10-20字；
follow_up_questions 2-3个追问；ritual_ending 温暖的结束语（15-25字）。";

const SYSTEM_EN: &str = "You are a gentle, thoughtful divination reader. Offer insight and practical advice grounded in the cast below.

Principles:
1. Avoid absolute statements; prefer \"may\", \"tends to\", \"worth considering\".
2. Divination is a tool for reflection, not a verdict on fate.
3. Acknowledge the asker's feelings and give advice they can act on.
4. Never promise accuracy; the reading is a prompt for thought, not a prediction.

Style: clear, concise, warm without being saccharine.

Output: return only one valid JSON object with these fields:
summary (one sentence), advice (one or two actionable sentences), timing (a short hint),
confidence (low/medium/high), reasoning_bullets (3-5 short points),
follow_up_questions (2-3 questions), ritual_ending (a short warm closing line).";

const JA_SUFFIX: &str = "\n\n回答のテキストはすべて日本語で書いてください。JSONのキー名は変更しないこと。";

/// Labels used to narrate a cast.
struct Labels {
    question: &'static str,
    method: &'static str,
    liuyao_method: &'static str,
    tarot_method: &'static str,
    ai_generated: &'static str,
    manual_toss: &'static str,
    manual_draw: &'static str,
    hexagram_section: &'static str,
    primary: &'static str,
    relating: &'static str,
    changing: &'static str,
    lines_section: &'static str,
    changing_mark: &'static str,
    draws_section: &'static str,
    position: &'static str,
    keywords: &'static str,
    guidance_section: &'static str,
    closing: &'static str,
}

const LABELS_ZH: Labels = Labels {
    question: "【用户问题】",
    method: "【占卜方式】",
    liuyao_method: "六爻起卦",
    tarot_method: "塔罗牌三张牌阵",
    ai_generated: "AI生成",
    manual_toss: "手动投掷",
    manual_draw: "手动抽牌",
    hexagram_section: "【卦象结果】",
    primary: "本卦",
    relating: "变卦",
    changing: "动爻",
    lines_section: "【六爻详情】",
    changing_mark: "（动）",
    draws_section: "【抽牌结果】",
    position: "位置",
    keywords: "关键词",
    guidance_section: "【牌阵解读方向】",
    closing: "请根据以上信息，结合用户的问题，提供占卜解读。",
};

const LABELS_EN: Labels = Labels {
    question: "[Question]",
    method: "[Method]",
    liuyao_method: "Liuyao hexagram cast",
    tarot_method: "Three-card tarot spread",
    ai_generated: "generated",
    manual_toss: "tossed by hand",
    manual_draw: "drawn by hand",
    hexagram_section: "[Hexagrams]",
    primary: "Primary",
    relating: "Relating",
    changing: "Changing lines",
    lines_section: "[Lines]",
    changing_mark: " (changing)",
    draws_section: "[Cards]",
    position: "Position ",
    keywords: "Keywords",
    guidance_section: "[Reading the spread]",
    closing: "Using the above and the question, give the reading.",
};

const LABELS_JA: Labels = Labels {
    question: "【質問】",
    method: "【占い方法】",
    liuyao_method: "六爻占い",
    tarot_method: "タロット3枚引き",
    ai_generated: "AI生成",
    manual_toss: "手動でコインを投げた",
    manual_draw: "手動でカードを引いた",
    hexagram_section: "【卦の結果】",
    primary: "本卦",
    relating: "変卦",
    changing: "動爻",
    lines_section: "【六爻の詳細】",
    changing_mark: "（動）",
    draws_section: "【カードの結果】",
    position: "位置",
    keywords: "キーワード",
    guidance_section: "【スプレッドの読み方】",
    closing: "以上の情報と質問をもとに、解釈を示してください。",
};

fn labels(lang: Language) -> &'static Labels {
    match lang {
        Language::Zh => &LABELS_ZH,
        Language::En => &LABELS_EN,
        Language::Ja => &LABELS_JA,
    }
}

fn colon(lang: Language) -> &'static str {
    match lang {
        Language::En => ": ",
        Language::Zh | Language::Ja => "：",
    }
}

fn paren(lang: Language, inner: &str) -> String {
    match lang {
        Language::En => format!(" ({inner})"),
        Language::Zh | Language::Ja => format!("（{inner}）"),
    }
}

/// Fixed system instruction for a language.
pub fn system_prompt(lang: Language) -> String {
    let base = match lang {
        Language::En => SYSTEM_EN,
        Language::Zh | Language::Ja => SYSTEM_ZH,
    };
    let mut prompt = format!("{base}\n\n{RESPONSE_SHAPE}");
    if lang == Language::Ja {
        prompt.push_str(JA_SUFFIX);
    }
    prompt
}

/// Narrate a question and cast for the model.
pub fn user_prompt(question: &str, mode: Mode, result: &DivinationResult, lang: Language) -> String {
    match result {
        DivinationResult::Liuyao(r) => liuyao_prompt(question, mode, r, lang),
        DivinationResult::Tarot(r) => tarot_prompt(question, mode, r, lang),
    }
}

fn liuyao_prompt(question: &str, mode: Mode, result: &LiuyaoResult, lang: Language) -> String {
    let l = labels(lang);
    let c = colon(lang);
    let source = match mode {
        Mode::Ai => l.ai_generated,
        Mode::Manual => l.manual_toss,
    };

    let primary = &result.primary_hexagram;
    let mut hexagrams = format!(
        "{}{c}{}{}\n{}",
        l.primary,
        primary.name,
        paren(lang, &primary.symbol),
        primary.description
    );
    if let Some(relating) = &result.relating_hexagram {
        hexagrams.push_str(&format!(
            "\n{}{c}{}{}\n{}",
            l.relating,
            relating.name,
            paren(lang, &relating.symbol),
            relating.description
        ));
    }

    let lines: Vec<String> = result
        .lines
        .iter()
        .map(|line| {
            let mark = if line.is_changing { l.changing_mark } else { "" };
            format!(
                "{}{c}{}{mark}",
                position_name(line.position, lang),
                line.yao_type.name(lang)
            )
        })
        .collect();

    format!(
        "{}\n{question}\n\n{}\n{}{}\n\n{}\n{hexagrams}\n\n{}{c}{}\n\n{}\n{}\n\n{}",
        l.question,
        l.method,
        l.liuyao_method,
        paren(lang, source),
        l.hexagram_section,
        l.changing,
        result.changing_description(lang),
        l.lines_section,
        lines.join("\n"),
        l.closing,
    )
}

fn tarot_prompt(question: &str, mode: Mode, result: &TarotResult, lang: Language) -> String {
    let l = labels(lang);
    let c = colon(lang);
    let source = match mode {
        Mode::Ai => l.ai_generated,
        Mode::Manual => l.manual_draw,
    };

    let cards: Vec<String> = result
        .cards
        .iter()
        .enumerate()
        .map(|(i, draw)| {
            let name = match lang {
                Language::En => &draw.card.name_en,
                Language::Zh | Language::Ja => &draw.card.name,
            };
            format!(
                "{}{} - {}{c}{name}{}\n  {}{c}{}",
                l.position,
                i + 1,
                draw.position.label(lang),
                paren(lang, orientation_label(draw.is_upright, lang)),
                l.keywords,
                draw.meaning,
            )
        })
        .collect();

    let guidance: Vec<String> = SpreadPosition::ALL
        .iter()
        .map(|p| format!("- {}{c}{}", p.label(lang), p.guidance(lang)))
        .collect();

    format!(
        "{}\n{question}\n\n{}\n{}{} - {}\n\n{}\n{}\n\n{}\n{}\n\n{}",
        l.question,
        l.method,
        l.tarot_method,
        paren(lang, source),
        result.spread_name,
        l.draws_section,
        cards.join("\n"),
        l.guidance_section,
        guidance.join("\n"),
        l.closing,
    )
}

#[cfg(test)]
mod tests {
    use yarrow_core::{Method, generate_from_seed};

    use super::*;

    #[test]
    fn system_prompt_describes_shape() {
        for lang in [Language::Zh, Language::En, Language::Ja] {
            let prompt = system_prompt(lang);
            assert!(prompt.contains("reasoning_bullets"));
            assert!(prompt.contains("ritual_ending"));
        }
        assert!(system_prompt(Language::Ja).contains("日本語"));
    }

    #[test]
    fn liuyao_prompt_narrates_cast() {
        let result = generate_from_seed(Method::Liuyao, "abc", Language::Zh).unwrap();
        let prompt = user_prompt("我该换工作吗？", Mode::Ai, &result, Language::Zh);
        assert!(prompt.starts_with("【用户问题】\n我该换工作吗？"));
        assert!(prompt.contains("六爻起卦（AI生成）"));
        assert!(prompt.contains("本卦：坤"));
        assert!(prompt.contains("变卦：豫"));
        assert!(prompt.contains("动爻：四爻动"));
        assert!(prompt.contains("四爻：老阴（动）"));
        assert!(prompt.contains("初爻：少阴\n"));
    }

    #[test]
    fn tarot_prompt_narrates_cards() {
        let result = generate_from_seed(Method::Tarot, "abc", Language::En).unwrap();
        let prompt = user_prompt("Should I move?", Mode::Manual, &result, Language::En);
        assert!(prompt.contains("[Question]\nShould I move?"));
        assert!(prompt.contains("drawn by hand"));
        assert!(prompt.contains("Position 1 - Past: The Hierophant (upright)"));
        assert!(prompt.contains("- Future: the likely direction if nothing changes"));
    }
}
