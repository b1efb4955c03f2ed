//! Templated interpretation built from the cast alone.
//!
//! Used whenever the model is unreachable or its reply is unusable. The
//! output depends only on the result and the language.

use yarrow_core::cast::liuyao::LiuyaoResult;
use yarrow_core::cast::spread::TarotResult;
use yarrow_core::{DivinationResult, Language};

use crate::interpretation::{Confidence, DivinationInterpretation};

struct Template {
    liuyao_summary: fn(&str) -> String,
    liuyao_advice: &'static str,
    liuyao_reasoning: [&'static str; 2],
    tarot_summary: &'static str,
    tarot_advice: &'static str,
    tarot_reasoning: [fn(&str) -> String; 3],
    timing: &'static str,
    follow_ups: [&'static str; 2],
    ending: &'static str,
}

const ZH: Template = Template {
    liuyao_summary: |name| format!("本卦{name}，提示你关注当下的选择"),
    liuyao_advice: "先观察，再行动。不必急于做决定。",
    liuyao_reasoning: ["结合你的问题，建议从长计议", "变化中蕴含机会，保持耐心"],
    tarot_summary: "牌阵显示：",
    tarot_advice: "关注牌面传递的信息，它反映了你内心的某些想法。",
    tarot_reasoning: [
        |name| format!("过去的{name}影响着现在"),
        |name| format!("现在的{name}揭示核心议题"),
        |name| format!("未来的{name}指向可能的方向"),
    ],
    timing: "当下是思考的好时机",
    follow_ups: ["是什么让你想问这个问题？", "你内心倾向于哪个选择？"],
    ending: "本次占卜结束，愿你心中更加清晰。",
};

const EN: Template = Template {
    liuyao_summary: |name| format!("The primary hexagram is {name}, suggesting focus on current choices"),
    liuyao_advice: "Observe first, then act. There is no need to rush a decision.",
    liuyao_reasoning: [
        "Given your question, take the long view",
        "Change carries opportunity; stay patient",
    ],
    tarot_summary: "The spread shows: ",
    tarot_advice: "Notice what the cards bring up; it mirrors something you already feel.",
    tarot_reasoning: [
        |name| format!("{name} in the past shapes the present"),
        |name| format!("{name} in the present reveals the core issue"),
        |name| format!("{name} in the future points to a possible direction"),
    ],
    timing: "Now is a good time to reflect",
    follow_ups: [
        "What made you want to ask this question?",
        "Which choice does your heart lean toward?",
    ],
    ending: "The reading is complete. May your mind feel clearer.",
};

const JA: Template = Template {
    liuyao_summary: |name| format!("本卦は{name}、今の選択に目を向けるよう示しています"),
    liuyao_advice: "まず観察し、それから動きましょう。決断を急ぐ必要はありません。",
    liuyao_reasoning: [
        "質問を踏まえ、長い目で考えることをおすすめします",
        "変化の中に機会があります。焦らずに",
    ],
    tarot_summary: "スプレッドが示すもの：",
    tarot_advice: "カードが伝えるメッセージに注目してください。心の中の思いを映しています。",
    tarot_reasoning: [
        |name| format!("過去の{name}が現在に影響しています"),
        |name| format!("現在の{name}が核心の課題を示しています"),
        |name| format!("未来の{name}が可能な方向を指しています"),
    ],
    timing: "今は考えるのに良い時です",
    follow_ups: [
        "なぜこの質問をしたいと思ったのですか？",
        "心はどちらの選択に傾いていますか？",
    ],
    ending: "占いはこれで終わりです。心がより晴れやかになりますように。",
};

fn template(lang: Language) -> &'static Template {
    match lang {
        Language::Zh => &ZH,
        Language::En => &EN,
        Language::Ja => &JA,
    }
}

/// Build the templated interpretation for a result.
pub fn fallback_interpretation(result: &DivinationResult, lang: Language) -> DivinationInterpretation {
    let t = template(lang);
    let (summary, advice, reasoning_bullets) = match result {
        DivinationResult::Liuyao(r) => liuyao_parts(t, r, lang),
        DivinationResult::Tarot(r) => tarot_parts(t, r, lang),
    };

    DivinationInterpretation {
        summary,
        advice,
        timing: t.timing.to_string(),
        confidence: Confidence::Low,
        reasoning_bullets,
        follow_up_questions: t.follow_ups.iter().map(|q| q.to_string()).collect(),
        ritual_ending: t.ending.to_string(),
    }
}

fn liuyao_parts(t: &Template, result: &LiuyaoResult, lang: Language) -> (String, String, Vec<String>) {
    let primary = &result.primary_hexagram;
    let name = match lang {
        Language::En => format!("{} ({})", primary.name, primary.name_en),
        Language::Zh | Language::Ja => primary.name.clone(),
    };
    let separator = match lang {
        Language::En => ": ",
        Language::Zh | Language::Ja => "，",
    };

    let mut reasoning = vec![format!("{name}{separator}{}", primary.description)];
    reasoning.extend(t.liuyao_reasoning.iter().map(|s| s.to_string()));
    ((t.liuyao_summary)(&name), t.liuyao_advice.to_string(), reasoning)
}

fn tarot_parts(t: &Template, result: &TarotResult, lang: Language) -> (String, String, Vec<String>) {
    let names: Vec<&str> = result
        .cards
        .iter()
        .map(|d| match lang {
            Language::En => d.card.name_en.as_str(),
            Language::Zh | Language::Ja => d.card.name.as_str(),
        })
        .collect();

    let summary = format!("{}{}", t.tarot_summary, names.join(" → "));
    let reasoning = t
        .tarot_reasoning
        .iter()
        .zip(&names)
        .map(|(line, name)| line(name))
        .collect();
    (summary, t.tarot_advice.to_string(), reasoning)
}

#[cfg(test)]
mod tests {
    use yarrow_core::cast::spread::ManualDraw;
    use yarrow_core::{Method, RawInput, SpreadPosition, generate_from_raw, generate_from_seed};

    use super::*;
    use crate::decode::{MAX_BULLETS, MIN_BULLETS};

    #[test]
    fn liuyao_fallback_zh() {
        let result = generate_from_seed(Method::Liuyao, "abc", Language::Zh).unwrap();
        let interp = fallback_interpretation(&result, Language::Zh);
        assert_eq!(interp.summary, "本卦坤，提示你关注当下的选择");
        assert_eq!(interp.confidence, Confidence::Low);
        assert_eq!(interp.timing, "当下是思考的好时机");
        assert_eq!(interp.follow_up_questions.len(), 2);
        assert_eq!(interp.ritual_ending, "本次占卜结束，愿你心中更加清晰。");
        assert!(interp.reasoning_bullets[0].starts_with("坤，"));
    }

    #[test]
    fn tarot_fallback_en() {
        let draws = SpreadPosition::ALL
            .iter()
            .zip([0u8, 10, 21])
            .map(|(position, card_id)| ManualDraw {
                card_id,
                position: *position,
                is_upright: true,
            })
            .collect();
        let result = generate_from_raw(Method::Tarot, &RawInput::Draws(draws), Language::En).unwrap();
        let interp = fallback_interpretation(&result, Language::En);
        assert_eq!(
            interp.summary,
            "The spread shows: The Fool → Wheel of Fortune → The World"
        );
        assert_eq!(
            interp.reasoning_bullets[2],
            "The World in the future points to a possible direction"
        );
    }

    #[test]
    fn fallback_satisfies_payload_bounds() {
        for lang in [Language::Zh, Language::En, Language::Ja] {
            for method in [Method::Liuyao, Method::Tarot] {
                let result = generate_from_seed(method, "bounds", lang).unwrap();
                let interp = fallback_interpretation(&result, lang);
                assert!((MIN_BULLETS..=MAX_BULLETS).contains(&interp.reasoning_bullets.len()));
                assert!(!interp.summary.is_empty());
            }
        }
    }
}
