use std::io::{self, BufRead, Write};

use colored::Colorize;
use miette::IntoDiagnostic;
use rand::Rng;
use tracing::debug;
use yarrow_core::cast::spread::available_cards;
use yarrow_core::cast::stream::toss_three_coins;
use yarrow_core::{Language, ManualDraw, Method, Mode, SpreadPosition};
use yarrow_interpret::LlmConfig;
use yarrow_session::{NewSession, SessionEngine, StepPayload};

pub async fn run(
    method: Method,
    question: &str,
    lang: Language,
    json: bool,
    llm: LlmConfig,
) -> miette::Result<()> {
    let engine = super::build_engine(lang, &llm)?;
    let session = engine
        .create(NewSession::new(question, Mode::Manual, method).with_language(lang))
        .await
        .into_diagnostic()?;
    let total = session.total_steps();
    debug!(session = %session.id, total, "manual session opened");

    // Prompts go to stderr so `--json` output stays parseable.
    let mut prompt = io::stderr();
    match method {
        Method::Liuyao => writeln!(
            prompt,
            "  Toss three coins {total} times, bottom line first.\n  \
             Enter each toss as three of 2/3 (or t/h); an empty line tosses for you."
        ),
        Method::Tarot => writeln!(
            prompt,
            "  Draw {total} cards: past, present, future.\n  \
             Enter each as '<id 0-21> [u|r]'; an empty line draws for you."
        ),
    }
    .into_diagnostic()?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();
    let mut current = 0;

    while current < total {
        write!(prompt, "  [{}/{total}] > ", current + 1).into_diagnostic()?;
        prompt.flush().into_diagnostic()?;

        line.clear();
        if reader.read_line(&mut line).into_diagnostic()? == 0 {
            return Err(miette::miette!(
                "input ended after {current}/{total} steps"
            ));
        }

        let payload = match method {
            Method::Liuyao => parse_toss(line.trim()),
            Method::Tarot => {
                let drawn = engine.get(&session.id).await.into_diagnostic()?.drawn_cards();
                parse_draw(line.trim(), current, &drawn)
            }
        };
        let payload = match payload {
            Ok(p) => p,
            Err(e) => {
                writeln!(prompt, "  {}", e.yellow()).into_diagnostic()?;
                continue;
            }
        };

        match submit(&engine, &session.id, current + 1, payload).await {
            Ok(step) => current = step,
            Err(e) => writeln!(prompt, "  {}", e.yellow()).into_diagnostic()?,
        }
    }

    let session = engine.interpret(&session.id).await.into_diagnostic()?;
    super::print_session(&session, json)
}

async fn submit(
    engine: &SessionEngine,
    id: &str,
    step: usize,
    payload: StepPayload,
) -> Result<usize, String> {
    engine
        .submit_step(id, step, payload)
        .await
        .map(|outcome| outcome.current_step)
        .map_err(|e| e.to_string())
}

fn parse_coin(token: &str) -> Result<u8, String> {
    match token.to_ascii_lowercase().as_str() {
        "3" | "h" | "heads" => Ok(3),
        "2" | "t" | "tails" => Ok(2),
        other => Err(format!("'{other}' is not a coin; use 2/3 or t/h")),
    }
}

fn parse_toss(input: &str) -> Result<StepPayload, String> {
    if input.is_empty() {
        return Ok(StepPayload::CoinToss {
            coins: toss_three_coins(&mut rand::rng()),
        });
    }

    // "333" and "3 3 3" are both accepted.
    let tokens: Vec<String> = if input.contains(char::is_whitespace) {
        input.split_whitespace().map(str::to_string).collect()
    } else {
        input.chars().map(String::from).collect()
    };
    if tokens.len() != 3 {
        return Err(format!("expected three coins, got {}", tokens.len()));
    }

    let mut coins = [0u8; 3];
    for (slot, token) in coins.iter_mut().zip(&tokens) {
        *slot = parse_coin(token)?;
    }
    Ok(StepPayload::CoinToss { coins })
}

fn parse_draw(input: &str, index: usize, drawn: &[u8]) -> Result<StepPayload, String> {
    let position = SpreadPosition::from_index(index)
        .ok_or_else(|| format!("no spread position at step {}", index + 1))?;

    if input.is_empty() {
        let mut rng = rand::rng();
        let cards = available_cards(drawn);
        if cards.is_empty() {
            return Err("no cards left to draw".to_string());
        }
        let card_id = cards[rng.random_range(0..cards.len())];
        return Ok(StepPayload::CardDraw(ManualDraw {
            card_id,
            position,
            is_upright: rng.random_bool(0.5),
        }));
    }

    let mut parts = input.split_whitespace();
    let card_id = parts
        .next()
        .and_then(|id| id.parse::<u8>().ok())
        .ok_or_else(|| format!("'{input}' does not start with a card id"))?;
    let is_upright = match parts.next().map(str::to_ascii_lowercase).as_deref() {
        None | Some("u") | Some("up") | Some("upright") => true,
        Some("r") | Some("rev") | Some("reversed") => false,
        Some(other) => return Err(format!("'{other}' is not an orientation; use u or r")),
    };

    Ok(StepPayload::CardDraw(ManualDraw {
        card_id,
        position,
        is_upright,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toss_accepts_compact_and_spaced_forms() {
        let compact = parse_toss("332").unwrap();
        let spaced = parse_toss("h h t").unwrap();
        assert_eq!(compact, StepPayload::CoinToss { coins: [3, 3, 2] });
        assert_eq!(compact, spaced);
    }

    #[test]
    fn toss_rejects_bad_tokens() {
        assert!(parse_toss("3 3").is_err());
        assert!(parse_toss("3 4 3").is_err());
    }

    #[test]
    fn empty_toss_is_automatic() {
        let StepPayload::CoinToss { coins } = parse_toss("").unwrap() else {
            panic!("expected a coin toss");
        };
        assert!(coins.iter().all(|c| *c == 2 || *c == 3));
    }

    #[test]
    fn draw_takes_position_from_index() {
        let payload = parse_draw("10 r", 1, &[0]).unwrap();
        assert_eq!(
            payload,
            StepPayload::CardDraw(ManualDraw {
                card_id: 10,
                position: SpreadPosition::Present,
                is_upright: false,
            })
        );
    }

    #[test]
    fn automatic_draw_skips_drawn_cards() {
        let drawn: Vec<u8> = (0..21).collect();
        let StepPayload::CardDraw(draw) = parse_draw("", 2, &drawn).unwrap() else {
            panic!("expected a card draw");
        };
        assert_eq!(draw.card_id, 21);
        assert_eq!(draw.position, SpreadPosition::Future);
    }

    #[test]
    fn draw_rejects_bad_orientation() {
        assert!(parse_draw("3 sideways", 0, &[]).is_err());
        assert!(parse_draw("fool", 0, &[]).is_err());
    }
}
