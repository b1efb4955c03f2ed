//! Session records and manual step payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yarrow_core::cast::spread::draw_card;
use yarrow_core::{
    CastResult, CoinToss, DivinationResult, Language, ManualDraw, Method, Mode, RawInput,
    TarotDraw,
};
use yarrow_interpret::{DivinationInterpretation, InterpretationSource};

/// Lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Created, nothing generated yet.
    Pending,
    /// Generation running, or manual steps arriving.
    InProgress,
    /// Generated, or all manual steps recorded.
    Completed,
    /// Generation failed. Terminal.
    Failed,
}

impl Status {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a caller physically did in one manual step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "snake_case")]
pub enum StepPayload {
    /// Three coins, each 2 (tails) or 3 (heads).
    CoinToss {
        /// Raw coin values.
        coins: [u8; 3],
    },
    /// One card placed in a spread slot.
    CardDraw(ManualDraw),
}

impl StepPayload {
    /// Action name.
    pub fn action(&self) -> &'static str {
        match self {
            Self::CoinToss { .. } => "coin_toss",
            Self::CardDraw(_) => "card_draw",
        }
    }

    /// Method this action belongs to.
    pub fn method(&self) -> Method {
        match self {
            Self::CoinToss { .. } => Method::Liuyao,
            Self::CardDraw(_) => Method::Tarot,
        }
    }
}

/// One recorded manual step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualStep {
    /// 1-based step number.
    pub step_number: usize,
    /// What was done.
    pub payload: StepPayload,
    /// When the step was accepted.
    pub timestamp: DateTime<Utc>,
}

/// Progress preview of a manual session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialResult {
    /// Tosses recorded so far, bottom line first.
    Tosses(Vec<CoinToss>),
    /// Cards drawn so far, past first.
    Draws(Vec<TarotDraw>),
}

impl PartialResult {
    /// Number of tosses or draws in the preview.
    pub fn len(&self) -> usize {
        match self {
            Self::Tosses(t) => t.len(),
            Self::Draws(d) => d.len(),
        }
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reply to a manual step submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Session the step belongs to.
    pub session_id: String,
    /// Steps recorded after this submission.
    pub current_step: usize,
    /// Steps the method needs.
    pub total_steps: usize,
    /// Whether all steps are recorded.
    pub is_complete: bool,
    /// Preview of what has been recorded.
    pub partial_result: PartialResult,
}

/// Request to open a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    /// The question being asked.
    pub question: String,
    /// Who performs the cast.
    pub mode: Mode,
    /// Liuyao or tarot.
    pub method: Method,
    /// Caller-chosen seed; generated when absent.
    pub seed: Option<String>,
    /// Display language; the engine default when absent.
    pub language: Option<Language>,
}

impl NewSession {
    /// A request with a generated seed and the default language.
    pub fn new(question: impl Into<String>, mode: Mode, method: Method) -> Self {
        Self {
            question: question.into(),
            mode,
            method,
            seed: None,
            language: None,
        }
    }

    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Use a specific language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// A divination session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque unique id.
    pub id: String,
    /// The question being asked.
    pub question: String,
    /// Who performs the cast.
    pub mode: Mode,
    /// Liuyao or tarot.
    pub method: Method,
    /// Seed for AI-mode generation.
    pub seed: String,
    /// Display language.
    pub language: Language,
    /// Lifecycle status.
    pub status: Status,
    /// Generated result.
    pub result: Option<DivinationResult>,
    /// Interpretation, set only once a result exists.
    pub interpretation: Option<DivinationInterpretation>,
    /// Whether the interpretation came from the model or the fallback.
    pub interpretation_source: Option<InterpretationSource>,
    /// Manual step log, in submission order.
    pub manual_steps: Vec<ManualStep>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time the interpretation was stored.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Steps recorded so far.
    pub fn current_step(&self) -> usize {
        self.manual_steps.len()
    }

    /// Steps the method needs.
    pub fn total_steps(&self) -> usize {
        self.method.required_steps()
    }

    /// Whether every manual step has been recorded.
    pub fn steps_complete(&self) -> bool {
        self.current_step() >= self.total_steps()
    }

    /// Card ids drawn so far.
    pub fn drawn_cards(&self) -> Vec<u8> {
        self.manual_steps
            .iter()
            .filter_map(|s| match s.payload {
                StepPayload::CardDraw(d) => Some(d.card_id),
                StepPayload::CoinToss { .. } => None,
            })
            .collect()
    }

    /// The step log as generator input.
    pub fn raw_input(&self) -> RawInput {
        match self.method {
            Method::Liuyao => RawInput::Tosses(
                self.manual_steps
                    .iter()
                    .filter_map(|s| match s.payload {
                        StepPayload::CoinToss { coins } => Some(coins),
                        StepPayload::CardDraw(_) => None,
                    })
                    .collect(),
            ),
            Method::Tarot => RawInput::Draws(
                self.manual_steps
                    .iter()
                    .filter_map(|s| match s.payload {
                        StepPayload::CardDraw(d) => Some(d),
                        StepPayload::CoinToss { .. } => None,
                    })
                    .collect(),
            ),
        }
    }

    /// Preview of the steps recorded so far.
    pub fn partial_result(&self) -> CastResult<PartialResult> {
        Ok(match self.raw_input() {
            RawInput::Tosses(coins) => PartialResult::Tosses(
                coins
                    .into_iter()
                    .map(CoinToss::from_coins)
                    .collect::<CastResult<_>>()?,
            ),
            RawInput::Draws(draws) => PartialResult::Draws(
                draws
                    .into_iter()
                    .map(|d| draw_card(d.card_id, d.position, d.is_upright, self.language))
                    .collect::<CastResult<_>>()?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use yarrow_core::SpreadPosition;

    use super::*;

    fn session(method: Method) -> Session {
        Session {
            id: "s-1".to_string(),
            question: "q".to_string(),
            mode: Mode::Manual,
            method,
            seed: "seed".to_string(),
            language: Language::Zh,
            status: Status::InProgress,
            result: None,
            interpretation: None,
            interpretation_source: None,
            manual_steps: Vec::new(),
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    fn step(step_number: usize, payload: StepPayload) -> ManualStep {
        ManualStep {
            step_number,
            payload,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn step_payload_wire_shape() {
        let toss = StepPayload::CoinToss { coins: [2, 3, 3] };
        let value = serde_json::to_value(toss).unwrap();
        assert_eq!(value["action"], "coin_toss");
        assert_eq!(value["data"]["coins"], serde_json::json!([2, 3, 3]));

        let draw = StepPayload::CardDraw(ManualDraw {
            card_id: 10,
            position: SpreadPosition::Present,
            is_upright: false,
        });
        let value = serde_json::to_value(draw).unwrap();
        assert_eq!(value["action"], "card_draw");
        assert_eq!(value["data"]["position"], "present");
    }

    #[test]
    fn partial_tosses() {
        let mut s = session(Method::Liuyao);
        s.manual_steps.push(step(1, StepPayload::CoinToss { coins: [2, 2, 2] }));
        s.manual_steps.push(step(2, StepPayload::CoinToss { coins: [3, 3, 2] }));
        match s.partial_result().unwrap() {
            PartialResult::Tosses(t) => {
                assert_eq!(t.len(), 2);
                assert!(t[0].is_changing());
                assert_eq!(t[1].sum(), 8);
            }
            PartialResult::Draws(_) => panic!("expected tosses"),
        }
        assert!(!s.steps_complete());
    }

    #[test]
    fn partial_draws_and_drawn_cards() {
        let mut s = session(Method::Tarot);
        s.manual_steps.push(step(
            1,
            StepPayload::CardDraw(ManualDraw {
                card_id: 0,
                position: SpreadPosition::Past,
                is_upright: true,
            }),
        ));
        assert_eq!(s.drawn_cards(), vec![0]);
        let partial = s.partial_result().unwrap();
        assert_eq!(partial.len(), 1);
        let value = serde_json::to_value(&partial).unwrap();
        assert_eq!(value["draws"][0]["card"]["name"], "愚者");
    }

    #[test]
    fn session_roundtrips_through_json() {
        let mut s = session(Method::Liuyao);
        s.manual_steps.push(step(1, StepPayload::CoinToss { coins: [3, 3, 3] }));
        s.result = Some(
            yarrow_core::generate_from_seed(Method::Liuyao, "abc", Language::Zh).unwrap(),
        );
        let json = serde_json::to_string(&s).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert!(json.contains("\"status\":\"in_progress\""));
    }
}
