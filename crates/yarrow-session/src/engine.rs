//! The session state machine.
//!
//! Mutating operations on one session are serialized through a per-id async
//! mutex; operations on different sessions never contend. The LLM call is
//! the only suspension point that can take long.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};
use uuid::Uuid;
use yarrow_core::cast::spread::validate_manual_draw;
use yarrow_core::{CoinToss, Mode, generate_from_raw, generate_from_seed};
use yarrow_interpret::Interpreter;

use crate::config::EngineConfig;
use crate::error::{SessionError, SessionResult};
use crate::seed::generate_seed;
use crate::session::{ManualStep, NewSession, Session, Status, StepOutcome, StepPayload};
use crate::store::{SessionStore, SessionUpdate};

/// Drives sessions through their lifecycle.
pub struct SessionEngine {
    store: Arc<dyn SessionStore>,
    interpreter: Interpreter,
    config: EngineConfig,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SessionEngine {
    /// Create an engine over a store and an interpretation pipeline.
    pub fn new(store: Arc<dyn SessionStore>, interpreter: Interpreter, config: EngineConfig) -> Self {
        Self {
            store,
            interpreter,
            config,
            locks: DashMap::new(),
        }
    }

    /// Serialize mutations on one session. The map entry is dropped again
    /// once no caller holds or waits on it.
    async fn lock_session(&self, id: &str) -> SessionGuard<'_> {
        let lock = self.locks.entry(id.to_string()).or_default().clone();
        let guard = lock.lock_owned().await;
        SessionGuard {
            locks: &self.locks,
            id: id.to_string(),
            guard: Some(guard),
        }
    }

    async fn load(&self, id: &str) -> SessionResult<Session> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    async fn apply(&self, id: &str, update: SessionUpdate) -> SessionResult<()> {
        if self.store.update(id, update).await? {
            Ok(())
        } else {
            Err(SessionError::NotFound(id.to_string()))
        }
    }

    /// Mark a session failed and hand back the error that caused it.
    async fn fail(&self, id: &str, error: SessionError) -> SessionError {
        warn!(session_id = %id, error = %error, "session failed");
        if let Err(e) = self.store.update(id, SessionUpdate::status(Status::Failed)).await {
            warn!(session_id = %id, error = %e, "could not record failure");
        }
        error
    }

    /// Open a `pending` session. Nothing is generated yet.
    pub async fn create(&self, request: NewSession) -> SessionResult<Session> {
        let question = request.question.trim().to_string();
        if question.is_empty() {
            return Err(SessionError::EmptyQuestion);
        }

        let seed = request.seed.unwrap_or_else(|| generate_seed(&question));
        let session = Session {
            id: Uuid::new_v4().to_string(),
            question,
            mode: request.mode,
            method: request.method,
            seed,
            language: request.language.unwrap_or(self.config.default_language),
            status: Status::Pending,
            result: None,
            interpretation: None,
            interpretation_source: None,
            manual_steps: Vec::new(),
            created_at: Utc::now(),
            completed_at: None,
        };
        self.store.create(&session).await?;

        info!(
            session_id = %session.id,
            mode = %session.mode,
            method = %session.method,
            "session created"
        );
        Ok(session)
    }

    /// Generate and interpret an AI-mode session in one call.
    ///
    /// Valid only from `pending`. A generation failure leaves the session
    /// `failed`; an unreachable LLM does not.
    pub async fn generate(&self, id: &str) -> SessionResult<Session> {
        let _guard = self.lock_session(id).await;

        let session = self.load(id).await?;
        if session.mode != Mode::Ai {
            return Err(SessionError::InvalidState(
                "generate is only for AI mode".to_string(),
            ));
        }
        if session.status != Status::Pending {
            return Err(SessionError::InvalidState(format!(
                "session status is {}, expected pending",
                session.status
            )));
        }

        self.apply(id, SessionUpdate::status(Status::InProgress)).await?;
        info!(session_id = %id, "generating");

        let result = match generate_from_seed(session.method, &session.seed, session.language) {
            Ok(result) => result,
            Err(e) => return Err(self.fail(id, e.into()).await),
        };

        let outcome = self
            .interpreter
            .interpret(&session.question, session.mode, &result, session.language)
            .await;

        let update = SessionUpdate::status(Status::Completed)
            .with_result(result)
            .with_interpretation(outcome.interpretation, outcome.source, Utc::now());
        if let Err(e) = self.apply(id, update).await {
            return Err(self.fail(id, e).await);
        }

        info!(session_id = %id, "session completed");
        self.load(id).await
    }

    /// Record one manual step.
    ///
    /// Step numbers at or below the recorded count are replays and change
    /// nothing. Every reply carries the current preview.
    pub async fn submit_step(
        &self,
        id: &str,
        step_number: usize,
        payload: StepPayload,
    ) -> SessionResult<StepOutcome> {
        let _guard = self.lock_session(id).await;

        let session = self.load(id).await?;
        if session.mode != Mode::Manual {
            return Err(SessionError::InvalidState(
                "steps are only accepted in manual mode".to_string(),
            ));
        }
        if session.status == Status::Failed {
            return Err(SessionError::InvalidState("session has failed".to_string()));
        }

        let total = session.total_steps();
        if step_number == 0 {
            return Err(SessionError::InvalidStep("step numbers start at 1".to_string()));
        }
        if step_number > total {
            return Err(SessionError::StepOutOfRange {
                step: step_number,
                total,
            });
        }

        let current = session.current_step();
        if step_number <= current {
            debug!(session_id = %id, step_number, current, "step already recorded");
            return outcome(&session);
        }
        if step_number > current + 1 {
            return Err(SessionError::OutOfOrderStep {
                expected: current + 1,
                got: step_number,
            });
        }

        if payload.method() != session.method {
            return Err(SessionError::InvalidStep(format!(
                "{} is not a {} step",
                payload.action(),
                session.method
            )));
        }
        match payload {
            StepPayload::CoinToss { coins } => {
                CoinToss::from_coins(coins)?;
            }
            StepPayload::CardDraw(draw) => {
                validate_manual_draw(current, &draw, &session.drawn_cards())?;
            }
        }

        let mut updated = session;
        updated.manual_steps.push(ManualStep {
            step_number,
            payload,
            timestamp: Utc::now(),
        });
        updated.status = if updated.steps_complete() {
            Status::Completed
        } else {
            Status::InProgress
        };

        let update = SessionUpdate::status(updated.status).with_steps(updated.manual_steps.clone());
        self.apply(id, update).await?;

        info!(
            session_id = %id,
            step_number,
            total,
            action = payload.action(),
            "step recorded"
        );
        outcome(&updated)
    }

    /// Interpret a session, resolving manual steps into a result first.
    ///
    /// Returns the stored interpretation unchanged if one exists.
    pub async fn interpret(&self, id: &str) -> SessionResult<Session> {
        let _guard = self.lock_session(id).await;

        let session = self.load(id).await?;
        if session.interpretation.is_some() {
            debug!(session_id = %id, "interpretation already stored");
            return Ok(session);
        }
        if session.status == Status::Failed {
            return Err(SessionError::InvalidState("session has failed".to_string()));
        }

        let result = match session.mode {
            Mode::Manual => {
                if !session.steps_complete() {
                    return Err(SessionError::StepsIncomplete {
                        current: session.current_step(),
                        required: session.total_steps(),
                    });
                }
                let result =
                    generate_from_raw(session.method, &session.raw_input(), session.language)?;
                self.apply(id, SessionUpdate::default().with_result(result.clone()))
                    .await?;
                result
            }
            Mode::Ai => session.result.clone().ok_or_else(|| {
                SessionError::InvalidState("no result yet; generate first".to_string())
            })?,
        };

        let outcome = self
            .interpreter
            .interpret(&session.question, session.mode, &result, session.language)
            .await;
        let update = SessionUpdate::status(Status::Completed).with_interpretation(
            outcome.interpretation,
            outcome.source,
            Utc::now(),
        );
        self.apply(id, update).await?;

        info!(session_id = %id, "session interpreted");
        self.load(id).await
    }

    /// Load a session for display or replay.
    pub async fn get(&self, id: &str) -> SessionResult<Session> {
        self.load(id).await
    }

    /// Most recently created sessions first.
    pub async fn list_recent(&self, limit: usize) -> SessionResult<Vec<Session>> {
        Ok(self.store.list_recent(limit).await?)
    }
}

struct SessionGuard<'a> {
    locks: &'a DashMap<String, Arc<Mutex<()>>>,
    id: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        // Only the map's own handle left: nobody holds or awaits this lock.
        self.locks
            .remove_if(&self.id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

fn outcome(session: &Session) -> SessionResult<StepOutcome> {
    Ok(StepOutcome {
        session_id: session.id.clone(),
        current_step: session.current_step(),
        total_steps: session.total_steps(),
        is_complete: session.steps_complete(),
        partial_result: session.partial_result()?,
    })
}
