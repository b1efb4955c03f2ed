//! Record store contract.
//!
//! The store exclusively owns persisted session state. The engine reads
//! whole records and writes partial updates; an update that reports `false`
//! means the record vanished and is treated as not found.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use yarrow_core::DivinationResult;
use yarrow_interpret::{DivinationInterpretation, InterpretationSource};

use crate::session::{ManualStep, Session, Status};

pub use memory::InMemorySessionStore;

/// Errors raised by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this id already exists.
    #[error("session already exists: {0}")]
    Duplicate(String),

    /// Backend failure.
    #[error("store error: {0}")]
    Internal(String),
}

/// A partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUpdate {
    /// New status.
    pub status: Option<Status>,
    /// Generated result.
    pub result: Option<DivinationResult>,
    /// Interpretation payload.
    pub interpretation: Option<DivinationInterpretation>,
    /// Where the interpretation came from.
    pub interpretation_source: Option<InterpretationSource>,
    /// Replacement step log.
    pub manual_steps: Option<Vec<ManualStep>>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

impl SessionUpdate {
    /// An update that only changes status.
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Also store a result.
    pub fn with_result(mut self, result: DivinationResult) -> Self {
        self.result = Some(result);
        self
    }

    /// Also store an interpretation and its source, stamping completion.
    pub fn with_interpretation(
        mut self,
        interpretation: DivinationInterpretation,
        source: InterpretationSource,
        at: DateTime<Utc>,
    ) -> Self {
        self.interpretation = Some(interpretation);
        self.interpretation_source = Some(source);
        self.completed_at = Some(at);
        self
    }

    /// Also replace the step log.
    pub fn with_steps(mut self, steps: Vec<ManualStep>) -> Self {
        self.manual_steps = Some(steps);
        self
    }

    /// Apply to a record in place.
    pub fn apply(self, session: &mut Session) {
        if let Some(status) = self.status {
            session.status = status;
        }
        if let Some(result) = self.result {
            session.result = Some(result);
        }
        if let Some(interpretation) = self.interpretation {
            session.interpretation = Some(interpretation);
        }
        if let Some(source) = self.interpretation_source {
            session.interpretation_source = Some(source);
        }
        if let Some(steps) = self.manual_steps {
            session.manual_steps = steps;
        }
        if let Some(at) = self.completed_at {
            session.completed_at = Some(at);
        }
    }
}

/// Async interface for session persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new record.
    async fn create(&self, session: &Session) -> Result<(), StoreError>;

    /// Load a record by id.
    async fn get(&self, id: &str) -> Result<Option<Session>, StoreError>;

    /// Apply a partial update. Returns `false` if the record does not exist.
    async fn update(&self, id: &str, update: SessionUpdate) -> Result<bool, StoreError>;

    /// Most recently created records first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Session>, StoreError>;
}
