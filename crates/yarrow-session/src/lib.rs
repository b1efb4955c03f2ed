//! Divination sessions for yarrow.
//!
//! A session moves `pending → in_progress → completed | failed`. AI-mode
//! sessions are generated from their seed in one call; manual-mode sessions
//! accumulate caller-reported tosses or draws step by step and are resolved
//! when interpretation is requested.

pub mod config;
pub mod engine;
pub mod error;
pub mod seed;
pub mod session;
pub mod store;

pub use config::EngineConfig;
pub use engine::SessionEngine;
pub use error::{SessionError, SessionResult};
pub use session::{
    ManualStep, NewSession, PartialResult, Session, Status, StepOutcome, StepPayload,
};
pub use store::{InMemorySessionStore, SessionStore, SessionUpdate, StoreError};
