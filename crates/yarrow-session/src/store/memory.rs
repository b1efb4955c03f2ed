//! In-memory session store for development and testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{SessionStore, SessionUpdate, StoreError};
use crate::session::Session;

/// Session store backed by a map behind a lock.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: &Session) -> Result<(), StoreError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        if sessions.contains_key(&session.id) {
            return Err(StoreError::Duplicate(session.id.clone()));
        }
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Session>, StoreError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        Ok(sessions.get(id).cloned())
    }

    async fn update(&self, id: &str, update: SessionUpdate) -> Result<bool, StoreError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        match sessions.get_mut(id) {
            Some(session) => {
                update.apply(session);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Session>, StoreError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        let mut recent: Vec<Session> = sessions.values().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        recent.truncate(limit);
        Ok(recent)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use yarrow_core::{Language, Method, Mode};

    use super::*;
    use crate::session::Status;

    fn session(id: &str, minutes_ago: i64) -> Session {
        Session {
            id: id.to_string(),
            question: "q".to_string(),
            mode: Mode::Ai,
            method: Method::Liuyao,
            seed: "s".to_string(),
            language: Language::Zh,
            status: Status::Pending,
            result: None,
            interpretation: None,
            interpretation_source: None,
            manual_steps: Vec::new(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            completed_at: None,
        }
    }

    #[tokio::test]
    async fn create_and_get() {
        let store = InMemorySessionStore::new();
        store.create(&session("a", 0)).await.unwrap();
        assert_eq!(store.get("a").await.unwrap().unwrap().id, "a");
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_create_is_rejected() {
        let store = InMemorySessionStore::new();
        store.create(&session("a", 0)).await.unwrap();
        assert!(matches!(
            store.create(&session("a", 0)).await,
            Err(StoreError::Duplicate(id)) if id == "a"
        ));
    }

    #[tokio::test]
    async fn update_applies_only_set_fields() {
        let store = InMemorySessionStore::new();
        store.create(&session("a", 0)).await.unwrap();

        let applied = store
            .update("a", SessionUpdate::status(Status::InProgress))
            .await
            .unwrap();
        assert!(applied);
        let s = store.get("a").await.unwrap().unwrap();
        assert_eq!(s.status, Status::InProgress);
        assert!(s.result.is_none());

        assert!(!store
            .update("missing", SessionUpdate::status(Status::Failed))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn list_recent_is_newest_first() {
        let store = InMemorySessionStore::new();
        store.create(&session("old", 30)).await.unwrap();
        store.create(&session("new", 1)).await.unwrap();
        store.create(&session("mid", 10)).await.unwrap();

        let ids: Vec<String> = store
            .list_recent(2)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["new", "mid"]);
    }
}
