use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::profile::Profile;
use crate::store::{decode, encode, slot_key, ProfileStore, StoreError};

/// In-process store. Holds the same JSON text a durable backend would, so a
/// slot behaves identically whichever backend is configured.
///
/// Unbounded: every session id ever written keeps its slot until cleared or
/// the process exits. Meant for development and tests; use Redis in production.
#[derive(Default)]
pub struct MemoryProfileStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn put_raw(&self, session: Uuid, raw: &str) {
        self.slots
            .write()
            .await
            .insert(slot_key(session), raw.to_string());
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get(&self, session: Uuid) -> Result<Option<Profile>, StoreError> {
        let key = slot_key(session);
        let slots = self.slots.read().await;
        let profile = slots.get(&key).map(|raw| decode(&key, raw)).transpose();
        profile
    }

    async fn set(&self, session: Uuid, profile: &Profile) -> Result<(), StoreError> {
        let raw = encode(profile)?;
        let key = slot_key(session);
        debug!("Writing profile slot {key}");
        self.slots.write().await.insert(key, raw);
        Ok(())
    }

    async fn clear(&self, session: Uuid) -> Result<(), StoreError> {
        self.slots.write().await.remove(&slot_key(session));
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_slot_is_none() {
        let store = MemoryProfileStore::new();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryProfileStore::new();
        let session = Uuid::new_v4();
        let profile = Profile::new("Diploma", "Finance");

        store.set(session, &profile).await.unwrap();
        assert_eq!(store.get(session).await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MemoryProfileStore::new();
        let session = Uuid::new_v4();
        store
            .set(session, &Profile::new("10th", "Technology"))
            .await
            .unwrap();
        store
            .set(session, &Profile::new("Graduate", "Healthcare"))
            .await
            .unwrap();

        let stored = store.get(session).await.unwrap().unwrap();
        assert_eq!(stored, Profile::new("Graduate", "Healthcare"));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = MemoryProfileStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.set(a, &Profile::new("ITI", "Mechanical")).await.unwrap();

        assert!(store.get(b).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_removes_slot() {
        let store = MemoryProfileStore::new();
        let session = Uuid::new_v4();
        store.set(session, &Profile::new("12th", "Finance")).await.unwrap();
        store.clear(session).await.unwrap();
        assert!(store.get(session).await.unwrap().is_none());

        // clearing an empty slot is fine
        store.clear(session).await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_slot_surfaces_error() {
        let store = MemoryProfileStore::new();
        let session = Uuid::new_v4();
        store.put_raw(session, "not json").await;

        let err = store.get(session).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
