/// Profile store — the single "last write wins" slot holding a session's profile.
///
/// Capture and display go through `ProfileStore`; the roadmap resolver never
/// touches it. `AppState` carries an `Arc<dyn ProfileStore>`, picked at startup
/// (Redis when `REDIS_URL` is set, in-memory otherwise).
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::profile::Profile;

pub mod memory;
pub mod redis_store;

pub use memory::MemoryProfileStore;
pub use redis_store::RedisProfileStore;

/// Name of the slot the profile is stored under.
pub const PROFILE_SLOT: &str = "userSelection";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Slot {key} holds an unreadable profile: {reason}")]
    Corrupt { key: String, reason: String },
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns `None` when nothing has been captured for the session yet.
    async fn get(&self, session: Uuid) -> Result<Option<Profile>, StoreError>;

    /// Overwrites the slot wholesale.
    async fn set(&self, session: Uuid, profile: &Profile) -> Result<(), StoreError>;

    async fn clear(&self, session: Uuid) -> Result<(), StoreError>;

    /// Backend name for logs and `/health`.
    fn backend(&self) -> &'static str;
}

/// Key of the profile slot for one session.
pub fn slot_key(session: Uuid) -> String {
    format!("careerpath:{session}:{PROFILE_SLOT}")
}

pub(crate) fn encode(profile: &Profile) -> Result<String, StoreError> {
    Ok(serde_json::to_string(profile)?)
}

pub(crate) fn decode(key: &str, raw: &str) -> Result<Profile, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Corrupt {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_key_is_scoped_per_session() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_ne!(slot_key(a), slot_key(b));
        assert!(slot_key(a).ends_with(":userSelection"));
    }

    #[test]
    fn test_encoded_slot_is_plain_profile_json() {
        let raw = encode(&Profile::new("12th", "Hospitality")).unwrap();
        assert_eq!(raw, r#"{"qualification":"12th","interest":"Hospitality"}"#);
    }

    #[test]
    fn test_decode_rejects_partial_profile() {
        let err = decode("k", r#"{"qualification":"12th"}"#).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
