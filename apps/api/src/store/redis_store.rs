use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::profile::Profile;
use crate::store::{decode, encode, slot_key, ProfileStore, StoreError};

/// Redis-backed store. One string key per session slot, no expiry.
#[derive(Clone)]
pub struct RedisProfileStore {
    conn: MultiplexedConnection,
}

impl RedisProfileStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Redis profile store connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl ProfileStore for RedisProfileStore {
    async fn get(&self, session: Uuid) -> Result<Option<Profile>, StoreError> {
        let key = slot_key(session);
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(&key).await?;
        raw.map(|raw| decode(&key, &raw)).transpose()
    }

    async fn set(&self, session: Uuid, profile: &Profile) -> Result<(), StoreError> {
        let key = slot_key(session);
        let raw = encode(profile)?;
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(&key, raw).await?;
        debug!("Wrote profile slot {key}");
        Ok(())
    }

    async fn clear(&self, session: Uuid) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(slot_key(session)).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
