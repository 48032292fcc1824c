//! The mock user API handle.

use crate::config::MockApiConfig;
use crate::error::{ApiError, Result};
use crate::types::{DeleteConfirmation, NewUser, UserId, UserRecord, seed_users};
use composable_state_core::environment::{IdGenerator, MonotonicIds};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Shared, latency-simulating user record store.
///
/// Cloning is cheap and every clone operates on the same records. Each
/// operation sleeps for its configured latency first and then applies its
/// read or mutation atomically under the lock, so concurrent calls never
/// observe a half-applied change.
#[derive(Clone)]
pub struct MockUserApi {
    records: Arc<RwLock<Vec<UserRecord>>>,
    ids: Arc<dyn IdGenerator>,
    config: MockApiConfig,
}

impl std::fmt::Debug for MockUserApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockUserApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MockUserApi {
    /// A store holding the four seed users with default latencies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockApiConfig::default())
    }

    /// A store holding the four seed users with custom latencies.
    #[must_use]
    pub fn with_config(config: MockApiConfig) -> Self {
        let records = seed_users();
        let floor = records.iter().map(|u| u.id).max().unwrap_or(0);
        Self::from_parts(records, config, Arc::new(MonotonicIds::starting_after(floor)))
    }

    /// A store with explicit contents and id source.
    ///
    /// Ids drawn from `ids` that are already taken are skipped, so a
    /// generator that overlaps existing records is still safe to use.
    #[must_use]
    pub fn from_parts(
        records: Vec<UserRecord>,
        config: MockApiConfig,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            ids,
            config,
        }
    }

    /// Latency settings in effect.
    #[must_use]
    pub const fn config(&self) -> &MockApiConfig {
        &self.config
    }

    /// Every record, in insertion order.
    pub async fn list_all(&self) -> Vec<UserRecord> {
        simulate_latency(self.config.list_latency).await;

        let records = self.records.read().await;
        tracing::debug!(count = records.len(), "Listed users");
        records.clone()
    }

    /// The record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no record has that id.
    pub async fn get_by_id(&self, id: UserId) -> Result<UserRecord> {
        simulate_latency(self.config.get_latency).await;

        self.records
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(ApiError::NotFound { id })
    }

    /// Append a new record with a freshly assigned id.
    pub async fn create(&self, fields: NewUser) -> UserRecord {
        simulate_latency(self.config.create_latency).await;

        let mut records = self.records.write().await;
        let id = loop {
            let candidate = self.ids.next_id();
            if records.iter().all(|u| u.id != candidate) {
                break candidate;
            }
        };

        let record = UserRecord::from_new(id, fields);
        records.push(record.clone());
        tracing::info!(id, name = %record.name, total = records.len(), "Created user");
        record
    }

    /// Remove the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no record has that id; the store is
    /// left untouched.
    pub async fn delete(&self, id: UserId) -> Result<DeleteConfirmation> {
        simulate_latency(self.config.delete_latency).await;

        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|u| u.id == id) else {
            tracing::debug!(id, "Delete of unknown user");
            return Err(ApiError::NotFound { id });
        };

        records.remove(index);
        tracing::info!(id, total = records.len(), "Deleted user");
        Ok(DeleteConfirmation::new(id))
    }

    /// Number of records, without simulated latency.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records, without simulated latency.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for MockUserApi {
    fn default() -> Self {
        Self::new()
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
