//! Claims store: maps user identities to the claims embedded in tokens

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::identity::IdentityRecord;
use crate::errors::AuthError;

/// Lookup interface over provisioned identities
///
/// Provisioning is external to this service; issuance only reads. The
/// trait is async so that backing stores with a network round-trip can
/// implement it without changing callers.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Finds a provisioned identity by its user ID
    ///
    /// # Returns
    ///
    /// * `Ok(Some(record))` - The identity is provisioned
    /// * `Ok(None)` - No record for this user ID
    /// * `Err(AuthError)` - The store failed
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<IdentityRecord>, AuthError>;
}

/// In-memory claims store
///
/// The default backing store: the core assumes no external store
/// round-trip, so lookups resolve against a process-local map.
pub struct InMemoryIdentityRepository {
    records: RwLock<HashMap<String, IdentityRecord>>,
}

impl InMemoryIdentityRepository {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store seeded with the given records
    pub fn with_records(records: Vec<IdentityRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.user_id.clone(), r))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Inserts or replaces a record
    pub async fn insert(&self, record: IdentityRecord) {
        let mut records = self.records.write().await;
        records.insert(record.user_id.clone(), record);
    }

    /// Number of provisioned identities
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no identities
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemoryIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<IdentityRecord>, AuthError> {
        let records = self.records.read().await;
        Ok(records.get(user_id).cloned())
    }
}
