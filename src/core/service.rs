//! Service trait for record storage backends

use crate::core::{Record, error::StoreError};
use async_trait::async_trait;

/// Service trait for managing records of one entity type
///
/// Implementations provide CRUD operations keyed by the record's natural
/// key. The store facade is agnostic to the underlying storage mechanism;
/// only an in-memory implementation ships with the crate, and a backend
/// with real persistence would plug in at this seam.
#[async_trait]
pub trait RecordService<T: Record>: Send + Sync {
    /// Create a new record; fails with `DuplicateKey` if the key is taken
    async fn create(&self, record: T) -> Result<T, StoreError>;

    /// Get a record by its natural key
    async fn get(&self, key: &str) -> Result<Option<T>, StoreError>;

    /// List all records in insertion order
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    /// Replace an existing record; fails with `NotFound` if the key is absent
    async fn update(&self, key: &str, record: T) -> Result<T, StoreError>;

    /// Delete a record; fails with `NotFound` if the key is absent
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Number of stored records
    async fn count(&self) -> Result<usize, StoreError>;
}
