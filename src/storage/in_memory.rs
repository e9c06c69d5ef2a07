//! In-memory implementation of RecordService

use crate::core::{Record, RecordService, error::StoreError};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory record service implementation
///
/// Records live in an `IndexMap` keyed by their natural key, so `list`
/// preserves insertion order. Uses RwLock for thread-safe access; the
/// store assumes one in-process session, the lock only satisfies the
/// service seam's `Send + Sync` bound.
#[derive(Clone)]
pub struct InMemoryRecordService<T: Record> {
    records: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Record> InMemoryRecordService<T> {
    /// Create a new in-memory record service
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl<T: Record> Default for InMemoryRecordService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordService<T> for InMemoryRecordService<T> {
    async fn create(&self, record: T) -> Result<T, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire write lock: {}", e)))?;

        let key = record.key().to_string();
        if records.contains_key(&key) {
            return Err(StoreError::duplicate_key(T::resource_name_singular(), key));
        }

        records.insert(key, record.clone());

        Ok(record)
    }

    async fn get(&self, key: &str) -> Result<Option<T>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.get(key).cloned())
    }

    async fn list(&self) -> Result<Vec<T>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.values().cloned().collect())
    }

    async fn update(&self, key: &str, record: T) -> Result<T, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire write lock: {}", e)))?;

        let slot = records
            .get_mut(key)
            .ok_or_else(|| StoreError::not_found(T::resource_name_singular(), key))?;

        *slot = record.clone();

        Ok(record)
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire write lock: {}", e)))?;

        // shift_remove keeps the remaining records in insertion order
        records
            .shift_remove(key)
            .ok_or_else(|| StoreError::not_found(T::resource_name_singular(), key))?;

        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;
    use chrono::NaiveDate;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    fn item(name: &str, qty: u32) -> Item {
        Item::new(name, qty, 1.0, due()).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = InMemoryRecordService::new();

        service.create(item("Apples", 3)).await.unwrap();

        let retrieved = service.get("Apples").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn test_create_duplicate_key_fails() {
        let service = InMemoryRecordService::new();

        service.create(item("Apples", 3)).await.unwrap();
        let result = service.create(item("Apples", 7)).await;

        assert!(matches!(result, Err(StoreError::DuplicateKey { .. })));
        // Original untouched
        assert_eq!(service.get("Apples").await.unwrap().unwrap().quantity, 3);
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent_returns_none() {
        let service: InMemoryRecordService<Item> = InMemoryRecordService::new();
        assert!(service.get("Missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let service = InMemoryRecordService::new();

        service.create(item("Carrots", 10)).await.unwrap();
        service.create(item("Apples", 3)).await.unwrap();
        service.create(item("Bananas", 150)).await.unwrap();

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Carrots", "Apples", "Bananas"]);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let service = InMemoryRecordService::new();
        service.create(item("Apples", 3)).await.unwrap();

        let mut updated = service.get("Apples").await.unwrap().unwrap();
        updated.apply_update(20, 0.6, due()).unwrap();
        service.update("Apples", updated).await.unwrap();

        assert_eq!(service.get("Apples").await.unwrap().unwrap().quantity, 20);
    }

    #[tokio::test]
    async fn test_update_nonexistent_fails() {
        let service = InMemoryRecordService::new();
        let result = service.update("Missing", item("Missing", 1)).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let service = InMemoryRecordService::new();
        service.create(item("Apples", 3)).await.unwrap();

        service.delete("Apples").await.unwrap();

        assert!(service.get("Apples").await.unwrap().is_none());
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_fails() {
        let service: InMemoryRecordService<Item> = InMemoryRecordService::new();
        let result = service.delete("Missing").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_keeps_order_of_rest() {
        let service = InMemoryRecordService::new();
        service.create(item("A", 1)).await.unwrap();
        service.create(item("B", 2)).await.unwrap();
        service.create(item("C", 3)).await.unwrap();

        service.delete("B").await.unwrap();

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
