//! Record trait defining the core abstraction for all stored entity types

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for every record held by the store.
///
/// All records have:
/// - id: Unique instance identifier
/// - key: Natural identifier used for lookups (item name, customer contact, ...)
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
///
/// Records are append/update/delete only: there is no soft deletion and no
/// versioning. A delete removes the record outright.
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name used in messages and reports (e.g., "items")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "item")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record instance
    fn id(&self) -> Uuid;

    /// Get the natural key this record is looked up by
    fn key(&self) -> &str;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Bump the update timestamp after an in-place mutation
    fn touch(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Example record for testing the trait definition
    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct TestRecord {
        id: Uuid,
        code: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    impl Record for TestRecord {
        fn resource_name() -> &'static str {
            "test_records"
        }

        fn resource_name_singular() -> &'static str {
            "test_record"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn key(&self) -> &str {
            &self.code
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn updated_at(&self) -> DateTime<Utc> {
            self.updated_at
        }

        fn touch(&mut self) {
            self.updated_at = Utc::now();
        }
    }

    #[test]
    fn test_record_metadata() {
        assert_eq!(TestRecord::resource_name(), "test_records");
        assert_eq!(TestRecord::resource_name_singular(), "test_record");
    }

    #[test]
    fn test_touch_bumps_updated_at() {
        let now = Utc::now();
        let mut record = TestRecord {
            id: Uuid::new_v4(),
            code: "r-1".to_string(),
            created_at: now,
            updated_at: now,
        };

        record.touch();
        assert!(record.updated_at() >= record.created_at());
        assert_eq!(record.key(), "r-1");
    }
}
