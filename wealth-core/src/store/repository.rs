use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    EmploymentInterval, EmploymentRecord, IntervalError, IntervalPatch, NewEmploymentRecord,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record {0} not found")]
    NotFound(i64),

    #[error("Invalid interval: {0}")]
    InvalidInterval(#[from] IntervalError),
}

/// Session-scoped holder of a prospect's employment records.
///
/// Records are never deleted in place; edits go through [`RecordStore::update`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Validates and stores a record, assigning its id and timestamp.
    async fn add(&self, record: NewEmploymentRecord) -> Result<EmploymentRecord, StoreError>;

    /// Applies a partial update; the resulting interval must still validate.
    async fn update(
        &self,
        id: i64,
        patch: IntervalPatch,
    ) -> Result<EmploymentRecord, StoreError>;

    async fn get(&self, id: i64) -> Result<EmploymentRecord, StoreError>;

    /// All records, ordered by start year (ties by id).
    async fn list(&self) -> Result<Vec<EmploymentRecord>, StoreError>;

    /// The stored intervals in [`RecordStore::list`] order, ready for projection.
    async fn intervals(&self) -> Result<Vec<EmploymentInterval>, StoreError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|record| record.interval)
            .collect())
    }
}
