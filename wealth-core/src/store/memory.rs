//! In-memory [`RecordStore`] for a single session.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::repository::{RecordStore, StoreError};
use crate::calculations::common::current_calendar_year;
use crate::models::{EmploymentRecord, IntervalPatch, NewEmploymentRecord};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    records: Vec<EmploymentRecord>,
}

/// Keeps records in memory, sorted by start year. Nothing outlives the store.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
    evaluation_year: Option<i32>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates start years against `year` instead of the clock.
    pub fn with_evaluation_year(year: i32) -> Self {
        Self {
            evaluation_year: Some(year),
            ..Self::default()
        }
    }

    fn current_year(&self) -> i32 {
        self.evaluation_year
            .unwrap_or_else(current_calendar_year)
    }
}

fn sort_records(records: &mut [EmploymentRecord]) {
    records.sort_by_key(|r| (r.interval.start_year, r.id));
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn add(&self, record: NewEmploymentRecord) -> Result<EmploymentRecord, StoreError> {
        record.interval.validate(self.current_year())?;

        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let stored = EmploymentRecord {
            id: inner.next_id,
            interval: record.interval,
            source: record.source,
            confidence: record.confidence,
            reasoning: record.reasoning,
            location: record.location,
            needs_review: record.needs_review,
            created_at: Utc::now(),
        };

        debug!(
            id = stored.id,
            company = %stored.interval.company,
            start_year = stored.interval.start_year,
            "added employment record"
        );

        inner.records.push(stored.clone());
        sort_records(&mut inner.records);
        Ok(stored)
    }

    async fn update(
        &self,
        id: i64,
        patch: IntervalPatch,
    ) -> Result<EmploymentRecord, StoreError> {
        let current_year = self.current_year();
        let mut inner = self.inner.write().await;

        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let patched = patch.applied_to(&record.interval);
        patched.validate(current_year)?;
        record.interval = patched;
        let updated = record.clone();

        sort_records(&mut inner.records);
        debug!(id, "updated employment record");
        Ok(updated)
    }

    async fn get(&self, id: i64) -> Result<EmploymentRecord, StoreError> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<EmploymentRecord>, StoreError> {
        Ok(self.inner.read().await.records.clone())
    }
}
