//! Wiring between the CSV loaders, the record store and the report.

use rust_decimal::Decimal;
use tracing::info;
use wealth_core::{
    EmploymentInterval, NewEmploymentRecord, OverrideMap, ProjectionEngine, RecordStore,
    StoreError,
};

use crate::report::ProjectionReport;

/// Adds every interval to `store` as a manual record. Returns how many were added.
pub async fn register_intervals(
    store: &dyn RecordStore,
    intervals: Vec<EmploymentInterval>,
) -> Result<usize, StoreError> {
    let count = intervals.len();
    for interval in intervals {
        store.add(NewEmploymentRecord::manual(interval)).await?;
    }
    Ok(count)
}

/// Projects whatever the store currently holds.
pub async fn build_report(
    store: &dyn RecordStore,
    engine: ProjectionEngine,
    overrides: &OverrideMap,
    savings_rate: Decimal,
) -> Result<ProjectionReport, StoreError> {
    let intervals = store.intervals().await?;
    let report = ProjectionReport::new(engine, &intervals, overrides, savings_rate);

    info!(
        jurisdiction = %engine.jurisdiction(),
        years = report.breakdowns.len(),
        wealth = %report.accumulated_wealth,
        "projection complete"
    );
    Ok(report)
}
