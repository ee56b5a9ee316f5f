pub mod analysis;
pub mod calculations;
pub mod models;
pub mod store;

pub use calculations::{
    CareerSummary, DEFAULT_SAVINGS_RATE, JurisdictionTaxProfile, ProjectionEngine,
    ProjectionError, TaxComponents, compute_yearly_breakdowns, estimate_accumulated_wealth,
    jurisdiction_tax,
};
pub use models::*;
pub use store::{InMemoryRecordStore, RecordStore, StoreError};
