//! Tax and wealth projection calculations.
//!
//! [`jurisdictions`] holds the per-regime tax functions, [`projection`] turns
//! employment intervals into per-year breakdowns, and [`wealth`] and
//! [`career`] aggregate across years.

pub mod career;
pub mod common;
pub mod jurisdictions;
pub mod projection;
pub mod wealth;

pub use career::CareerSummary;
pub use jurisdictions::{JurisdictionTaxProfile, TaxComponents, jurisdiction_tax, profile};
pub use projection::{ProjectionEngine, ProjectionError, compute_yearly_breakdowns};
pub use wealth::{DEFAULT_SAVINGS_RATE, estimate_accumulated_wealth};
