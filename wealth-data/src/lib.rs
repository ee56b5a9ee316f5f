pub mod decimal;
pub mod intervals;
pub mod overrides;

pub use intervals::{CsvLoadError, IntervalCsvLoader};
pub use overrides::{OverrideCsvLoader, OverrideLoadError};
