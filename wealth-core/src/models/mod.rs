mod employment_interval;
mod employment_record;
mod jurisdiction;
mod year_override;
mod yearly_breakdown;

pub use employment_interval::{EARLIEST_START_YEAR, EmploymentInterval, IntervalError};
pub use employment_record::{EmploymentRecord, IntervalPatch, NewEmploymentRecord, RecordSource};
pub use jurisdiction::{Jurisdiction, UnknownJurisdiction};
pub use year_override::{OverrideMap, YearOverride};
pub use yearly_breakdown::YearlyBreakdown;
