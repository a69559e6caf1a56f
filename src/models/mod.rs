// Property Models
//
// Three independent demonstrations of how a type guards its own state:
// - ValidatedRecord: mutable, every write validated, salary changes observed
// - ImmutableRecord: fixed at construction, identity by UUID, copied tags
// - Money: value object with pure arithmetic

pub mod immutable;
pub mod money;
pub mod validated;

pub use immutable::{ImmutableRecord, ImmutableRecordBuilder};
pub use money::Money;
pub use validated::{ObserverId, SalaryChanged, ValidatedRecord};
