// Property Patterns - Core Library
// Validated mutable state, immutable records and value objects

pub mod clock;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ModelError, Result};
pub use models::{
    ImmutableRecord, ImmutableRecordBuilder, Money, ObserverId, SalaryChanged, ValidatedRecord,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
