pub mod field;
pub mod record;
pub mod row;

pub use field::RecordField;
pub use record::{Draft, Record, ValidationError};
pub use row::{RawRowError, Row};
