pub mod add;
pub mod backup;
pub mod clear;
pub mod del;
pub mod detail;
pub mod edit;
pub mod filter;
pub mod log;
pub mod session;

pub use detail::{DetailView, Nav, Step};
pub use edit::{EditChoice, EditOutcome, replace_record};
pub use filter::Query;
pub use session::{SearchKind, Session};
