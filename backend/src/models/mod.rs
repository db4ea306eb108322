//! Domain models for event cost splitting

pub mod attendee;
pub mod config;
pub mod expense;
pub mod snapshot;

// Re-exports
pub use attendee::{generate_initial_attendees, Attendee, PaymentStatus, HONOREE_ID, HONOREE_NAME};
pub use config::{ConfigError, EventConfig};
pub use expense::{default_expenses, Expense, ExpenseCategory};
pub use snapshot::{EventSnapshot, SnapshotError};
