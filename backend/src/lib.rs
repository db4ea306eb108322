//! Event Split Core - shared-cost settlement for group events
//!
//! Deterministic cost splitting for trips and celebrations: who shares
//! which expense, who already fronted what, and what everyone owes once an
//! honoree's share and a contingency surcharge are spread across the group.
//!
//! # Architecture
//!
//! - **models**: Domain types (EventConfig, Expense, Attendee, EventSnapshot)
//! - **settlement**: The pure settlement engine and participation reconciliation
//! - **planner**: Copy-on-write editing of a snapshot with access control
//! - **store**: Snapshot persistence and share tokens
//! - **import**: Roster creation from pasted name lists
//! - **calendar**: Weekday enumeration and the Saturday reservation book
//! - **report**: Text summaries, tables and reminders
//!
//! # Critical Invariants
//!
//! 1. The engine is pure and total: same snapshot, same result, no errors
//! 2. Amounts are f64 at full precision; only `report` rounds
//! 3. Inputs are never mutated; every edit produces a new snapshot

// Module declarations
pub mod calendar;
pub mod import;
pub mod models;
pub mod planner;
pub mod report;
pub mod settlement;
pub mod store;

// Re-exports for convenience
pub use calendar::{
    saturdays_between, season_saturdays, weekdays_between, Reservation, ReservationBook,
    ReservationError, ReservationStats, ReservationStatus,
};
pub use import::{import_attendees, parse_name_list};
pub use models::{
    attendee::{generate_initial_attendees, Attendee, PaymentStatus, HONOREE_ID, HONOREE_NAME},
    config::{ConfigError, EventConfig},
    expense::{default_expenses, Expense, ExpenseCategory},
    snapshot::{EventSnapshot, SnapshotError},
};
pub use planner::{EventPlanner, PlannerError};
pub use report::{
    format_currency, format_long_date, format_whole_currency, reminder_message, render_report,
    summary_message,
};
pub use settlement::{compute, reconcile_participation, resize_roster, CalculationResult, ExpenseDetail};
pub use store::{AccessMode, JsonFileStore, MemoryStore, ShareLink, Store, StoreError};
