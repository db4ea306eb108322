//! Settlement - cost split and participation bookkeeping
//!
//! - **engine**: the pure four-pass settlement computation
//! - **participation**: copy-on-write roster and participation reconciliation

pub mod engine;
pub mod participation;

pub use engine::{compute, CalculationResult, ExpenseDetail};
pub use participation::{reconcile_participation, resize_roster};
