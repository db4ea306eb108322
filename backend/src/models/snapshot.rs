//! Event snapshot
//!
//! The immutable unit of state the host hands to the engine, persists, and
//! shares. Validation lives here because the engine itself never rejects
//! input; bad data is stopped at the boundary instead.

use crate::models::attendee::Attendee;
use crate::models::config::{ConfigError, EventConfig};
use crate::models::expense::Expense;
use crate::settlement::{compute, CalculationResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors found while validating a snapshot at the boundary
#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("Expense {id} has invalid cost {cost}")]
    InvalidExpenseCost { id: String, cost: f64 },

    #[error("Duplicate expense id: {0}")]
    DuplicateExpense(String),

    #[error("Duplicate attendee id: {0}")]
    DuplicateAttendee(String),

    #[error("At most one honoree is allowed, found {count}: {ids:?}")]
    MultipleHonorees { count: usize, ids: Vec<String> },
}

/// Complete event state: configuration, expenses and attendees
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub config: EventConfig,
    pub expenses: Vec<Expense>,
    pub attendees: Vec<Attendee>,
}

impl EventSnapshot {
    pub fn new(config: EventConfig, expenses: Vec<Expense>, attendees: Vec<Attendee>) -> Self {
        Self {
            config,
            expenses,
            attendees,
        }
    }

    /// Check every constraint the engine assumes but does not enforce
    pub fn validate(&self) -> Result<(), SnapshotError> {
        self.config.validate()?;

        let mut expense_ids = HashSet::new();
        for expense in &self.expenses {
            if !expense.total_cost.is_finite() || expense.total_cost < 0.0 {
                return Err(SnapshotError::InvalidExpenseCost {
                    id: expense.id.clone(),
                    cost: expense.total_cost,
                });
            }
            if !expense_ids.insert(expense.id.as_str()) {
                return Err(SnapshotError::DuplicateExpense(expense.id.clone()));
            }
        }

        let mut attendee_ids = HashSet::new();
        for attendee in &self.attendees {
            if !attendee_ids.insert(attendee.id.as_str()) {
                return Err(SnapshotError::DuplicateAttendee(attendee.id.clone()));
            }
        }

        let honorees: Vec<String> = self
            .attendees
            .iter()
            .filter(|a| a.is_honoree)
            .map(|a| a.id.clone())
            .collect();
        if honorees.len() > 1 {
            return Err(SnapshotError::MultipleHonorees {
                count: honorees.len(),
                ids: honorees,
            });
        }

        Ok(())
    }

    /// Run the settlement engine over this snapshot
    pub fn compute(&self) -> CalculationResult {
        compute(&self.config, &self.expenses, &self.attendees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::ExpenseCategory;

    fn snapshot() -> EventSnapshot {
        EventSnapshot::new(
            EventConfig::default(),
            vec![Expense::new("ex_1", "Casa", 300.0, ExpenseCategory::Fixed)],
            vec![
                Attendee::new("att_1", "Ana").participating_in(["ex_1"]),
                Attendee::honoree("att_honoree", "Lucía").participating_in(["ex_1"]),
            ],
        )
    }

    #[test]
    fn test_valid_snapshot_passes() {
        assert_eq!(snapshot().validate(), Ok(()));
    }

    #[test]
    fn test_second_honoree_rejected() {
        let mut snap = snapshot();
        snap.attendees[0].is_honoree = true;
        assert!(matches!(
            snap.validate(),
            Err(SnapshotError::MultipleHonorees { count: 2, .. })
        ));
    }

    #[test]
    fn test_duplicate_expense_rejected() {
        let mut snap = snapshot();
        snap.expenses.push(snap.expenses[0].clone());
        assert_eq!(
            snap.validate(),
            Err(SnapshotError::DuplicateExpense("ex_1".to_string()))
        );
    }

    #[test]
    fn test_nan_cost_rejected() {
        let mut snap = snapshot();
        snap.expenses[0].total_cost = f64::NAN;
        assert!(matches!(
            snap.validate(),
            Err(SnapshotError::InvalidExpenseCost { .. })
        ));
    }
}
