//! Event Planner - input builder around the settlement engine
//!
//! Owns the current [`EventSnapshot`] and applies edits copy-on-write: each
//! mutation clones the snapshot, edits the clone, re-reconciles
//! participation and only then swaps it in. A failed edit leaves the
//! previous snapshot in place.
//!
//! Read-only access (e.g. from a `?mode=view` share link) rejects every
//! mutation. The engine itself has no notion of access modes.

use crate::models::attendee::{Attendee, PaymentStatus};
use crate::models::config::EventConfig;
use crate::models::expense::{Expense, ExpenseCategory};
use crate::models::snapshot::{EventSnapshot, SnapshotError};
use crate::settlement::{compute, reconcile_participation, resize_roster, CalculationResult};
use crate::store::{AccessMode, ShareLink, Store, StoreError};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while editing an event
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Event is open in read-only mode")]
    ReadOnly,

    #[error("Expense not found: {0}")]
    UnknownExpense(String),

    #[error("Attendee not found: {0}")]
    UnknownAttendee(String),

    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] SnapshotError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Holds the authoritative snapshot and guards edits to it
///
/// # Example
/// ```
/// use event_split_core::{AccessMode, EventPlanner, EventSnapshot, ExpenseCategory};
/// use event_split_core::{generate_initial_attendees, EventConfig};
///
/// let config = EventConfig { total_people: 3, ..EventConfig::default() };
/// let snapshot = EventSnapshot::new(config, vec![], generate_initial_attendees(3));
/// let mut planner = EventPlanner::new(snapshot, AccessMode::Edit).unwrap();
///
/// planner.add_expense("Casa", 300.0, ExpenseCategory::Fixed).unwrap();
/// let result = planner.result();
/// assert_eq!(result.total_direct_cost, 300.0);
/// assert_eq!(result.final_cost("att_honoree"), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct EventPlanner {
    snapshot: EventSnapshot,
    access: AccessMode,
}

impl EventPlanner {
    /// Wrap a snapshot after validating it and reconciling participation
    pub fn new(snapshot: EventSnapshot, access: AccessMode) -> Result<Self, PlannerError> {
        snapshot.validate()?;
        let attendees = reconcile_participation(
            &snapshot.attendees,
            snapshot.expenses.iter().map(|e| e.id.as_str()),
        );
        Ok(Self {
            snapshot: EventSnapshot {
                attendees,
                ..snapshot
            },
            access,
        })
    }

    /// Open the snapshot carried by a share link with the link's access mode
    pub fn from_share_link(link: &ShareLink) -> Result<Self, PlannerError> {
        Self::new(link.snapshot()?, link.access)
    }

    /// Restore from a store, `Ok(None)` when the store is empty
    pub fn load_from(store: &dyn Store, access: AccessMode) -> Result<Option<Self>, PlannerError> {
        match store.load()? {
            Some(snapshot) => Ok(Some(Self::new(snapshot, access)?)),
            None => Ok(None),
        }
    }

    pub fn snapshot(&self) -> &EventSnapshot {
        &self.snapshot
    }

    pub fn access(&self) -> AccessMode {
        self.access
    }

    /// Recompute the settlement from scratch
    pub fn result(&self) -> CalculationResult {
        compute(
            &self.snapshot.config,
            &self.snapshot.expenses,
            &self.snapshot.attendees,
        )
    }

    /// Persist the current snapshot
    pub fn save_to(&self, store: &mut dyn Store) -> Result<(), PlannerError> {
        store.save(&self.snapshot)?;
        Ok(())
    }

    /// Share link for the current snapshot
    pub fn share_link(&self, access: AccessMode) -> Result<ShareLink, PlannerError> {
        Ok(ShareLink::from_snapshot(&self.snapshot, access)?)
    }

    /// Replace the configuration, resizing the roster if the head count changed
    pub fn set_config(&mut self, config: EventConfig) -> Result<(), PlannerError> {
        self.update(|snapshot| {
            if config.total_people != snapshot.config.total_people {
                snapshot.attendees =
                    resize_roster(&snapshot.attendees, config.total_people, &snapshot.expenses);
            }
            snapshot.config = config;
            Ok(())
        })
    }

    pub fn set_total_people(&mut self, total_people: u32) -> Result<(), PlannerError> {
        let config = EventConfig {
            total_people,
            ..self.snapshot.config.clone()
        };
        self.set_config(config)
    }

    /// Append an expense everyone participates in; returns its new id
    pub fn add_expense(
        &mut self,
        name: &str,
        total_cost: f64,
        category: ExpenseCategory,
    ) -> Result<String, PlannerError> {
        let id = format!("ex_{}", Uuid::new_v4().simple());
        let expense = Expense::new(id.clone(), name, total_cost, category);
        self.update(|snapshot| {
            snapshot.expenses.push(expense);
            Ok(())
        })?;
        Ok(id)
    }

    pub fn update_expense_cost(&mut self, expense_id: &str, total_cost: f64) -> Result<(), PlannerError> {
        self.update(|snapshot| {
            find_expense(snapshot, expense_id)?.total_cost = total_cost;
            Ok(())
        })
    }

    pub fn remove_expense(&mut self, expense_id: &str) -> Result<(), PlannerError> {
        self.update(|snapshot| {
            find_expense(snapshot, expense_id)?;
            snapshot.expenses.retain(|e| e.id != expense_id);
            Ok(())
        })
    }

    /// Set or clear who fronted an expense
    pub fn set_payer(&mut self, expense_id: &str, payer_id: Option<&str>) -> Result<(), PlannerError> {
        self.update(|snapshot| {
            if let Some(payer_id) = payer_id {
                find_attendee(snapshot, payer_id)?;
            }
            find_expense(snapshot, expense_id)?.payer_id = payer_id.map(str::to_string);
            Ok(())
        })
    }

    pub fn set_participation(
        &mut self,
        attendee_id: &str,
        expense_id: &str,
        participating: bool,
    ) -> Result<(), PlannerError> {
        self.update(|snapshot| {
            find_expense(snapshot, expense_id)?;
            find_attendee(snapshot, attendee_id)?
                .participation
                .insert(expense_id.to_string(), participating);
            Ok(())
        })
    }

    pub fn set_status(&mut self, attendee_id: &str, status: PaymentStatus) -> Result<(), PlannerError> {
        self.update(|snapshot| {
            find_attendee(snapshot, attendee_id)?.status = status;
            Ok(())
        })
    }

    pub fn rename_attendee(&mut self, attendee_id: &str, name: &str) -> Result<(), PlannerError> {
        self.update(|snapshot| {
            find_attendee(snapshot, attendee_id)?.name = name.to_string();
            Ok(())
        })
    }

    /// Swap in a new roster (e.g. from an import); the head count follows it
    pub fn replace_attendees(&mut self, attendees: Vec<Attendee>) -> Result<(), PlannerError> {
        self.update(|snapshot| {
            snapshot.config.total_people = attendees.len().max(1) as u32;
            snapshot.attendees = attendees;
            Ok(())
        })
    }

    /// Apply an edit to a copy of the snapshot and swap it in if it is valid
    fn update<F>(&mut self, edit: F) -> Result<(), PlannerError>
    where
        F: FnOnce(&mut EventSnapshot) -> Result<(), PlannerError>,
    {
        if self.access == AccessMode::ReadOnly {
            tracing::warn!("Rejected edit on read-only event");
            return Err(PlannerError::ReadOnly);
        }

        let mut next = self.snapshot.clone();
        edit(&mut next)?;
        next.attendees = reconcile_participation(
            &next.attendees,
            next.expenses.iter().map(|e| e.id.as_str()),
        );
        next.validate()?;

        self.snapshot = next;
        Ok(())
    }
}

fn find_expense<'a>(snapshot: &'a mut EventSnapshot, id: &str) -> Result<&'a mut Expense, PlannerError> {
    snapshot
        .expenses
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| PlannerError::UnknownExpense(id.to_string()))
}

fn find_attendee<'a>(snapshot: &'a mut EventSnapshot, id: &str) -> Result<&'a mut Attendee, PlannerError> {
    snapshot
        .attendees
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| PlannerError::UnknownAttendee(id.to_string()))
}
