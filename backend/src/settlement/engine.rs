//! Settlement Engine
//!
//! Turns a snapshot of configuration, expenses and attendees into what every
//! attendee owes or is owed.
//!
//! # Computation Passes
//!
//! ```text
//! expenses ──► 1. participants & cost per person (per expense)
//!                        │
//!                        ▼
//!              2. base cost per attendee  +  pre-paid per attendee
//!                        │
//!                        ▼
//!              3. honoree share pool  +  contingency pool
//!                        │
//!                        ▼
//!              4. final cost  ──►  balance = paid − final cost
//! ```
//!
//! # Critical Invariants
//!
//! - **Totality**: every input shape produces a result; divisions by zero
//!   yield 0
//! - **Purity**: inputs are borrowed immutably and the result is a fresh
//!   structure on every call
//! - **Conservation**: when every expense has at least one participant and
//!   someone bears the surcharges, `Σ final_costs == total_trip_cost`
//! - **Full precision**: amounts are never rounded here; rounding belongs to
//!   the report layer
//!
//! # Honoree Resolution
//!
//! The first attendee flagged `is_honoree` is *the* honoree. When
//! `is_honoree_free` is set, only that attendee is exempt; any further
//! honoree-flagged attendee is billed like everyone else. Snapshots with
//! more than one honoree are rejected by [`crate::EventSnapshot::validate`]
//! before they reach the engine.
//!
//! Surcharges (the honoree pool and the contingency pool) are spread over
//! every attendee except the exempt honoree. When the honoree is not free
//! they bear an equal share like any payer, even if `paying_count` is 0: a
//! lone non-free honoree pays their base cost plus the whole contingency.

use crate::models::attendee::Attendee;
use crate::models::config::EventConfig;
use crate::models::expense::Expense;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-expense split derived in pass 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDetail {
    pub expense_id: String,

    /// Number of attendees sharing this expense
    pub count: usize,

    /// `total_cost / count`, or 0 when nobody participates
    pub cost_per_person: f64,
}

/// Everything derived from one snapshot
///
/// Per-attendee maps contain an entry for every attendee id, including
/// attendees that participate in nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// One entry per expense, in input order
    pub expense_details: Vec<ExpenseDetail>,

    /// Sum of per-expense shares, before honoree and contingency layering
    pub attendee_base_costs: BTreeMap<String, f64>,

    /// Sum of `total_cost` of expenses each attendee fronted
    pub attendee_paid: BTreeMap<String, f64>,

    /// Base cost of the honoree (0 when there is none)
    pub honoree_share_total: f64,

    /// `total_direct_cost * unexpected_percent / 100`
    pub unexpected_amount: f64,

    /// What each attendee is ultimately responsible for
    pub final_costs: BTreeMap<String, f64>,

    /// `paid − final cost`; positive = is owed, negative = owes
    pub attendee_balance: BTreeMap<String, f64>,

    /// Sum of every expense's cost, attributed or not
    pub total_direct_cost: f64,

    /// `total_direct_cost + unexpected_amount`
    pub total_trip_cost: f64,

    /// Attendees not flagged as honoree
    pub paying_count: usize,

    /// `total_trip_cost / paying_count`, an approximate average for display
    pub price_per_payer: f64,
}

impl CalculationResult {
    /// Split for one expense, `None` for unknown ids
    pub fn expense_detail(&self, expense_id: &str) -> Option<&ExpenseDetail> {
        self.expense_details
            .iter()
            .find(|detail| detail.expense_id == expense_id)
    }

    /// Base cost of an attendee, 0 for unknown ids
    pub fn base_cost(&self, attendee_id: &str) -> f64 {
        lookup(&self.attendee_base_costs, attendee_id)
    }

    /// Amount an attendee fronted, 0 for unknown ids
    pub fn paid(&self, attendee_id: &str) -> f64 {
        lookup(&self.attendee_paid, attendee_id)
    }

    /// Final cost of an attendee, 0 for unknown ids
    pub fn final_cost(&self, attendee_id: &str) -> f64 {
        lookup(&self.final_costs, attendee_id)
    }

    /// Balance of an attendee, 0 for unknown ids
    pub fn balance(&self, attendee_id: &str) -> f64 {
        lookup(&self.attendee_balance, attendee_id)
    }

    /// Sum of all final costs
    pub fn total_final_costs(&self) -> f64 {
        self.final_costs.values().sum()
    }
}

fn lookup(map: &BTreeMap<String, f64>, id: &str) -> f64 {
    map.get(id).copied().unwrap_or(0.0)
}

/// Division that yields 0 instead of faulting on an empty divisor
fn share(pool: f64, divisor: usize) -> f64 {
    if divisor == 0 {
        0.0
    } else {
        pool / divisor as f64
    }
}

/// Compute the settlement for one snapshot
///
/// Pure and total: no input causes a failure. Unknown `payer_id`s are
/// ignored, missing participation entries count as "not participating",
/// and every division guards against a zero divisor.
///
/// # Example
///
/// ```rust
/// use event_split_core::{compute, Attendee, EventConfig, Expense, ExpenseCategory};
///
/// let config = EventConfig {
///     total_people: 3,
///     unexpected_percent: 10.0,
///     is_honoree_free: true,
///     ..EventConfig::default()
/// };
/// let expenses = vec![Expense::new("ex_1", "Cena", 90.0, ExpenseCategory::Variable)];
/// let attendees = vec![
///     Attendee::new("att_1", "Ana").participating_in(["ex_1"]),
///     Attendee::new("att_2", "Bea").participating_in(["ex_1"]),
///     Attendee::honoree("att_honoree", "Lucía").participating_in(["ex_1"]),
/// ];
///
/// let result = compute(&config, &expenses, &attendees);
/// assert_eq!(result.final_cost("att_1"), 49.5);
/// assert_eq!(result.final_cost("att_honoree"), 0.0);
/// assert_eq!(result.total_trip_cost, 99.0);
/// ```
pub fn compute(
    config: &EventConfig,
    expenses: &[Expense],
    attendees: &[Attendee],
) -> CalculationResult {
    // Pass 1: participants and cost per person
    let expense_details: Vec<ExpenseDetail> = expenses
        .iter()
        .map(|expense| {
            let count = attendees
                .iter()
                .filter(|a| a.participates_in(&expense.id))
                .count();
            ExpenseDetail {
                expense_id: expense.id.clone(),
                count,
                cost_per_person: share(expense.total_cost, count),
            }
        })
        .collect();

    // Pass 2: base costs, pre-payments and direct total
    let mut attendee_base_costs: BTreeMap<String, f64> =
        attendees.iter().map(|a| (a.id.clone(), 0.0)).collect();
    let mut attendee_paid: BTreeMap<String, f64> =
        attendees.iter().map(|a| (a.id.clone(), 0.0)).collect();
    let mut total_direct_cost = 0.0;

    for (expense, detail) in expenses.iter().zip(&expense_details) {
        total_direct_cost += expense.total_cost;

        if let Some(payer_id) = expense.payer() {
            match attendee_paid.get_mut(payer_id) {
                Some(paid) => *paid += expense.total_cost,
                None => tracing::warn!(
                    expense_id = %expense.id,
                    payer_id,
                    "Ignoring payer that matches no attendee"
                ),
            }
        }

        for attendee in attendees.iter().filter(|a| a.participates_in(&expense.id)) {
            if let Some(base) = attendee_base_costs.get_mut(&attendee.id) {
                *base += detail.cost_per_person;
            }
        }
    }

    // Pass 3: honoree pool and contingency pool
    let honoree = attendees.iter().find(|a| a.is_honoree);
    let honoree_share_total = honoree
        .map(|h| lookup(&attendee_base_costs, &h.id))
        .unwrap_or(0.0);
    let exempt_id = honoree
        .filter(|_| config.is_honoree_free)
        .map(|h| h.id.as_str());

    let paying_count = attendees.iter().filter(|a| !a.is_honoree).count();
    // Everyone except the exempt honoree carries the surcharges. With a
    // single honoree this equals `paying_count` when the honoree is free, and
    // includes the honoree as an ordinary payer when they are not.
    let bearer_count = attendees
        .iter()
        .filter(|a| Some(a.id.as_str()) != exempt_id)
        .count();

    let unexpected_amount = total_direct_cost * config.unexpected_percent / 100.0;
    let honoree_share_each = if exempt_id.is_some() {
        share(honoree_share_total, bearer_count)
    } else {
        0.0
    };
    let unexpected_each = share(unexpected_amount, bearer_count);

    // Pass 4: final costs and balances
    let mut final_costs = BTreeMap::new();
    let mut attendee_balance = BTreeMap::new();
    for attendee in attendees {
        let final_cost = if Some(attendee.id.as_str()) == exempt_id {
            0.0
        } else {
            lookup(&attendee_base_costs, &attendee.id) + honoree_share_each + unexpected_each
        };
        let balance = lookup(&attendee_paid, &attendee.id) - final_cost;
        final_costs.insert(attendee.id.clone(), final_cost);
        attendee_balance.insert(attendee.id.clone(), balance);
    }

    let total_trip_cost = total_direct_cost + unexpected_amount;
    let price_per_payer = share(total_trip_cost, paying_count);

    tracing::debug!(
        expenses = expenses.len(),
        attendees = attendees.len(),
        paying_count,
        total_direct_cost,
        unexpected_amount,
        honoree_share_total,
        total_trip_cost,
        "Settlement computed"
    );

    CalculationResult {
        expense_details,
        attendee_base_costs,
        attendee_paid,
        honoree_share_total,
        unexpected_amount,
        final_costs,
        attendee_balance,
        total_direct_cost,
        total_trip_cost,
        paying_count,
        price_per_payer,
    }
}
