//! Expense model
//!
//! One cost line item of an event. An expense may have been fronted by a
//! single attendee (`payer_id`); otherwise it is paid from the common pot.

use serde::{Deserialize, Serialize};

/// Display grouping for an expense. Does not affect the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    /// Shared by everyone by default (accommodation, transport)
    Fixed,
    /// Per-activity costs people may opt out of
    Variable,
}

/// One cost line item
///
/// # Example
/// ```
/// use event_split_core::{Expense, ExpenseCategory};
///
/// let dinner = Expense::new("ex_4", "Cena Viernes", 240.0, ExpenseCategory::Variable)
///     .with_payer("att_1");
/// assert_eq!(dinner.payer(), Some("att_1"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Stable identifier, key of every attendee's participation map
    pub id: String,

    /// Display label
    pub name: String,

    /// Full cost of the item
    pub total_cost: f64,

    pub category: ExpenseCategory,

    /// Attendee who fronted the full cost, `None` for the common pot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,
}

impl Expense {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        total_cost: f64,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            total_cost,
            category,
            payer_id: None,
        }
    }

    /// Mark an attendee as having fronted this expense
    pub fn with_payer(mut self, attendee_id: impl Into<String>) -> Self {
        self.payer_id = Some(attendee_id.into());
        self
    }

    /// Payer id, treating an empty string the same as no payer
    pub fn payer(&self) -> Option<&str> {
        self.payer_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Starting expense catalogue for a new weekend event, all at zero cost
pub fn default_expenses() -> Vec<Expense> {
    use ExpenseCategory::{Fixed, Variable};

    [
        ("ex_1", "Alojamiento (Total)", Fixed),
        ("ex_2", "Transporte / Alquiler coches", Fixed),
        ("ex_3", "Bote común / Varios", Fixed),
        ("ex_4", "Cena Viernes", Variable),
        ("ex_5", "Copas Viernes", Variable),
        ("ex_6", "Actividad Sábado Mañana", Variable),
        ("ex_7", "Comida Sábado", Variable),
        ("ex_8", "Cena Sábado", Variable),
        ("ex_9", "Copas Sábado", Variable),
    ]
    .into_iter()
    .map(|(id, name, category)| Expense::new(id, name, 0.0, category))
    .collect()
}
