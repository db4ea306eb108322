//! Attendee model
//!
//! A participant of the event. Each attendee carries a participation map
//! keyed by expense id; a missing key means "not participating".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Id of the honoree record created by the roster helpers
pub const HONOREE_ID: &str = "att_honoree";

/// Display name of the honoree record created by the roster helpers
pub const HONOREE_NAME: &str = "Homenajeado/a";

/// Informational payment state. Ignored by the balance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Deposit,
    Paid,
}

impl PaymentStatus {
    /// Short Spanish label used by the text reports
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pendiente",
            PaymentStatus::Deposit => "Señal",
            PaymentStatus::Paid => "Pagado",
        }
    }
}

/// One participant
///
/// # Example
/// ```
/// use event_split_core::Attendee;
///
/// let mut ana = Attendee::new("att_1", "Ana");
/// ana.participation.insert("ex_1".to_string(), true);
/// assert!(ana.participates_in("ex_1"));
/// assert!(!ana.participates_in("ex_2")); // missing entry
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: String,

    pub name: String,

    /// Candidate for the honoree exemption
    #[serde(default)]
    pub is_honoree: bool,

    /// Expense id -> shares this expense's cost
    #[serde(default)]
    pub participation: BTreeMap<String, bool>,

    #[serde(default)]
    pub status: PaymentStatus,
}

impl Attendee {
    /// Create a regular attendee with an empty participation map
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_honoree: false,
            participation: BTreeMap::new(),
            status: PaymentStatus::Pending,
        }
    }

    /// Create an honoree with an empty participation map
    pub fn honoree(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_honoree: true,
            ..Self::new(id, name)
        }
    }

    /// Set participation to `true` for every given expense id
    pub fn participating_in<'a, I>(mut self, expense_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for id in expense_ids {
            self.participation.insert(id.to_string(), true);
        }
        self
    }

    /// Whether this attendee shares the given expense
    pub fn participates_in(&self, expense_id: &str) -> bool {
        self.participation.get(expense_id).copied().unwrap_or(false)
    }
}

/// Build the starting roster for `count` people: `count - 1` regular
/// attendees followed by the honoree. Participation maps are left empty for
/// [`crate::reconcile_participation`] to fill.
pub fn generate_initial_attendees(count: u32) -> Vec<Attendee> {
    let mut attendees: Vec<Attendee> = (1..count)
        .map(|i| Attendee::new(format!("att_{}", i), format!("Persona {}", i)))
        .collect();
    attendees.push(Attendee::honoree(HONOREE_ID, HONOREE_NAME));
    attendees
}
