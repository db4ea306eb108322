//! Name-list import
//!
//! Builds a fresh roster from a pasted list of names, one per line or
//! separated by commas.

use crate::models::attendee::{Attendee, HONOREE_ID, HONOREE_NAME};
use crate::models::expense::Expense;
use uuid::Uuid;

/// Split pasted text into trimmed, non-empty names
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a roster from pasted names plus the fixed honoree record
///
/// Every imported attendee gets a random `att_<uuid>` id, `PENDING` status
/// and participates in every current expense. The honoree is appended last.
///
/// # Example
/// ```
/// use event_split_core::import_attendees;
///
/// let roster = import_attendees("Ana, Bea\nCarla", &[]);
/// assert_eq!(roster.len(), 4);
/// assert_eq!(roster[2].name, "Carla");
/// assert!(roster[3].is_honoree);
/// ```
pub fn import_attendees(text: &str, expenses: &[Expense]) -> Vec<Attendee> {
    let expense_ids = || expenses.iter().map(|e| e.id.as_str());

    let mut roster: Vec<Attendee> = parse_name_list(text)
        .into_iter()
        .map(|name| {
            Attendee::new(format!("att_{}", Uuid::new_v4().simple()), name)
                .participating_in(expense_ids())
        })
        .collect();

    tracing::info!(imported = roster.len(), "Imported attendees from name list");

    roster.push(Attendee::honoree(HONOREE_ID, HONOREE_NAME).participating_in(expense_ids()));
    roster
}
