//! Participation reconciliation
//!
//! Keeps attendee participation maps in step with the expense list and the
//! configured head count. Every function here is copy-on-write: it reads the
//! current roster and returns a new one.

use crate::models::attendee::Attendee;
use crate::models::expense::Expense;
use std::collections::{BTreeMap, HashSet};

/// Give every attendee an entry for every current expense id
///
/// Existing entries keep their value, ids seen for the first time default to
/// participating, and entries for expenses that no longer exist are dropped.
///
/// # Example
/// ```
/// use event_split_core::{reconcile_participation, Attendee};
///
/// let mut ana = Attendee::new("att_1", "Ana");
/// ana.participation.insert("ex_1".to_string(), false);
/// ana.participation.insert("ex_gone".to_string(), true);
///
/// let roster = reconcile_participation(&[ana], ["ex_1", "ex_2"]);
/// assert_eq!(roster[0].participation.get("ex_1"), Some(&false));
/// assert_eq!(roster[0].participation.get("ex_2"), Some(&true));
/// assert!(!roster[0].participation.contains_key("ex_gone"));
/// ```
pub fn reconcile_participation<'a, I>(attendees: &[Attendee], expense_ids: I) -> Vec<Attendee>
where
    I: IntoIterator<Item = &'a str>,
{
    let expense_ids: Vec<&str> = expense_ids.into_iter().collect();

    attendees
        .iter()
        .map(|attendee| {
            let participation: BTreeMap<String, bool> = expense_ids
                .iter()
                .map(|id| {
                    let value = attendee.participation.get(*id).copied().unwrap_or(true);
                    (id.to_string(), value)
                })
                .collect();
            Attendee {
                participation,
                ..attendee.clone()
            }
        })
        .collect()
}

/// Grow or shrink the roster to `total_people` attendees
///
/// New attendees are named `Persona N`, inserted before the honoree and
/// participate in every expense. Shrinking removes regular attendees from
/// the end; honoree-flagged attendees are never removed.
pub fn resize_roster(attendees: &[Attendee], total_people: u32, expenses: &[Expense]) -> Vec<Attendee> {
    let target = total_people as usize;
    let mut roster = attendees.to_vec();

    if roster.len() < target {
        let mut used_ids: HashSet<String> = roster.iter().map(|a| a.id.clone()).collect();
        let insert_at = roster
            .iter()
            .position(|a| a.is_honoree)
            .unwrap_or(roster.len());
        let mut next = roster.iter().filter(|a| !a.is_honoree).count() + 1;
        let mut added = Vec::with_capacity(target - roster.len());

        while roster.len() + added.len() < target {
            let id = format!("att_{}", next);
            if used_ids.insert(id.clone()) {
                added.push(
                    Attendee::new(id, format!("Persona {}", next))
                        .participating_in(expenses.iter().map(|e| e.id.as_str())),
                );
            }
            next += 1;
        }

        tracing::debug!(added = added.len(), target, "Growing roster");
        for (offset, attendee) in added.into_iter().enumerate() {
            roster.insert(insert_at + offset, attendee);
        }
    }

    while roster.len() > target {
        match roster.iter().rposition(|a| !a.is_honoree) {
            Some(index) => {
                roster.remove(index);
            }
            None => break,
        }
    }

    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendee::generate_initial_attendees;
    use crate::models::expense::ExpenseCategory;

    #[test]
    fn test_reconcile_does_not_touch_input() {
        let original = vec![Attendee::new("att_1", "Ana")];
        let reconciled = reconcile_participation(&original, ["ex_1"]);
        assert!(original[0].participation.is_empty());
        assert_eq!(reconciled[0].participation.len(), 1);
    }

    #[test]
    fn test_grow_inserts_before_honoree() {
        let expenses = vec![Expense::new("ex_1", "Casa", 100.0, ExpenseCategory::Fixed)];
        let roster = resize_roster(&generate_initial_attendees(3), 5, &expenses);
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[2].id, "att_3");
        assert_eq!(roster[3].id, "att_4");
        assert!(roster[3].participates_in("ex_1"));
        assert!(roster[4].is_honoree);
    }

    #[test]
    fn test_shrink_keeps_honoree() {
        let roster = resize_roster(&generate_initial_attendees(4), 1, &[]);
        assert_eq!(roster.len(), 1);
        assert!(roster[0].is_honoree);
    }
}
