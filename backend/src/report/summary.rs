//! Settlement summary rendering
//!
//! Two views of one [`CalculationResult`]: a chat message meant to be pasted
//! into the group, and a fixed-width table for printing.

use crate::models::attendee::Attendee;
use crate::models::config::EventConfig;
use crate::models::expense::Expense;
use crate::report::{format_currency, format_whole_currency};
use crate::settlement::CalculationResult;
use std::fmt::Write;

const SEPARATOR: &str = "------------------";

/// Below half a cent a balance counts as settled
const SETTLED_EPSILON: f64 = 0.005;

fn balance_label(balance: f64) -> String {
    if balance > SETTLED_EPSILON {
        format!("✅ recibe {}", format_currency(balance))
    } else if balance < -SETTLED_EPSILON {
        format!("❗ debe {}", format_currency(-balance))
    } else {
        "👌 en paz".to_string()
    }
}

/// Whether this attendee is the one whose share was waived
fn is_exempt(config: &EventConfig, attendees: &[Attendee], attendee: &Attendee) -> bool {
    config.is_honoree_free
        && attendees
            .iter()
            .find(|a| a.is_honoree)
            .is_some_and(|honoree| honoree.id == attendee.id)
}

/// Chat summary of who owes what
///
/// # Example
/// ```
/// use event_split_core::{compute, summary_message, Attendee, EventConfig, Expense, ExpenseCategory};
///
/// let config = EventConfig { total_people: 2, unexpected_percent: 0.0, ..EventConfig::default() };
/// let expenses = vec![Expense::new("ex_1", "Casa", 100.0, ExpenseCategory::Fixed).with_payer("att_1")];
/// let attendees = vec![
///     Attendee::new("att_1", "Ana").participating_in(["ex_1"]),
///     Attendee::new("att_2", "Bea").participating_in(["ex_1"]),
/// ];
/// let result = compute(&config, &expenses, &attendees);
///
/// let message = summary_message(&config, &attendees, &result);
/// assert!(message.contains("Ana: 50.00€ | pagado 100.00€ | ✅ recibe 50.00€"));
/// assert!(message.contains("Bea: 50.00€ | pagado 0.00€ | ❗ debe 50.00€"));
/// ```
pub fn summary_message(config: &EventConfig, attendees: &[Attendee], result: &CalculationResult) -> String {
    // Writing to a String never fails
    let mut msg = String::new();

    let _ = writeln!(msg, "🎉 *RESUMEN DE GASTOS* 🎉\n");
    let _ = writeln!(
        msg,
        "👥 *Personas:* {} ({} pagan)",
        attendees.len(),
        result.paying_count
    );
    let _ = writeln!(msg, "🌙 *Noches:* {}", config.nights);
    let _ = writeln!(msg, "💰 *Coste total:* {}", format_currency(result.total_trip_cost));
    let _ = writeln!(
        msg,
        "🛟 *Imprevistos ({}%):* {}",
        config.unexpected_percent,
        format_currency(result.unexpected_amount)
    );

    if config.is_honoree_free {
        if let Some(honoree) = attendees.iter().find(|a| a.is_honoree) {
            let _ = writeln!(
                msg,
                "🎁 *Invitado/a:* {} ({} repartidos)",
                honoree.name,
                format_currency(result.honoree_share_total)
            );
        }
    }

    let _ = writeln!(
        msg,
        "💶 *Precio medio:* ~{} por persona",
        format_whole_currency(result.price_per_payer)
    );
    let _ = writeln!(msg, "🔖 *Señal:* {}", format_currency(config.deposit_amount));

    let _ = writeln!(msg, "\n{}", SEPARATOR);
    let _ = writeln!(msg, "📋 *DETALLE POR PERSONA*");
    for attendee in attendees {
        if is_exempt(config, attendees, attendee) {
            let _ = writeln!(msg, "• {}: invitado/a 🎁", attendee.name);
            continue;
        }
        let _ = writeln!(
            msg,
            "• {}: {} | pagado {} | {}",
            attendee.name,
            format_currency(result.final_cost(&attendee.id)),
            format_currency(result.paid(&attendee.id)),
            balance_label(result.balance(&attendee.id))
        );
    }
    let _ = write!(msg, "{}", SEPARATOR);

    msg
}

/// Printable table of expenses and attendees
pub fn render_report(
    config: &EventConfig,
    expenses: &[Expense],
    attendees: &[Attendee],
    result: &CalculationResult,
) -> String {
    let mut out = String::new();
    let name_of = |id: &str| {
        attendees
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.as_str())
            .unwrap_or("?")
    };

    let _ = writeln!(out, "GASTOS");
    let _ = writeln!(
        out,
        "{:<28} {:>12} {:>6} {:>12}  {}",
        "Concepto", "Total", "Pers.", "Por persona", "Pagado por"
    );
    for expense in expenses {
        let (count, per_person) = result
            .expense_detail(&expense.id)
            .map(|d| (d.count, d.cost_per_person))
            .unwrap_or((0, 0.0));
        let payer = expense.payer().map(name_of).unwrap_or("Bote común");
        let _ = writeln!(
            out,
            "{:<28} {:>12} {:>6} {:>12}  {}",
            expense.name,
            format_currency(expense.total_cost),
            count,
            format_currency(per_person),
            payer
        );
    }

    let _ = writeln!(out, "\nASISTENTES");
    let _ = writeln!(
        out,
        "{:<20} {:>12} {:>12} {:>12} {:>12}  {}",
        "Nombre", "Base", "Final", "Pagado", "Balance", "Estado"
    );
    for attendee in attendees {
        let status = if is_exempt(config, attendees, attendee) {
            "Invitado/a"
        } else {
            attendee.status.label()
        };
        let _ = writeln!(
            out,
            "{:<20} {:>12} {:>12} {:>12} {:>12}  {}",
            attendee.name,
            format_currency(result.base_cost(&attendee.id)),
            format_currency(result.final_cost(&attendee.id)),
            format_currency(result.paid(&attendee.id)),
            format_currency(result.balance(&attendee.id)),
            status
        );
    }

    let _ = writeln!(out, "\nCoste directo: {}", format_currency(result.total_direct_cost));
    let _ = writeln!(
        out,
        "Imprevistos ({}%): {}",
        config.unexpected_percent,
        format_currency(result.unexpected_amount)
    );
    let _ = writeln!(out, "Coste total: {}", format_currency(result.total_trip_cost));
    let _ = write!(out, "Señal de referencia: {}", format_currency(config.deposit_amount));

    out
}
