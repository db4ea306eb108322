//! Report - human-readable renderings of computed results
//!
//! Everything in here is presentation. Rounding to cents or whole units
//! happens only at this layer; the engine's numbers stay at full precision.
//!
//! - **summary**: WhatsApp-style settlement summary and tabular report
//! - **reminder**: reservation payment reminders

pub mod reminder;
pub mod summary;

use chrono::{Datelike, NaiveDate, Weekday};

pub use reminder::reminder_message;
pub use summary::{render_report, summary_message};

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Amount with two decimals and the euro sign, e.g. `12.50€`
pub fn format_currency(amount: f64) -> String {
    format!("{:.2}€", normalize_zero(amount))
}

/// Amount rounded half away from zero to whole euros, e.g. `13€`
pub fn format_whole_currency(amount: f64) -> String {
    format!("{}€", normalize_zero(amount.round()))
}

/// Avoid printing `-0.00€` for values that round to zero
fn normalize_zero(amount: f64) -> f64 {
    if amount.abs() < 0.005 {
        0.0
    } else {
        amount
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Spanish long date, e.g. `sábado, 4 de abril de 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_formats() {
        assert_eq!(format_currency(49.5), "49.50€");
        assert_eq!(format_currency(-0.001), "0.00€");
        assert_eq!(format_whole_currency(12.5), "13€");
        assert_eq!(format_whole_currency(-12.5), "-13€");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 4).unwrap();
        assert_eq!(format_long_date(date), "sábado, 4 de abril de 2026");
    }
}
