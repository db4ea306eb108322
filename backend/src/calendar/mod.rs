//! Calendar - weekday enumeration and the reservation book
//!
//! Months are 0-based (January = 0) throughout, matching the host calendar
//! view. All dates are civil dates with no time-of-day or timezone.

pub mod reservation;

use chrono::{Datelike, NaiveDate, Weekday};

pub use reservation::{Reservation, ReservationBook, ReservationError, ReservationStats, ReservationStatus};

/// First month of the reservation season (April)
pub const SEASON_START_MONTH: u32 = 3;

/// Last month of the reservation season (September)
pub const SEASON_END_MONTH: u32 = 8;

/// Every date falling on `weekday` across an inclusive month range
///
/// Dates are ascending. `start_month > end_month` yields an empty list and
/// months above 11 are skipped.
pub fn weekdays_between(year: i32, start_month: u32, end_month: u32, weekday: Weekday) -> Vec<NaiveDate> {
    (start_month..=end_month.min(11))
        .filter_map(|month0| NaiveDate::from_ymd_opt(year, month0 + 1, 1))
        .flat_map(|first| {
            first
                .iter_days()
                .take_while(move |day| day.month0() == first.month0())
        })
        .filter(|day| day.weekday() == weekday)
        .collect()
}

/// Every Saturday across an inclusive, 0-based month range
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use event_split_core::saturdays_between;
///
/// let april = saturdays_between(2026, 3, 3);
/// assert_eq!(april.first(), NaiveDate::from_ymd_opt(2026, 4, 4).as_ref());
/// assert_eq!(april.len(), 4);
/// ```
pub fn saturdays_between(year: i32, start_month: u32, end_month: u32) -> Vec<NaiveDate> {
    weekdays_between(year, start_month, end_month, Weekday::Sat)
}

/// Saturdays of the April–September season
pub fn season_saturdays(year: i32) -> Vec<NaiveDate> {
    saturdays_between(year, SEASON_START_MONTH, SEASON_END_MONTH)
}
