//! Integration tests for the reservation book

use chrono::NaiveDate;
use event_split_core::{season_saturdays, Reservation, ReservationBook, ReservationError, ReservationStatus};

fn reservation(date: NaiveDate, group: &str, total: f64, paid: f64) -> Reservation {
    let mut reservation = Reservation::new(date, group, "Despedidas", 10, total, "678288284");
    reservation.paid = paid;
    reservation
}

#[test]
fn test_upsert_replaces_by_id() {
    let date = NaiveDate::from_ymd_opt(2026, 4, 11).unwrap();
    let mut book = ReservationBook::new();
    let mut first = reservation(date, "Grupo Ana", 400.0, 0.0);
    book.upsert(first.clone()).unwrap();

    first.paid = 150.0;
    first.status = ReservationStatus::Confirmed;
    book.upsert(first.clone()).unwrap();

    assert_eq!(book.reservations().len(), 1);
    assert_eq!(book.for_date(date), Some(&first));
}

#[test]
fn test_upsert_rejects_incomplete() {
    let date = NaiveDate::from_ymd_opt(2026, 4, 11).unwrap();
    let mut book = ReservationBook::new();

    let mut no_people = reservation(date, "Grupo Ana", 400.0, 0.0);
    no_people.attendees = 0;
    assert_eq!(book.upsert(no_people), Err(ReservationError::NoAttendees));

    let nameless = reservation(date, "", 400.0, 0.0);
    assert_eq!(book.upsert(nameless), Err(ReservationError::MissingGroupName));
    assert!(book.reservations().is_empty());
}

#[test]
fn test_calendar_lookup_and_month_filter() {
    let saturdays = season_saturdays(2026);
    let mut book = ReservationBook::new();
    book.upsert(reservation(saturdays[0], "Grupo Ana", 400.0, 0.0)).unwrap();
    book.upsert(reservation(saturdays[5], "Grupo Bea", 300.0, 300.0)).unwrap();

    assert_eq!(book.for_date(saturdays[0]).unwrap().group_name, "Grupo Ana");
    assert!(book.for_date(saturdays[1]).is_none());
    // saturdays[5] is 9 May 2026
    assert_eq!(book.in_month(4).len(), 1);
    assert_eq!(book.in_month(3).len(), 1);
    assert!(book.in_month(8).is_empty());
}

#[test]
fn test_stats() {
    let date = NaiveDate::from_ymd_opt(2026, 6, 6).unwrap();
    let mut book = ReservationBook::new();
    let mut confirmed = reservation(date, "Grupo Ana", 400.0, 400.0);
    confirmed.status = ReservationStatus::Confirmed;
    let mut cancelled = reservation(date, "Grupo Bea", 100.0, 20.0);
    cancelled.status = ReservationStatus::Cancelled;
    book.upsert(confirmed).unwrap();
    book.upsert(cancelled).unwrap();
    book.upsert(reservation(date, "Grupo Carla", 250.0, 50.0)).unwrap();

    let stats = book.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.confirmed, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.total_revenue, 750.0);
    assert_eq!(stats.total_paid, 470.0);
}

#[test]
fn test_remove() {
    let date = NaiveDate::from_ymd_opt(2026, 6, 6).unwrap();
    let mut book = ReservationBook::new();
    let kept = reservation(date, "Grupo Ana", 400.0, 0.0);
    let dropped = reservation(date, "Grupo Bea", 100.0, 0.0);
    book.upsert(kept.clone()).unwrap();
    book.upsert(dropped.clone()).unwrap();

    assert_eq!(book.remove(&dropped.id).unwrap(), dropped);
    assert_eq!(book.reservations(), &[kept]);
}

#[test]
fn test_export_import() {
    let date = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
    let mut book = ReservationBook::new();
    let mut with_notes = reservation(date, "Grupo Ana", 400.0, 100.0);
    with_notes.notes = Some("Una persona celíaca".to_string());
    book.upsert(with_notes).unwrap();

    let json = book.export_json().unwrap();
    let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(raw.is_array());
    assert_eq!(raw[0]["date"], "2026-07-04");
    assert_eq!(raw[0]["groupName"], "Grupo Ana");
    assert_eq!(raw[0]["status"], "PENDING");

    assert_eq!(ReservationBook::import_json(&json).unwrap(), book);
    assert!(ReservationBook::import_json("{\"broken\":").is_err());
}
