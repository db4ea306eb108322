//! Reservation book
//!
//! Group bookings on season Saturdays. A reservation is keyed by id; the
//! calendar view looks them up by civil date.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when a reservation is missing required fields
#[derive(Debug, Error, PartialEq)]
pub enum ReservationError {
    #[error("Group name is required")]
    MissingGroupName,

    #[error("Contact is required")]
    MissingContact,

    #[error("Number of attendees must be positive")]
    NoAttendees,

    #[error("Reservation not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// One group booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub date: NaiveDate,
    pub group_name: String,
    pub venue: String,
    pub attendees: u32,
    pub total_price: f64,
    pub paid: f64,
    /// Phone number used for WhatsApp reminders
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// New pending reservation with a generated id and nothing paid yet
    pub fn new(
        date: NaiveDate,
        group_name: impl Into<String>,
        venue: impl Into<String>,
        attendees: u32,
        total_price: f64,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("res_{}", Uuid::new_v4().simple()),
            date,
            group_name: group_name.into(),
            venue: venue.into(),
            attendees,
            total_price,
            paid: 0.0,
            contact: contact.into(),
            notes: None,
            status: ReservationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Amount still owed; negative when overpaid
    pub fn pending_amount(&self) -> f64 {
        self.total_price - self.paid
    }

    pub fn validate(&self) -> Result<(), ReservationError> {
        if self.group_name.trim().is_empty() {
            return Err(ReservationError::MissingGroupName);
        }
        if self.contact.trim().is_empty() {
            return Err(ReservationError::MissingContact);
        }
        if self.attendees == 0 {
            return Err(ReservationError::NoAttendees);
        }
        Ok(())
    }
}

/// Aggregate figures for the header of the calendar view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub total_revenue: f64,
    pub total_paid: f64,
}

/// All reservations, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationBook {
    reservations: Vec<Reservation>,
}

impl ReservationBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Insert a new reservation or replace the one with the same id
    pub fn upsert(&mut self, reservation: Reservation) -> Result<(), ReservationError> {
        reservation.validate()?;
        match self.reservations.iter_mut().find(|r| r.id == reservation.id) {
            Some(existing) => *existing = reservation,
            None => self.reservations.push(reservation),
        }
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Reservation, ReservationError> {
        let index = self
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ReservationError::NotFound(id.to_string()))?;
        Ok(self.reservations.remove(index))
    }

    /// First reservation booked for a date
    pub fn for_date(&self, date: NaiveDate) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.date == date)
    }

    /// Reservations in a 0-based month, any year
    pub fn in_month(&self, month0: u32) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.date.month0() == month0)
            .collect()
    }

    pub fn stats(&self) -> ReservationStats {
        let count = |status: ReservationStatus| self.reservations.iter().filter(|r| r.status == status).count();
        ReservationStats {
            total: self.reservations.len(),
            confirmed: count(ReservationStatus::Confirmed),
            pending: count(ReservationStatus::Pending),
            total_revenue: self.reservations.iter().map(|r| r.total_price).sum(),
            total_paid: self.reservations.iter().map(|r| r.paid).sum(),
        }
    }

    /// Pretty JSON array of every reservation
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse an exported array. The caller keeps its book if this fails.
    pub fn import_json(json: &str) -> Result<Self, serde_json::Error> {
        let book: Self = serde_json::from_str(json)?;
        tracing::info!(reservations = book.reservations.len(), "Reservations imported");
        Ok(book)
    }
}
