//! Event configuration
//!
//! Per-event settings edited by the host UI and read by the settlement
//! engine. Field names serialize in camelCase so snapshots match the JSON
//! shape the host already persists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a configuration fails boundary validation
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("totalPeople must be at least 1, got {0}")]
    NoPeople(u32),

    #[error("unexpectedPercent must be a finite non-negative number, got {0}")]
    InvalidUnexpectedPercent(f64),

    #[error("depositAmount must be a finite non-negative number, got {0}")]
    InvalidDeposit(f64),
}

/// Per-event settings
///
/// # Example
/// ```
/// use event_split_core::EventConfig;
///
/// let config = EventConfig::default();
/// assert_eq!(config.total_people, 10);
/// assert!(config.is_honoree_free);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventConfig {
    /// Number of attendees, honoree included
    pub total_people: u32,

    /// Informational only, never used in cost math
    pub nights: u32,

    /// When true the honoree's share is zeroed and spread across payers
    pub is_honoree_free: bool,

    /// Contingency surcharge as a percentage of total direct cost
    pub unexpected_percent: f64,

    /// Reference amount for partial-payment status. Never subtracted from
    /// balances.
    pub deposit_amount: f64,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            total_people: 10,
            nights: 2,
            is_honoree_free: true,
            unexpected_percent: 10.0,
            deposit_amount: 50.0,
        }
    }
}

impl EventConfig {
    /// Check the numeric constraints the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_people == 0 {
            return Err(ConfigError::NoPeople(self.total_people));
        }
        if !self.unexpected_percent.is_finite() || self.unexpected_percent < 0.0 {
            return Err(ConfigError::InvalidUnexpectedPercent(self.unexpected_percent));
        }
        if !self.deposit_amount.is_finite() || self.deposit_amount < 0.0 {
            return Err(ConfigError::InvalidDeposit(self.deposit_amount));
        }
        Ok(())
    }
}
