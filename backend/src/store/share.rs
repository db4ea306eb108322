//! Share tokens
//!
//! A share link carries the whole snapshot as URL-safe base64 JSON in the
//! URL fragment. Read-only access travels out-of-band as `?mode=view`; the
//! engine never sees it, only the [`crate::EventPlanner`] does.

use crate::models::snapshot::EventSnapshot;
use crate::store::StoreError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

const READ_ONLY_QUERY: &str = "mode=view";

/// Whether the holder of a snapshot may change it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessMode {
    #[default]
    Edit,
    ReadOnly,
}

/// Snapshot encoded for a URL, plus its access mode
///
/// # Example
/// ```
/// use event_split_core::{AccessMode, EventSnapshot, ShareLink};
///
/// let link = ShareLink::from_snapshot(&EventSnapshot::default(), AccessMode::ReadOnly).unwrap();
/// let suffix = link.to_url_suffix();
/// assert!(suffix.starts_with("?mode=view#"));
///
/// let parsed = ShareLink::parse(&format!("https://example.org/{}", suffix)).unwrap();
/// assert_eq!(parsed.access, AccessMode::ReadOnly);
/// assert_eq!(parsed.snapshot().unwrap(), EventSnapshot::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub token: String,
    pub access: AccessMode,
}

impl ShareLink {
    /// Encode a validated snapshot
    pub fn from_snapshot(snapshot: &EventSnapshot, access: AccessMode) -> Result<Self, StoreError> {
        snapshot.validate()?;
        let json = serde_json::to_vec(snapshot)?;
        Ok(Self {
            token: URL_SAFE_NO_PAD.encode(json),
            access,
        })
    }

    /// Query and fragment to append to the app URL
    pub fn to_url_suffix(&self) -> String {
        match self.access {
            AccessMode::Edit => format!("#{}", self.token),
            AccessMode::ReadOnly => format!("?{}#{}", READ_ONLY_QUERY, self.token),
        }
    }

    /// Parse a full URL or just its `?query#fragment` tail
    pub fn parse(url: &str) -> Result<Self, StoreError> {
        let (head, token) = url
            .split_once('#')
            .ok_or_else(|| StoreError::MalformedLink("missing '#' fragment".to_string()))?;
        if token.is_empty() {
            return Err(StoreError::MalformedLink("empty token".to_string()));
        }

        let read_only = head
            .split_once('?')
            .map(|(_, query)| query.split('&').any(|pair| pair == READ_ONLY_QUERY))
            .unwrap_or(false);

        Ok(Self {
            token: token.to_string(),
            access: if read_only {
                AccessMode::ReadOnly
            } else {
                AccessMode::Edit
            },
        })
    }

    /// Decode and validate the carried snapshot
    pub fn snapshot(&self) -> Result<EventSnapshot, StoreError> {
        let bytes = URL_SAFE_NO_PAD.decode(self.token.as_bytes())?;
        let snapshot: EventSnapshot = serde_json::from_slice(&bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
