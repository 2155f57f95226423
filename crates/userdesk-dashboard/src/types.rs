//! Data types for the user workstation panel
//!
//! These mirror the records handed to the panel by the admin console's data layer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Directory Types
// ============================================================================

/// A single user row in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

// ============================================================================
// Metrics Types
// ============================================================================

/// Aggregate counts shown in the metrics cards.
///
/// Every field is optional: the summary usually reflects a server-side
/// aggregate and is not tied to the length of the loaded user list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSummary {
    pub total: Option<u64>,
    pub clients: Option<u64>,
    pub staff: Option<u64>,
    pub admins: Option<u64>,
    pub pending: Option<u64>,
    pub in_progress: Option<u64>,
    pub due_this_week: Option<u64>,
}

impl StatsSummary {
    /// Summary with only the total populated
    pub fn with_total(total: u64) -> Self {
        Self {
            total: Some(total),
            ..Self::default()
        }
    }
}
