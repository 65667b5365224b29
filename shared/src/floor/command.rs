//! Floor commands - requests from the host UI to change the floor

use serde::{Deserialize, Serialize};

/// Floor command envelope
///
/// Raw numbers in the payload are validated by the engine, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorCommand {
    /// Client-generated ID, used for idempotency
    pub command_id: String,
    /// Host operating the floor (for audit)
    pub operator_name: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    pub payload: FloorCommandPayload,
}

impl FloorCommand {
    pub fn new(operator_name: impl Into<String>, payload: FloorCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            operator_name: operator_name.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            payload,
        }
    }
}

/// Command payload variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorCommandPayload {
    /// Server button pressed: re-partition the floor
    SetActiveServerCount { count: i32 },

    SeatTable {
        table_number: i32,
        server: String,
        party_size: i32,
    },

    UnseatTable { table_number: i32 },

    /// Seat the party at the currently recommended table
    ConfirmRecommendedSeating {
        server: String,
        #[serde(default)]
        party_size: i32,
    },

    /// Focus a table; selecting the focused table again clears focus
    SelectTable { table_number: i32 },

    DeselectTable,
}

impl FloorCommandPayload {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetActiveServerCount { .. } => "set_active_server_count",
            Self::SeatTable { .. } => "seat_table",
            Self::UnseatTable { .. } => "unseat_table",
            Self::ConfirmRecommendedSeating { .. } => "confirm_recommended_seating",
            Self::SelectTable { .. } => "select_table",
            Self::DeselectTable => "deselect_table",
        }
    }
}
