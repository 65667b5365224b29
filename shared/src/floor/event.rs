//! Floor events - immutable facts recorded after command processing

use crate::models::{SectionId, ServerCount, TableNumber};
use serde::{Deserialize, Serialize};

/// Floor event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorEvent {
    /// Event unique ID
    pub event_id: String,
    /// Sequence number, AUTHORITATIVE ordering for replay
    pub sequence: u64,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command that triggered this event
    pub command_id: String,
    /// Operator name (snapshot for audit)
    pub operator_name: String,
    pub event_type: FloorEventType,
    pub payload: FloorEventPayload,
}

impl FloorEvent {
    pub fn new(
        sequence: u64,
        command_id: impl Into<String>,
        operator_name: impl Into<String>,
        payload: FloorEventPayload,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: chrono::Utc::now().timestamp_millis(),
            command_id: command_id.into(),
            operator_name: operator_name.into(),
            event_type: payload.event_type(),
            payload,
        }
    }
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorEventType {
    ServerCountChanged,
    TableSeated,
    TableUnseated,
    SectionsSkipped,
    TableSelected,
    SelectionCleared,
}

impl std::fmt::Display for FloorEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloorEventType::ServerCountChanged => write!(f, "SERVER_COUNT_CHANGED"),
            FloorEventType::TableSeated => write!(f, "TABLE_SEATED"),
            FloorEventType::TableUnseated => write!(f, "TABLE_UNSEATED"),
            FloorEventType::SectionsSkipped => write!(f, "SECTIONS_SKIPPED"),
            FloorEventType::TableSelected => write!(f, "TABLE_SELECTED"),
            FloorEventType::SelectionCleared => write!(f, "SELECTION_CLEARED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorEventPayload {
    /// Floor re-partitioned; section priorities rebuilt
    ServerCountChanged { count: ServerCount },

    TableSeated {
        table_number: TableNumber,
        section: SectionId,
        server: String,
        party_size: u32,
    },

    TableUnseated {
        table_number: TableNumber,
        section: SectionId,
    },

    /// Sections passed over by a recommendation pass (window-less top pick)
    SectionsSkipped { sections: Vec<SectionId> },

    TableSelected { table_number: TableNumber },

    SelectionCleared,
}

impl FloorEventPayload {
    pub fn event_type(&self) -> FloorEventType {
        match self {
            Self::ServerCountChanged { .. } => FloorEventType::ServerCountChanged,
            Self::TableSeated { .. } => FloorEventType::TableSeated,
            Self::TableUnseated { .. } => FloorEventType::TableUnseated,
            Self::SectionsSkipped { .. } => FloorEventType::SectionsSkipped,
            Self::TableSelected { .. } => FloorEventType::TableSelected,
            Self::SelectionCleared => FloorEventType::SelectionCleared,
        }
    }
}
