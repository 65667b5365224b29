//! Command response and sync types

use super::event::FloorEvent;
use super::snapshot::FloorSnapshot;
use crate::error::ErrorCode;
use crate::models::TableNumber;
use serde::{Deserialize, Serialize};

/// Response to a floor command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Table the command acted on (seated/unseated/selected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<TableNumber>,
    /// Recommendation after the command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<TableNumber>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(
        command_id: String,
        table_number: Option<TableNumber>,
        recommendation: Option<TableNumber>,
    ) -> Self {
        Self {
            command_id,
            success: true,
            table_number,
            recommendation,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            table_number: None,
            recommendation: None,
            error: Some(error),
        }
    }

    pub fn duplicate(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            table_number: None,
            recommendation: None,
            error: None,
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    InvalidServerCount,
    InvalidTableNumber,
    TableAlreadySeated,
    TableAlreadyOpen,
    InvalidPartySize,
    InvalidServer,
    NoRecommendationAvailable,
    SectionNotFound,
    InternalError,
}

impl From<CommandErrorCode> for ErrorCode {
    fn from(code: CommandErrorCode) -> Self {
        match code {
            CommandErrorCode::InvalidServerCount => ErrorCode::InvalidServerCount,
            CommandErrorCode::InvalidTableNumber => ErrorCode::InvalidTableNumber,
            CommandErrorCode::TableAlreadySeated => ErrorCode::TableAlreadySeated,
            CommandErrorCode::TableAlreadyOpen => ErrorCode::TableAlreadyOpen,
            CommandErrorCode::InvalidPartySize => ErrorCode::InvalidPartySize,
            CommandErrorCode::InvalidServer => ErrorCode::InvalidServer,
            CommandErrorCode::NoRecommendationAvailable => ErrorCode::NoRecommendationAvailable,
            CommandErrorCode::SectionNotFound => ErrorCode::SectionNotFound,
            CommandErrorCode::InternalError => ErrorCode::InternalError,
        }
    }
}

/// Sync response for a reconnecting UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    /// Events since the requested sequence
    pub events: Vec<FloorEvent>,
    /// Full floor state (only when `requires_full_sync`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<FloorSnapshot>,
    /// Current sequence number
    pub server_sequence: u64,
    /// Whether the client must replace its state with `snapshot`
    pub requires_full_sync: bool,
    /// Manager instance epoch, changes on restart
    pub server_epoch: String,
}

impl SyncResponse {
    pub fn full_sync(snapshot: FloorSnapshot, server_sequence: u64, epoch: String) -> Self {
        Self {
            events: vec![],
            snapshot: Some(snapshot),
            server_sequence,
            requires_full_sync: true,
            server_epoch: epoch,
        }
    }

    pub fn incremental(events: Vec<FloorEvent>, server_sequence: u64, epoch: String) -> Self {
        Self {
            events,
            snapshot: None,
            server_sequence,
            requires_full_sync: false,
            server_epoch: epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let resp = CommandResponse::error(
            "cmd-1".to_string(),
            CommandError::new(CommandErrorCode::TableAlreadySeated, "Table 4 is seated"),
        );
        assert!(!resp.success);
        assert_eq!(
            resp.error.as_ref().map(|e| e.code),
            Some(CommandErrorCode::TableAlreadySeated)
        );

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"]["code"], "TABLE_ALREADY_SEATED");
        assert!(json.get("recommendation").is_none());
    }

    #[test]
    fn test_command_error_code_maps_to_error_code() {
        assert_eq!(
            ErrorCode::from(CommandErrorCode::TableAlreadyOpen).code(),
            7003
        );
        assert_eq!(
            ErrorCode::from(CommandErrorCode::InvalidServerCount).code(),
            7101
        );
    }
}
