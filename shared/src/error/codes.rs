//! Unified error codes for the floor manager
//!
//! This module defines all error codes surfaced to the host UI.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 7xxx: Table errors
//! - 71xx: Section errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 7xxx: Table ====================
    /// Table number outside the floor, or the bar slot
    InvalidTableNumber = 7001,
    /// Table already has a party
    TableAlreadySeated = 7002,
    /// Table is already open
    TableAlreadyOpen = 7003,
    /// Party size is negative
    InvalidPartySize = 7004,
    /// No open table to recommend
    NoRecommendationAvailable = 7005,
    /// Server name is blank
    InvalidServer = 7006,

    // ==================== 71xx: Section ====================
    /// Active server count outside 1..=7
    InvalidServerCount = 7101,
    /// Section does not exist for the current server count
    SectionNotFound = 7102,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",

            // Table
            ErrorCode::InvalidTableNumber => "Invalid table number",
            ErrorCode::TableAlreadySeated => "Table is already seated",
            ErrorCode::TableAlreadyOpen => "Table is already open",
            ErrorCode::InvalidPartySize => "Party size cannot be negative",
            ErrorCode::NoRecommendationAvailable => "No table available to recommend",
            ErrorCode::InvalidServer => "Server name is required",

            // Section
            ErrorCode::InvalidServerCount => "Active server count must be between 1 and 7",
            ErrorCode::SectionNotFound => "Section not found",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),

            // Table
            7001 => Ok(ErrorCode::InvalidTableNumber),
            7002 => Ok(ErrorCode::TableAlreadySeated),
            7003 => Ok(ErrorCode::TableAlreadyOpen),
            7004 => Ok(ErrorCode::InvalidPartySize),
            7005 => Ok(ErrorCode::NoRecommendationAvailable),
            7006 => Ok(ErrorCode::InvalidServer),

            // Section
            7101 => Ok(ErrorCode::InvalidServerCount),
            7102 => Ok(ErrorCode::SectionNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
