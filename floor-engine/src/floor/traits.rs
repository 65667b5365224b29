//! Core traits for the floor event-sourcing pipeline
//!
//! - [`CommandHandler`]: validates a command against the current snapshot
//!   and produces events. Never mutates.
//! - [`EventApplier`]: applies one event to a snapshot. The only code path
//!   that mutates floor state.

use enum_dispatch::enum_dispatch;
use shared::floor::{CommandErrorCode, FloorEvent, FloorSnapshot};
use shared::models::TableNumber;
use thiserror::Error;

use crate::layout::LayoutError;

/// Validation and processing errors raised by command actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorError {
    #[error("Server count {0} is outside 1..=7")]
    InvalidServerCount(i64),

    #[error("Table {0} is not a seatable table")]
    InvalidTableNumber(i64),

    #[error("Table {0} is already seated")]
    TableAlreadySeated(TableNumber),

    #[error("Table {0} is already open")]
    TableAlreadyOpen(TableNumber),

    #[error("Party size {0} is negative")]
    InvalidPartySize(i64),

    #[error("Server name must not be blank")]
    InvalidServer,

    #[error("No table is available to recommend")]
    NoRecommendationAvailable,

    #[error("Section {0} is not active")]
    SectionNotFound(i64),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FloorError {
    pub fn code(&self) -> CommandErrorCode {
        match self {
            FloorError::InvalidServerCount(_) => CommandErrorCode::InvalidServerCount,
            FloorError::InvalidTableNumber(_) => CommandErrorCode::InvalidTableNumber,
            FloorError::TableAlreadySeated(_) => CommandErrorCode::TableAlreadySeated,
            FloorError::TableAlreadyOpen(_) => CommandErrorCode::TableAlreadyOpen,
            FloorError::InvalidPartySize(_) => CommandErrorCode::InvalidPartySize,
            FloorError::InvalidServer => CommandErrorCode::InvalidServer,
            FloorError::NoRecommendationAvailable => CommandErrorCode::NoRecommendationAvailable,
            FloorError::SectionNotFound(_) => CommandErrorCode::SectionNotFound,
            FloorError::Layout(_) | FloorError::Internal(_) => CommandErrorCode::InternalError,
        }
    }
}

/// Command metadata copied onto every event the command produces
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub operator_name: String,
    pub timestamp: i64,
}

/// Read-only view of the floor plus the sequence allocator for one command
pub struct CommandContext<'a> {
    snapshot: &'a FloorSnapshot,
    sequence: u64,
}

impl<'a> CommandContext<'a> {
    pub fn new(snapshot: &'a FloorSnapshot, current_sequence: u64) -> Self {
        Self {
            snapshot,
            sequence: current_sequence,
        }
    }

    pub fn snapshot(&self) -> &FloorSnapshot {
        self.snapshot
    }

    /// Allocate the next event sequence number
    pub fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Last sequence allocated so far
    pub fn current_sequence(&self) -> u64 {
        self.sequence
    }
}

/// Command handler
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError>;
}

/// Event applier
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent);
}
