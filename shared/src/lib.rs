//! Shared types for the floor manager
//!
//! Value types used by the floor engine and its host UI: error codes,
//! validated table/section models, and the command/event/snapshot
//! types exchanged across the UI boundary.

pub mod error;
pub mod floor;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use floor::{
    CommandError, CommandErrorCode, CommandResponse, FloorCommand, FloorCommandPayload,
    FloorEvent, FloorEventPayload, FloorEventType, FloorSnapshot, SyncResponse,
};
pub use models::{SectionId, ServerCount, TableNumber};
