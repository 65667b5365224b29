//! Floor Event Sourcing Types
//!
//! - Commands: Requests from the host UI to change the floor
//! - Events: Immutable facts recorded after command processing
//! - Snapshot: Floor state computed from the event stream

pub mod command;
pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use command::{FloorCommand, FloorCommandPayload};
pub use event::{FloorEvent, FloorEventPayload, FloorEventType};
pub use snapshot::FloorSnapshot;
pub use types::*;
