//! Floor event sourcing
//!
//! - **traits**: `CommandHandler` / `EventApplier` seams and `FloorError`
//! - **actions**: one command handler per floor operation
//! - **appliers**: one event applier per event type
//! - **recommend**: the recommendation engine (pure)
//! - **reducer**: initial floor and journal replay
//! - **manager**: `FloorManager`, the single writer
//!
//! # Architecture
//!
//! ```text
//! FloorCommand → FloorManager → CommandAction → FloorEvent(s)
//!                     │                              │
//!                     │                     EventApplier → FloorSnapshot
//!                     │                              │
//!                     ├── recommend() ── new skips → SectionsSkipped
//!                     ├── journal (bounded)
//!                     └── broadcast → subscribers
//! ```

pub mod traits;

pub mod actions;
pub mod appliers;
pub mod manager;
pub mod recommend;
pub mod reducer;

pub use manager::{FloorManager, ManagerError, ManagerResult};
pub use recommend::{Recommendation, recommend};
pub use traits::FloorError;

// Re-export shared types for convenience
pub use shared::floor::{
    CommandError, CommandErrorCode, CommandResponse, FloorCommand, FloorCommandPayload,
    FloorEvent, FloorEventPayload, FloorEventType, FloorSnapshot, SyncResponse,
};
