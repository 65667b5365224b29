//! Event applier implementations
//!
//! Each applier implements the `EventApplier` trait and handles
//! one specific event type. Appliers are PURE functions of
//! (snapshot, event).

use enum_dispatch::enum_dispatch;

use crate::floor::traits::EventApplier;
use shared::floor::{FloorEvent, FloorEventPayload, FloorSnapshot};

mod sections_skipped;
mod selection;
mod server_count_changed;
mod table_seated;
mod table_unseated;

pub use sections_skipped::SectionsSkippedApplier;
pub use selection::{SelectionClearedApplier, TableSelectedApplier};
pub use server_count_changed::ServerCountChangedApplier;
pub use table_seated::TableSeatedApplier;
pub use table_unseated::TableUnseatedApplier;

/// EventAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    ServerCountChanged(ServerCountChangedApplier),
    TableSeated(TableSeatedApplier),
    TableUnseated(TableUnseatedApplier),
    SectionsSkipped(SectionsSkippedApplier),
    TableSelected(TableSelectedApplier),
    SelectionCleared(SelectionClearedApplier),
}

/// Convert FloorEvent reference to EventAction
///
/// This is the ONLY place with a match on FloorEventPayload.
impl From<&FloorEvent> for EventAction {
    fn from(event: &FloorEvent) -> Self {
        match &event.payload {
            FloorEventPayload::ServerCountChanged { .. } => {
                EventAction::ServerCountChanged(ServerCountChangedApplier)
            }
            FloorEventPayload::TableSeated { .. } => EventAction::TableSeated(TableSeatedApplier),
            FloorEventPayload::TableUnseated { .. } => {
                EventAction::TableUnseated(TableUnseatedApplier)
            }
            FloorEventPayload::SectionsSkipped { .. } => {
                EventAction::SectionsSkipped(SectionsSkippedApplier)
            }
            FloorEventPayload::TableSelected { .. } => {
                EventAction::TableSelected(TableSelectedApplier)
            }
            FloorEventPayload::SelectionCleared => {
                EventAction::SelectionCleared(SelectionClearedApplier)
            }
        }
    }
}

/// Apply a single event through its applier
pub fn apply_event(snapshot: &mut FloorSnapshot, event: &FloorEvent) {
    let applier: EventAction = event.into();
    applier.apply(snapshot, event);
}
