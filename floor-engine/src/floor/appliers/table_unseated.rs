//! TableUnseated event applier
//!
//! Clears the table's occupancy. Priority shifts from earlier seatings
//! are not undone.

use crate::floor::traits::EventApplier;
use shared::floor::{FloorEvent, FloorEventPayload, FloorSnapshot};

/// TableUnseated applier
pub struct TableUnseatedApplier;

impl EventApplier for TableUnseatedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let FloorEventPayload::TableUnseated { table_number, .. } = &event.payload {
            if let Some(table) = snapshot.table_mut(*table_number) {
                table.is_seated = false;
                table.assigned_server = None;
                table.party_size = 0;
            }
            snapshot.last_sequence = event.sequence;
        }
    }
}
