//! Selection event appliers

use crate::floor::traits::EventApplier;
use shared::floor::{FloorEvent, FloorEventPayload, FloorSnapshot};

/// TableSelected applier
pub struct TableSelectedApplier;

impl EventApplier for TableSelectedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let FloorEventPayload::TableSelected { table_number } = &event.payload {
            snapshot.selected_table = Some(*table_number);
            snapshot.last_sequence = event.sequence;
        }
    }
}

/// SelectionCleared applier
pub struct SelectionClearedApplier;

impl EventApplier for SelectionClearedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let FloorEventPayload::SelectionCleared = &event.payload {
            snapshot.selected_table = None;
            snapshot.last_sequence = event.sequence;
        }
    }
}
