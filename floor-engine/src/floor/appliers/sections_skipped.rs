//! SectionsSkipped event applier

use crate::floor::traits::EventApplier;
use shared::floor::{FloorEvent, FloorEventPayload, FloorSnapshot};

/// SectionsSkipped applier
pub struct SectionsSkippedApplier;

impl EventApplier for SectionsSkippedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let FloorEventPayload::SectionsSkipped { sections } = &event.payload {
            snapshot.skipped_sections.extend(sections.iter().copied());
            snapshot.last_sequence = event.sequence;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::reducer::initial_floor;
    use shared::models::ServerCount;

    #[test]
    fn test_sections_skipped_accumulates() {
        let mut snapshot = initial_floor(ServerCount::new(4).unwrap()).unwrap();
        let event = |seq, sections: Vec<u8>| {
            FloorEvent::new(seq, "cmd", "Host", FloorEventPayload::SectionsSkipped { sections })
        };

        SectionsSkippedApplier.apply(&mut snapshot, &event(1, vec![1, 2]));
        SectionsSkippedApplier.apply(&mut snapshot, &event(2, vec![2, 3]));

        assert_eq!(snapshot.skipped_sections.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(snapshot.last_sequence, 2);
    }
}
