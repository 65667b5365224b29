//! ServerCountChanged event applier
//!
//! Rebuilds sections and re-partitions every table. Partitioning has no
//! memory: the result depends only on the new count.

use crate::floor::traits::EventApplier;
use crate::layout::partition;
use shared::floor::{FloorEvent, FloorEventPayload, FloorSnapshot};
use shared::models::Section;

/// ServerCountChanged applier
pub struct ServerCountChangedApplier;

impl EventApplier for ServerCountChangedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let FloorEventPayload::ServerCountChanged { count } = &event.payload {
            let n = count.get() as i32;
            snapshot.active_server_count = *count;
            // Section 1 starts highest
            snapshot.sections = count
                .sections()
                .map(|id| Section {
                    id,
                    priority: n - id as i32 + 1,
                })
                .collect();

            for table in snapshot.tables.iter_mut() {
                table.section = partition(*count, table.number);
                table.priority = if table.is_seated { 1 } else { 0 };
            }

            snapshot.skipped_sections.clear();
            snapshot.last_seated_section = None;
            snapshot.last_sequence = event.sequence;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::reducer::initial_floor;
    use shared::models::{ServerCount, TableNumber};

    fn count_changed(sequence: u64, count: u8) -> FloorEvent {
        FloorEvent::new(
            sequence,
            "cmd-1",
            "Host",
            FloorEventPayload::ServerCountChanged {
                count: ServerCount::try_from(count).unwrap(),
            },
        )
    }

    #[test]
    fn test_sections_rebuilt_with_descending_priority() {
        let mut snapshot = initial_floor(ServerCount::ONE).unwrap();
        ServerCountChangedApplier.apply(&mut snapshot, &count_changed(2, 4));

        assert_eq!(snapshot.active_server_count.get(), 4);
        let priorities: Vec<(u8, i32)> = snapshot.sections.iter().map(|s| (s.id, s.priority)).collect();
        assert_eq!(priorities, vec![(1, 4), (2, 3), (3, 2), (4, 1)]);
        assert_eq!(snapshot.last_sequence, 2);
    }

    #[test]
    fn test_tables_repartitioned_and_state_reset() {
        let mut snapshot = initial_floor(ServerCount::ONE).unwrap();
        let seated = TableNumber::new(18).unwrap();
        if let Some(t) = snapshot.table_mut(seated) {
            t.is_seated = true;
            t.assigned_server = Some("Ana".to_string());
            t.priority = 5;
        }
        if let Some(t) = snapshot.table_mut(TableNumber::new(19).unwrap()) {
            t.priority = 3;
        }
        snapshot.skipped_sections.insert(1);
        snapshot.last_seated_section = Some(1);

        ServerCountChangedApplier.apply(&mut snapshot, &count_changed(1, 2));

        let t18 = snapshot.table(seated).unwrap();
        assert_eq!(t18.section, 2);
        assert_eq!(t18.priority, 1);
        assert!(t18.is_seated);
        assert_eq!(snapshot.table(TableNumber::new(19).unwrap()).unwrap().priority, 0);
        assert_eq!(snapshot.table(TableNumber::new(1).unwrap()).unwrap().section, 1);
        assert!(snapshot.skipped_sections.is_empty());
        assert_eq!(snapshot.last_seated_section, None);
    }
}
