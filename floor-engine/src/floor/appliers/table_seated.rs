//! TableSeated event applier
//!
//! Marks the table seated and rotates section priorities so the next
//! party lands in another server's section.

use crate::floor::traits::EventApplier;
use shared::floor::{FloorEvent, FloorEventPayload, FloorSnapshot};

/// TableSeated applier
pub struct TableSeatedApplier;

impl EventApplier for TableSeatedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let FloorEventPayload::TableSeated {
            table_number,
            section,
            server,
            party_size,
        } = &event.payload
        {
            let servers = snapshot.active_server_count.get() as i32;

            if let Some(table) = snapshot.table_mut(*table_number) {
                table.is_seated = true;
                table.assigned_server = Some(server.clone());
                table.party_size = *party_size;
                table.priority = 1;
            }

            // Seated section drops by (n - 1), every other section gains 1
            for s in snapshot.sections.iter_mut() {
                if s.id == *section {
                    s.priority -= servers - 1;
                } else {
                    s.priority += 1;
                }
            }

            for table in snapshot
                .tables
                .iter_mut()
                .filter(|t| t.section != *section && !t.number.is_bar())
            {
                table.priority += 1;
            }

            snapshot.last_seated_section = Some(*section);
            snapshot.skipped_sections.remove(section);
            snapshot.last_sequence = event.sequence;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::reducer::initial_floor;
    use shared::models::{ServerCount, TableNumber};

    fn seated(table: u8, section: u8) -> FloorEvent {
        FloorEvent::new(
            7,
            "cmd-1",
            "Host",
            FloorEventPayload::TableSeated {
                table_number: TableNumber::try_from(table).unwrap(),
                section,
                server: "Ana".to_string(),
                party_size: 4,
            },
        )
    }

    #[test]
    fn test_table_seated_sets_table_fields() {
        let mut snapshot = initial_floor(ServerCount::new(3).unwrap()).unwrap();
        TableSeatedApplier.apply(&mut snapshot, &seated(1, 1));

        let table = snapshot.table(TableNumber::new(1).unwrap()).unwrap();
        assert!(table.is_seated);
        assert_eq!(table.assigned_server.as_deref(), Some("Ana"));
        assert_eq!(table.party_size, 4);
        assert_eq!(table.priority, 1);
        assert_eq!(snapshot.last_seated_section, Some(1));
        assert_eq!(snapshot.last_sequence, 7);
    }

    #[test]
    fn test_table_seated_rotates_section_priorities() {
        let mut snapshot = initial_floor(ServerCount::new(3).unwrap()).unwrap();
        // 3, 2, 1
        TableSeatedApplier.apply(&mut snapshot, &seated(1, 1));

        let priorities: Vec<i32> = snapshot.sections.iter().map(|s| s.priority).collect();
        assert_eq!(priorities, vec![1, 3, 2]);
    }

    #[test]
    fn test_table_seated_bumps_tables_outside_section() {
        let mut snapshot = initial_floor(ServerCount::new(2).unwrap()).unwrap();
        TableSeatedApplier.apply(&mut snapshot, &seated(1, 1));

        // Same section, untouched
        assert_eq!(snapshot.table(TableNumber::new(2).unwrap()).unwrap().priority, 0);
        // Section 2
        assert_eq!(snapshot.table(TableNumber::new(12).unwrap()).unwrap().priority, 1);
        // Bar is never scored
        assert_eq!(snapshot.table(TableNumber::new(30).unwrap()).unwrap().priority, 0);
    }

    #[test]
    fn test_table_seated_clears_skip_for_section() {
        let mut snapshot = initial_floor(ServerCount::new(2).unwrap()).unwrap();
        snapshot.skipped_sections.insert(1);
        snapshot.skipped_sections.insert(2);
        TableSeatedApplier.apply(&mut snapshot, &seated(1, 1));
        assert!(!snapshot.is_skipped(1));
        assert!(snapshot.is_skipped(2));
    }
}
