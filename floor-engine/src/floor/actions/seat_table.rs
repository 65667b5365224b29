//! SeatTable command handler
//!
//! Seats a party at an open table and assigns it to a server.

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::{FloorEvent, FloorEventPayload};
use shared::models::TableNumber;

/// SeatTable action
#[derive(Debug, Clone)]
pub struct SeatTableAction {
    pub table_number: i32,
    pub server: String,
    pub party_size: i32,
}

impl CommandHandler for SeatTableAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let table = TableNumber::seatable(self.table_number as i64)
            .map_err(|_| FloorError::InvalidTableNumber(self.table_number as i64))?;
        seat(ctx, metadata, table, &self.server, self.party_size)
    }
}

/// Validate and build the TableSeated event for an already-parsed table
///
/// Shared with ConfirmRecommendedSeating, which picks the table itself.
pub(super) fn seat(
    ctx: &mut CommandContext<'_>,
    metadata: &CommandMetadata,
    table_number: TableNumber,
    server: &str,
    party_size: i32,
) -> Result<Vec<FloorEvent>, FloorError> {
    let party_size = u32::try_from(party_size)
        .map_err(|_| FloorError::InvalidPartySize(party_size as i64))?;

    let server = server.trim();
    if server.is_empty() {
        return Err(FloorError::InvalidServer);
    }

    let table = ctx
        .snapshot()
        .table(table_number)
        .ok_or(FloorError::InvalidTableNumber(table_number.get() as i64))?;
    if table.is_seated {
        return Err(FloorError::TableAlreadySeated(table_number));
    }

    // Capacity is informational only
    if party_size > table.capacity() {
        tracing::warn!(
            table = %table_number,
            party_size,
            capacity = table.capacity(),
            "Party exceeds table capacity"
        );
    }

    let section = table.section;
    let seq = ctx.next_sequence();
    let event = FloorEvent::new(
        seq,
        metadata.command_id.clone(),
        metadata.operator_name.clone(),
        FloorEventPayload::TableSeated {
            table_number,
            section,
            server: server.to_string(),
            party_size,
        },
    );

    Ok(vec![event])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::reducer::initial_floor;
    use shared::floor::FloorSnapshot;
    use shared::models::ServerCount;

    fn create_test_metadata() -> CommandMetadata {
        CommandMetadata {
            command_id: "cmd-1".to_string(),
            operator_name: "Host".to_string(),
            timestamp: 1234567890,
        }
    }

    fn create_seat_action(table_number: i32, party_size: i32) -> SeatTableAction {
        SeatTableAction {
            table_number,
            server: "Ana".to_string(),
            party_size,
        }
    }

    fn run(snapshot: &FloorSnapshot, action: SeatTableAction) -> Result<Vec<FloorEvent>, FloorError> {
        let mut ctx = CommandContext::new(snapshot, snapshot.last_sequence);
        action.execute(&mut ctx, &create_test_metadata())
    }

    #[test]
    fn test_seat_table_generates_event() {
        let snapshot = initial_floor(ServerCount::new(2).unwrap()).unwrap();
        let events = run(&snapshot, create_seat_action(12, 4)).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].payload,
            FloorEventPayload::TableSeated {
                table_number: TableNumber::new(12).unwrap(),
                section: 2,
                server: "Ana".to_string(),
                party_size: 4,
            }
        );
    }

    #[test]
    fn test_seat_table_trims_server_name() {
        let snapshot = initial_floor(ServerCount::ONE).unwrap();
        let mut action = create_seat_action(1, 2);
        action.server = "  Ana ".to_string();
        let events = run(&snapshot, action).unwrap();
        match &events[0].payload {
            FloorEventPayload::TableSeated { server, .. } => assert_eq!(server, "Ana"),
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_seat_bar_slot_fails() {
        let snapshot = initial_floor(ServerCount::ONE).unwrap();
        assert_eq!(
            run(&snapshot, create_seat_action(30, 2)),
            Err(FloorError::InvalidTableNumber(30))
        );
    }

    #[test]
    fn test_seat_out_of_range_fails() {
        let snapshot = initial_floor(ServerCount::ONE).unwrap();
        assert_eq!(
            run(&snapshot, create_seat_action(0, 2)),
            Err(FloorError::InvalidTableNumber(0))
        );
        assert_eq!(
            run(&snapshot, create_seat_action(37, 2)),
            Err(FloorError::InvalidTableNumber(37))
        );
    }

    #[test]
    fn test_seat_negative_party_fails() {
        let snapshot = initial_floor(ServerCount::ONE).unwrap();
        assert_eq!(
            run(&snapshot, create_seat_action(1, -1)),
            Err(FloorError::InvalidPartySize(-1))
        );
    }

    #[test]
    fn test_seat_zero_party_and_oversized_party_accepted() {
        let snapshot = initial_floor(ServerCount::ONE).unwrap();
        assert!(run(&snapshot, create_seat_action(1, 0)).is_ok());
        // Table 2 is a 4-top
        assert!(run(&snapshot, create_seat_action(2, 9)).is_ok());
    }

    #[test]
    fn test_seat_blank_server_fails() {
        let snapshot = initial_floor(ServerCount::ONE).unwrap();
        let mut action = create_seat_action(1, 2);
        action.server = "   ".to_string();
        assert_eq!(run(&snapshot, action), Err(FloorError::InvalidServer));
    }

    #[test]
    fn test_seat_already_seated_fails() {
        let mut snapshot = initial_floor(ServerCount::ONE).unwrap();
        let table = TableNumber::new(5).unwrap();
        if let Some(t) = snapshot.table_mut(table) {
            t.is_seated = true;
            t.assigned_server = Some("Ben".to_string());
        }
        assert_eq!(
            run(&snapshot, create_seat_action(5, 2)),
            Err(FloorError::TableAlreadySeated(table))
        );
    }
}
