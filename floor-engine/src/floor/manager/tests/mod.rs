use super::*;
use shared::floor::{CommandErrorCode, FloorEventType};

fn create_test_manager(servers: i64) -> FloorManager {
    FloorManager::new(ServerCount::new(servers).unwrap()).unwrap()
}

fn command(payload: FloorCommandPayload) -> FloorCommand {
    FloorCommand::new("Test Host", payload)
}

fn seat_cmd(table_number: i32, server: &str, party_size: i32) -> FloorCommand {
    command(FloorCommandPayload::SeatTable {
        table_number,
        server: server.to_string(),
        party_size,
    })
}

fn table(n: i64) -> TableNumber {
    TableNumber::new(n).unwrap()
}

fn section_priorities(manager: &FloorManager) -> Vec<i32> {
    manager
        .get_floor()
        .sections
        .iter()
        .map(|s| s.priority)
        .collect()
}

/// Seat every seatable table in `numbers`
fn seat_all(manager: &FloorManager, numbers: impl IntoIterator<Item = i32>) {
    for n in numbers {
        manager.seat_table(n, "Ana", 2).unwrap();
    }
}

mod test_core;
