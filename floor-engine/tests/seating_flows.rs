//! End-to-end seating flows through the public FloorManager API

use floor_engine::floor::{CommandErrorCode, FloorCommand, FloorCommandPayload, FloorEventPayload};
use floor_engine::layout::{self, partition};
use floor_engine::{FloorError, FloorManager, ManagerError};
use shared::models::{ServerCount, TableNumber};

fn manager(servers: i64) -> FloorManager {
    FloorManager::new(ServerCount::new(servers).unwrap()).unwrap()
}

fn table(n: i64) -> TableNumber {
    TableNumber::new(n).unwrap()
}

fn priorities(manager: &FloorManager) -> Vec<i32> {
    manager.get_floor().sections.iter().map(|s| s.priority).collect()
}

#[test]
fn single_server_recommends_first_window_table() {
    let manager = manager(1);
    let floor = manager.get_floor();

    assert!(
        floor
            .tables
            .iter()
            .filter(|t| !t.number.is_bar())
            .all(|t| t.section == 1)
    );
    let rec = manager.get_recommendation().unwrap();
    assert_eq!(rec.number, table(1));
    assert!(rec.is_window);
}

#[test]
fn two_servers_start_in_higher_priority_section() {
    let manager = manager(2);
    assert_eq!(priorities(&manager), vec![2, 1]);

    let rec = manager.get_recommendation().unwrap();
    assert_eq!(rec.section, 1);
    assert!(rec.is_window);
}

#[test]
fn confirming_rotates_section_priorities() {
    let manager = manager(3);
    assert_eq!(priorities(&manager), vec![3, 2, 1]);

    let seated = manager.confirm_recommended_seating("Ana", 2).unwrap();
    assert_eq!(seated, table(1));
    // Seated section drops by n - 1, the others gain 1
    assert_eq!(priorities(&manager), vec![1, 3, 2]);

    let next = manager.get_recommendation().unwrap();
    assert_eq!(next.section, 2);
    assert_eq!(next.number, table(7));
}

#[test]
fn repartition_has_no_memory() {
    let direct = manager(1);
    direct.set_active_server_count(1).unwrap();

    let bounced = manager(1);
    bounced.set_active_server_count(7).unwrap();
    bounced.set_active_server_count(1).unwrap();

    let sections = |m: &FloorManager| -> Vec<u8> {
        m.get_floor().tables.iter().map(|t| t.section).collect()
    };
    assert_eq!(sections(&direct), sections(&bounced));
    assert_eq!(priorities(&direct), priorities(&bounced));
}

#[test]
fn bar_slot_cannot_be_seated() {
    let manager = manager(2);
    let response = manager.execute_command(FloorCommand::new(
        "Test Host",
        FloorCommandPayload::SeatTable {
            table_number: 30,
            server: "Ana".to_string(),
            party_size: 2,
        },
    ));

    assert!(!response.success);
    assert_eq!(
        response.error.map(|e| e.code),
        Some(CommandErrorCode::InvalidTableNumber)
    );
    assert_eq!(manager.get_floor().seated_count(), 0);
    assert_eq!(manager.current_sequence(), 0);
}

#[test]
fn partition_covers_every_section_for_every_server_count() {
    for servers in ServerCount::all() {
        for number in TableNumber::all().filter(|t| !t.is_bar()) {
            let section = partition(servers, number);
            assert!(
                (1..=servers.get()).contains(&section),
                "table {number} with {servers} servers landed in section {section}"
            );
        }
        let used: std::collections::BTreeSet<_> =
            TableNumber::all().map(|t| partition(servers, t)).collect();
        assert_eq!(used.len(), servers.get() as usize);
    }
}

#[test]
fn confirm_fills_the_floor_then_runs_out() {
    for servers in 1..=7 {
        let manager = manager(servers);
        let mut seated = std::collections::BTreeSet::new();

        while manager.get_recommendation().is_some() {
            let number = manager.confirm_recommended_seating("Ana", 2).unwrap();
            assert!(!number.is_bar());
            assert!(seated.insert(number), "table {number} seated twice");

            let floor = manager.get_floor();
            assert_eq!(floor.seated_count(), floor.assigned_count());
        }

        assert_eq!(seated.len(), 35, "{servers} servers");
        let err = manager.confirm_recommended_seating("Ana", 2).unwrap_err();
        assert!(matches!(
            err,
            ManagerError::Floor(FloorError::NoRecommendationAvailable)
        ));
    }
}

#[test]
fn seated_tables_survive_repartition() {
    let manager = manager(2);
    manager.seat_table(12, "Ana", 4).unwrap();
    assert_eq!(manager.get_table_info(12).unwrap().section, 2);

    manager.set_active_server_count(5).unwrap();
    let info = manager.get_table_info(12).unwrap();
    assert_eq!(info.assigned_server.as_deref(), Some("Ana"));
    assert_eq!(info.section, partition(ServerCount::new(5).unwrap(), table(12)));

    manager.unseat_table(12).unwrap();
    let floor = manager.get_floor();
    assert_eq!(floor.seated_count(), 0);
    assert_eq!(floor.assigned_count(), 0);
}

#[test]
fn recommendation_query_is_idempotent() {
    let manager = manager(2);
    for n in 1..=11 {
        manager.seat_table(n, "Ana", 2).unwrap();
    }
    let sequence = manager.current_sequence();

    let first = manager.get_recommendation();
    let second = manager.get_recommendation();
    assert_eq!(first, second);
    assert_eq!(manager.current_sequence(), sequence);
}

#[test]
fn classify_matches_layout() {
    let manager = manager(1);
    for number in TableNumber::all() {
        assert_eq!(
            manager.classify_table(number.get() as i32).unwrap(),
            layout::classify(number).unwrap()
        );
    }
    assert!(manager.classify_table(0).is_err());
    assert!(manager.classify_table(37).is_err());
}

#[test]
fn snapshot_serializes_for_the_ui() {
    let manager = manager(3);
    manager.seat_table(7, "Ana", 3).unwrap();

    let floor = manager.get_floor();
    let json = serde_json::to_string(&floor).unwrap();
    let back: shared::floor::FloorSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, floor);
}

#[tokio::test]
async fn subscribers_receive_committed_events() {
    let manager = manager(1);
    let mut rx = manager.subscribe();

    manager.seat_table(1, "Ana", 2).unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.sequence, 1);
    match event.payload {
        FloorEventPayload::TableSeated {
            table_number,
            section,
            ..
        } => {
            assert_eq!(table_number, table(1));
            assert_eq!(section, 1);
        }
        other => panic!("unexpected payload {other:?}"),
    }
    assert!(rx.try_recv().is_err());
}
