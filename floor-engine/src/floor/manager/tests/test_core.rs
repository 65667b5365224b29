use super::*;

#[test]
fn test_new_manager_floor() {
    let manager = create_test_manager(1);
    let floor = manager.get_floor();

    assert_eq!(floor.tables.len(), 36);
    assert_eq!(floor.sections.len(), 1);
    assert_eq!(floor.seated_count(), 0);
    assert_eq!(manager.current_sequence(), 0);
    assert!(!manager.epoch().is_empty());
}

#[test]
fn test_seat_table() {
    let manager = create_test_manager(2);
    let response = manager.execute_command(seat_cmd(12, "Ana", 4));

    assert!(response.success);
    assert_eq!(response.table_number, Some(table(12)));

    let floor = manager.get_floor();
    let t = floor.table(table(12)).unwrap();
    assert!(t.is_seated);
    assert_eq!(t.assigned_server.as_deref(), Some("Ana"));
    assert_eq!(t.party_size, 4);
    assert_eq!(floor.last_seated_section, Some(2));
    assert_eq!(floor.seated_count(), floor.assigned_count());
}

#[test]
fn test_unseat_table() {
    let manager = create_test_manager(2);
    manager.seat_table(12, "Ana", 4).unwrap();
    let response = manager.execute_command(command(FloorCommandPayload::UnseatTable {
        table_number: 12,
    }));

    assert!(response.success);
    let floor = manager.get_floor();
    let t = floor.table(table(12)).unwrap();
    assert!(!t.is_seated);
    assert_eq!(t.assigned_server, None);
    assert_eq!(t.party_size, 0);
}

#[test]
fn test_idempotency() {
    let manager = create_test_manager(1);
    let cmd = seat_cmd(3, "Ana", 2);

    let first = manager.execute_command(cmd.clone());
    assert!(first.success);
    let sequence = manager.current_sequence();

    // Same command again
    let second = manager.execute_command(cmd);
    assert!(second.success);
    assert_eq!(second.table_number, None);
    assert_eq!(manager.current_sequence(), sequence);
    assert_eq!(manager.get_floor().seated_count(), 1);
}

#[test]
fn test_failed_command_is_not_marked_processed() {
    let manager = create_test_manager(1);
    manager.seat_table(3, "Ana", 2).unwrap();

    let cmd = seat_cmd(3, "Ben", 2);
    let response = manager.execute_command(cmd.clone());
    assert!(!response.success);

    manager.unseat_table(3).unwrap();
    let retry = manager.execute_command(cmd);
    assert!(retry.success);
    assert_eq!(
        manager.get_floor().table(table(3)).unwrap().assigned_server.as_deref(),
        Some("Ben")
    );
}

#[test]
fn test_response_carries_recommendation() {
    let manager = create_test_manager(1);
    let response = manager.execute_command(seat_cmd(1, "Ana", 2));
    assert_eq!(response.recommendation, Some(table(2)));
    assert_eq!(manager.get_recommendation().map(|t| t.number), Some(table(2)));
}

#[test]
fn test_select_toggle() {
    let manager = create_test_manager(1);
    assert_eq!(manager.select_table(5).unwrap(), Some(table(5)));
    assert_eq!(manager.select_table(5).unwrap(), None);
    assert_eq!(manager.select_table(5).unwrap(), Some(table(5)));
    assert_eq!(manager.select_table(6).unwrap(), Some(table(6)));
    manager.deselect_table().unwrap();
    assert_eq!(manager.get_floor().selected_table, None);
}

#[test]
fn test_selection_has_no_priority_effect() {
    let manager = create_test_manager(3);
    let before = manager.get_floor();
    manager.select_table(10).unwrap();
    let after = manager.get_floor();
    assert_eq!(before.sections, after.sections);
    assert_eq!(before.recommendation, after.recommendation);
}

#[test]
fn test_selection_survives_seating() {
    let manager = create_test_manager(1);
    manager.select_table(4).unwrap();
    manager.seat_table(4, "Ana", 6).unwrap();
    assert_eq!(manager.get_floor().selected_table, Some(table(4)));
}

#[test]
fn test_classify_table() {
    let manager = create_test_manager(1);
    assert_eq!(manager.classify_table(1).unwrap(), (TableShape::Rectangle, 6));
    assert_eq!(manager.classify_table(21).unwrap(), (TableShape::Circle, 8));
    assert_eq!(manager.classify_table(36).unwrap(), (TableShape::Square, 4));
    assert_eq!(manager.classify_table(30).unwrap(), (TableShape::Bar, 0));
    assert!(matches!(
        manager.classify_table(37),
        Err(ManagerError::Floor(FloorError::InvalidTableNumber(37)))
    ));
}

#[test]
fn test_get_table_info() {
    let manager = create_test_manager(2);
    manager.seat_table(21, "Ana", 7).unwrap();
    manager.select_table(21).unwrap();

    let info = manager.get_table_info(21).unwrap();
    assert_eq!(info.number, table(21));
    assert_eq!(info.section, 2);
    assert_eq!(info.shape, TableShape::Circle);
    assert_eq!(info.capacity, 8);
    assert!(!info.is_window);
    assert!(info.is_seated);
    assert_eq!(info.party_size, 7);
    assert_eq!(info.assigned_server.as_deref(), Some("Ana"));
    assert!(info.is_selected);
    assert!(!info.is_recommended);

    assert!(manager.get_table_info(30).is_err());
}

#[test]
fn test_section_summaries() {
    let manager = create_test_manager(2);
    manager.seat_table(1, "Ana", 2).unwrap();
    manager.seat_table(2, "Ana", 3).unwrap();
    manager.seat_table(12, "Ben", 4).unwrap();

    let summaries = manager.section_summaries();
    assert_eq!(summaries.len(), 2);
    // Section 1: 1..=11 and 29..=36 minus the bar
    assert_eq!(summaries[0].seated_tables, 2);
    assert_eq!(summaries[0].open_tables, 16);
    assert_eq!(summaries[0].seated_guests, 5);
    assert_eq!(summaries[1].seated_tables, 1);
    assert_eq!(summaries[1].open_tables, 16);
    assert_eq!(summaries[1].seated_guests, 4);
}

#[test]
fn test_section_summary_lookup() {
    let manager = create_test_manager(3);
    manager.seat_table(7, "Ana", 2).unwrap();

    let summary = manager.section_summary(2).unwrap();
    assert_eq!(summary.id, 2);
    assert_eq!(summary.seated_tables, 1);

    for missing in [0, 4, -1] {
        let err = manager.section_summary(missing).unwrap_err();
        assert!(matches!(err, ManagerError::Floor(FloorError::SectionNotFound(n)) if n == missing as i64));
        let app: shared::AppError = err.into();
        assert_eq!(app.code, shared::ErrorCode::SectionNotFound);
    }

    // Shrinking the floor retires the upper sections
    manager.set_active_server_count(2).unwrap();
    assert!(manager.section_summary(3).is_err());
}

#[test]
fn test_execute_command_with_events() {
    let manager = create_test_manager(1);
    let (response, events) = manager.execute_command_with_events(seat_cmd(2, "Ana", 2));
    assert!(response.success);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, FloorEventType::TableSeated);
    assert_eq!(events[0].sequence, 1);
    assert_eq!(events[0].operator_name, "Test Host");
}

#[test]
fn test_typed_operations_use_configured_operator() {
    let manager = create_test_manager(1).with_operator("Maria");
    manager.seat_table(2, "Ana", 2).unwrap();
    let events = manager.events_since(0).unwrap();
    assert_eq!(events[0].operator_name, "Maria");
}

#[test]
fn test_clones_share_state() {
    let manager = create_test_manager(1);
    let other = manager.clone();
    other.seat_table(9, "Ana", 2).unwrap();
    assert!(manager.get_floor().table(table(9)).unwrap().is_seated);
    assert_eq!(manager.epoch(), other.epoch());
}
