//! Floor reducer
//!
//! Builds the initial floor and replays an event journal into a snapshot.
//! Replaying the manager's journal reproduces its live snapshot exactly.

use std::collections::BTreeSet;

use shared::floor::{FloorEvent, FloorEventPayload, FloorSnapshot};
use shared::models::ServerCount;

use super::appliers::apply_event;
use super::recommend::recommend;
use crate::layout::{self, LayoutError};

/// Open floor partitioned for `servers`, no events applied
pub fn initial_floor(servers: ServerCount) -> Result<FloorSnapshot, LayoutError> {
    let mut snapshot = FloorSnapshot {
        active_server_count: servers,
        tables: layout::build_tables()?,
        sections: Vec::new(),
        last_seated_section: None,
        skipped_sections: BTreeSet::new(),
        selected_table: None,
        recommendation: None,
        last_sequence: 0,
    };

    let partition = FloorEvent::new(
        0,
        "initial",
        "system",
        FloorEventPayload::ServerCountChanged { count: servers },
    );
    apply_event(&mut snapshot, &partition);
    snapshot.recommendation = recommend(&snapshot).table;

    Ok(snapshot)
}

/// Rebuild a snapshot from the initial floor and a journal in sequence order
pub fn replay<'a>(
    servers: ServerCount,
    events: impl IntoIterator<Item = &'a FloorEvent>,
) -> Result<FloorSnapshot, LayoutError> {
    let mut snapshot = initial_floor(servers)?;
    for event in events {
        apply_event(&mut snapshot, event);
    }
    snapshot.recommendation = recommend(&snapshot).table;
    Ok(snapshot)
}
