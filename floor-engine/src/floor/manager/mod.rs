//! FloorManager - command processing and event generation
//!
//! This module handles:
//! - Command validation and processing
//! - Event generation with global sequence numbers
//! - Snapshot updates through event appliers
//! - Recommendation recomputation after every command
//! - A bounded in-memory event journal for reconnect sync
//! - Event broadcasting
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Take the write lock
//!     ├─ 2. Idempotency check (command_id)
//!     ├─ 3. Convert command to action and execute against the snapshot
//!     ├─ 4. Apply events via EventApplier
//!     ├─ 5. Recommendation pass; record newly skipped sections as an event
//!     ├─ 6. Journal events, mark command processed
//!     ├─ 7. Broadcast event(s) before releasing the lock, keeping order
//!     └─ 8. Return response
//! ```

mod error;
pub use error::*;

use super::actions::CommandAction;
use super::appliers::apply_event;
use super::recommend::recommend;
use super::reducer;
use super::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use crate::audit_log;
use crate::core::Config;
use crate::layout;
use parking_lot::RwLock;
use shared::floor::{
    CommandResponse, FloorCommand, FloorCommandPayload, FloorEvent, FloorEventPayload,
    FloorSnapshot, SyncResponse,
};
use shared::models::{SectionSummary, ServerCount, Table, TableInfo, TableNumber, TableShape};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Default event broadcast channel capacity
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Default number of events kept for incremental sync
pub const DEFAULT_JOURNAL_LIMIT: usize = 10_000;

/// Operator recorded on commands issued through the typed API
pub const DEFAULT_OPERATOR: &str = "host";

/// Mutable floor state, guarded by a single lock
struct FloorState {
    snapshot: FloorSnapshot,
    /// Last allocated event sequence
    sequence: u64,
    journal: VecDeque<FloorEvent>,
    processed: HashSet<String>,
    processed_order: VecDeque<String>,
}

impl FloorState {
    fn record(&mut self, events: &[FloorEvent], limit: usize) {
        for event in events {
            self.journal.push_back(event.clone());
        }
        while self.journal.len() > limit {
            self.journal.pop_front();
        }
    }

    fn mark_processed(&mut self, command_id: &str, limit: usize) {
        if self.processed.insert(command_id.to_string()) {
            self.processed_order.push_back(command_id.to_string());
        }
        while self.processed_order.len() > limit {
            if let Some(oldest) = self.processed_order.pop_front() {
                self.processed.remove(&oldest);
            }
        }
    }

    /// First sequence still held in the journal
    fn journal_start(&self) -> u64 {
        self.journal
            .front()
            .map_or(self.sequence + 1, |event| event.sequence)
    }
}

/// FloorManager for command processing
///
/// Cloning shares the same floor. The `epoch` is generated on construction;
/// clients use it to detect a restarted host and trigger a full resync.
#[derive(Clone)]
pub struct FloorManager {
    state: Arc<RwLock<FloorState>>,
    event_tx: broadcast::Sender<FloorEvent>,
    epoch: Arc<str>,
    initial_server_count: ServerCount,
    journal_limit: usize,
    operator: Arc<str>,
}

impl std::fmt::Debug for FloorManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloorManager")
            .field("state", &"<RwLock<FloorState>>")
            .field("event_tx", &"<broadcast::Sender>")
            .field("epoch", &self.epoch)
            .field("journal_limit", &self.journal_limit)
            .finish()
    }
}

impl FloorManager {
    /// Create a manager with default channel and journal sizes
    pub fn new(initial_server_count: ServerCount) -> ManagerResult<Self> {
        Self::with_limits(
            initial_server_count,
            DEFAULT_EVENT_CHANNEL_CAPACITY,
            DEFAULT_JOURNAL_LIMIT,
        )
    }

    pub fn from_config(config: &Config) -> ManagerResult<Self> {
        Self::with_limits(
            config.initial_server_count,
            config.event_channel_capacity,
            config.journal_limit,
        )
    }

    pub fn with_limits(
        initial_server_count: ServerCount,
        channel_capacity: usize,
        journal_limit: usize,
    ) -> ManagerResult<Self> {
        let snapshot = reducer::initial_floor(initial_server_count)?;
        let (event_tx, _) = broadcast::channel(channel_capacity.max(1));
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            epoch = %epoch,
            servers = %initial_server_count,
            "FloorManager started with new epoch"
        );

        Ok(Self {
            state: Arc::new(RwLock::new(FloorState {
                snapshot,
                sequence: 0,
                journal: VecDeque::new(),
                processed: HashSet::new(),
                processed_order: VecDeque::new(),
            })),
            event_tx,
            epoch: epoch.into(),
            initial_server_count,
            journal_limit: journal_limit.max(1),
            operator: DEFAULT_OPERATOR.into(),
        })
    }

    /// Operator name recorded on commands issued through the typed API
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        let operator: String = operator.into();
        self.operator = operator.into();
        self
    }

    /// Get the manager epoch (unique instance ID)
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<FloorEvent> {
        self.event_tx.subscribe()
    }

    /// Execute a command and return the response
    pub fn execute_command(&self, cmd: FloorCommand) -> CommandResponse {
        self.execute_command_with_events(cmd).0
    }

    /// Execute a command and return both the response and generated events
    ///
    /// Events are broadcast to subscribers as well.
    pub fn execute_command_with_events(
        &self,
        cmd: FloorCommand,
    ) -> (CommandResponse, Vec<FloorEvent>) {
        let command_id = cmd.command_id.clone();
        match self.process_command(cmd) {
            Ok(result) => result,
            Err(err) => (CommandResponse::error(command_id, err.into()), vec![]),
        }
    }

    fn broadcast(&self, events: &[FloorEvent]) {
        for event in events {
            if self.event_tx.send(event.clone()).is_err() {
                tracing::debug!("Event broadcast skipped: no active receivers");
                break;
            }
        }
    }

    /// Process command and return response with events
    fn process_command(&self, cmd: FloorCommand) -> ManagerResult<(CommandResponse, Vec<FloorEvent>)> {
        tracing::debug!(
            command_id = %cmd.command_id,
            command = cmd.payload.name(),
            payload = ?cmd.payload,
            "Processing command"
        );

        let mut state = self.state.write();

        // 1. Idempotency check
        if state.processed.contains(&cmd.command_id) {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return Ok((CommandResponse::duplicate(cmd.command_id), vec![]));
        }

        // 2. Execute action against the current snapshot
        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            operator_name: cmd.operator_name.clone(),
            timestamp: cmd.timestamp,
        };
        let action = CommandAction::from(&cmd);
        let (mut events, sequence) = {
            let mut ctx = CommandContext::new(&state.snapshot, state.sequence);
            let events = action.execute(&mut ctx, &metadata).map_err(|e| {
                tracing::warn!(
                    command_id = %cmd.command_id,
                    command = cmd.payload.name(),
                    error = %e,
                    "Command rejected"
                );
                ManagerError::from(e)
            })?;
            (events, ctx.current_sequence())
        };
        state.sequence = sequence;

        // 3. Apply events
        for event in &events {
            apply_event(&mut state.snapshot, event);
        }

        // 4. Recommendation pass; the scan itself never mutates
        let recommendation = recommend(&state.snapshot);
        let new_skips = recommendation.new_skips(&state.snapshot);
        if !new_skips.is_empty() {
            state.sequence += 1;
            let skipped = FloorEvent::new(
                state.sequence,
                metadata.command_id.clone(),
                metadata.operator_name.clone(),
                FloorEventPayload::SectionsSkipped { sections: new_skips },
            );
            apply_event(&mut state.snapshot, &skipped);
            events.push(skipped);
        }
        state.snapshot.recommendation = recommendation.table;

        // 5. Journal and mark processed
        state.record(&events, self.journal_limit);
        state.mark_processed(&cmd.command_id, self.journal_limit);

        let table_number = events.iter().find_map(|event| match &event.payload {
            FloorEventPayload::TableSeated { table_number, .. }
            | FloorEventPayload::TableUnseated { table_number, .. }
            | FloorEventPayload::TableSelected { table_number } => Some(*table_number),
            _ => None,
        });
        let snapshot = &state.snapshot;
        log_committed(&cmd, &events, snapshot);
        self.broadcast(&events);

        Ok((
            CommandResponse::success(cmd.command_id, table_number, snapshot.recommendation),
            events,
        ))
    }

    /// Run a typed command through the same pipeline as `execute_command`
    fn dispatch(&self, payload: FloorCommandPayload) -> ManagerResult<(CommandResponse, Vec<FloorEvent>)> {
        let cmd = FloorCommand::new(self.operator.to_string(), payload);
        self.process_command(cmd)
    }

    // ========== Operations ==========

    /// Re-partition the floor for `count` active servers
    pub fn set_active_server_count(&self, count: i32) -> ManagerResult<()> {
        self.dispatch(FloorCommandPayload::SetActiveServerCount { count })?;
        Ok(())
    }

    pub fn seat_table(&self, table_number: i32, server: &str, party_size: i32) -> ManagerResult<()> {
        self.dispatch(FloorCommandPayload::SeatTable {
            table_number,
            server: server.to_string(),
            party_size,
        })?;
        Ok(())
    }

    pub fn unseat_table(&self, table_number: i32) -> ManagerResult<()> {
        self.dispatch(FloorCommandPayload::UnseatTable { table_number })?;
        Ok(())
    }

    /// Seat the party at the recommended table and return that table
    pub fn confirm_recommended_seating(
        &self,
        server: &str,
        party_size: i32,
    ) -> ManagerResult<TableNumber> {
        let (response, _) = self.dispatch(FloorCommandPayload::ConfirmRecommendedSeating {
            server: server.to_string(),
            party_size,
        })?;
        response
            .table_number
            .ok_or_else(|| ManagerError::Internal("confirmed seating produced no table".into()))
    }

    /// Toggle selection of a table; returns the selection afterwards
    pub fn select_table(&self, table_number: i32) -> ManagerResult<Option<TableNumber>> {
        self.dispatch(FloorCommandPayload::SelectTable { table_number })?;
        Ok(self.state.read().snapshot.selected_table)
    }

    pub fn deselect_table(&self) -> ManagerResult<()> {
        self.dispatch(FloorCommandPayload::DeselectTable)?;
        Ok(())
    }

    // ========== Queries ==========

    /// Read-only copy of the floor for rendering
    pub fn get_floor(&self) -> FloorSnapshot {
        self.state.read().snapshot.clone()
    }

    pub fn get_recommendation(&self) -> Option<Table> {
        let state = self.state.read();
        state
            .snapshot
            .recommendation
            .and_then(|number| state.snapshot.table(number).cloned())
    }

    pub fn classify_table(&self, table_number: i32) -> ManagerResult<(TableShape, u32)> {
        let number = TableNumber::new(table_number as i64)
            .map_err(|_| FloorError::InvalidTableNumber(table_number as i64))?;
        Ok(layout::classify(number)?)
    }

    pub fn get_table_info(&self, table_number: i32) -> ManagerResult<TableInfo> {
        let number = TableNumber::seatable(table_number as i64)
            .map_err(|_| FloorError::InvalidTableNumber(table_number as i64))?;
        self.state
            .read()
            .snapshot
            .table_info(number)
            .ok_or_else(|| FloorError::InvalidTableNumber(table_number as i64).into())
    }

    pub fn section_summaries(&self) -> Vec<SectionSummary> {
        self.state.read().snapshot.section_summaries()
    }

    /// Summary of one active section
    pub fn section_summary(&self, section: i32) -> ManagerResult<SectionSummary> {
        self.section_summaries()
            .into_iter()
            .find(|s| i32::from(s.id) == section)
            .ok_or_else(|| FloorError::SectionNotFound(section as i64).into())
    }

    pub fn current_sequence(&self) -> u64 {
        self.state.read().sequence
    }

    /// Events after `since`, or `None` when the journal no longer covers them
    pub fn events_since(&self, since: u64) -> Option<Vec<FloorEvent>> {
        let state = self.state.read();
        if since >= state.sequence {
            return Some(vec![]);
        }
        if since + 1 < state.journal_start() {
            return None;
        }
        Some(
            state
                .journal
                .iter()
                .filter(|event| event.sequence > since)
                .cloned()
                .collect(),
        )
    }

    /// Reconnect sync: incremental events when possible, else a full snapshot
    ///
    /// A client on a different epoch always gets a full snapshot.
    pub fn sync(&self, since: u64, client_epoch: Option<&str>) -> SyncResponse {
        let epoch = self.epoch.to_string();
        let same_epoch = client_epoch.is_none_or(|e| e == &*self.epoch);

        if same_epoch && let Some(events) = self.events_since(since) {
            return SyncResponse::incremental(events, self.current_sequence(), epoch);
        }

        let state = self.state.read();
        tracing::info!(since, server_sequence = state.sequence, "Full sync required");
        SyncResponse::full_sync(state.snapshot.clone(), state.sequence, epoch)
    }

    /// Replay the journal from the initial floor
    ///
    /// Fails once the journal has been truncated.
    pub fn rebuild_snapshot(&self) -> ManagerResult<FloorSnapshot> {
        let state = self.state.read();
        if state.journal_start() > 1 {
            return Err(ManagerError::Internal(format!(
                "journal starts at sequence {}, cannot replay from the initial floor",
                state.journal_start()
            )));
        }
        Ok(reducer::replay(self.initial_server_count, &state.journal)?)
    }
}

/// Log the outcome of a committed command
fn log_committed(cmd: &FloorCommand, events: &[FloorEvent], snapshot: &FloorSnapshot) {
    for event in events {
        match &event.payload {
            FloorEventPayload::ServerCountChanged { count } => {
                tracing::info!(servers = %count, sequence = event.sequence, "Floor re-partitioned");
            }
            FloorEventPayload::TableSeated {
                table_number,
                section,
                server,
                party_size,
            } => {
                tracing::info!(
                    table = %table_number,
                    section,
                    server = %server,
                    party_size,
                    sequence = event.sequence,
                    "Table seated"
                );
                audit_log!(
                    cmd.operator_name.as_str(),
                    "seat",
                    format!("table:{}", table_number).as_str(),
                    format!("server={} party={}", server, party_size).as_str()
                );
            }
            FloorEventPayload::TableUnseated {
                table_number,
                section,
            } => {
                tracing::info!(table = %table_number, section, sequence = event.sequence, "Table unseated");
                audit_log!(
                    cmd.operator_name.as_str(),
                    "unseat",
                    format!("table:{}", table_number).as_str()
                );
            }
            FloorEventPayload::SectionsSkipped { sections } => {
                tracing::debug!(?sections, "Sections skipped by recommendation pass");
            }
            FloorEventPayload::TableSelected { table_number } => {
                tracing::debug!(table = %table_number, "Table selected");
            }
            FloorEventPayload::SelectionCleared => {
                tracing::debug!("Selection cleared");
            }
        }
    }
    tracing::debug!(
        recommendation = ?snapshot.recommendation.map(|t| t.get()),
        seated = snapshot.seated_count(),
        "Recommendation recomputed"
    );
}

#[cfg(test)]
mod tests;
