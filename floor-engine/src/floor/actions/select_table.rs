//! SelectTable / DeselectTable command handlers
//!
//! Selection is UI focus only and never touches priorities.

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::{FloorEvent, FloorEventPayload};
use shared::models::TableNumber;

/// SelectTable action (toggles when the table is already selected)
#[derive(Debug, Clone)]
pub struct SelectTableAction {
    pub table_number: i32,
}

impl CommandHandler for SelectTableAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let table_number = TableNumber::seatable(self.table_number as i64)
            .map_err(|_| FloorError::InvalidTableNumber(self.table_number as i64))?;

        let payload = if ctx.snapshot().selected_table == Some(table_number) {
            FloorEventPayload::SelectionCleared
        } else {
            FloorEventPayload::TableSelected { table_number }
        };

        let seq = ctx.next_sequence();
        Ok(vec![FloorEvent::new(
            seq,
            metadata.command_id.clone(),
            metadata.operator_name.clone(),
            payload,
        )])
    }
}

/// DeselectTable action
#[derive(Debug, Clone)]
pub struct DeselectTableAction;

impl CommandHandler for DeselectTableAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        if ctx.snapshot().selected_table.is_none() {
            return Ok(vec![]);
        }

        let seq = ctx.next_sequence();
        Ok(vec![FloorEvent::new(
            seq,
            metadata.command_id.clone(),
            metadata.operator_name.clone(),
            FloorEventPayload::SelectionCleared,
        )])
    }
}
