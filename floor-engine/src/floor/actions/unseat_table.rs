//! UnseatTable command handler

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::{FloorEvent, FloorEventPayload};
use shared::models::TableNumber;

/// UnseatTable action
#[derive(Debug, Clone)]
pub struct UnseatTableAction {
    pub table_number: i32,
}

impl CommandHandler for UnseatTableAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let table_number = TableNumber::seatable(self.table_number as i64)
            .map_err(|_| FloorError::InvalidTableNumber(self.table_number as i64))?;

        let table = ctx
            .snapshot()
            .table(table_number)
            .ok_or(FloorError::InvalidTableNumber(self.table_number as i64))?;
        if !table.is_seated {
            return Err(FloorError::TableAlreadyOpen(table_number));
        }

        let section = table.section;
        let seq = ctx.next_sequence();
        let event = FloorEvent::new(
            seq,
            metadata.command_id.clone(),
            metadata.operator_name.clone(),
            FloorEventPayload::TableUnseated {
                table_number,
                section,
            },
        );

        Ok(vec![event])
    }
}
