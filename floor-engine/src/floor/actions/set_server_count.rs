//! SetActiveServerCount command handler
//!
//! Re-partitions the floor for a new number of servers.

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::{FloorEvent, FloorEventPayload};
use shared::models::ServerCount;

/// SetActiveServerCount action
#[derive(Debug, Clone)]
pub struct SetServerCountAction {
    pub count: i32,
}

impl CommandHandler for SetServerCountAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let count = ServerCount::new(self.count as i64)
            .map_err(|_| FloorError::InvalidServerCount(self.count as i64))?;

        let seq = ctx.next_sequence();
        let event = FloorEvent::new(
            seq,
            metadata.command_id.clone(),
            metadata.operator_name.clone(),
            FloorEventPayload::ServerCountChanged { count },
        );

        Ok(vec![event])
    }
}
