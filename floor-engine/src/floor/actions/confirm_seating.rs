//! ConfirmRecommendedSeating command handler
//!
//! Seats the party at whatever table the recommendation engine currently
//! suggests.

use super::seat_table::seat;
use crate::floor::recommend::recommend;
use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::FloorEvent;

/// ConfirmRecommendedSeating action
#[derive(Debug, Clone)]
pub struct ConfirmSeatingAction {
    pub server: String,
    pub party_size: i32,
}

impl CommandHandler for ConfirmSeatingAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let table = recommend(ctx.snapshot())
            .table
            .ok_or(FloorError::NoRecommendationAvailable)?;
        tracing::debug!(table = %table, "Confirming recommended table");
        seat(ctx, metadata, table, &self.server, self.party_size)
    }
}
