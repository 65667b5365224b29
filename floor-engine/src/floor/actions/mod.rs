//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::{FloorCommand, FloorCommandPayload, FloorEvent};

mod confirm_seating;
mod seat_table;
mod select_table;
mod set_server_count;
mod unseat_table;

pub use confirm_seating::ConfirmSeatingAction;
pub use seat_table::SeatTableAction;
pub use select_table::{DeselectTableAction, SelectTableAction};
pub use set_server_count::SetServerCountAction;
pub use unseat_table::UnseatTableAction;

/// CommandAction enum - dispatches to concrete action implementations
#[derive(Debug, Clone)]
pub enum CommandAction {
    SetServerCount(SetServerCountAction),
    SeatTable(SeatTableAction),
    UnseatTable(UnseatTableAction),
    ConfirmSeating(ConfirmSeatingAction),
    SelectTable(SelectTableAction),
    DeselectTable(DeselectTableAction),
}

impl CommandHandler for CommandAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        match self {
            CommandAction::SetServerCount(action) => action.execute(ctx, metadata),
            CommandAction::SeatTable(action) => action.execute(ctx, metadata),
            CommandAction::UnseatTable(action) => action.execute(ctx, metadata),
            CommandAction::ConfirmSeating(action) => action.execute(ctx, metadata),
            CommandAction::SelectTable(action) => action.execute(ctx, metadata),
            CommandAction::DeselectTable(action) => action.execute(ctx, metadata),
        }
    }
}

/// Convert FloorCommand to CommandAction
///
/// This is the ONLY place with a match on FloorCommandPayload.
impl From<&FloorCommand> for CommandAction {
    fn from(cmd: &FloorCommand) -> Self {
        match &cmd.payload {
            FloorCommandPayload::SetActiveServerCount { count } => {
                CommandAction::SetServerCount(SetServerCountAction { count: *count })
            }
            FloorCommandPayload::SeatTable {
                table_number,
                server,
                party_size,
            } => CommandAction::SeatTable(SeatTableAction {
                table_number: *table_number,
                server: server.clone(),
                party_size: *party_size,
            }),
            FloorCommandPayload::UnseatTable { table_number } => {
                CommandAction::UnseatTable(UnseatTableAction {
                    table_number: *table_number,
                })
            }
            FloorCommandPayload::ConfirmRecommendedSeating { server, party_size } => {
                CommandAction::ConfirmSeating(ConfirmSeatingAction {
                    server: server.clone(),
                    party_size: *party_size,
                })
            }
            FloorCommandPayload::SelectTable { table_number } => {
                CommandAction::SelectTable(SelectTableAction {
                    table_number: *table_number,
                })
            }
            FloorCommandPayload::DeselectTable => CommandAction::DeselectTable(DeselectTableAction),
        }
    }
}
