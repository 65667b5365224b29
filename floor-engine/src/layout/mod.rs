//! Static floor layout
//!
//! - **classifier**: table shape and capacity lookup
//! - **partition**: section assignment per server count

mod classifier;
mod partition;

pub use classifier::classify;
pub use partition::partition;

use shared::models::{Table, TableNumber, TableShape};
use thiserror::Error;

/// Tables numbered up to here sit along the window
pub const WINDOW_TABLE_MAX: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Table {0} has no shape on the floor plan")]
    UnclassifiedTable(TableNumber),

    #[error("Table {0} is listed under more than one shape")]
    AmbiguousTable(TableNumber),
}

pub fn is_window(table: TableNumber) -> bool {
    table.get() <= WINDOW_TABLE_MAX
}

/// Build every floor slot as an open table in section 1
///
/// Sections are assigned later, when a server count is applied.
pub fn build_tables() -> Result<Vec<Table>, LayoutError> {
    TableNumber::all()
        .map(|number| {
            let (shape, _) = classify(number)?;
            Ok(Table::open(number, 1, shape, is_window(number)))
        })
        .collect()
}

/// Check that the floor plan is complete, for fail-fast startup
pub fn verify_layout() -> Result<(), LayoutError> {
    let tables = build_tables()?;
    let bars = tables.iter().filter(|t| t.shape == TableShape::Bar).count();
    tracing::debug!(tables = tables.len(), bars, "Floor layout verified");
    Ok(())
}
