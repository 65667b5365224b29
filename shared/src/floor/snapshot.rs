//! Floor snapshot - computed state from the event stream

use crate::error::{AppError, AppResult};
use crate::models::{
    FLOOR_TABLE_COUNT, Section, SectionId, SectionSummary, ServerCount, Table, TableInfo,
    TableNumber,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Floor snapshot (楼面快照)
///
/// `tables` holds every floor slot in ascending table order (bar included),
/// `sections` holds sections `1..=active_server_count` in id order.
/// Deserialized snapshots are checked with [`FloorSnapshot::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FloorSnapshotRecord")]
pub struct FloorSnapshot {
    pub active_server_count: ServerCount,
    pub tables: Vec<Table>,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seated_section: Option<SectionId>,
    pub skipped_sections: BTreeSet<SectionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_table: Option<TableNumber>,
    /// Table suggested for the next party, recomputed after every command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<TableNumber>,
    pub last_sequence: u64,
}

/// Unchecked wire form of [`FloorSnapshot`]
#[derive(Deserialize)]
struct FloorSnapshotRecord {
    active_server_count: ServerCount,
    tables: Vec<Table>,
    sections: Vec<Section>,
    last_seated_section: Option<SectionId>,
    #[serde(default)]
    skipped_sections: BTreeSet<SectionId>,
    selected_table: Option<TableNumber>,
    recommendation: Option<TableNumber>,
    last_sequence: u64,
}

impl TryFrom<FloorSnapshotRecord> for FloorSnapshot {
    type Error = AppError;

    fn try_from(record: FloorSnapshotRecord) -> AppResult<Self> {
        let snapshot = Self {
            active_server_count: record.active_server_count,
            tables: record.tables,
            sections: record.sections,
            last_seated_section: record.last_seated_section,
            skipped_sections: record.skipped_sections,
            selected_table: record.selected_table,
            recommendation: record.recommendation,
            last_sequence: record.last_sequence,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}

impl FloorSnapshot {
    /// Check the structural invariants the engine relies on
    ///
    /// - one table per floor slot, in table order
    /// - seated ⇔ assigned server; open tables hold no party; the bar is never seated
    /// - every section reference lies in `1..=active_server_count`
    pub fn validate(&self) -> AppResult<()> {
        let servers = self.active_server_count.get();
        let in_range = |id: SectionId| (1..=servers).contains(&id);

        if self.tables.len() != FLOOR_TABLE_COUNT as usize {
            return Err(AppError::validation(format!(
                "Snapshot holds {} tables, expected {}",
                self.tables.len(),
                FLOOR_TABLE_COUNT
            )));
        }
        for (expected, table) in TableNumber::all().zip(&self.tables) {
            let n = table.number;
            if n != expected {
                return Err(AppError::validation(format!(
                    "Table {n} found where table {expected} belongs"
                )));
            }
            if table.is_seated != table.assigned_server.is_some() {
                return Err(AppError::validation(format!(
                    "Table {n} seated flag disagrees with its server"
                )));
            }
            if !table.is_seated && table.party_size != 0 {
                return Err(AppError::validation(format!("Open table {n} holds a party")));
            }
            if n.is_bar() && table.is_seated {
                return Err(AppError::validation("The bar slot cannot be seated"));
            }
            if !in_range(table.section) {
                return Err(AppError::validation(format!(
                    "Table {n} is in section {} of {servers}",
                    table.section
                )));
            }
        }

        if !self.sections.iter().map(|s| s.id).eq(self.active_server_count.sections()) {
            return Err(AppError::validation(format!(
                "Sections must be 1..={servers} in order"
            )));
        }
        if let Some(id) = self
            .last_seated_section
            .into_iter()
            .chain(self.skipped_sections.iter().copied())
            .find(|id| !in_range(*id))
        {
            return Err(AppError::validation(format!(
                "Section {id} is not active with {servers} servers"
            )));
        }
        Ok(())
    }

    pub fn table(&self, number: TableNumber) -> Option<&Table> {
        self.tables.get(number.index())
    }

    pub fn table_mut(&mut self, number: TableNumber) -> Option<&mut Table> {
        self.tables.get_mut(number.index())
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// Tables that can take the next party (unseated, bar excluded)
    pub fn open_tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter().filter(|t| t.is_open())
    }

    pub fn seated_count(&self) -> usize {
        self.tables.iter().filter(|t| t.is_seated).count()
    }

    /// Tables carrying a server assignment; always equals `seated_count`
    pub fn assigned_count(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| t.assigned_server.is_some())
            .count()
    }

    pub fn is_skipped(&self, id: SectionId) -> bool {
        self.skipped_sections.contains(&id)
    }

    pub fn table_info(&self, number: TableNumber) -> Option<TableInfo> {
        let table = self.table(number)?;
        Some(TableInfo {
            number: table.number,
            section: table.section,
            shape: table.shape,
            capacity: table.capacity(),
            is_window: table.is_window,
            is_seated: table.is_seated,
            party_size: table.party_size,
            assigned_server: table.assigned_server.clone(),
            is_selected: self.selected_table == Some(number),
            is_recommended: self.recommendation == Some(number),
        })
    }

    /// Occupancy per section, bar slot excluded
    pub fn section_summaries(&self) -> Vec<SectionSummary> {
        self.sections
            .iter()
            .map(|section| {
                let tables = self
                    .tables
                    .iter()
                    .filter(|t| t.section == section.id && !t.number.is_bar());
                let (mut open_tables, mut seated_tables, mut seated_guests) = (0, 0, 0u64);
                for table in tables {
                    if table.is_seated {
                        seated_tables += 1;
                        seated_guests = seated_guests.saturating_add(u64::from(table.party_size));
                    } else {
                        open_tables += 1;
                    }
                }
                SectionSummary {
                    id: section.id,
                    priority: section.priority,
                    open_tables,
                    seated_tables,
                    seated_guests,
                    is_skipped: self.is_skipped(section.id),
                }
            })
            .collect()
    }
}
