//! Recommendation engine
//!
//! Picks the table for the next walk-in party. The scan is a pure read of
//! the snapshot: sections passed over for lacking a window table are
//! reported back in [`Recommendation::skipped`] and the manager records
//! them as an event.
//!
//! ```text
//! sections with open tables, by priority desc then id asc
//!     └─ best open table per section: window first, then lowest priority
//!          ├─ window  → recommend it
//!          └─ no window → skip section, try next
//! no window anywhere → highest-priority section, lowest table priority
//! ```

use std::cmp::Reverse;

use shared::floor::FloorSnapshot;
use shared::models::{SectionId, Table, TableNumber};

/// Outcome of one recommendation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recommendation {
    pub table: Option<TableNumber>,
    /// Sections passed over in this pass, in scan order
    pub skipped: Vec<SectionId>,
}

impl Recommendation {
    /// Skipped sections not yet recorded on the floor
    pub fn new_skips(&self, floor: &FloorSnapshot) -> Vec<SectionId> {
        self.skipped
            .iter()
            .copied()
            .filter(|id| !floor.is_skipped(*id))
            .collect()
    }
}

pub fn recommend(floor: &FloorSnapshot) -> Recommendation {
    let open: Vec<&Table> = floor.open_tables().collect();
    if open.is_empty() {
        return Recommendation::default();
    }

    let mut ranked: Vec<_> = floor
        .sections
        .iter()
        .filter(|s| open.iter().any(|t| t.section == s.id))
        .collect();
    ranked.sort_by_key(|s| (Reverse(s.priority), s.id));

    let mut skipped = Vec::new();
    for section in ranked {
        let top = open
            .iter()
            .filter(|t| t.section == section.id)
            .min_by_key(|t| (!t.is_window, t.priority, t.number));
        match top {
            Some(table) if table.is_window => {
                return Recommendation {
                    table: Some(table.number),
                    skipped,
                };
            }
            Some(_) => skipped.push(section.id),
            None => {}
        }
    }

    let fallback = open
        .iter()
        .min_by_key(|t| {
            let section_priority = floor.section(t.section).map_or(i32::MIN, |s| s.priority);
            (Reverse(section_priority), t.priority, t.section, t.number)
        })
        .map(|t| t.number);

    Recommendation {
        table: fallback,
        skipped,
    }
}
