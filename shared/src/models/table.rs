//! Floor Table Model

use super::section::SectionId;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of physical table slots on the floor
pub const FLOOR_TABLE_COUNT: u8 = 36;

/// Slot 30 is the bar: drawn on the floor plan but never seated
pub const BAR_SLOT: u8 = 30;

/// Table identity (桌号), always within `1..=36`
///
/// The bar slot is a valid floor position, so it passes construction;
/// seating operations reject it separately via [`TableNumber::seatable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TableNumber(u8);

impl TableNumber {
    /// Validate a raw table number coming from the UI
    pub fn new(number: i64) -> AppResult<Self> {
        if (1..=FLOOR_TABLE_COUNT as i64).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(AppError::invalid_table(number))
        }
    }

    /// Validate a raw table number that must also be a seatable table
    pub fn seatable(number: i64) -> AppResult<Self> {
        let table = Self::new(number)?;
        if table.is_bar() {
            return Err(AppError::invalid_table(number).with_detail("reason", "bar placeholder"));
        }
        Ok(table)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_bar(self) -> bool {
        self.0 == BAR_SLOT
    }

    /// Zero-based position in the floor's table list
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Every floor slot in ascending order, bar included
    pub fn all() -> impl Iterator<Item = TableNumber> {
        (1..=FLOOR_TABLE_COUNT).map(TableNumber)
    }
}

impl TryFrom<u8> for TableNumber {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as i64)
    }
}

impl From<TableNumber> for u8 {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical table shape (桌型)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableShape {
    Rectangle,
    Circle,
    Square,
    /// Bar slot, no seating
    Bar,
}

impl TableShape {
    /// Maximum party the shape seats
    pub const fn max_capacity(&self) -> u32 {
        match self {
            Self::Rectangle => 6,
            Self::Circle => 8,
            Self::Square => 4,
            Self::Bar => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Bar => "bar",
        }
    }
}

/// Table record as held in the floor snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub number: TableNumber,
    /// Current section, recomputed on every server count change
    pub section: SectionId,
    pub shape: TableShape,
    pub is_window: bool,
    pub is_seated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_server: Option<String>,
    pub party_size: u32,
    /// Local tie-break score, lower is preferred
    pub priority: i32,
}

impl Table {
    /// Create an open table
    pub fn open(
        number: TableNumber,
        section: SectionId,
        shape: TableShape,
        is_window: bool,
    ) -> Self {
        Self {
            number,
            section,
            shape,
            is_window,
            is_seated: false,
            assigned_server: None,
            party_size: 0,
            priority: 0,
        }
    }

    /// Whether the table can take the next party
    pub fn is_open(&self) -> bool {
        !self.is_seated && !self.number.is_bar()
    }

    pub fn capacity(&self) -> u32 {
        self.shape.max_capacity()
    }
}

/// Read-only view for the host's table info panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub number: TableNumber,
    pub section: SectionId,
    pub shape: TableShape,
    pub capacity: u32,
    pub is_window: bool,
    pub is_seated: bool,
    pub party_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_server: Option<String>,
    pub is_selected: bool,
    pub is_recommended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_table_number_range() {
        assert_eq!(TableNumber::new(1).unwrap().get(), 1);
        assert_eq!(TableNumber::new(36).unwrap().get(), 36);
        assert_eq!(
            TableNumber::new(0).unwrap_err().code,
            ErrorCode::InvalidTableNumber
        );
        assert_eq!(
            TableNumber::new(37).unwrap_err().code,
            ErrorCode::InvalidTableNumber
        );
        assert!(TableNumber::new(-4).is_err());
    }

    #[test]
    fn test_bar_slot_not_seatable() {
        assert!(TableNumber::new(30).unwrap().is_bar());
        let err = TableNumber::seatable(30).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTableNumber);
        assert!(TableNumber::seatable(29).is_ok());
    }

    #[test]
    fn test_all_tables() {
        let all: Vec<u8> = TableNumber::all().map(TableNumber::get).collect();
        assert_eq!(all.len(), 36);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&36));
    }

    #[test]
    fn test_table_number_serde() {
        let table = TableNumber::new(12).unwrap();
        assert_eq!(serde_json::to_string(&table).unwrap(), "12");
        let parsed: TableNumber = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, table);
        assert!(serde_json::from_str::<TableNumber>("40").is_err());
    }

    #[test]
    fn test_open_table_bar_is_never_open() {
        let bar = Table::open(TableNumber::new(30).unwrap(), 1, TableShape::Bar, false);
        assert!(!bar.is_open());
        assert_eq!(bar.capacity(), 0);
    }
}
