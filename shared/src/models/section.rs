//! Section Model

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most servers the floor can be split between
pub const MAX_SERVERS: u8 = 7;

/// Section identity, `1..=active_server_count`
pub type SectionId = u8;

/// Number of servers on the floor (在岗服务员数), always within `1..=7`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ServerCount(u8);

impl ServerCount {
    pub const ONE: ServerCount = ServerCount(1);

    pub fn new(count: i64) -> AppResult<Self> {
        if (1..=MAX_SERVERS as i64).contains(&count) {
            Ok(Self(count as u8))
        } else {
            Err(AppError::invalid_server_count(count))
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Section ids for this many servers
    pub fn sections(self) -> impl Iterator<Item = SectionId> {
        1..=self.0
    }

    pub fn all() -> impl Iterator<Item = ServerCount> {
        (1..=MAX_SERVERS).map(ServerCount)
    }
}

impl Default for ServerCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for ServerCount {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as i64)
    }
}

impl From<ServerCount> for u8 {
    fn from(count: ServerCount) -> Self {
        count.0
    }
}

impl fmt::Display for ServerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Section record (服务区)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Rotation score, higher is seated sooner
    pub priority: i32,
}

/// Per-section occupancy for the floor summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub id: SectionId,
    pub priority: i32,
    pub open_tables: usize,
    pub seated_tables: usize,
    pub seated_guests: u64,
    pub is_skipped: bool,
}
