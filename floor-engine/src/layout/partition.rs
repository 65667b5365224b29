//! Section partitioner
//!
//! One hand-tuned split of the floor per server count. The floor is a loop:
//! low and high table numbers sit next to each other, so section 1 always
//! wraps around the ends and every section is a contiguous arc.

use shared::models::{SectionId, ServerCount, TableNumber};

/// Section a table belongs to when `servers` are on the floor
///
/// Total over every floor slot (the bar gets a section too; it is
/// filtered out by the callers that seat or count tables).
pub fn partition(servers: ServerCount, table: TableNumber) -> SectionId {
    let t = table.get();
    match servers.get() {
        1 => 1,
        2 => match t {
            ..=11 | 29.. => 1,
            _ => 2,
        },
        3 => match t {
            ..=6 | 32.. => 1,
            7..=14 | 27..=31 => 2,
            _ => 3,
        },
        4 => match t {
            ..=4 | 34.. => 1,
            5..=11 | 29..=33 => 2,
            12..=16 | 24..=28 => 3,
            _ => 4,
        },
        5 => match t {
            ..=4 | 34.. => 1,
            5..=9 | 32..=33 => 2,
            10..=13 | 27..=31 => 3,
            14..=16 | 23..=26 => 4,
            _ => 5,
        },
        6 => match t {
            ..=3 | 34.. => 1,
            4..=6 | 32..=33 => 2,
            7..=10 | 29..=31 => 3,
            11..=13 | 27..=28 => 4,
            14..=16 | 24..=26 => 5,
            _ => 6,
        },
        // 7 servers, the upper bound of ServerCount
        _ => match t {
            ..=3 | 34.. => 1,
            4..=6 | 32..=33 => 2,
            7..=9 | 30..=31 => 3,
            10..=12 | 28..=29 => 4,
            13..=15 | 27 => 5,
            16..=17 | 24..=26 => 6,
            _ => 7,
        },
    }
}
